//! Capacity-bounded book shelves

use serde::Serialize;

use super::book::{Book, BookMatcher};
use crate::id::ShelfId;

/// A capacity-bounded container of books, unique by isbn, in insertion
/// order. Capacity is fixed at creation. Mutation happens only through the
/// owning registry.
#[derive(Debug, Clone, Serialize)]
pub struct Shelf {
    id: ShelfId,
    capacity: u32,
    books: Vec<Book>,
}

impl Shelf {
    pub(crate) fn new(id: ShelfId, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            books: Vec::new(),
        }
    }

    pub fn id(&self) -> &ShelfId {
        &self.id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Stored books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// How many more books fit on this shelf.
    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.books.len() as u32)
    }

    pub(crate) fn contains_isbn(&self, isbn: &str) -> bool {
        self.books.iter().any(|b| b.isbn() == isbn)
    }

    pub(crate) fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes every book the matcher accepts; returns how many went away.
    pub(crate) fn remove_matching(&mut self, matcher: &BookMatcher) -> usize {
        let before = self.books.len();
        self.books.retain(|b| !matcher.matches(b));
        before - self.books.len()
    }
}
