//! The shelf registry: owns every shelf and all paths that mutate them

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    config::{BookshelfConfig, IdScheme},
    error::{ShelfError, ShelfResult},
    id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator, ShelfId, UuidIdGenerator},
    models::{Book, BookInput, BookMatcher, Shelf},
};

/// Result of [`ShelfRegistry::get_all_books`]: the shape depends on whether
/// a known shelf id was supplied, and callers branch on the variant.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AllBooks {
    /// Owned copy of one shelf's book sequence, in insertion order.
    Shelf(Vec<Book>),
    /// Owned snapshot of every shelf, keyed by shelf id.
    Registry(IndexMap<ShelfId, Shelf>),
}

/// Owns all shelves and their books.
///
/// One instance per application; the embedder constructs it once and passes
/// it wherever shelf operations are needed. All mutation goes through
/// `&mut self` methods, so exclusive access is enforced by the borrow
/// checker rather than locking.
pub struct ShelfRegistry {
    shelves: IndexMap<ShelfId, Shelf>,
    ids: Box<dyn IdGenerator>,
    default_capacity: u32,
}

impl ShelfRegistry {
    /// Registry with default settings: random ids, default capacity 10.
    pub fn new() -> Self {
        Self::from_config(&BookshelfConfig::default())
    }

    /// Registry configured from settings.
    pub fn from_config(config: &BookshelfConfig) -> Self {
        let ids: Box<dyn IdGenerator> = match config.id_scheme {
            IdScheme::Random => Box::new(RandomIdGenerator),
            IdScheme::Uuid => Box::new(UuidIdGenerator),
            IdScheme::Sequential => Box::new(SequentialIdGenerator::default()),
        };
        Self {
            shelves: IndexMap::new(),
            ids,
            default_capacity: config.default_capacity,
        }
    }

    /// Registry with a caller-supplied id generation scheme.
    pub fn with_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            shelves: IndexMap::new(),
            ids,
            default_capacity: BookshelfConfig::default().default_capacity,
        }
    }

    /// Creates an empty shelf and returns its generated id.
    ///
    /// A zero or absent capacity falls back to the configured default. Id
    /// collisions are a theoretical risk of the generation scheme and are
    /// not guarded against.
    pub fn create_shelf(&mut self, capacity: impl Into<Option<u32>>) -> ShelfId {
        let capacity = capacity
            .into()
            .filter(|c| *c > 0)
            .unwrap_or(self.default_capacity);
        let id = self.ids.generate();
        tracing::info!("Created shelf id={} capacity={}", id, capacity);
        self.shelves.insert(id.clone(), Shelf::new(id.clone(), capacity));
        id
    }

    /// Number of books on the shelf, or `-1` when the id is empty or names
    /// no shelf.
    pub fn books_count(&self, shelf_id: &str) -> i64 {
        match self.lookup(shelf_id) {
            Some(shelf) => shelf.len() as i64,
            None => -1,
        }
    }

    /// Remaining capacity of the shelf, or `-1` when the id is empty or
    /// names no shelf.
    pub fn books_remaining(&self, shelf_id: &str) -> i64 {
        match self.lookup(shelf_id) {
            Some(shelf) => i64::from(shelf.remaining()),
            None => -1,
        }
    }

    /// Adds one book or an ordered batch to the named shelf.
    ///
    /// Each book is processed in sequence order: capacity is checked first,
    /// then field presence, then isbn uniqueness on the shelf. A duplicate
    /// isbn discards the incoming book silently; any error aborts the rest
    /// of the batch while earlier insertions stay in place.
    pub fn add_books(&mut self, shelf_id: &str, books: impl Into<BookInput>) -> ShelfResult<()> {
        if shelf_id.is_empty() {
            return Err(ShelfError::MissingShelfId("adding new books"));
        }
        let shelf = match self.shelves.get_mut(shelf_id) {
            Some(shelf) => shelf,
            None => return Err(ShelfError::UnknownShelf(shelf_id.to_string())),
        };

        for draft in books.into() {
            if shelf.remaining() == 0 {
                return Err(ShelfError::ShelfFull(shelf_id.to_string()));
            }
            let book = Book::try_from(draft)?;
            if shelf.contains_isbn(book.isbn()) {
                tracing::debug!("Shelf {}: discarding duplicate isbn {}", shelf_id, book.isbn());
                continue;
            }
            tracing::debug!("Shelf {}: adding book isbn={}", shelf_id, book.isbn());
            shelf.push(book);
        }
        Ok(())
    }

    /// Books of one shelf, or the whole registry when the id is absent,
    /// empty or unknown. Returned data is owned; mutating it leaves stored
    /// state untouched.
    pub fn get_all_books(&self, shelf_id: Option<&str>) -> AllBooks {
        match shelf_id.and_then(|id| self.lookup(id)) {
            Some(shelf) => AllBooks::Shelf(shelf.books().to_vec()),
            None => AllBooks::Registry(self.shelves.clone()),
        }
    }

    /// Removes every book on the shelf matching the given fields.
    ///
    /// An unknown shelf id is a silent no-op; only an empty id is an error.
    pub fn remove_book(&mut self, shelf_id: &str, matcher: &BookMatcher) -> ShelfResult<()> {
        if shelf_id.is_empty() {
            return Err(ShelfError::MissingShelfId("removing a book"));
        }
        if let Some(shelf) = self.shelves.get_mut(shelf_id) {
            let removed = shelf.remove_matching(matcher);
            if removed > 0 {
                tracing::info!("Shelf {}: removed {} book(s)", shelf_id, removed);
            }
        }
        Ok(())
    }

    /// Books whose title, author or isbn contains `search_text`, searched
    /// case-sensitively in one shelf when the id names an existing shelf,
    /// otherwise across every shelf. Each matching book appears once, as an
    /// owned clone, in encounter order.
    pub fn search(&self, search_text: &str, shelf_id: Option<&str>) -> Vec<Book> {
        match shelf_id.and_then(|id| self.lookup(id)) {
            Some(shelf) => Self::find_books(shelf, search_text),
            None => self
                .shelves
                .values()
                .flat_map(|shelf| Self::find_books(shelf, search_text))
                .collect(),
        }
    }

    fn find_books(shelf: &Shelf, search_text: &str) -> Vec<Book> {
        shelf
            .books()
            .iter()
            .filter(|book| book.matches_text(search_text))
            .cloned()
            .collect()
    }

    fn lookup(&self, shelf_id: &str) -> Option<&Shelf> {
        if shelf_id.is_empty() {
            return None;
        }
        self.shelves.get(shelf_id)
    }
}

impl Default for ShelfRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShelfRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShelfRegistry")
            .field("shelves", &self.shelves)
            .field("default_capacity", &self.default_capacity)
            .finish_non_exhaustive()
    }
}
