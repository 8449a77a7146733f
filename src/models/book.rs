//! Book records and the input shapes that produce them

use serde::{Deserialize, Serialize};

use crate::error::{BookField, ShelfError};

/// Immutable book record stored on a shelf.
///
/// Fields are fixed once the record is stored; read paths hand out owned
/// clones, so no caller can alter registry state through a retrieved book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
}

impl Book {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Case-sensitive substring match against title, author, then isbn.
    pub(crate) fn matches_text(&self, search_text: &str) -> bool {
        self.title.contains(search_text)
            || self.author.contains(search_text)
            || self.isbn.contains(search_text)
    }
}

/// Unvalidated book input, as bound from a form or deserialized payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}

impl TryFrom<NewBook> for Book {
    type Error = ShelfError;

    /// Validates field presence in title, author, isbn order; the first
    /// empty field wins.
    fn try_from(draft: NewBook) -> Result<Self, Self::Error> {
        if draft.title.is_empty() {
            return Err(ShelfError::MissingField(BookField::Title));
        }
        if draft.author.is_empty() {
            return Err(ShelfError::MissingField(BookField::Author));
        }
        if draft.isbn.is_empty() {
            return Err(ShelfError::MissingField(BookField::Isbn));
        }
        Ok(Book {
            title: draft.title,
            author: draft.author,
            isbn: draft.isbn,
        })
    }
}

/// A single book or an ordered batch; both shapes are accepted when adding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookInput {
    One(NewBook),
    Many(Vec<NewBook>),
}

impl From<NewBook> for BookInput {
    fn from(book: NewBook) -> Self {
        BookInput::One(book)
    }
}

impl From<Vec<NewBook>> for BookInput {
    fn from(books: Vec<NewBook>) -> Self {
        BookInput::Many(books)
    }
}

impl IntoIterator for BookInput {
    type Item = NewBook;
    type IntoIter = std::vec::IntoIter<NewBook>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            BookInput::One(book) => vec![book].into_iter(),
            BookInput::Many(books) => books.into_iter(),
        }
    }
}

/// Removal matcher: a book is removed when any supplied field equals the
/// stored value (inclusive or).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMatcher {
    pub isbn: Option<String>,
    pub title: Option<String>,
}

impl BookMatcher {
    pub fn by_isbn(isbn: impl Into<String>) -> Self {
        Self {
            isbn: Some(isbn.into()),
            title: None,
        }
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            isbn: None,
            title: Some(title.into()),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.isbn.as_deref() == Some(book.isbn()) || self.title.as_deref() == Some(book.title())
    }
}
