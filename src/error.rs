//! Error types for shelf operations

use std::fmt;

use thiserror::Error;

/// Book fields required at insertion, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
    Isbn,
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookField::Title => "a title",
            BookField::Author => "an author",
            BookField::Isbn => "an isbn",
        };
        write!(f, "{}", name)
    }
}

/// Main error type for registry operations.
///
/// Display texts are shown verbatim to end users by the presentation
/// layer, so the wording is part of the contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShelfError {
    /// No shelf id was given for an operation that needs one. Carries the
    /// operation phrase ("adding new books", "removing a book") for the
    /// displayed message.
    #[error("Shelf ID must be specified while {0}")]
    MissingShelfId(&'static str),

    /// The referenced shelf does not exist. Only raised when adding books;
    /// read paths and removal degrade to a sentinel or no-op instead.
    #[error("Book Shelf with Shelf ID {0} does not exist")]
    UnknownShelf(String),

    /// A required book field was empty.
    #[error("Book must have {0}")]
    MissingField(BookField),

    /// The shelf has no remaining capacity.
    #[error("Shelf {0} is full. Can not add any more books")]
    ShelfFull(String),
}

/// Result type alias for registry operations
pub type ShelfResult<T> = Result<T, ShelfError>;
