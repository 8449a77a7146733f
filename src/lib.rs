//! In-memory bookshelf management.
//!
//! A single [`ShelfRegistry`] owns a collection of capacity-bounded
//! shelves, each holding an insertion-ordered, isbn-deduplicated sequence
//! of immutable book records, with substring search across title, author
//! and isbn. Everything lives in memory for the process lifetime; there is
//! no persistence and no internal locking.
//!
//! # Example
//!
//! ```
//! use bookshelf::{BookMatcher, NewBook, ShelfRegistry};
//!
//! let mut registry = ShelfRegistry::new();
//! let shelf = registry.create_shelf(3);
//!
//! registry.add_books(&shelf, NewBook::new("One", "Sohail", "123asf"))?;
//! registry.add_books(&shelf, vec![
//!     NewBook::new("Two", "Sohail", "123863asf"),
//!     NewBook::new("Three", "Alam", "r217iba8"),
//! ])?;
//! assert_eq!(registry.books_count(&shelf), 3);
//! assert_eq!(registry.books_remaining(&shelf), 0);
//!
//! let found = registry.search("123", None);
//! assert_eq!(found.len(), 2);
//!
//! registry.remove_book(&shelf, &BookMatcher::by_isbn("123863asf"))?;
//! assert_eq!(registry.books_count(&shelf), 2);
//! # Ok::<(), bookshelf::ShelfError>(())
//! ```

pub mod config;
pub mod error;
pub mod id;
pub mod models;
pub mod registry;

pub use config::{BookshelfConfig, IdScheme, DEFAULT_CAPACITY};
pub use error::{BookField, ShelfError, ShelfResult};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator, ShelfId, UuidIdGenerator};
pub use models::{Book, BookInput, BookMatcher, NewBook, Shelf};
pub use registry::{AllBooks, ShelfRegistry};
