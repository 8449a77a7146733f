//! Configuration surface for embedding applications
//!
//! The crate exposes a plain settings struct; layering from files or the
//! environment is the embedder's concern.

use serde::Deserialize;

/// Shelf capacity used when creation supplies none.
pub const DEFAULT_CAPACITY: u32 = 10;

/// Identifier generation scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// Random lowercase base-36 string (default).
    Random,
    /// UUIDv4, rendered without hyphens.
    Uuid,
    /// Deterministic counter.
    Sequential,
}

impl Default for IdScheme {
    fn default() -> Self {
        IdScheme::Random
    }
}

/// Registry settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookshelfConfig {
    /// Capacity given to shelves created without one (or with zero).
    pub default_capacity: u32,
    /// How shelf ids are generated.
    pub id_scheme: IdScheme,
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            id_scheme: IdScheme::default(),
        }
    }
}
