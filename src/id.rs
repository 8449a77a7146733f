//! Opaque shelf identifiers and their generation schemes

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Opaque identifier naming one shelf in a registry.
///
/// Produced by an [`IdGenerator`] at shelf creation and never reused.
/// Compares, hashes and borrows as its underlying string, so maps keyed by
/// `ShelfId` can be looked up with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShelfId(String);

impl ShelfId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShelfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for ShelfId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ShelfId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ShelfId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Generation strategy for shelf identifiers.
///
/// Uniqueness is a best-effort property of the scheme; collisions are a
/// theoretical risk and are not guarded against.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produce the next shelf identifier.
    fn generate(&mut self) -> ShelfId;
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 13;

/// Default scheme: 13 random lowercase base-36 characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&mut self) -> ShelfId {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let id: String = (0..ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        ShelfId::new(id)
    }
}

/// UUIDv4 scheme, rendered without hyphens.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&mut self) -> ShelfId {
        ShelfId::new(uuid::Uuid::new_v4().simple().to_string())
    }
}

/// Deterministic counter scheme (`shelf-1`, `shelf-2`, ...), useful for
/// reproducible runs and tests.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&mut self) -> ShelfId {
        self.next += 1;
        ShelfId::new(format!("shelf-{}", self.next))
    }
}
