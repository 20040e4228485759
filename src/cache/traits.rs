//! Cache store trait and error types

use crate::cache::{CacheKey, CachedFaves};
use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for cache store backends
///
/// The gateway only needs get, put, and delete; persistence and eviction
/// policy belong to the backend. Per-key last-write-wins is the only
/// ordering requirement.
pub trait CacheStore: Send {
    /// Looks up the entry for a key, stale or not
    fn get(&self, key: &CacheKey) -> CacheResult<Option<CachedFaves>>;

    /// Stores an entry, replacing any previous one for the same key
    fn put(&mut self, key: &CacheKey, entry: &CachedFaves) -> CacheResult<()>;

    /// Removes the entry for a key, reporting whether one existed
    fn delete(&mut self, key: &CacheKey) -> CacheResult<bool>;
}
