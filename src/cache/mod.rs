//! Response cache for aggregated favorites
//!
//! Cached results are keyed by (subject id, content mode) and carry the
//! time they were computed, so readers can apply a freshness horizon.
//! The store itself is a capability behind the [`CacheStore`] trait;
//! the SQLite backend is used in production and an in-memory backend
//! stands in for it in tests.

mod memory;
mod sqlite;
mod traits;

pub use memory::MemoryCache;
pub use sqlite::SqliteCache;
pub use traits::{CacheError, CacheResult, CacheStore};

use crate::scrape::{ContentMode, Favorite};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Key of one cached aggregation result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Normalized (lowercased) user id
    pub subject_id: String,

    /// Which favorite kind the entry covers
    pub mode: ContentMode,
}

impl CacheKey {
    /// Creates a key from an already-normalized subject id
    pub fn new(subject_id: &str, mode: ContentMode) -> Self {
        Self {
            subject_id: subject_id.to_string(),
            mode,
        }
    }
}

/// One cached aggregation result with its computation timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedFaves {
    /// The aggregated records, in upstream listing order
    pub records: Vec<Favorite>,

    /// When the aggregation was computed
    pub fetched_at: DateTime<Utc>,
}

impl CachedFaves {
    /// Wraps freshly aggregated records with the current timestamp
    pub fn new(records: Vec<Favorite>) -> Self {
        Self {
            records,
            fetched_at: Utc::now(),
        }
    }

    /// Checks whether the entry is older than the freshness horizon
    pub fn is_stale(&self, ttl_hours: i64) -> bool {
        let age = Utc::now() - self.fetched_at;
        age > Duration::hours(ttl_hours)
    }

    /// Returns how long ago the entry was computed
    pub fn age(&self) -> Duration {
        Utc::now() - self.fetched_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CachedFaves {
        CachedFaves::new(vec![Favorite::Comment {
            id: 1,
            url: "https://news.ycombinator.com/item?id=1".to_string(),
            user: "pg".to_string(),
        }])
    }

    #[test]
    fn test_new_entry_not_stale() {
        assert!(!entry().is_stale(24));
    }

    #[test]
    fn test_entry_is_stale_past_horizon() {
        let mut cached = entry();
        cached.fetched_at = Utc::now() - Duration::hours(25);
        assert!(cached.is_stale(24));
    }

    #[test]
    fn test_entry_not_stale_at_23_hours() {
        let mut cached = entry();
        cached.fetched_at = Utc::now() - Duration::hours(23);
        assert!(!cached.is_stale(24));
    }

    #[test]
    fn test_shorter_horizon_applies() {
        let mut cached = entry();
        cached.fetched_at = Utc::now() - Duration::hours(2);
        assert!(cached.is_stale(1));
        assert!(!cached.is_stale(24));
    }

    #[test]
    fn test_age() {
        let mut cached = entry();
        cached.fetched_at = Utc::now() - Duration::hours(12);

        let age = cached.age();
        // Allow some tolerance for test execution time
        assert!(age.num_hours() >= 11 && age.num_hours() <= 13);
    }

    #[test]
    fn test_keys_distinguish_modes() {
        let stories = CacheKey::new("pg", ContentMode::Story);
        let comments = CacheKey::new("pg", ContentMode::Comment);
        assert_ne!(stories, comments);
    }
}
