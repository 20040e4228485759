//! In-memory cache store
//!
//! A HashMap-backed [`CacheStore`] with the same semantics as the SQLite
//! backend. Tests use it to exercise the gateway without touching disk.

use crate::cache::traits::{CacheResult, CacheStore};
use crate::cache::{CacheKey, CachedFaves};
use std::collections::HashMap;

/// HashMap-backed cache store
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<CacheKey, CachedFaves>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &CacheKey) -> CacheResult<Option<CachedFaves>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &CacheKey, entry: &CachedFaves) -> CacheResult<()> {
        self.entries.insert(key.clone(), entry.clone());
        Ok(())
    }

    fn delete(&mut self, key: &CacheKey) -> CacheResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::{ContentMode, Favorite};

    fn entry() -> CachedFaves {
        CachedFaves::new(vec![Favorite::Comment {
            id: 7,
            url: "https://news.ycombinator.com/item?id=7".to_string(),
            user: "pg".to_string(),
        }])
    }

    #[test]
    fn test_put_get_delete() {
        let mut cache = MemoryCache::new();
        let key = CacheKey::new("pg", ContentMode::Comment);

        assert!(cache.get(&key).unwrap().is_none());

        cache.put(&key, &entry()).unwrap();
        assert_eq!(cache.get(&key).unwrap().unwrap().records.len(), 1);
        assert_eq!(cache.len(), 1);

        assert!(cache.delete(&key).unwrap());
        assert!(!cache.delete(&key).unwrap());
        assert!(cache.is_empty());
    }
}
