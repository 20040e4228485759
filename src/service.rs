//! Response cache gateway
//!
//! Front door for the library: looks up a cached aggregation result for
//! (subject id, content mode), runs the pagination engine on a miss or a
//! stale entry, and stores what it computed. The cache store is injected
//! at construction so callers and tests choose the backend.

use crate::cache::{CacheKey, CacheStore, CachedFaves};
use crate::config::Config;
use crate::scrape::{build_http_client, normalize_subject, Aggregator, ContentMode, Favorite};
use crate::Result;

/// Cache-fronted favorites service
pub struct FaveService {
    aggregator: Aggregator,
    cache: Box<dyn CacheStore>,
    ttl_hours: i64,
}

impl FaveService {
    /// Creates a service from configuration and a cache backend
    pub fn new(config: &Config, cache: Box<dyn CacheStore>) -> Result<Self> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self {
            aggregator: Aggregator::new(client, config),
            cache,
            ttl_hours: config.cache.ttl_hours,
        })
    }

    /// Returns the favorites for one user and kind, scraping only when no
    /// fresh cached result exists
    ///
    /// A stale entry is treated like a miss and overwritten by the new
    /// aggregation (last write wins).
    pub async fn get_or_compute(
        &mut self,
        subject_id: &str,
        mode: ContentMode,
    ) -> Result<Vec<Favorite>> {
        let subject = normalize_subject(subject_id)?;
        let key = CacheKey::new(&subject, mode);

        if let Some(entry) = self.cache.get(&key)? {
            if !entry.is_stale(self.ttl_hours) {
                tracing::debug!("Cache hit for {}/{}", key.subject_id, mode);
                return Ok(entry.records);
            }
            tracing::debug!("Cache entry for {}/{} is stale, re-scraping", key.subject_id, mode);
        } else {
            tracing::debug!("Cache miss for {}/{}", key.subject_id, mode);
        }

        let records = self.aggregator.collect(&subject, mode).await?;
        self.cache.put(&key, &CachedFaves::new(records.clone()))?;

        tracing::info!(
            "Scraped {} {} for {}",
            records.len(),
            mode,
            key.subject_id
        );
        Ok(records)
    }

    /// Removes the cached entry for one user and kind
    ///
    /// Returns whether an entry existed.
    pub fn invalidate(&mut self, subject_id: &str, mode: ContentMode) -> Result<bool> {
        let subject = normalize_subject(subject_id)?;
        let key = CacheKey::new(&subject, mode);
        let existed = self.cache.delete(&key)?;
        tracing::debug!(
            "Invalidated {}/{}: entry {}",
            key.subject_id,
            mode,
            if existed { "deleted" } else { "not found" }
        );
        Ok(existed)
    }
}
