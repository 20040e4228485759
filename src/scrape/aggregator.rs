//! Pagination-retry engine
//!
//! Walks the favorites listing page by page, accumulating records until
//! the listing ends, pausing between pages for politeness, and backing
//! off exponentially when the upstream throttles. The retry budget is
//! global across one aggregation, not per page; once spent, the engine
//! returns whatever it has collected so far.

use crate::config::Config;
use crate::scrape::{
    classify_page, extract_rows, fetch_page, ContentMode, Favorite, FetchOptions, PageOutcome,
};
use crate::Result;
use reqwest::Client;
use std::time::Duration;

/// The upstream's fixed listing page size. A page with fewer rows is the
/// last page of the listing.
pub const PAGE_SIZE: usize = 30;

/// The pagination-retry engine
///
/// One instance is reusable across aggregations; each call to
/// [`collect`](Aggregator::collect) owns its own state.
pub struct Aggregator {
    client: Client,
    base_url: String,
    max_retries: u32,
    pacing_delay: Duration,
    backoff_unit: Duration,
}

impl Aggregator {
    /// Creates an aggregator from a prebuilt HTTP client and configuration
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.upstream.base_url.clone(),
            max_retries: config.scraper.max_retries,
            pacing_delay: Duration::from_millis(config.scraper.pacing_delay_ms),
            backoff_unit: Duration::from_millis(config.scraper.backoff_unit_ms),
        }
    }

    /// Collects every favorite of one kind for one user
    ///
    /// Records are appended in page order, then row-encounter order, and
    /// never reordered or deduplicated afterwards. Throttling is recovered
    /// with backoff until the retry budget runs out, at which point the
    /// accumulated records are returned as-is; transport failures abort
    /// the aggregation with an error.
    pub async fn collect(&self, subject_id: &str, mode: ContentMode) -> Result<Vec<Favorite>> {
        let mut options = FetchOptions::new(subject_id, mode)?;
        let mut accumulated: Vec<Favorite> = Vec::new();
        let mut retries_remaining = self.max_retries;

        loop {
            let html = fetch_page(&self.client, &self.base_url, &options).await?;
            let rows = extract_rows(&html, mode);

            match classify_page(&html, rows) {
                PageOutcome::Empty => {
                    tracing::debug!(
                        "Listing ended at page {} for {}/{} ({} records)",
                        options.page,
                        options.subject_id,
                        mode,
                        accumulated.len()
                    );
                    return Ok(accumulated);
                }

                PageOutcome::Rows(rows) => {
                    let page_len = rows.len();
                    accumulated.extend(rows);

                    if page_len < PAGE_SIZE {
                        tracing::debug!(
                            "Short page ({} rows) at page {} for {}/{}, listing exhausted",
                            page_len,
                            options.page,
                            options.subject_id,
                            mode
                        );
                        return Ok(accumulated);
                    }

                    tracing::debug!(
                        "Full page {} for {}/{}, continuing",
                        options.page,
                        options.subject_id,
                        mode
                    );
                    tokio::time::sleep(self.pacing_delay).await;
                    options = options.next_page();
                }

                PageOutcome::Throttled => {
                    if retries_remaining == 0 {
                        tracing::warn!(
                            "Retry budget exhausted at page {} for {}/{}; \
                             returning {} records collected so far",
                            options.page,
                            options.subject_id,
                            mode,
                            accumulated.len()
                        );
                        return Ok(accumulated);
                    }

                    let backoff =
                        self.backoff_unit * 2u32.pow(self.max_retries - retries_remaining);
                    tracing::info!(
                        "Throttled at page {} for {}/{}, backing off {:?} ({} retries left)",
                        options.page,
                        options.subject_id,
                        mode,
                        backoff,
                        retries_remaining
                    );
                    tokio::time::sleep(backoff).await;
                    retries_remaining -= 1;
                }
            }
        }
    }
}
