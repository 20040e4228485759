//! HTTP fetcher for favorites listing pages
//!
//! Builds the upstream listing URL from fetch options and retrieves the
//! raw HTML body. No retry logic lives here: upstream throttling arrives
//! as a *successful* response with anomalous content and is classified
//! downstream, while transport failures propagate as errors.

use crate::config::UserAgentConfig;
use crate::scrape::FetchOptions;
use crate::{FavesError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// The user agent takes the form `Name/Version (+URL; Email)` so upstream
/// operators can identify and reach us.
pub fn build_http_client(config: &UserAgentConfig) -> std::result::Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.scraper_name, config.scraper_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the favorites listing URL for one page
///
/// Appends the subject id, page number, and content-mode flag as query
/// parameters to the `favorites` endpoint under `base_url`.
pub fn listing_url(base_url: &str, options: &FetchOptions) -> Result<Url> {
    let mut url = Url::parse(base_url)?.join("favorites")?;
    url.query_pairs_mut()
        .append_pair("id", &options.subject_id)
        .append_pair("p", &options.page.to_string())
        .append_pair("comments", options.mode.comments_flag());
    Ok(url)
}

/// Fetches one listing page and returns its raw HTML body
///
/// # Errors
///
/// Returns [`FavesError::Http`] on any transport-level failure (connect,
/// timeout, body read). Status codes are not inspected: the upstream
/// signals its error states in page content, not HTTP status.
pub async fn fetch_page(client: &Client, base_url: &str, options: &FetchOptions) -> Result<String> {
    let url = listing_url(base_url, options)?;
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| FavesError::Http {
            url: url.to_string(),
            source,
        })?;

    let body = response.text().await.map_err(|source| FavesError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(body)
}
