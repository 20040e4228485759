//! Scraping module for the Hacker News favorites listing
//!
//! This module contains the core scraping logic, including:
//! - Building listing URLs and fetching raw page HTML
//! - Extracting typed records from listing rows
//! - Telling a genuinely empty listing apart from a throttled response
//! - Walking pages with pacing, backoff, and a bounded retry budget

mod aggregator;
mod classify;
mod extractor;
mod fetcher;

pub use aggregator::{Aggregator, PAGE_SIZE};
pub use classify::{classify_page, THROTTLE_BANNER};
pub use extractor::extract_rows;
pub use fetcher::{build_http_client, fetch_page, listing_url};

use crate::{FavesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical site root, used for the permanent item and comment URLs
/// embedded in records. The fetch target is configurable separately.
pub const SITE_URL: &str = "https://news.ycombinator.com";

/// Which of the two favorite kinds a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentMode {
    Story,
    Comment,
}

impl ContentMode {
    /// The route/type string for this mode, as used in request paths
    /// and cache keys
    pub fn as_route_str(&self) -> &'static str {
        match self {
            Self::Story => "stories",
            Self::Comment => "comments",
        }
    }

    /// Value of the upstream `comments=` query flag
    pub fn comments_flag(&self) -> &'static str {
        match self {
            Self::Story => "false",
            Self::Comment => "true",
        }
    }
}

impl FromStr for ContentMode {
    type Err = FavesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stories" => Ok(Self::Story),
            "comments" => Ok(Self::Comment),
            other => Err(FavesError::UnknownContentMode(other.to_string())),
        }
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_route_str())
    }
}

/// Normalizes a raw subject id: trimmed and lowercased, never empty
pub fn normalize_subject(raw: &str) -> Result<String> {
    let subject = raw.trim().to_lowercase();
    if subject.is_empty() {
        return Err(FavesError::InvalidSubject);
    }
    Ok(subject)
}

/// Parameters of one listing-page fetch
///
/// Immutable per attempt; the pagination loop derives a fresh value via
/// [`next_page`](FetchOptions::next_page) instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Normalized user id whose favorites are being fetched
    pub subject_id: String,

    /// Which favorite kind to list
    pub mode: ContentMode,

    /// 1-based listing page number
    pub page: u32,
}

impl FetchOptions {
    /// Creates options for the first page of a listing
    pub fn new(subject_id: &str, mode: ContentMode) -> Result<Self> {
        Ok(Self {
            subject_id: normalize_subject(subject_id)?,
            mode,
            page: 1,
        })
    }

    /// Derives the options for the following page
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }
}

/// One favorited item, shaped for the external JSON surface
///
/// The `type` field discriminates the two variants, so consumers never
/// need to probe for optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Favorite {
    Story {
        id: u64,
        url: String,
        #[serde(rename = "hnUrl")]
        hn_url: String,
        title: String,
    },
    Comment {
        id: u64,
        url: String,
        user: String,
    },
}

impl Favorite {
    /// The upstream's stable identifier for this row
    pub fn id(&self) -> u64 {
        match self {
            Self::Story { id, .. } | Self::Comment { id, .. } => *id,
        }
    }

    /// The content mode this record belongs to
    pub fn mode(&self) -> ContentMode {
        match self {
            Self::Story { .. } => ContentMode::Story,
            Self::Comment { .. } => ContentMode::Comment,
        }
    }
}

/// Classification of one fetched listing page
#[derive(Debug, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page carried listing rows
    Rows(Vec<Favorite>),

    /// The upstream is throttling us; the page is retryable
    Throttled,

    /// No rows and no throttle banner: the listing genuinely ended
    Empty,
}
