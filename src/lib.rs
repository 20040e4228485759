//! hn-faves: a scraper API for Hacker News favorites
//!
//! Hacker News exposes a user's favorited stories and comments only as
//! paginated HTML listings. This crate walks those listings page by page,
//! normalizes each row into a typed record, rides out the site's soft
//! rate limiting with exponential backoff, and caches the aggregated
//! result per user and content mode.

pub mod cache;
pub mod config;
pub mod scrape;
pub mod service;

use thiserror::Error;

/// Main error type for hn-faves operations
#[derive(Debug, Error)]
pub enum FavesError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] cache::CacheError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid user id")]
    InvalidSubject,

    #[error("Invalid type \"{0}\"")]
    UnknownContentMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for hn-faves operations
pub type Result<T> = std::result::Result<T, FavesError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use scrape::{ContentMode, Favorite, FetchOptions, PageOutcome};
pub use service::FaveService;
