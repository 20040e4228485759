use serde::Deserialize;

/// Main configuration structure for hn-faves
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Upstream site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Root URL of the upstream site; the favorites listing lives under it
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,
}

/// Pagination and retry behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Retry budget for throttled pages, shared across one whole aggregation
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed wait between successive successful page fetches (milliseconds)
    #[serde(rename = "pacing-delay-ms", default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,

    /// Backoff unit; the n-th retry of a throttled page waits 2^n units (milliseconds)
    #[serde(rename = "backoff-unit-ms", default = "default_backoff_unit_ms")]
    pub backoff_unit_ms: u64,
}

/// Response cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Path to the SQLite cache database file
    #[serde(rename = "database-path", default = "default_database_path")]
    pub database_path: String,

    /// Freshness horizon for cached results (hours)
    #[serde(rename = "ttl-hours", default = "default_ttl_hours")]
    pub ttl_hours: i64,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "scraper-name", default = "default_scraper_name")]
    pub scraper_name: String,

    /// Version of the scraper
    #[serde(rename = "scraper-version", default = "default_scraper_version")]
    pub scraper_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,

    /// Email address for scraper-related contact
    #[serde(rename = "contact-email", default = "default_contact_email")]
    pub contact_email: String,
}

fn default_base_url() -> String {
    "https://news.ycombinator.com".to_string()
}

fn default_max_retries() -> u32 {
    5
}

fn default_pacing_delay_ms() -> u64 {
    1000
}

fn default_backoff_unit_ms() -> u64 {
    1000
}

fn default_database_path() -> String {
    "./hn-faves-cache.db".to_string()
}

fn default_ttl_hours() -> i64 {
    24
}

fn default_scraper_name() -> String {
    "hn-faves".to_string()
}

fn default_scraper_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://github.com/hn-faves/hn-faves".to_string()
}

fn default_contact_email() -> String {
    "hn-faves@posteo.net".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            pacing_delay_ms: default_pacing_delay_ms(),
            backoff_unit_ms: default_backoff_unit_ms(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            ttl_hours: default_ttl_hours(),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            scraper_name: default_scraper_name(),
            scraper_version: default_scraper_version(),
            contact_url: default_contact_url(),
            contact_email: default_contact_email(),
        }
    }
}
