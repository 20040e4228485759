//! Configuration module for hn-faves
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every field carries a default, so the binary also runs without a config file.
//!
//! # Example
//!
//! ```no_run
//! use hn_faves::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Retry budget: {}", config.scraper.max_retries);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CacheConfig, Config, ScraperConfig, UpstreamConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
