use crate::config::types::{CacheConfig, Config, ScraperConfig, UpstreamConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_upstream_config(&config.upstream)?;
    validate_scraper_config(&config.scraper)?;
    validate_cache_config(&config.cache)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates the upstream base URL
fn validate_upstream_config(config: &UpstreamConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates scraper configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max_retries must be <= 10, got {}",
            config.max_retries
        )));
    }

    if config.backoff_unit_ms < 1 {
        return Err(ConfigError::Validation(
            "backoff_unit_ms must be >= 1ms".to_string(),
        ));
    }

    Ok(())
}

/// Validates cache configuration
fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    if config.ttl_hours < 1 {
        return Err(ConfigError::Validation(format!(
            "ttl_hours must be >= 1, got {}",
            config.ttl_hours
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate scraper name: non-empty, alphanumeric + hyphens only
    if config.scraper_name.is_empty() {
        return Err(ConfigError::Validation(
            "scraper_name cannot be empty".to_string(),
        ));
    }

    if !config
        .scraper_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "scraper_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.scraper_name
        )));
    }

    // Validate contact URL
    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    // Validate contact email (basic validation)
    if !config.contact_email.contains('@') || config.contact_email.len() < 3 {
        return Err(ConfigError::Validation(format!(
            "contact_email does not look like an email address: '{}'",
            config.contact_email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.upstream.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_non_http_base_url() {
        let mut config = Config::default();
        config.upstream.base_url = "ftp://news.ycombinator.com".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_excessive_max_retries() {
        let mut config = Config::default();
        config.scraper.max_retries = 11;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_backoff_unit() {
        let mut config = Config::default();
        config.scraper.backoff_unit_ms = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_database_path() {
        let mut config = Config::default();
        config.cache.database_path = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_ttl() {
        let mut config = Config::default();
        config.cache.ttl_hours = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_bad_contact_email() {
        let mut config = Config::default();
        config.user_agent.contact_email = "nope".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
