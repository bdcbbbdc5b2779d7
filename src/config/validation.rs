use crate::config::types::{Config, OutputConfig, ScrapeConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration.
///
/// Runs before any network activity; a failure here rejects the run outright
/// rather than attempting a partial one.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scrape_config(&config.scrape)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates scrape behavior configuration
fn validate_scrape_config(config: &ScrapeConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "max_attempts must be >= 1, got {}",
            config.max_attempts
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

    // Relative page and product links only resolve correctly against a
    // directory-style base.
    if !base.path().ends_with('/') {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url must end with '/', got {}",
            config.base_url
        )));
    }

    Ok(())
}

/// Validates output sink configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    if let Some(sqlite_path) = &config.sqlite_path {
        if sqlite_path.is_empty() {
            return Err(ConfigError::Validation(
                "sqlite_path cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}
