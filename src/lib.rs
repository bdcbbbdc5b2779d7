//! Bookworm: a polite catalogue scraper
//!
//! This crate scrapes the Books to Scrape demo catalogue: it walks the
//! paginated listing pages, extracts one record per book, optionally visits
//! each product page for secondary fields, and writes the results to CSV
//! and/or an embedded SQLite table.

pub mod config;
pub mod crawler;
pub mod output;
pub mod record;
pub mod report;

use thiserror::Error;

/// Main error type for Bookworm operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Bookworm operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, OutputConfig, ScrapeConfig};
pub use crawler::Orchestrator;
pub use record::BookRecord;
pub use report::{CancelToken, LogSink, Milestone, TracingSink};
