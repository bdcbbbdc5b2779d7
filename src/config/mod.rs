//! Configuration module for Bookworm
//!
//! The configuration is an explicit value assembled from CLI flags and
//! validated up front, before any network activity.

mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, ScrapeConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

// Re-export validation
pub use validation::validate;
