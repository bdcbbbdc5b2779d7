//! The fetch-and-extract pipeline
//!
//! This module contains the core scraping logic:
//! - HTTP fetching with retry and the politeness delay
//! - Listing-page extraction
//! - Product-page (deep) extraction
//! - Overall crawl orchestration

mod detail;
mod fetcher;
mod listing;
mod orchestrator;

pub use detail::enrich;
pub use fetcher::{build_http_client, PageFetcher};
pub use listing::{extract_listing, parse_availability, parse_rating};
pub use orchestrator::Orchestrator;
