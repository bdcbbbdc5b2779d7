//! The scraped book record

use serde::{Deserialize, Serialize};

/// One scraped catalogue entry.
///
/// `title` and `product_url` are always present once the listing extractor
/// emits a record. The optional fields stay `None` until a deep scrape visits
/// the product page; they are never defaulted to empty strings. Field order
/// matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    /// Opaque display string, currency prefix included (e.g. "£51.77").
    pub price: String,
    /// Star rating 1-5, 0 when the class token was unrecognized.
    pub rating: u8,
    /// Stock count as text, "Unknown" when in stock without a count, else "0".
    pub availability: String,
    /// Absolute URL of the product page.
    pub product_url: String,
    pub upc: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl BookRecord {
    /// Creates a record with the listing-page fields; the deep-scrape fields
    /// start out absent.
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        rating: u8,
        availability: impl Into<String>,
        product_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            rating,
            availability: availability.into(),
            product_url: product_url.into(),
            upc: None,
            category: None,
            description: None,
        }
    }
}
