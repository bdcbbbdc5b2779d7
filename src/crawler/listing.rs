//! Listing-page extraction
//!
//! Pulls one [`BookRecord`] per `article.product_pod` container, in document
//! order. A malformed container is skipped with a warning; it never aborts
//! the page.

use crate::record::BookRecord;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

static CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article.product_pod").expect("valid selector"));
static TITLE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3 a").expect("valid selector"));
static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.price_color").expect("valid selector"));
static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.star-rating").expect("valid selector"));
static AVAILABILITY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.instock.availability").expect("valid selector"));

static AVAILABLE_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+) available\)").expect("valid regex"));

/// The site encodes star ratings as a class token, one of five words.
const RATING_WORDS: [(&str, u8); 5] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
];

/// Maps a `star-rating` class string to its numeric value
///
/// The match is case-insensitive and total: the five recognized words map to
/// 1-5, anything else maps to 0.
pub fn parse_rating(classes: &str) -> u8 {
    let lowered = classes.to_lowercase();
    for (word, value) in RATING_WORDS {
        if lowered.contains(word) {
            return value;
        }
    }
    0
}

/// Extracts the stock quantity from an availability string
///
/// `"In stock (22 available)"` yields `"22"`; stock wording without a
/// parenthesized count yields `"Unknown"`; anything else yields `"0"`.
pub fn parse_availability(text: &str) -> String {
    if text.contains("In stock") {
        match AVAILABLE_COUNT.captures(text) {
            Some(caps) => caps[1].to_string(),
            None => "Unknown".to_string(),
        }
    } else {
        "0".to_string()
    }
}

/// Extracts every book record visible on a listing page
///
/// Output order is document order. A page with zero product containers
/// yields an empty vec, not a failure.
pub fn extract_listing(page: &Html, base_url: &Url) -> Vec<BookRecord> {
    let mut records = Vec::new();

    for container in page.select(&CONTAINER) {
        match extract_record(container, base_url) {
            Some(record) => records.push(record),
            None => tracing::warn!("Error parsing book container, skipping"),
        }
    }

    records
}

/// Extracts one record from a product container
///
/// Returns `None` when a required field (title, product link) is missing or
/// malformed; the caller skips the container.
fn extract_record(container: ElementRef<'_>, base_url: &Url) -> Option<BookRecord> {
    let link = container.select(&TITLE_LINK).next()?;

    let title = link
        .value()
        .attr("title")
        .map(str::trim)
        .filter(|t| !t.is_empty())?
        .to_string();

    let href = link.value().attr("href")?;
    let product_url = base_url.join(href).ok()?.to_string();

    let price = container
        .select(&PRICE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let rating = container
        .select(&RATING)
        .next()
        .map(|el| parse_rating(el.value().attr("class").unwrap_or("")))
        .unwrap_or(0);

    let availability = container
        .select(&AVAILABILITY)
        .next()
        .map(|el| {
            let text = el.text().collect::<String>();
            parse_availability(text.trim())
        })
        .unwrap_or_else(|| "0".to_string());

    Some(BookRecord::new(
        title,
        price,
        rating,
        availability,
        product_url,
    ))
}
