//! Product-page extraction for deep scrapes
//!
//! Enriches a listing record with the secondary fields only the product page
//! carries: UPC, category and description. Every failure here is absorbed;
//! the worst outcome is a record returned unchanged.

use crate::crawler::fetcher::PageFetcher;
use crate::record::BookRecord;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TABLE_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table tr").expect("valid selector"));
static ROW_HEADER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid selector"));
static ROW_VALUE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));
static BREADCRUMB_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul.breadcrumb a").expect("valid selector"));
static DESCRIPTION_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#product_description").expect("valid selector"));

/// Fetches a record's product page and fills in the secondary fields
///
/// A failed fetch returns the record unchanged; nothing propagates upward.
/// Fields whose markup is absent stay `None`, so partial enrichment is a
/// normal outcome. The required listing fields are never touched.
pub async fn enrich(fetcher: &PageFetcher, mut record: BookRecord) -> BookRecord {
    let Some(page) = fetcher.fetch(&record.product_url).await else {
        tracing::warn!("Could not fetch details for {}", record.title);
        return record;
    };

    record.upc = extract_upc(&page);
    record.category = extract_category(&page);
    record.description = extract_description(&page);

    if record.upc.is_none() || record.category.is_none() || record.description.is_none() {
        tracing::debug!("Partial detail extraction for {}", record.title);
    }

    record
}

/// UPC lives in the product information table, in the row labeled "UPC".
fn extract_upc(page: &Html) -> Option<String> {
    page.select(&TABLE_ROW).find_map(|row| {
        let header = row.select(&ROW_HEADER).next()?;
        if header.text().collect::<String>().trim() != "UPC" {
            return None;
        }
        let value = row.select(&ROW_VALUE).next()?;
        non_empty(value.text().collect::<String>())
    })
}

/// Category is the last breadcrumb link (Home / Books / <category>).
fn extract_category(page: &Html) -> Option<String> {
    let link = page.select(&BREADCRUMB_LINK).last()?;
    non_empty(link.text().collect::<String>())
}

/// The description is the free-text paragraph following the
/// `#product_description` heading anchor.
fn extract_description(page: &Html) -> Option<String> {
    let anchor = page.select(&DESCRIPTION_ANCHOR).next()?;

    let mut node = anchor.next_sibling();
    while let Some(current) = node {
        if let Some(element) = ElementRef::wrap(current) {
            return non_empty(element.text().collect::<String>());
        }
        node = current.next_sibling();
    }

    None
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_PAGE: &str = r#"<html><body>
        <ul class="breadcrumb">
            <li><a href="/">Home</a></li>
            <li><a href="/books">Books</a></li>
            <li><a href="/books/poetry">Poetry</a></li>
            <li class="active">A Light in the Attic</li>
        </ul>
        <div id="product_description"><h2>Product Description</h2></div>
        <p>It's hard to imagine a world without A Light in the Attic.</p>
        <table class="table table-striped">
            <tr><th>UPC</th><td>a897fe39b1053632</td></tr>
            <tr><th>Product Type</th><td>Books</td></tr>
        </table>
    </body></html>"#;

    #[test]
    fn test_extract_upc_from_labeled_row() {
        let page = Html::parse_document(DETAIL_PAGE);
        assert_eq!(extract_upc(&page), Some("a897fe39b1053632".to_string()));
    }

    #[test]
    fn test_upc_absent_without_labeled_row() {
        let page = Html::parse_document(
            "<html><body><table><tr><th>Product Type</th><td>Books</td></tr></table></body></html>",
        );
        assert_eq!(extract_upc(&page), None);
    }

    #[test]
    fn test_category_is_last_breadcrumb_link() {
        let page = Html::parse_document(DETAIL_PAGE);
        assert_eq!(extract_category(&page), Some("Poetry".to_string()));
    }

    #[test]
    fn test_category_absent_without_breadcrumb() {
        let page = Html::parse_document("<html><body></body></html>");
        assert_eq!(extract_category(&page), None);
    }

    #[test]
    fn test_description_follows_anchor() {
        let page = Html::parse_document(DETAIL_PAGE);
        assert_eq!(
            extract_description(&page),
            Some("It's hard to imagine a world without A Light in the Attic.".to_string())
        );
    }

    #[test]
    fn test_description_absent_without_anchor() {
        let page = Html::parse_document(
            "<html><body><p>Just a paragraph, no description heading.</p></body></html>",
        );
        assert_eq!(extract_description(&page), None);
    }

    #[test]
    fn test_partial_page_yields_partial_fields() {
        // UPC table present, breadcrumb and description missing.
        let page = Html::parse_document(
            "<html><body><table><tr><th>UPC</th><td>abc123</td></tr></table></body></html>",
        );
        assert_eq!(extract_upc(&page), Some("abc123".to_string()));
        assert_eq!(extract_category(&page), None);
        assert_eq!(extract_description(&page), None);
    }
}
