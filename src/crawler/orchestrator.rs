//! Crawl orchestration
//!
//! The orchestrator walks listing pages 1..=max_pages in order, one page and
//! one item at a time, and accumulates every extracted record. Page-level
//! failures are absorbed: a page that cannot be fetched is logged and
//! skipped, never aborting the run.

use crate::config::ScrapeConfig;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::{detail, listing};
use crate::record::BookRecord;
use crate::report::{CancelToken, LogSink, Milestone, TracingSink};
use crate::ScrapeError;
use std::sync::Arc;
use url::Url;

/// Drives the fetch -> extract -> (optional) enrich pipeline
pub struct Orchestrator {
    config: ScrapeConfig,
    fetcher: PageFetcher,
    base_url: Url,
    sink: Arc<dyn LogSink>,
    cancel: CancelToken,
}

impl Orchestrator {
    /// Creates an orchestrator reporting through `tracing`
    pub fn new(config: ScrapeConfig) -> Result<Self, ScrapeError> {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Creates an orchestrator reporting through the given sink
    ///
    /// Front ends supply their own [`LogSink`] here; the pipeline itself
    /// never touches a process-global logger for run status.
    pub fn with_sink(config: ScrapeConfig, sink: Arc<dyn LogSink>) -> Result<Self, ScrapeError> {
        let base_url = Url::parse(&config.base_url)?;
        let fetcher = PageFetcher::new(&config)?;
        Ok(Self {
            config,
            fetcher,
            base_url,
            sink,
            cancel: CancelToken::new(),
        })
    }

    /// Returns a handle that requests a cooperative stop.
    ///
    /// The loop polls it between page iterations and between detail fetches;
    /// a fetch already in flight completes first.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Runs the crawl and returns the accumulated records
    ///
    /// Issues exactly `max_pages` listing fetch attempts (ignoring retries)
    /// unless cancelled. Record order is page order, and within a page,
    /// container order. Each invocation starts with a fresh accumulator.
    pub async fn run(&self) -> Result<Vec<BookRecord>, ScrapeError> {
        self.sink.progress(Milestone::Started);
        let mut all_records = Vec::new();

        for page_num in 1..=self.config.max_pages {
            if self.cancel.is_cancelled() {
                self.sink.info("Stop requested, ending crawl early");
                break;
            }

            self.sink.info(&format!("Crawling page {page_num}..."));
            let page_url = self.base_url.join(&format!("page-{page_num}.html"))?;

            let records = {
                let Some(page) = self.fetcher.fetch(page_url.as_str()).await else {
                    self.sink.error(&format!("Failed to fetch page {page_num}"));
                    continue;
                };
                listing::extract_listing(&page, &self.base_url)
            };

            self.sink
                .info(&format!("Found {} books on page {page_num}", records.len()));

            let records = if self.config.deep {
                self.enrich_all(records).await
            } else {
                records
            };

            all_records.extend(records);
        }

        self.sink
            .info(&format!("Total books scraped: {}", all_records.len()));
        self.sink.progress(Milestone::Scraped);

        Ok(all_records)
    }

    /// Visits each record's product page sequentially, in page order.
    ///
    /// A stop request keeps the remaining records with their detail fields
    /// absent rather than dropping already-extracted data.
    async fn enrich_all(&self, records: Vec<BookRecord>) -> Vec<BookRecord> {
        let total = records.len();
        self.sink.info("Fetching detailed information...");

        let mut enriched = Vec::with_capacity(total);
        let mut remaining = records.into_iter();

        while let Some(record) = remaining.next() {
            if self.cancel.is_cancelled() {
                self.sink
                    .info("Stop requested, keeping remaining records without details");
                enriched.push(record);
                enriched.extend(remaining);
                break;
            }

            self.sink.info(&format!(
                "Fetching details for book {}/{}: {}",
                enriched.len() + 1,
                total,
                record.title
            ));
            enriched.push(detail::enrich(&self.fetcher, record).await);
        }

        enriched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrapeConfig;
    use std::time::Duration;

    fn test_config() -> ScrapeConfig {
        ScrapeConfig {
            base_url: "https://books.toscrape.com/catalogue/".to_string(),
            delay: Duration::ZERO,
            ..ScrapeConfig::default()
        }
    }

    #[test]
    fn test_orchestrator_creation() {
        assert!(Orchestrator::new(test_config()).is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ScrapeConfig {
            base_url: "not a url".to_string(),
            ..test_config()
        };
        assert!(Orchestrator::new(config).is_err());
    }

    #[tokio::test]
    async fn test_cancelled_run_fetches_nothing() {
        let orchestrator = Orchestrator::new(test_config()).unwrap();
        orchestrator.cancel_token().cancel();

        let records = orchestrator.run().await.unwrap();
        assert!(records.is_empty());
    }

    // Full crawl behavior is covered with wiremock in tests/scrape_tests.rs.
}
