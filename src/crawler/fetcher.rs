//! HTTP page fetcher
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with the identifying user agent
//! - GET requests with a per-request timeout
//! - Retry with exponential backoff on transient failures
//! - The politeness pause after every successful fetch

use crate::config::ScrapeConfig;
use crate::ScrapeError;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Builds the HTTP client used for every request
///
/// # Arguments
///
/// * `user_agent` - The identifying header value
/// * `timeout` - Per-request timeout
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages politely: fixed delay after success, exponential backoff
/// between retries.
pub struct PageFetcher {
    client: Client,
    delay: Duration,
    max_attempts: u32,
}

impl PageFetcher {
    /// Creates a fetcher from the scrape configuration
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.user_agent, config.request_timeout)?;
        Ok(Self {
            client,
            delay: config.delay,
            // Invariant from validation, enforced again so a hand-built
            // config still makes at least one attempt.
            max_attempts: config.max_attempts.max(1),
        })
    }

    /// Fetches a URL and parses the body into an HTML tree
    ///
    /// Transient failures (network error, timeout, non-2xx status) are
    /// retried with `2^attempt` seconds of backoff, up to `max_attempts`
    /// total attempts. A successful fetch sleeps the politeness delay before
    /// returning. Exhausted attempts yield `None`: the caller treats the
    /// page as unavailable and continues. A malformed body behind a 2xx
    /// status is not retried.
    pub async fn fetch(&self, url: &str) -> Option<Html> {
        for attempt in 0..self.max_attempts {
            tracing::info!("Fetching: {} (attempt {})", url, attempt + 1);

            match self.try_fetch(url).await {
                Ok(body) => {
                    // Be polite
                    tokio::time::sleep(self.delay).await;
                    return Some(Html::parse_document(&body));
                }
                Err(e) => {
                    tracing::warn!("Attempt {} failed: {}", attempt + 1, e);
                    if attempt + 1 < self.max_attempts {
                        tokio::time::sleep(Duration::from_secs(1 << attempt)).await;
                    }
                }
            }
        }

        tracing::error!(
            "Failed to fetch {} after {} attempts",
            url,
            self.max_attempts
        );
        None
    }

    async fn try_fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.text().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrapeConfig;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client("TestAgent/1.0", Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_fetcher_clamps_zero_attempts() {
        let config = ScrapeConfig {
            max_attempts: 0,
            ..ScrapeConfig::default()
        };
        let fetcher = PageFetcher::new(&config).unwrap();
        assert_eq!(fetcher.max_attempts, 1);
    }

    // Fetch behavior (retry, backoff exhaustion) is covered with wiremock
    // in tests/scrape_tests.rs.
}
