use std::time::Duration;

/// Listing base of the target catalogue; page URLs are `page-{n}.html`
/// joined against this.
pub const DEFAULT_BASE_URL: &str = "https://books.toscrape.com/catalogue/";

/// Static identifying header sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Complete run configuration, built from CLI flags and passed in
/// explicitly. There is no process-wide scraper state.
#[derive(Debug, Clone)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub output: OutputConfig,
}

/// Scrape behavior configuration
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Base URL the page and product links resolve against.
    pub base_url: String,

    /// Number of listing pages to walk, starting at page 1.
    pub max_pages: u32,

    /// Politeness pause after each successful fetch.
    pub delay: Duration,

    /// Also visit every product page for UPC, category and description.
    pub deep: bool,

    /// Total fetch attempts per URL, including the first. Must be >= 1.
    pub max_attempts: u32,

    /// Per-request timeout; exceeding it counts as a transient failure.
    pub request_timeout: Duration,

    /// User-agent header value.
    pub user_agent: String,
}

/// Output sink configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Path of the CSV file. Overwritten if it exists.
    pub csv_path: String,

    /// Path of the SQLite database, when that sink is wanted.
    pub sqlite_path: Option<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_pages: 3,
            delay: Duration::from_millis(700),
            deep: false,
            max_attempts: 3,
            request_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
