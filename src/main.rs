//! Bookworm main entry point
//!
//! Command-line interface for the Books to Scrape catalogue scraper.

use bookworm::config::{self, Config, OutputConfig, ScrapeConfig};
use bookworm::crawler::Orchestrator;
use bookworm::output;
use bookworm::report::{LogSink, Milestone, TracingSink};
use clap::{Parser, ValueEnum};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Bookworm: a polite catalogue scraper
///
/// Walks the paginated Books to Scrape listing, optionally visits each
/// book's product page, and saves the results to CSV and/or SQLite.
#[derive(Parser, Debug)]
#[command(name = "bookworm")]
#[command(version = "1.0.0")]
#[command(about = "A polite scraper for the Books to Scrape demo catalogue", long_about = None)]
struct Cli {
    /// Maximum pages to scrape
    #[arg(long, default_value_t = 3)]
    max_pages: u32,

    /// Delay between requests in seconds
    #[arg(long, default_value_t = 0.7)]
    delay: f64,

    /// Fetch detailed product information (UPC, category, description)
    #[arg(long)]
    deep: bool,

    /// CSV output filename
    #[arg(long, default_value = "books.csv")]
    out_csv: String,

    /// SQLite output filename (optional)
    #[arg(long)]
    out_sqlite: Option<String>,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "UPPER")]
enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "bookworm=debug,info",
            LogLevel::Info => "bookworm=info,warn",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    let delay = Duration::try_from_secs_f64(cli.delay)
        .map_err(|_| anyhow::anyhow!("--delay must be a non-negative number of seconds"))?;

    let config = Config {
        scrape: ScrapeConfig {
            max_pages: cli.max_pages,
            delay,
            deep: cli.deep,
            ..ScrapeConfig::default()
        },
        output: OutputConfig {
            csv_path: cli.out_csv,
            sqlite_path: cli.out_sqlite,
        },
    };

    // Reject bad input before any network activity.
    config::validate(&config)?;

    let sink: Arc<dyn LogSink> = Arc::new(TracingSink);
    let orchestrator = Orchestrator::with_sink(config.scrape.clone(), Arc::clone(&sink))?;
    let records = orchestrator.run().await?;

    if records.is_empty() {
        // A zero-result run is distinct from a failure, but there is nothing
        // to write and nothing to show.
        eprintln!("No books were scraped. Check your internet connection and try again.");
        std::process::exit(1);
    }

    output::write_outputs(&records, &config.output)?;
    sink.progress(Milestone::Finished);

    output::print_sample_data(
        Path::new(&config.output.csv_path),
        config.output.sqlite_path.as_deref().map(Path::new),
    )?;

    println!("\nScraping completed successfully!");
    println!("Total books scraped: {}", records.len());
    println!("CSV file: {}", config.output.csv_path);
    if let Some(sqlite_path) = &config.output.sqlite_path {
        println!("SQLite file: {sqlite_path}");
    }

    Ok(())
}

/// Sets up the tracing subscriber from the --log-level flag
fn setup_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.as_filter()))
        .with_target(false)
        .init();
}
