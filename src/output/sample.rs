//! Completion-summary sample printout
//!
//! After a successful run the binary shows the first few rows read back from
//! the freshly written sinks, as a quick sanity check on the output files.

use crate::output::{csv_sink, sqlite_sink};
use crate::ScrapeError;
use std::path::Path;

const SAMPLE_LIMIT: usize = 5;
const TITLE_WIDTH: usize = 50;

/// Prints sample rows from the written output files
pub fn print_sample_data(csv_path: &Path, sqlite_path: Option<&Path>) -> Result<(), ScrapeError> {
    println!("\n{}", "=".repeat(60));
    println!("SAMPLE DATA - First {SAMPLE_LIMIT} rows");
    println!("{}", "=".repeat(60));

    if csv_path.exists() {
        println!("\nCSV Sample ({}):", csv_path.display());
        let records = csv_sink::read_csv(csv_path)?;
        for (i, record) in records.iter().take(SAMPLE_LIMIT).enumerate() {
            println!(
                "  {}. {} | {} | Rating: {}",
                i + 1,
                shorten(&record.title),
                record.price,
                record.rating
            );
        }
    }

    if let Some(sqlite_path) = sqlite_path {
        if sqlite_path.exists() {
            println!("\nSQLite Sample ({}):", sqlite_path.display());
            let rows = sqlite_sink::read_sample(sqlite_path, SAMPLE_LIMIT as u32)?;
            for (i, (title, price, rating)) in rows.iter().enumerate() {
                println!(
                    "  {}. {} | {} | Rating: {}",
                    i + 1,
                    shorten(title),
                    price,
                    rating
                );
            }
        }
    }

    Ok(())
}

fn shorten(title: &str) -> String {
    if title.chars().count() <= TITLE_WIDTH {
        title.to_string()
    } else {
        let truncated: String = title.chars().take(TITLE_WIDTH).collect();
        format!("{truncated}...")
    }
}
