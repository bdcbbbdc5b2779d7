//! Output sinks for scraped records
//!
//! This module handles:
//! - Writing the CSV file (overwrite semantics)
//! - Appending to the embedded SQLite table
//! - The sample-row printout after a run

mod csv_sink;
mod sample;
mod sqlite_sink;

pub use csv_sink::{read_csv, write_csv};
pub use sample::print_sample_data;
pub use sqlite_sink::{read_sample, write_sqlite};

use crate::config::OutputConfig;
use crate::record::BookRecord;
use crate::ScrapeError;
use std::path::Path;

/// Writes the records to every configured sink
pub fn write_outputs(records: &[BookRecord], output: &OutputConfig) -> Result<(), ScrapeError> {
    write_csv(records, Path::new(&output.csv_path))?;

    if let Some(sqlite_path) = &output.sqlite_path {
        write_sqlite(records, Path::new(sqlite_path))?;
    }

    Ok(())
}
