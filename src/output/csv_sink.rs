//! CSV sink
//!
//! One header row in the fixed column order, one data row per record.
//! Optional fields serialize as empty strings; fields containing the
//! delimiter are quoted by the `csv` writer.

use crate::record::BookRecord;
use crate::ScrapeError;
use std::path::Path;

/// Writes all records to a CSV file, overwriting any existing file
pub fn write_csv(records: &[BookRecord], path: &Path) -> Result<(), ScrapeError> {
    tracing::info!("Saving {} books to {}", records.len(), path.display());

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!("CSV saved successfully: {}", path.display());
    Ok(())
}

/// Reads records back from a CSV file
///
/// Empty optional columns deserialize back to `None`. Used for the sample
/// printout after a run.
pub fn read_csv(path: &Path) -> Result<Vec<BookRecord>, ScrapeError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BookRecord;
    use tempfile::tempdir;

    fn sample_records() -> Vec<BookRecord> {
        let mut enriched = BookRecord::new(
            "Sharp Objects",
            "£47.82",
            4,
            "20",
            "https://books.toscrape.com/catalogue/sharp-objects_997/index.html",
        );
        enriched.upc = Some("e00eb4fd7b871a48".to_string());
        enriched.category = Some("Mystery".to_string());
        enriched.description = Some("Fresh from a brief stay at a psych hospital.".to_string());

        vec![
            BookRecord::new(
                "A Light in the Attic",
                "£51.77",
                3,
                "22",
                "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html",
            ),
            enriched,
        ]
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.csv");
        let records = sample_records();

        write_csv(&records, &path).unwrap();
        let read_back = read_csv(&path).unwrap();

        assert_eq!(read_back, records);
    }

    #[test]
    fn test_header_row_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.csv");

        write_csv(&sample_records(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();

        assert_eq!(
            header,
            "title,price,rating,availability,product_url,upc,category,description"
        );
    }

    #[test]
    fn test_absent_optionals_are_empty_strings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.csv");

        write_csv(&sample_records(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let first_row = contents.lines().nth(1).unwrap();

        assert!(first_row.ends_with("index.html,,,"));
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.csv");

        write_csv(&sample_records(), &path).unwrap();
        write_csv(&sample_records()[..1], &path).unwrap();

        let read_back = read_csv(&path).unwrap();
        assert_eq!(read_back.len(), 1);
    }

    #[test]
    fn test_delimiter_in_field_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.csv");
        let records = vec![BookRecord::new(
            "Maude, and Other Poems",
            "£18.02",
            2,
            "0",
            "https://books.toscrape.com/catalogue/maude_983/index.html",
        )];

        write_csv(&records, &path).unwrap();
        let read_back = read_csv(&path).unwrap();

        assert_eq!(read_back[0].title, "Maude, and Other Poems");
    }
}
