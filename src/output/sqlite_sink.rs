//! SQLite sink
//!
//! Ensures the `books` table exists and appends the batch inside one
//! transaction. Existing rows are never dropped; absent optional fields
//! persist as NULL, not empty strings. The connection lives only for the
//! duration of the call.

use crate::record::BookRecord;
use crate::ScrapeError;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQL schema for the books table
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    price TEXT,
    rating INTEGER,
    availability TEXT,
    product_url TEXT,
    upc TEXT,
    category TEXT,
    description TEXT
);
";

/// Appends all records to the `books` table
pub fn write_sqlite(records: &[BookRecord], path: &Path) -> Result<(), ScrapeError> {
    tracing::info!("Saving {} books to SQLite: {}", records.len(), path.display());

    let mut conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA_SQL)?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO books (title, price, rating, availability, product_url, upc, category, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        for record in records {
            stmt.execute(params![
                record.title,
                record.price,
                record.rating,
                record.availability,
                record.product_url,
                record.upc,
                record.category,
                record.description,
            ])?;
        }
    }
    tx.commit()?;

    tracing::info!("SQLite database saved successfully: {}", path.display());
    Ok(())
}

/// Reads back the first `limit` rows (title, price, rating)
///
/// Used for the sample printout after a run.
pub fn read_sample(path: &Path, limit: u32) -> Result<Vec<(String, String, u8)>, ScrapeError> {
    let conn = Connection::open(path)?;
    let mut stmt = conn.prepare("SELECT title, price, rating FROM books LIMIT ?1")?;

    let rows = stmt
        .query_map(params![limit], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BookRecord;
    use tempfile::tempdir;

    fn sample_record() -> BookRecord {
        BookRecord::new(
            "A Light in the Attic",
            "£51.77",
            3,
            "22",
            "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html",
        )
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");

        write_sqlite(&[sample_record()], &path).unwrap();
        let rows = read_sample(&path, 5).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "A Light in the Attic");
        assert_eq!(rows[0].1, "£51.77");
        assert_eq!(rows[0].2, 3);
    }

    #[test]
    fn test_second_write_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");

        write_sqlite(&[sample_record()], &path).unwrap();
        write_sqlite(&[sample_record()], &path).unwrap();

        let conn = Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_absent_optionals_persist_as_null() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");

        write_sqlite(&[sample_record()], &path).unwrap();

        let conn = Connection::open(&path).unwrap();
        let (upc, category, description): (Option<String>, Option<String>, Option<String>) = conn
            .query_row(
                "SELECT upc, category, description FROM books",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();

        assert_eq!(upc, None);
        assert_eq!(category, None);
        assert_eq!(description, None);
    }

    #[test]
    fn test_enriched_fields_persist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");

        let mut record = sample_record();
        record.upc = Some("a897fe39b1053632".to_string());
        record.category = Some("Poetry".to_string());
        write_sqlite(&[record], &path).unwrap();

        let conn = Connection::open(&path).unwrap();
        let (upc, category): (Option<String>, Option<String>) = conn
            .query_row("SELECT upc, category FROM books", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();

        assert_eq!(upc.as_deref(), Some("a897fe39b1053632"));
        assert_eq!(category.as_deref(), Some("Poetry"));
    }

    #[test]
    fn test_rows_get_sequential_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");

        write_sqlite(&[sample_record(), sample_record()], &path).unwrap();

        let conn = Connection::open(&path).unwrap();
        let max_id: i64 = conn
            .query_row("SELECT MAX(id) FROM books", [], |row| row.get(0))
            .unwrap();
        assert_eq!(max_id, 2);
    }
}
