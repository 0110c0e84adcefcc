use std::path::Path;

use crate::error::{MemeforgeError, Result};
use crate::ingest::QuoteIngestor;
use crate::models::Quote;

/// Parses quote rows out of CSV files with `body` and `author` columns.
pub struct CsvIngestor;

impl QuoteIngestor for CsvIngestor {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        if !self.can_ingest(path) {
            return Err(MemeforgeError::FormatMismatch {
                path: path.to_path_buf(),
                expected: self.extension(),
            });
        }

        let malformed = |reason: String| MemeforgeError::MalformedRecord {
            path: path.to_path_buf(),
            reason,
        };

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| malformed(format!("failed to open CSV: {e}")))?;

        let headers = reader
            .headers()
            .map_err(|e| malformed(format!("failed to read CSV headers: {e}")))?;

        // Column names are exact and case-sensitive.
        let body_idx = headers
            .iter()
            .position(|h| h == "body")
            .ok_or_else(|| malformed("missing 'body' column".to_string()))?;
        let author_idx = headers
            .iter()
            .position(|h| h == "author")
            .ok_or_else(|| malformed("missing 'author' column".to_string()))?;

        let mut quotes = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| malformed(format!("failed to read CSV record: {e}")))?;
            let body = record
                .get(body_idx)
                .ok_or_else(|| malformed("row missing 'body' field".to_string()))?;
            let author = record
                .get(author_idx)
                .ok_or_else(|| malformed("row missing 'author' field".to_string()))?;
            quotes.push(Quote::new(body, author));
        }

        Ok(quotes)
    }
}
