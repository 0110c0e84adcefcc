use std::path::Path;

use crate::error::{MemeforgeError, Result};
use crate::ingest::ingestors::split_caption;
use crate::ingest::QuoteIngestor;
use crate::models::Quote;

/// Parses one quote per non-empty line out of plain text files.
pub struct TxtIngestor;

impl QuoteIngestor for TxtIngestor {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        if !self.can_ingest(path) {
            return Err(MemeforgeError::FormatMismatch {
                path: path.to_path_buf(),
                expected: self.extension(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| split_caption(line, path))
            .collect()
    }
}
