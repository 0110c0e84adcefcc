pub mod ingestors;

use std::path::Path;

use crate::error::{MemeforgeError, Result};
use crate::models::Quote;
use ingestors::{CsvIngestor, DocxIngestor, PdfIngestor, TxtIngestor};

/// A format-specific quote parser.
///
/// `parse` must only be invoked on a path `can_ingest` claims; every
/// implementation re-checks this at entry and fails with `FormatMismatch`
/// instead of misparsing.
pub trait QuoteIngestor: Send + Sync {
    /// File extension this ingestor claims, without the dot.
    fn extension(&self) -> &'static str;

    /// Case-sensitive equality check against the path's extension.
    fn can_ingest(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some(self.extension())
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>>;
}

/// Dispatches a path to the first registered ingestor that claims it.
///
/// The ingestor list is fixed at construction; ordering is explicit and
/// there is no global registry.
pub struct Ingestor {
    ingestors: Vec<Box<dyn QuoteIngestor>>,
}

impl Ingestor {
    /// Build the dispatcher with the default ingestors, in order:
    /// CSV, DOCX, PDF, TXT.
    pub fn new() -> Self {
        Self::with_ingestors(vec![
            Box::new(CsvIngestor),
            Box::new(DocxIngestor),
            Box::new(PdfIngestor),
            Box::new(TxtIngestor),
        ])
    }

    pub fn with_ingestors(ingestors: Vec<Box<dyn QuoteIngestor>>) -> Self {
        Self { ingestors }
    }

    /// Parse one quote file with the first ingestor that claims its
    /// extension. Fails with `UnsupportedFormat` when none does.
    pub fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        let ingestor = self
            .ingestors
            .iter()
            .find(|i| i.can_ingest(path))
            .ok_or_else(|| MemeforgeError::UnsupportedFormat(path.to_path_buf()))?;
        ingestor.parse(path)
    }

    /// Parse every supported file directly under `dir`, chaining results in
    /// directory-iteration order. Files no ingestor claims are skipped; the
    /// first parse failure aborts the whole collection.
    pub fn collect_dir(&self, dir: &Path) -> Result<Vec<Quote>> {
        let mut quotes = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if self.ingestors.iter().any(|i| i.can_ingest(&path)) {
                let parsed = self.parse(&path)?;
                tracing::debug!("Parsed {} quotes from {}", parsed.len(), path.display());
                quotes.extend(parsed);
            } else {
                tracing::debug!("Skipping unsupported file {}", path.display());
            }
        }
        Ok(quotes)
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}
