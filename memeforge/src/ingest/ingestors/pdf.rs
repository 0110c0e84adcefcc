use std::path::Path;
use std::process::Command;

use crate::error::{MemeforgeError, Result};
use crate::ingest::ingestors::split_caption;
use crate::ingest::QuoteIngestor;
use crate::models::Quote;

/// Parses quotes out of PDFs by shelling out to `pdftotext` and tokenizing
/// the first extracted line on the ` "` delimiter sequence.
///
/// The tokenization is fragile against quotes containing `-` or ` "`; that
/// is the documented contract of this ingestor, not an accident.
pub struct PdfIngestor;

/// Split an extracted text line into caption tokens on ` "`.
pub(crate) fn split_pdf_line(line: &str) -> impl Iterator<Item = &str> {
    line.split(" \"").filter(|token| !token.is_empty())
}

impl QuoteIngestor for PdfIngestor {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        if !self.can_ingest(path) {
            return Err(MemeforgeError::FormatMismatch {
                path: path.to_path_buf(),
                expected: self.extension(),
            });
        }

        let tmp = tempfile::Builder::new().suffix(".txt").tempfile()?;

        // Blocks for the tool's full runtime; no timeout.
        let output = Command::new("pdftotext")
            .arg(path)
            .arg(tmp.path())
            .output()
            .map_err(|e| MemeforgeError::Subprocess {
                path: path.to_path_buf(),
                reason: format!("failed to spawn pdftotext: {e}"),
            })?;

        if !output.status.success() {
            return Err(MemeforgeError::Subprocess {
                path: path.to_path_buf(),
                reason: format!(
                    "pdftotext exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let content = std::fs::read_to_string(tmp.path())?;
        // pdftotext separates pages with form feeds even when a page is
        // blank; those are tool artifacts, not extracted text.
        let content = content.replace('\u{0C}', "");
        let Some(first_line) = content.lines().next() else {
            return Ok(Vec::new());
        };

        split_pdf_line(first_line)
            .map(|token| split_caption(token, path))
            .collect()
    }
}
