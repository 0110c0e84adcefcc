use std::path::Path;

use crate::error::{MemeforgeError, Result};
use crate::ingest::ingestors::split_caption;
use crate::ingest::QuoteIngestor;
use crate::models::Quote;

/// Parses one quote per non-empty paragraph out of DOCX documents.
pub struct DocxIngestor;

impl QuoteIngestor for DocxIngestor {
    fn extension(&self) -> &'static str {
        "docx"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        if !self.can_ingest(path) {
            return Err(MemeforgeError::FormatMismatch {
                path: path.to_path_buf(),
                expected: self.extension(),
            });
        }

        let bytes = std::fs::read(path)?;
        let docx = docx_rs::read_docx(&bytes).map_err(|e| MemeforgeError::MalformedRecord {
            path: path.to_path_buf(),
            reason: format!("DOCX parse error: {e}"),
        })?;

        let mut quotes = Vec::new();
        for child in &docx.document.children {
            if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
                let text = paragraph_text(paragraph);
                if text.is_empty() {
                    continue;
                }
                quotes.push(split_caption(&text, path)?);
            }
        }

        Ok(quotes)
    }
}

/// A paragraph's text is the concatenation of its runs' text nodes.
fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut content = String::new();
    for para_child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = para_child {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text) = run_child {
                    content.push_str(&text.text);
                }
            }
        }
    }
    content
}
