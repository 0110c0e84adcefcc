mod csv;
mod docx;
mod pdf;
mod txt;

pub use csv::CsvIngestor;
pub use docx::DocxIngestor;
pub use pdf::PdfIngestor;
pub use txt::TxtIngestor;

use std::path::Path;

use crate::error::{MemeforgeError, Result};
use crate::models::Quote;

/// Split a caption line on the first `-` into (body, author).
///
/// Neither side is trimmed; `"a - b"` yields body `"a "` and author `" b"`.
/// Everything after the first `-` belongs to the author.
pub(crate) fn split_caption(line: &str, path: &Path) -> Result<Quote> {
    match line.split_once('-') {
        Some((body, author)) => Ok(Quote::new(body, author)),
        None => Err(MemeforgeError::MalformedRecord {
            path: path.to_path_buf(),
            reason: format!("no '-' delimiter in {line:?}"),
        }),
    }
}
