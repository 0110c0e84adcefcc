use std::path::Path;

use ab_glyph::FontArc;

use crate::error::{MemeforgeError, Result};

/// The body and author typefaces used for caption rendering.
///
/// `FontArc` clones are cheap reference-count bumps, so one loaded set is
/// shared across requests while each render gets its own engine.
#[derive(Clone)]
pub struct FontSet {
    pub body: FontArc,
    pub author: FontArc,
}

impl FontSet {
    pub fn load(body_path: &Path, author_path: &Path) -> Result<Self> {
        Ok(Self {
            body: load_font(body_path)?,
            author: load_font(author_path)?,
        })
    }
}

fn load_font(path: &Path) -> Result<FontArc> {
    let bytes = std::fs::read(path).map_err(|e| {
        MemeforgeError::FontLoad(format!("failed to read {}: {e}", path.display()))
    })?;
    FontArc::try_from_vec(bytes).map_err(|e| {
        MemeforgeError::FontLoad(format!("failed to parse {}: {e}", path.display()))
    })
}
