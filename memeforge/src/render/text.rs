//! Pure text-measurement helpers backing the rendering engine.

use ab_glyph::{FontArc, PxScale};
use imageproc::drawing::text_size;

/// Upper bound on the font-size search so degenerate inputs (an empty body
/// measures width 0 at every size) terminate.
pub const MAX_FONT_SIZE: u32 = 512;

/// Measured pixel bounding box of `text` at an integer point size.
pub fn measured_size(font: &FontArc, text: &str, size: u32) -> (u32, u32) {
    text_size(PxScale::from(size as f32), font, text)
}

/// Smallest integer size at which the full unwrapped `text` reaches
/// `image_width * fraction` pixels wide.
///
/// Measured width is non-decreasing in size, so the linear search from 1
/// finds the minimal satisfying size.
pub fn fit_body_size(font: &FontArc, text: &str, image_width: u32, fraction: f32) -> u32 {
    let target = image_width as f32 * fraction;
    let mut size = 1;
    while size < MAX_FONT_SIZE && (measured_size(font, text, size).0 as f32) < target {
        size += 1;
    }
    size
}

/// The author size is derived from the body size, never searched.
pub fn author_size(body_size: u32) -> u32 {
    ((body_size as f32 * 0.7).round() as u32).max(1)
}

/// Wrap caption text at a fixed character column.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
