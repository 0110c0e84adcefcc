mod engine;
mod fonts;
pub mod text;

pub use engine::MemeEngine;
pub use fonts::FontSet;
