//! Text overlay
//!
//! The overlay is drawn without a font file: text is rasterized from a small
//! built-in bitmap font into flat colored quads.

pub mod font;

pub use font::{glyph, layout_text, GLYPH_HEIGHT, GLYPH_WIDTH};
