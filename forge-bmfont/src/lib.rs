//! forge-bmfont library
//!
//! Exports a rasterized bitmap font as one PNG per glyph page plus a JSON
//! manifest of page dimensions, glyph metrics, and kerning pairs. Rasterization
//! itself is out of scope: glyphs, page pixels, and the raw kerning table come in
//! through the narrow traits in [`source`], so any rasterizer that can hand over
//! pre-rendered pages can drive the export.
//!
//! # Modules
//!
//! - [`glyph`] - Glyph and font-metrics types
//! - [`source`] - Traits the external rasterizer implements
//! - [`kerning`] - Raw kerning-table resolution to code-point pairs
//! - [`export`] - Manifest + page-image writer

pub mod export;
pub mod glyph;
pub mod kerning;
pub mod source;

pub use export::export_font;
pub use glyph::{FontMetrics, Glyph};
pub use kerning::KerningMap;
pub use source::{GlyphSource, KerningSource, PagePixels};
