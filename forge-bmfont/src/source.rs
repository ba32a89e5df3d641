//! External capabilities consumed by the exporter
//!
//! The exporter does no rasterization, GPU readback, or font-table parsing of its
//! own. Whatever produced the glyph pages implements these traits and the
//! exporter consumes them through this seam.

use crate::glyph::{FontMetrics, Glyph};
use anyhow::Result;
use std::collections::HashMap;

/// Provides the rasterized glyph set, grouped by page in export order.
pub trait GlyphSource {
    fn metrics(&self) -> FontMetrics;

    /// Pages in order; each page lists its glyphs in export order.
    fn pages(&self) -> Vec<Vec<Glyph>>;
}

/// Reads back the raw pixels of one rendered page.
pub trait PagePixels {
    /// BGRA pixels for `page`, one u32 per pixel, `page_width * page_height` long.
    fn read_page(&mut self, page: usize) -> Result<Vec<u32>>;
}

/// Loads the font's raw kerning table.
pub trait KerningSource {
    /// Raw kerning entries keyed by packed glyph-code pair (high 16 bits = first
    /// glyph code, low 16 bits = second), value = horizontal offset.
    ///
    /// A failure here is non-fatal: the exporter logs it and exports with an
    /// empty kerning set.
    fn raw_table(&mut self) -> Result<HashMap<u32, i32>>;
}

/// Kerning source for fonts without kerning data.
pub struct NoKerning;

impl KerningSource for NoKerning {
    fn raw_table(&mut self) -> Result<HashMap<u32, i32>> {
        Ok(HashMap::new())
    }
}
