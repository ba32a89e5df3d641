//! Glyph and font-metrics types
//!
//! Produced once by the external rasterizer and read-only afterward.

/// A single rasterized glyph within a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Unicode code point
    pub code_point: u32,

    /// Font-internal glyph code (used to resolve raw kerning entries)
    pub glyph_code: u32,

    /// X position in the page (pixels)
    pub x: u32,

    /// Y position in the page (pixels)
    pub y: u32,

    /// Width in the page (pixels)
    pub w: u32,

    /// Height in the page (pixels)
    pub h: u32,

    /// Horizontal render offset
    pub x_offset: i32,

    /// Vertical render offset
    pub y_offset: i32,

    /// Horizontal advance to the next glyph
    pub x_advance: i32,
}

/// Global metrics shared by every page of an exported font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Page width in pixels
    pub page_width: u32,

    /// Page height in pixels
    pub page_height: u32,

    /// Baseline offset (ascent) in pixels
    pub base: i32,

    /// Line height in pixels
    pub line_height: i32,
}
