//! Manifest + page-image writer
//!
//! Writes the font manifest JSON next to one PNG per glyph page. The manifest's
//! nesting (pages -> glyphs -> kerning) and the page file naming are the data
//! contract downstream loaders parse, so key order is insertion order and the
//! naming rule comes from `forge_common::pages`.

use crate::glyph::Glyph;
use crate::kerning;
use crate::source::{GlyphSource, KerningSource, PagePixels};
use anyhow::{Context, Result, bail};
use forge_common::pages::page_file_name;
use forge_common::write_pretty;
use serde_json::{Map, Value, json};
use std::path::Path;

/// Export a rasterized font: manifest at `output`, page PNGs beside it.
///
/// The output base name is the manifest file's stem: a single-page font named
/// `hud.json` exports `hud.png`. An unreadable kerning table is logged and
/// exported as empty; unwritable manifest or images abort the export.
pub fn export_font(
    source: &impl GlyphSource,
    pixels: &mut impl PagePixels,
    kerning_source: &mut impl KerningSource,
    output: &Path,
) -> Result<()> {
    let base = output
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid output file name: {:?}", output))?
        .to_owned();
    let out_dir = output.parent().unwrap_or(Path::new(""));

    let metrics = source.metrics();
    let pages = source.pages();
    let page_count = pages.len();

    let all_glyphs: Vec<Glyph> = pages.iter().flatten().cloned().collect();
    let raw_kerning = match kerning_source.raw_table() {
        Ok(table) => table,
        Err(err) => {
            tracing::warn!("Failed to read kerning table, exporting without: {err:#}");
            Default::default()
        }
    };
    let kerning = kerning::aggregate(&all_glyphs, &raw_kerning);

    let mut root = Map::new();
    root.insert("pageWidth".into(), json!(metrics.page_width));
    root.insert("pageHeight".into(), json!(metrics.page_height));
    root.insert("base".into(), json!(metrics.base));
    root.insert("lineHeight".into(), json!(metrics.line_height));

    let mut pages_json = Map::new();
    for (index, page) in pages.iter().enumerate() {
        let mut page_json = Map::new();
        for glyph in page {
            let mut glyph_json = Map::new();
            glyph_json.insert("x".into(), json!(glyph.x));
            glyph_json.insert("y".into(), json!(glyph.y));
            glyph_json.insert("w".into(), json!(glyph.w));
            glyph_json.insert("h".into(), json!(glyph.h));
            glyph_json.insert("xo".into(), json!(glyph.x_offset));
            glyph_json.insert("yo".into(), json!(glyph.y_offset));
            glyph_json.insert("xa".into(), json!(glyph.x_advance));
            if let Some(pairs) = kerning.get(&glyph.code_point) {
                if !pairs.is_empty() {
                    let k: Map<String, Value> = pairs
                        .iter()
                        .map(|(second, offset)| (second.to_string(), json!(offset)))
                        .collect();
                    glyph_json.insert("k".into(), Value::Object(k));
                }
            }
            page_json.insert(glyph.code_point.to_string(), Value::Object(glyph_json));
        }
        pages_json.insert(
            page_file_name(&base, index, page_count),
            Value::Object(page_json),
        );
    }
    root.insert("pages".into(), Value::Object(pages_json));

    write_pretty(output, &Value::Object(root))?;

    for index in 0..page_count {
        let file_name = page_file_name(&base, index, page_count);
        let path = out_dir.join(&file_name);
        let buffer = pixels.read_page(index)?;
        let image = page_image(&buffer, metrics.page_width, metrics.page_height)?;
        image
            .save(&path)
            .with_context(|| format!("Failed to write page image: {:?}", path))?;
        tracing::info!(
            "Wrote page {}: {} ({} glyphs)",
            index,
            file_name,
            pages[index].len()
        );
    }

    tracing::info!(
        "Exported font '{}': {} glyphs across {} pages",
        base,
        all_glyphs.len(),
        page_count
    );
    Ok(())
}

/// Build an RGBA page image from the captured BGRA pixel buffer.
fn page_image(bgra: &[u32], width: u32, height: u32) -> Result<image::RgbaImage> {
    let expected = width as usize * height as usize;
    if bgra.len() != expected {
        bail!(
            "Page buffer size mismatch: {} pixels for {}x{}",
            bgra.len(),
            width,
            height
        );
    }
    let mut data = Vec::with_capacity(expected * 4);
    for &pixel in bgra {
        let [b, g, r, a] = pixel.to_le_bytes();
        data.extend([r, g, b, a]);
    }
    image::RgbaImage::from_raw(width, height, data).context("Failed to build page image")
}
