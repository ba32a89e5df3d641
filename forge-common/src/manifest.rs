//! Ordered JSON manifest trees and the pretty writer
//!
//! Both tools emit a JSON sidecar that downstream loaders parse by key order, so
//! manifests are built as `serde_json::Value` objects (the `preserve_order`
//! feature keeps insertion order) and rendered by a single shared writer:
//! 4-space indentation, UTF-8, serialized fully into a buffer before the file is
//! committed in one write. A failed write never leaves a half-written manifest.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

/// Render a manifest tree with 4-space indentation.
pub fn to_pretty(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .context("Failed to serialize manifest")?;
    Ok(buf)
}

/// Render a manifest tree and commit it to `path` in a single write.
pub fn write_pretty(path: &Path, value: &Value) -> Result<()> {
    let buf = to_pretty(value)?;
    std::fs::write(path, buf).with_context(|| format!("Failed to write manifest: {:?}", path))?;
    Ok(())
}
