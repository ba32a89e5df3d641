//! Shared utilities for the Assetforge asset tools
//!
//! This crate provides the pieces both converters depend on:
//! - [`manifest`] - Ordered JSON manifest trees and the 4-space pretty writer
//! - [`pages`] - The glyph-page file naming rule shared by manifest and image export

pub mod manifest;
pub mod pages;

pub use manifest::{to_pretty, write_pretty};
pub use pages::page_file_name;
