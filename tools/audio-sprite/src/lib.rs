//! audio-sprite library
//!
//! Packs a directory of WAV clips into one continuous WAV with silence gaps
//! between clips, plus a JSON manifest mapping each clip name to its start/end
//! time in the packed stream.
//!
//! # Modules
//!
//! - [`scanner`] - Deterministic input discovery
//! - [`clip`] - WAV decode, format conversion, silence synthesis
//! - [`concat`] - Concatenation order, timing bookkeeping, lazy sample chain
//! - [`manifest`] - Sprite manifest assembly
//! - [`pack`] - End-to-end packing run

pub mod clip;
pub mod concat;
pub mod manifest;
pub mod pack;
pub mod scanner;

pub use clip::{AudioClip, ClipFormat, ConvertError};
pub use concat::{ClipChain, Concatenation, SpriteEntry, concatenate};
pub use pack::{PackOptions, run};
