//! Sprite manifest assembly
//!
//! `{ "<wavFileName>": { "<clipName>": {"s": start, "e": end}, ... } }`, clip
//! keys in concatenation order, times in seconds truncated to milliseconds.

use crate::concat::SpriteEntry;
use serde_json::{Map, Value, json};

/// Build the manifest tree for the packed WAV.
pub fn sprite_manifest(wav_name: &str, entries: &[SpriteEntry]) -> Value {
    let mut clips = Map::new();
    for entry in entries {
        let mut window = Map::new();
        window.insert("s".into(), json!(entry.start));
        window.insert("e".into(), json!(entry.end));
        clips.insert(entry.name.clone(), Value::Object(window));
    }

    let mut root = Map::new();
    root.insert(wav_name.to_string(), Value::Object(clips));
    Value::Object(root)
}
