//! Kerning-table resolution
//!
//! The font's raw kerning table is keyed by pairs of font-internal glyph codes,
//! packed into a single u32 (high 16 bits = first glyph code, low 16 bits =
//! second). The manifest is keyed by code points, so raw entries are resolved
//! through a reverse lookup over the exported glyph set. Entries referencing a
//! glyph that was not exported, and entries with a zero offset, are dropped.

use crate::glyph::Glyph;
use std::collections::{BTreeMap, HashMap};

/// Resolved kerning: first code point -> (second code point -> horizontal offset).
///
/// BTreeMap on both levels keeps the manifest output deterministic.
pub type KerningMap = BTreeMap<u32, BTreeMap<u32, i32>>;

/// Pack a glyph-code pair into the raw table's key form.
pub fn pack_pair(first: u16, second: u16) -> u32 {
    (first as u32) << 16 | second as u32
}

/// Unpack a raw table key into (first, second) glyph codes.
pub fn unpack_pair(key: u32) -> (u32, u32) {
    (key >> 16, key & 0xFFFF)
}

/// Resolve a raw kerning table against the exported glyph set.
pub fn aggregate(glyphs: &[Glyph], raw: &HashMap<u32, i32>) -> KerningMap {
    // Glyphs that were not exported have no entry, so their pairs drop out below.
    let code_points: HashMap<u32, u32> = glyphs
        .iter()
        .map(|g| (g.glyph_code, g.code_point))
        .collect();

    let mut kerning = KerningMap::new();
    for (&key, &offset) in raw {
        if offset == 0 {
            continue;
        }
        let (first, second) = unpack_pair(key);
        let (Some(&first_cp), Some(&second_cp)) = (code_points.get(&first), code_points.get(&second))
        else {
            continue;
        };
        kerning.entry(first_cp).or_default().insert(second_cp, offset);
    }
    kerning
}
