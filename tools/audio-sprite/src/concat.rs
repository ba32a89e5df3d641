//! Stream concatenation and timing bookkeeping
//!
//! Builds one continuous sample stream from the accepted clips with a silence
//! gap between each pair, and records per-clip start/end times in lock-step.
//! Times are truncated to milliseconds (floored, never rounded). The trailing
//! gap appended after the last clip is removed before the stream is read, so
//! silence only ever sits strictly between clips.

use crate::clip::{AudioClip, ClipFormat};

/// One manifest entry: clip name and its window in the packed stream, seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteEntry {
    pub name: String,
    pub start: f64,
    pub end: f64,
}

/// Result of concatenation: timing entries plus the pending sample stream.
pub struct Concatenation {
    /// Reference format (first decoded clip), None when there were no clips.
    pub format: Option<ClipFormat>,
    /// Accepted clips in order, with their millisecond-truncated windows.
    pub entries: Vec<SpriteEntry>,
    streams: Vec<AudioClip>,
}

impl Concatenation {
    /// Total frames the packed stream will contain.
    pub fn total_frames(&self) -> u64 {
        self.streams.iter().map(|c| c.frame_len()).sum()
    }

    /// Consume into the lazy sample stream. Single-pass, not restartable.
    pub fn into_samples(self) -> ClipChain {
        ClipChain {
            clips: self.streams.into_iter(),
            current: Vec::new().into_iter(),
        }
    }
}

/// Concatenate decoded clips with `silence_secs` gaps between them.
///
/// The first clip fixes the reference format; later clips that differ are
/// converted where possible, and skipped with a warning where not. Skipped
/// clips appear in neither the timing entries nor the stream.
pub fn concatenate(clips: Vec<(String, AudioClip)>, silence_secs: f64) -> Concatenation {
    let mut format: Option<ClipFormat> = None;
    let mut streams = Vec::new();
    let mut entries = Vec::new();
    let mut offset = 0.0f64;

    for (name, clip) in clips {
        let reference = *format.get_or_insert(clip.format);
        let silence = AudioClip::silence(reference, silence_secs);
        let clip = match clip.convert(reference) {
            Ok(clip) => clip,
            Err(err) => {
                tracing::warn!("Skipping '{}': {}", name, err);
                continue;
            }
        };

        let start = truncate_ms(offset);
        offset += clip.frame_len() as f64 / reference.sample_rate as f64;
        let end = truncate_ms(offset);
        entries.push(SpriteEntry { name, start, end });

        offset += silence.frame_len() as f64 / reference.sample_rate as f64;
        streams.push(clip);
        streams.push(silence);
    }

    // Gaps sit between clips only; drop the one trailing the last clip.
    streams.pop();

    Concatenation {
        format,
        entries,
        streams,
    }
}

/// Floor to whole milliseconds.
fn truncate_ms(secs: f64) -> f64 {
    (secs * 1000.0).floor() / 1000.0
}

/// Lazy chain over the packed clips' samples.
///
/// Advances to the next clip when the current one is exhausted; finite and
/// single-pass. Underlying buffers are dropped as each clip is consumed.
pub struct ClipChain {
    clips: std::vec::IntoIter<AudioClip>,
    current: std::vec::IntoIter<i16>,
}

impl Iterator for ClipChain {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        loop {
            if let Some(sample) = self.current.next() {
                return Some(sample);
            }
            match self.clips.next() {
                Some(clip) => self.current = clip.samples.into_iter(),
                None => return None,
            }
        }
    }
}
