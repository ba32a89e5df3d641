//! End-to-end packing run
//!
//! Scan -> decode -> concatenate -> write WAV -> write manifest. The WAV path is
//! the manifest output path with its extension rewritten to `.wav` (`sounds` ->
//! `sounds.wav`, `sfx.json` -> `sfx.wav`); the manifest itself goes to the output
//! path exactly as given. When no clip is accepted the WAV is skipped but the
//! manifest is still written, matching what downstream loaders expect.

use crate::clip::{AudioClip, ClipFormat};
use crate::concat::{self, Concatenation};
use crate::{manifest, scanner};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct PackOptions {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub silence_secs: f64,
}

/// Packed-WAV path for a given manifest output path.
pub fn wav_output(output: &Path) -> PathBuf {
    let mut wav = output.to_path_buf();
    wav.set_extension("wav");
    wav
}

/// Run one packing batch.
pub fn run(opts: &PackOptions) -> Result<()> {
    let wav_path = wav_output(&opts.output);
    if let Some(parent) = wav_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
        }
    }

    let files = scanner::scan(&opts.input_dir, &wav_path)?;
    tracing::info!("Found {} WAV files in {:?}", files.len(), opts.input_dir);

    let mut clips = Vec::with_capacity(files.len());
    for file in files {
        let clip = AudioClip::decode_wav(&file.path)?;
        clips.push((file.name, clip));
    }

    let concat = concat::concatenate(clips, opts.silence_secs);
    let entries = concat.entries.clone();

    match concat.format {
        Some(format) if !entries.is_empty() => {
            let frames = concat.total_frames();
            write_wav(&wav_path, format, concat)?;
            tracing::info!(
                "Wrote {:?}: {} clips, {} frames ({:.3}s)",
                wav_path,
                entries.len(),
                frames,
                frames as f64 / format.sample_rate as f64
            );
        }
        _ => tracing::warn!("No clips accepted, skipping audio output"),
    }

    let wav_name = wav_path
        .file_name()
        .with_context(|| format!("Invalid output path: {:?}", wav_path))?
        .to_string_lossy()
        .into_owned();
    forge_common::write_pretty(&opts.output, &manifest::sprite_manifest(&wav_name, &entries))?;
    tracing::info!("Wrote manifest {:?}", opts.output);
    Ok(())
}

fn write_wav(path: &Path, format: ClipFormat, concat: Concatenation) -> Result<()> {
    let spec = hound::WavSpec {
        channels: format.channels,
        sample_rate: format.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create output WAV: {:?}", path))?;
    for sample in concat.into_samples() {
        writer.write_sample(sample)?;
    }
    writer
        .finalize()
        .with_context(|| format!("Failed to finalize output WAV: {:?}", path))?;
    Ok(())
}
