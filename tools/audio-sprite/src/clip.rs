//! Clip decode, format conversion, and silence synthesis
//!
//! Every WAV source is normalized to interleaved i16 PCM at decode time. The
//! packer then converts clips to the reference format (the first clip's) where it
//! can: mono/stereo channel mixing and linear-interpolation resampling. Anything
//! else is a [`ConvertError`], which the caller treats as "skip this clip".

use anyhow::{Context, Result, bail};
use std::path::Path;

/// Format descriptor of a decoded clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

/// A decoded PCM clip, interleaved i16.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub format: ClipFormat,
    pub samples: Vec<i16>,
}

/// Conversion to the reference format is unsupported; the clip is skipped.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("unsupported channel count {0} (only mono and stereo can be converted)")]
    UnsupportedChannels(u16),
}

impl AudioClip {
    /// Number of frames (samples per channel).
    pub fn frame_len(&self) -> u64 {
        self.samples.len() as u64 / self.format.channels as u64
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frame_len() as f64 / self.format.sample_rate as f64
    }

    /// A zero-valued clip of `seconds` in `format`.
    ///
    /// The frame count truncates (`sample_rate * seconds` floored), matching the
    /// timing bookkeeping in the concatenator.
    pub fn silence(format: ClipFormat, seconds: f64) -> AudioClip {
        let frames = (format.sample_rate as f64 * seconds) as u64;
        AudioClip {
            format,
            samples: vec![0; (frames * format.channels as u64) as usize],
        }
    }

    /// Decode a WAV file, normalizing the sample type to i16.
    pub fn decode_wav(path: &Path) -> Result<AudioClip> {
        let mut reader =
            hound::WavReader::open(path).with_context(|| format!("Failed to load WAV: {:?}", path))?;
        let spec = reader.spec();

        let samples: Vec<i16> = match spec.sample_format {
            hound::SampleFormat::Int => match spec.bits_per_sample {
                16 => reader
                    .samples::<i16>()
                    .collect::<Result<_, _>>()
                    .with_context(|| format!("Failed to read samples: {:?}", path))?,
                8 => reader
                    .samples::<i8>()
                    .map(|s| s.map(|s| (s as i16) << 8))
                    .collect::<Result<_, _>>()
                    .with_context(|| format!("Failed to read samples: {:?}", path))?,
                24 | 32 => reader
                    .samples::<i32>()
                    .map(|s| s.map(|s| (s >> (spec.bits_per_sample - 16)) as i16))
                    .collect::<Result<_, _>>()
                    .with_context(|| format!("Failed to read samples: {:?}", path))?,
                bits => bail!("Unsupported bit depth {} in {:?}", bits, path),
            },
            hound::SampleFormat::Float => reader
                .samples::<f32>()
                .map(|s| s.map(|s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16))
                .collect::<Result<_, _>>()
                .with_context(|| format!("Failed to read samples: {:?}", path))?,
        };

        Ok(AudioClip {
            format: ClipFormat {
                sample_rate: spec.sample_rate,
                channels: spec.channels,
            },
            samples,
        })
    }

    /// Convert this clip to `target`, or report why it cannot be done.
    pub fn convert(self, target: ClipFormat) -> Result<AudioClip, ConvertError> {
        if self.format == target {
            return Ok(self);
        }
        if self.format.channels == 0 || self.format.channels > 2 {
            return Err(ConvertError::UnsupportedChannels(self.format.channels));
        }
        if target.channels == 0 || target.channels > 2 {
            return Err(ConvertError::UnsupportedChannels(target.channels));
        }

        let channels: Vec<Vec<i16>> = deinterleave(&self.samples, self.format.channels);
        let mixed: Vec<Vec<i16>> = match (self.format.channels, target.channels) {
            (2, 1) => vec![
                channels[0]
                    .iter()
                    .zip(&channels[1])
                    .map(|(&l, &r)| ((l as i32 + r as i32) / 2) as i16)
                    .collect(),
            ],
            (1, 2) => vec![channels[0].clone(), channels[0].clone()],
            _ => channels,
        };

        let resampled: Vec<Vec<i16>> = mixed
            .into_iter()
            .map(|ch| resample(&ch, self.format.sample_rate, target.sample_rate))
            .collect();

        Ok(AudioClip {
            format: target,
            samples: interleave(&resampled),
        })
    }
}

fn deinterleave(samples: &[i16], channels: u16) -> Vec<Vec<i16>> {
    let channels = channels as usize;
    let mut out = vec![Vec::with_capacity(samples.len() / channels); channels];
    for frame in samples.chunks_exact(channels) {
        for (ch, &sample) in frame.iter().enumerate() {
            out[ch].push(sample);
        }
    }
    out
}

fn interleave(channels: &[Vec<i16>]) -> Vec<i16> {
    let frames = channels.first().map_or(0, |c| c.len());
    let mut out = Vec::with_capacity(frames * channels.len());
    for i in 0..frames {
        for ch in channels {
            out.push(ch[i]);
        }
    }
    out
}

/// Linear-interpolation resampling of one channel.
fn resample(samples: &[i16], src_rate: u32, dst_rate: u32) -> Vec<i16> {
    if src_rate == dst_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = src_rate as f64 / dst_rate as f64;
    let output_len = (samples.len() as f64 / ratio) as usize;
    let mut output = Vec::with_capacity(output_len);

    for i in 0..output_len {
        let src_pos = i as f64 * ratio;
        let src_idx = src_pos as usize;
        let frac = src_pos - src_idx as f64;

        let sample = if src_idx + 1 < samples.len() {
            let a = samples[src_idx] as f64;
            let b = samples[src_idx + 1] as f64;
            (a + (b - a) * frac) as i16
        } else {
            samples[src_idx.min(samples.len() - 1)]
        };

        output.push(sample);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONO: ClipFormat = ClipFormat {
        sample_rate: 22050,
        channels: 1,
    };
    const STEREO: ClipFormat = ClipFormat {
        sample_rate: 22050,
        channels: 2,
    };

    #[test]
    fn silence_frame_count_truncates() {
        let clip = AudioClip::silence(MONO, 0.2);
        assert_eq!(clip.frame_len(), 4410);
        // 22050 * 0.333 = 7342.65, truncated not rounded
        assert_eq!(AudioClip::silence(MONO, 0.333).frame_len(), 7342);
        assert!(clip.samples.iter().all(|&s| s == 0));
    }

    #[test]
    fn silence_matches_reference_channels() {
        let clip = AudioClip::silence(STEREO, 0.5);
        assert_eq!(clip.frame_len(), 11025);
        assert_eq!(clip.samples.len(), 22050);
    }

    #[test]
    fn stereo_downmix_averages() {
        let clip = AudioClip {
            format: STEREO,
            samples: vec![100, 200, -100, 100],
        };
        let mono = clip.convert(MONO).unwrap();
        assert_eq!(mono.samples, vec![150, 0]);
    }

    #[test]
    fn mono_upmix_duplicates() {
        let clip = AudioClip {
            format: MONO,
            samples: vec![7, -7],
        };
        let stereo = clip.convert(STEREO).unwrap();
        assert_eq!(stereo.samples, vec![7, 7, -7, -7]);
    }

    #[test]
    fn resample_halves_length() {
        let clip = AudioClip {
            format: ClipFormat {
                sample_rate: 44100,
                channels: 1,
            },
            samples: vec![0; 44100],
        };
        let out = clip.convert(MONO).unwrap();
        assert_eq!(out.frame_len(), 22050);
        assert_eq!(out.format, MONO);
    }

    #[test]
    fn too_many_channels_is_unsupported() {
        let clip = AudioClip {
            format: ClipFormat {
                sample_rate: 22050,
                channels: 4,
            },
            samples: vec![0; 8],
        };
        assert!(matches!(
            clip.convert(MONO),
            Err(ConvertError::UnsupportedChannels(4))
        ));
    }

    #[test]
    fn decode_int16_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for s in [0i16, 1000, -1000, 32000] {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();

        let clip = AudioClip::decode_wav(&path).unwrap();
        assert_eq!(clip.format, MONO);
        assert_eq!(clip.samples, vec![0, 1000, -1000, 32000]);
    }

    #[test]
    fn decode_float_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for s in [0.0f32, 0.5, -1.0] {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();

        let clip = AudioClip::decode_wav(&path).unwrap();
        assert_eq!(clip.samples[0], 0);
        assert_eq!(clip.samples[1], (0.5 * i16::MAX as f32) as i16);
        assert_eq!(clip.samples[2], -i16::MAX);
    }
}
