//! audio-sprite - packs a directory of WAV clips into one audio sprite
//!
//! Concatenates the clips with a configurable silence gap between them, writes
//! the packed WAV, and emits a JSON manifest of per-clip start/end times.

use audio_sprite::pack::{PackOptions, run};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status for bad or missing command-line arguments.
const USAGE_EXIT: u8 = 3;

#[derive(Parser)]
#[command(name = "audio-sprite")]
#[command(about = "Packs a directory of WAV clips into one audio sprite + timing manifest")]
#[command(version)]
struct Cli {
    /// Input directory, scanned recursively for .wav files
    #[arg(short, long)]
    input: PathBuf,

    /// Output manifest file; the packed WAV lands beside it as <output>.wav
    #[arg(short, long, default_value = "sounds")]
    output: PathBuf,

    /// Silence gap between clips, in seconds
    #[arg(short, long, default_value_t = 0.2)]
    silence: f64,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Help exits 0; any usage error exits 3 with nothing written.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(USAGE_EXIT);
        }
    };

    let opts = PackOptions {
        input_dir: cli.input,
        output: cli.output,
        silence_secs: cli.silence,
    };
    if let Err(err) = run(&opts) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
