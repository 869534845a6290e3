//! CLI argument definitions using clap.

use clap::Parser;
use eyre::Result;
use resub_core::split::DEFAULT_MAX_CHARS;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "resub")]
#[command(about = "Re-segment chunk-timestamped transcripts into SRT subtitles")]
#[command(version)]
pub struct Cli {
    /// Path to transcript JSON file with chunk timestamps
    pub path: PathBuf,

    /// Output SRT path (default: same as input with .srt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum characters per subtitle cue
    #[arg(long, default_value_t = DEFAULT_MAX_CHARS)]
    pub max_chars: usize,

    /// Print the first and last subtitles after writing
    #[arg(long)]
    pub preview: bool,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    crate::cap::execute(cli.try_into()?)
}
