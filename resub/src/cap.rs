//! Caption generation - transcript JSON in, SRT file out.

use crate::cli::Cli;
use crate::srt;
use color_eyre::Section;
use eyre::{Context, Result};
use resub_core::split::Splitter;
use resub_core::transcript::Transcript;
use std::path::PathBuf;
use std::time::Instant;

/// Resolved configuration for caption generation.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub splitter: Splitter,
    pub preview: bool,
}

impl TryFrom<Cli> for Config {
    type Error = eyre::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let splitter = Splitter::new(cli.max_chars).wrap_err("invalid --max-chars")?;

        Ok(Self {
            path: cli.path,
            output: cli.output,
            splitter,
            preview: cli.preview,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    // Resolve output path
    let output = config
        .output
        .unwrap_or_else(|| config.path.with_extension("srt"));

    tracing::info!(
        input = ?config.path.display(),
        output = ?output.display(),
        max_chars = config.splitter.max_chars(),
        "generating subtitles"
    );

    let transcript = Transcript::from_file(&config.path)
        .wrap_err_with(|| format!("failed to load transcript: {:?}", config.path.display()))
        .suggestion(
            "expected JSON with a \"chunks\" array of {\"timestamp\": [start, end], \"text\"} entries",
        )?;

    transcript
        .validate()
        .wrap_err("transcript failed timing validation")?;

    let s = Instant::now();

    let cues = config.splitter.split(&transcript.chunks);

    let d = s.elapsed();
    tracing::info!(
        chunks = transcript.chunks.len(),
        cues = cues.len(),
        duration = %format_secs(d.as_secs_f32()),
        "segmentation completed"
    );

    let subtitles = srt::to_subtitles(&cues);

    tracing::info!(path = ?output.display(), "write srt file");

    // Write to file
    std::fs::write(&output, srt::display_subtitles(&subtitles))
        .wrap_err_with(|| format!("failed to write srt: {:?}", output.display()))?;

    // Display preview to stdout
    if config.preview {
        print!("{}", srt::preview_subtitles(&subtitles, 3, 3));
    }

    Ok(())
}

/// Format seconds as a string with two decimal places.
fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}
