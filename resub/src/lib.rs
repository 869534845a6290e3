//! resub: re-segment chunk-timestamped transcripts into SRT subtitles.

pub mod cap;
pub mod cli;
pub mod srt;
