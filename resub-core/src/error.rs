//! Error types for resub-core organized by processing stage.

use thiserror::Error;

/// Segmentation pipeline error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration stage error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transcript loading stage error
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Segmentation configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Character budget cannot admit any text
    #[error("invalid max chars per cue: {got} (must be at least 1)")]
    InvalidMaxChars { got: usize },
}

/// Transcript loading and validation errors.
#[derive(Debug, Error)]
pub enum InputError {
    /// Chunk interval runs backwards
    #[error("chunk {index}: start {start}s is after end {end}s")]
    ReversedTimestamp { index: usize, start: f32, end: f32 },

    /// Chunk interval extends before time zero
    #[error("chunk {index}: negative timestamp ({start}s, {end}s)")]
    NegativeTimestamp { index: usize, start: f32, end: f32 },

    /// Chunk starts earlier than its predecessor
    #[error("chunk {index}: starts at {start}s, before previous chunk at {prev}s")]
    NonMonotonic { index: usize, start: f32, prev: f32 },

    /// IO error while reading the transcript file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Transcript JSON does not match the expected shape
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for resub-core operations.
pub type Result<T> = std::result::Result<T, Error>;

// Nested From implementations for automatic error conversion chains

// std::io::Error → InputError → Error
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Input(InputError::Io(e))
    }
}

// serde_json::Error → InputError → Error
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Input(InputError::Json(e))
    }
}
