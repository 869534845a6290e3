//! Core types for resub-core

use serde::{Deserialize, Serialize};

/// Timestamped text chunk as emitted by a speech-recognition pipeline.
///
/// `timestamp` is `(start, end)` in seconds, matching the wire shape of
/// word-granular transcription output (`"timestamp": [1.2, 1.9]`). The text
/// usually carries the recognizer's whitespace padding; a leading `-` marks
/// the second half of a word split at a hyphen boundary.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Chunk {
    /// Recognized text, possibly whitespace-padded
    pub text: String,
    /// (start, end) in seconds
    pub timestamp: (f32, f32),
}

impl Chunk {
    /// Create a chunk from text and its time interval in seconds.
    pub fn new(text: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            text: text.into(),
            timestamp: (start, end),
        }
    }

    /// Start time in seconds.
    pub fn start(&self) -> f32 {
        self.timestamp.0
    }

    /// End time in seconds.
    pub fn end(&self) -> f32 {
        self.timestamp.1
    }
}

/// Subtitle cue: a text span paired with a display interval.
#[derive(Clone, Debug)]
pub struct Cue {
    /// Cue body, ready to be written verbatim
    pub text: String,
    /// Display start in seconds
    pub start: f32,
    /// Display end in seconds
    pub end: f32,
}

impl Cue {
    /// Create a cue from text and its display interval in seconds.
    pub fn new(text: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}
