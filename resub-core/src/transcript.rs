//! Transcript JSON ingestion and timing validation.

use crate::error::{InputError, Result};
use crate::types::Chunk;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Chunk-timestamped transcription result, as serialized by ASR pipelines.
///
/// Wire shape:
///
/// ```json
/// {
///   "text": " Hello world",
///   "chunks": [
///     {"timestamp": [0.0, 0.4], "text": " Hello"},
///     {"timestamp": [0.4, 0.9], "text": " world"}
///   ]
/// }
/// ```
///
/// `text` is the full unsegmented transcription; not every pipeline includes
/// it.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Transcript {
    /// Full transcription text, if the pipeline provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Timestamped chunks in recognition order
    pub chunks: Vec<Chunk>,
}

impl Transcript {
    /// Parse a transcript from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let transcript: Self = serde_json::from_str(raw)?;

        tracing::debug!(chunks = transcript.chunks.len(), "transcript parsed");

        Ok(transcript)
    }

    /// Read and parse a transcript JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Check chunk timing without reordering or dropping anything.
    ///
    /// Rejects intervals that run backwards, extend before time zero, or
    /// start earlier than the preceding chunk. The segmenter itself assumes
    /// monotonic input; callers feeding untrusted files should validate
    /// first.
    pub fn validate(&self) -> Result<()> {
        let mut prev_start = 0.0_f32;

        for (index, chunk) in self.chunks.iter().enumerate() {
            let (start, end) = chunk.timestamp;

            if start < 0.0 || end < 0.0 {
                return Err(InputError::NegativeTimestamp { index, start, end }.into());
            }
            if start > end {
                return Err(InputError::ReversedTimestamp { index, start, end }.into());
            }
            if start < prev_start {
                return Err(InputError::NonMonotonic {
                    index,
                    start,
                    prev: prev_start,
                }
                .into());
            }

            prev_start = start;
        }

        Ok(())
    }
}
