//! resub-core: re-segmentation of chunk-timestamped ASR output into subtitle cues.
//!
//! Speech-recognition pipelines with word-level timestamps emit a stream of
//! small text chunks, each tagged with a `(start, end)` interval. This crate
//! regroups those chunks into subtitle cues that respect a character budget
//! per cue, re-joining words the recognizer split at hyphen boundaries.
//!
//! # Quick Start
//!
//! ```
//! use resub_core::split::Splitter;
//! use resub_core::types::Chunk;
//!
//! let chunks = vec![
//!     Chunk::new(" Hello", 0.0, 0.4),
//!     Chunk::new(" world", 0.4, 0.9),
//! ];
//!
//! let splitter = Splitter::new(20)?;
//! let cues = splitter.split(&chunks);
//!
//! assert_eq!(cues.len(), 1);
//! assert_eq!(cues[0].text, "Hello world");
//! # Ok::<(), resub_core::error::ConfigError>(())
//! ```

pub mod error;
pub mod split;
pub mod transcript;
pub mod types;
