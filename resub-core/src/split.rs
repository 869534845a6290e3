//! Regroups timestamped chunks into length-bounded subtitle cues

use crate::error::ConfigError;
use crate::types::{Chunk, Cue};

/// Default character budget per cue, tuned for single-line subtitles.
pub const DEFAULT_MAX_CHARS: usize = 47;

/// Cue segmentation configuration.
///
/// Greedily packs chunks into cues until the character budget is spent,
/// re-joining words that recognition split at a hyphen boundary. The budget
/// is soft in exactly one direction: a hyphen-continuation is always glued
/// onto the cue that holds the first half of its word, even when that
/// overflows the budget, so a word is never torn across two cues.
#[derive(Clone, Copy, Debug)]
pub struct Splitter {
    /// Maximum characters per cue
    max_chars: usize,
}

impl Default for Splitter {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl Splitter {
    /// Create a splitter with the given character budget per cue.
    ///
    /// A budget of zero admits no text and is rejected.
    pub fn new(max_chars: usize) -> Result<Self, ConfigError> {
        if max_chars == 0 {
            return Err(ConfigError::InvalidMaxChars { got: max_chars });
        }

        Ok(Self { max_chars })
    }

    /// Character budget per cue.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Segment chunks into subtitle cues.
    ///
    /// Single forward pass over the chunks. Each cue starts at the end time
    /// of the chunk preceding it (`0.0` for the first cue) and ends at the
    /// end time of its last chunk, so consecutive cues tile the timeline
    /// without gaps.
    ///
    /// Length accounting is approximate: admission compares the raw chunk
    /// text against the budget, the running total counts stripped tokens,
    /// and neither includes the joining spaces, so a rendered cue may run
    /// slightly past the budget. Split boundaries are stable against this
    /// accounting, not against the rendered text length.
    pub fn split(&self, chunks: &[Chunk]) -> Vec<Cue> {
        let mut cues = Vec::new();
        let mut idx = 0;

        while idx < chunks.len() {
            let first = idx;
            let start = if idx == 0 { 0.0 } else { chunks[idx - 1].end() };
            let mut tokens: Vec<String> = Vec::new();
            let mut length = 0;

            while idx < chunks.len() && length + char_count(&chunks[idx].text) < self.max_chars {
                let token = chunks[idx].text.trim();
                push_token(&mut tokens, token);
                length += char_count(token);
                idx += 1;
            }

            // a continuation completes the word at the end of this cue, so it
            // is merged here even though the budget is already spent
            if idx < chunks.len() && chunks[idx].text.starts_with('-') {
                push_token(&mut tokens, chunks[idx].text.trim());
                idx += 1;
            }

            // absorb a lone trailing chunk instead of emitting it as a
            // single-word final cue
            if idx == chunks.len() - 1 {
                tokens.push(chunks[idx].text.trim().to_string());
                idx += 1;
            }

            // a chunk whose raw text alone fills the budget is admitted by
            // none of the checks above; take it as a one-chunk cue so the
            // scan always advances
            if idx == first {
                tokens.push(chunks[idx].text.trim().to_string());
                idx += 1;
            }

            let end = chunks[idx - 1].end();
            cues.push(Cue::new(tokens.join(" "), start, end));
        }

        cues
    }
}

/// Append a token, gluing a `-`-led continuation onto the previous token.
///
/// A continuation with no previous token keeps its hyphen and stands alone.
fn push_token(tokens: &mut Vec<String>, token: &str) {
    match token.starts_with('-').then(|| tokens.pop()).flatten() {
        Some(last) => tokens.push(last + token),
        None => tokens.push(token.to_string()),
    }
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}
