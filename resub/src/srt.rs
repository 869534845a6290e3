//! SRT subtitle conversion utilities.
//!
//! Converts cues with display intervals into SRT subtitle format.

use resub_core::types::Cue;
use srtlib::{Subtitle, Timestamp};

/// Convert cues to SRT subtitles, numbered from 1.
pub fn to_subtitles(cues: &[Cue]) -> Vec<Subtitle> {
    cues.iter()
        .enumerate()
        .map(|(i, cue)| {
            Subtitle::new(
                i + 1,
                secs_to_timestamp(cue.start),
                secs_to_timestamp(cue.end),
                cue.text.clone(),
            )
        })
        .collect()
}

/// Convert seconds to SRT Timestamp
fn secs_to_timestamp(secs: f32) -> Timestamp {
    Timestamp::from_milliseconds((secs * 1000.0) as u32)
}

/// Format subtitles as SRT file content.
pub fn display_subtitles(subtitles: &[Subtitle]) -> String {
    subtitles
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Display preview of subtitles (first and last entries).
pub fn preview_subtitles(subtitles: &[Subtitle], head_count: usize, tail_count: usize) -> String {
    let total = subtitles.len();

    if total <= head_count + tail_count {
        display_subtitles(subtitles)
    } else {
        let mut out = Vec::new();
        out.extend(subtitles[0..head_count].iter().map(|s| s.to_string()));
        out.push("...".to_string());
        out.extend(
            subtitles[(total - tail_count)..total]
                .iter()
                .map(|s| s.to_string()),
        );
        out.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_cues_to_subtitles() {
        let cues = vec![
            Cue::new("Hello world.", 0.0, 1.1),
            Cue::new("How are you?", 1.5, 3.1),
        ];

        let subtitles = to_subtitles(&cues);

        assert_eq!(subtitles.len(), 2);
        assert_eq!(subtitles[0].text, "Hello world.");
        assert_eq!(subtitles[1].text, "How are you?");
    }

    #[test]
    fn handles_empty_cues() {
        let cues: Vec<Cue> = vec![];
        let subtitles = to_subtitles(&cues);
        assert!(subtitles.is_empty());
    }

    #[test]
    fn renders_millisecond_timecodes() {
        let cues = vec![Cue::new("Hi", 1.5, 2.75)];

        let rendered = display_subtitles(&to_subtitles(&cues));

        assert!(rendered.contains("00:00:01,500 --> 00:00:02,750"));
    }

    #[test]
    fn preview_elides_middle_entries() {
        let cues: Vec<Cue> = (0..8)
            .map(|i| Cue::new(format!("line {i}"), i as f32, i as f32 + 0.9))
            .collect();

        let preview = preview_subtitles(&to_subtitles(&cues), 2, 2);

        assert!(preview.contains("line 0"));
        assert!(preview.contains("\n\n...\n\n"));
        assert!(preview.contains("line 7"));
        assert!(!preview.contains("line 3"));
    }

    #[test]
    fn preview_shows_everything_when_short() {
        let cues = vec![Cue::new("only", 0.0, 1.0)];

        let subtitles = to_subtitles(&cues);
        let preview = preview_subtitles(&subtitles, 3, 3);

        assert_eq!(preview, display_subtitles(&subtitles));
    }
}
