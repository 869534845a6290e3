//! Integration tests for resub CLI.

use clap::Parser;
use resub::cli::{Cli, run_cli};
use std::path::PathBuf;

/// Write a transcript JSON into a fresh temp dir and return its path.
fn write_transcript(dir_name: &str, json: &str) -> PathBuf {
    let temp_dir = std::env::temp_dir().join(dir_name);

    // Clean up previous test run
    if temp_dir.exists() {
        std::fs::remove_dir_all(&temp_dir).ok();
    }
    std::fs::create_dir_all(&temp_dir).expect("failed to create temp dir");

    let path = temp_dir.join("talk.json");
    std::fs::write(&path, json).expect("failed to write transcript");
    path
}

#[test]
fn generates_srt_from_transcript() {
    let input = write_transcript(
        "resub-test-gen",
        r#"{
            "text": " Hello un -recognized world",
            "chunks": [
                {"timestamp": [0.0, 0.5], "text": " Hello"},
                {"timestamp": [0.5, 1.0], "text": " un"},
                {"timestamp": [1.0, 1.5], "text": " -recognized"},
                {"timestamp": [1.5, 2.0], "text": " world"}
            ]
        }"#,
    );
    let output = input.with_file_name("talk.en.srt");

    let cli = Cli::parse_from([
        "resub",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);

    run_cli(cli).expect("failed to generate subtitles");

    let srt = std::fs::read_to_string(&output).expect("srt file not written");

    assert!(srt.starts_with("1\n00:00:00,000 --> 00:00:02,000\n"));
    assert!(srt.contains("Hello un-recognized world"));
}

#[test]
fn defaults_output_to_input_with_srt_extension() {
    let input = write_transcript(
        "resub-test-default",
        r#"{"chunks": [{"timestamp": [0.0, 1.0], "text": " Hi"}]}"#,
    );

    let cli = Cli::parse_from(["resub", input.to_str().unwrap()]);

    run_cli(cli).expect("failed to generate subtitles");

    let srt_path = input.with_extension("srt");
    assert!(
        srt_path.exists(),
        "SRT file not found: {:?}",
        srt_path.display()
    );
}

#[test]
fn small_budget_splits_into_numbered_cues() {
    let input = write_transcript(
        "resub-test-split",
        r#"{
            "chunks": [
                {"timestamp": [0.0, 0.5], "text": "aaaa"},
                {"timestamp": [0.5, 1.0], "text": "bbbb"},
                {"timestamp": [1.0, 1.5], "text": "cccc"},
                {"timestamp": [1.5, 2.0], "text": "dddd"},
                {"timestamp": [2.0, 2.5], "text": "eeee"}
            ]
        }"#,
    );
    let output = input.with_file_name("talk.srt");

    let cli = Cli::parse_from([
        "resub",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--max-chars",
        "10",
    ]);

    run_cli(cli).expect("failed to generate subtitles");

    let srt = std::fs::read_to_string(&output).expect("srt file not written");

    assert!(srt.contains("1\n00:00:00,000 --> 00:00:01,000\naaaa bbbb"));
    assert!(srt.contains("2\n00:00:01,000 --> 00:00:02,500\ncccc dddd eeee"));
}

#[test]
fn rejects_malformed_transcript() {
    let input = write_transcript(
        "resub-test-malformed",
        r#"{
            "chunks": [
                {"timestamp": [1.0, 1.5], "text": " one"},
                {"timestamp": [0.2, 0.8], "text": " two"}
            ]
        }"#,
    );

    let cli = Cli::parse_from(["resub", input.to_str().unwrap()]);

    let err = run_cli(cli).expect_err("non-monotonic chunks should be rejected");

    assert!(format!("{err:#}").contains("timing validation"));
}
