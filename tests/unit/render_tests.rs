/*!
 * Tests for document rendering
 */

use ytscribe::cue::Cue;
use ytscribe::transcript::render::render_video_info;
use ytscribe::transcript::{OutputFormat, RenderOptions, TranscriptDocument};
use ytscribe::video_ref::VideoRef;

use crate::common;

const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn options(format: OutputFormat, timestamps: bool) -> RenderOptions {
    RenderOptions {
        timestamps,
        format,
        section_window_secs: 120,
        sentences_per_paragraph: 4,
    }
}

/// Test that plain rendering of one cue reproduces its text exactly
#[test]
fn test_compose_withSingleCuePlain_shouldRoundTripText() {
    let cues = vec![common::cue("Exactly this text.", 0, 1000)];
    let doc = TranscriptDocument::compose(&cues, URL, &options(OutputFormat::Plain, false));
    assert_eq!(doc.into_text(), "Exactly this text.");
}

/// Test plain rendering joins cue texts with single spaces
#[test]
fn test_compose_withPlainFormat_shouldJoinWithSingleSpaces() {
    let cues = common::sample_cues();
    let doc = TranscriptDocument::compose(&cues, URL, &options(OutputFormat::Plain, false));

    let expected = cues
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(doc.into_text(), expected);
}

/// Test timestamped plain rendering prefixes each cue
#[test]
fn test_compose_withPlainTimestamps_shouldPrefixEachCue() {
    let cues = vec![
        common::cue("First", 0, 1000),
        common::cue("Second", 65_000, 1000),
    ];
    let doc = TranscriptDocument::compose(&cues, URL, &options(OutputFormat::Plain, true));
    assert_eq!(doc.into_text(), "[0:00] First [1:05] Second");
}

/// Test structured timestamped rendering: header plus numbered ranged sections
#[test]
fn test_compose_withStructuredTimestamps_shouldRenderHeaderAndSections() {
    let cues = vec![
        common::cue("one", 0, 5000),
        common::cue("two", 5000, 5000),
        common::cue("three", 130_000, 5000),
    ];
    let doc = TranscriptDocument::compose(&cues, URL, &options(OutputFormat::Structured, true));
    let text = doc.into_text();

    assert!(text.starts_with("Video Transcript\n"));
    assert!(text.contains(&format!("Source: {}", URL)));
    assert!(text.contains("Duration: 2:15"));
    assert!(text.contains("Segments: 3"));
    assert!(text.contains("[1] 0:00 - 2:10\none two"));
    assert!(text.contains("[2] 2:10 - 2:15\nthree"));
}

/// Test structured plain rendering: header plus numbered paragraphs
#[test]
fn test_compose_withStructuredParagraphs_shouldRenderNumberedBlocks() {
    let cues = vec![
        common::cue("One. Two. Three. Four.", 0, 1000),
        common::cue("Five.", 1000, 1000),
    ];
    let doc = TranscriptDocument::compose(&cues, URL, &options(OutputFormat::Structured, false));
    let text = doc.into_text();

    assert!(text.contains("[1]\nOne. Two. Three. Four."));
    assert!(text.contains("[2]\nFive."));
}

/// Test that rendering is a pure function: identical inputs, identical bytes
#[test]
fn test_compose_withRepeatedCall_shouldBeByteIdentical() {
    let cues = common::sample_cues();
    for format in [OutputFormat::Plain, OutputFormat::Structured] {
        for timestamps in [false, true] {
            let opts = options(format, timestamps);
            let first = TranscriptDocument::compose(&cues, URL, &opts).into_text();
            let second = TranscriptDocument::compose(&cues, URL, &opts).into_text();
            assert_eq!(first, second);
        }
    }
}

/// Test the fixed-field info summary
#[test]
fn test_render_video_info_withCues_shouldFillAllFields() {
    let video = VideoRef::new("dQw4w9WgXcQ");
    let cues = vec![
        common::cue("Hello world test", 0, 2000),
        common::cue("This is another test", 2000, 2000),
        common::cue("Final segment here", 4000, 2000),
    ];

    let info = render_video_info(&video, &cues, true);
    let lines: Vec<&str> = info.lines().collect();

    assert_eq!(lines[0], "Video ID: dQw4w9WgXcQ");
    assert_eq!(lines[1], format!("URL: {}", URL));
    assert_eq!(lines[2], "Duration: 0:06");
    assert_eq!(lines[3], "Segments: 3");
    assert_eq!(lines[4], "Words: 10");
    assert_eq!(lines[5], "Captions available: yes");
}

/// Test the info summary with no captions
#[test]
fn test_render_video_info_withNoCues_shouldReportUnavailable() {
    let video = VideoRef::new("dQw4w9WgXcQ");
    let cues: Vec<Cue> = Vec::new();

    let info = render_video_info(&video, &cues, false);
    assert!(info.contains("Duration: 0:00"));
    assert!(info.contains("Segments: 0"));
    assert!(info.contains("Captions available: no"));
}
