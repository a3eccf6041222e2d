/*!
 * Integration tests for the full transcript request workflow
 */

use std::sync::Arc;
use std::sync::atomic::Ordering;

use ytscribe::app_config::Config;
use ytscribe::app_controller::{Controller, TranscriptRequest};
use ytscribe::errors::TranscriptError;
use ytscribe::providers::mock::MockProvider;
use ytscribe::transcript::OutputFormat;

use crate::common;

const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn controller_with(provider: MockProvider) -> Controller {
    Controller::with_provider(Config::default(), Arc::new(provider))
}

/// Test the full structured+timestamps flow against mocked captions
#[test]
fn test_get_transcript_withStructuredTimestamps_shouldRenderSections() {
    common::init_test_logging();

    let provider = MockProvider::working().with_cues(vec![
        common::raw("one", 0.0, 5.0),
        common::raw("two", 5.0, 5.0),
        common::raw("three", 130.0, 5.0),
        common::raw("four", 135.0, 5.0),
    ]);
    let controller = controller_with(provider);

    let mut request = TranscriptRequest::new(URL);
    request.include_timestamps = true;

    let text = tokio_test::block_on(controller.get_transcript(&request)).unwrap();

    assert!(text.starts_with("Video Transcript\n"));
    assert!(text.contains(&format!("Source: {}", URL)));
    assert!(text.contains("[1] 0:00 - 2:10\none two"));
    assert!(text.contains("[2] 2:10 - 2:20\nthree four"));
}

/// Test that plain format without timestamps reproduces cue text exactly
#[test]
fn test_get_transcript_withPlainFormat_shouldRoundTripCueText() {
    let provider = MockProvider::working().with_cues(vec![common::raw("Just this.", 0.0, 2.0)]);
    let controller = controller_with(provider);

    let mut request = TranscriptRequest::new(URL);
    request.format = OutputFormat::Plain;

    let text = tokio_test::block_on(controller.get_transcript(&request)).unwrap();
    assert_eq!(text, "Just this.");
}

/// Test the structured paragraph flow: five sentences, two numbered blocks
#[test]
fn test_get_transcript_withStructuredParagraphs_shouldGroupSentences() {
    let provider = MockProvider::working().with_cues(vec![
        common::raw("First. Second. Third.", 0.0, 5.0),
        common::raw("Fourth. Fifth.", 5.0, 5.0),
    ]);
    let controller = controller_with(provider);

    let request = TranscriptRequest::new(URL);
    let text = tokio_test::block_on(controller.get_transcript(&request)).unwrap();

    assert!(text.contains("[1]\nFirst. Second. Third. Fourth."));
    assert!(text.contains("[2]\nFifth."));
}

/// Test that an invalid URL fails before any fetch is attempted
#[test]
fn test_get_transcript_withInvalidUrl_shouldFailWithoutFetching() {
    let provider = MockProvider::working();
    let counter = provider.call_counter();
    let controller = controller_with(provider);

    let request = TranscriptRequest::new("https://example.com/not-a-video");
    let err = tokio_test::block_on(controller.get_transcript(&request)).unwrap_err();

    assert!(matches!(err, TranscriptError::InvalidUrl(_)));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

/// Test that an empty cue list maps to NoTranscript
#[test]
fn test_get_transcript_withEmptyCueList_shouldReturnNoTranscript() {
    let controller = controller_with(MockProvider::empty());

    let request = TranscriptRequest::new(URL);
    let err = tokio_test::block_on(controller.get_transcript(&request)).unwrap_err();
    assert!(matches!(err, TranscriptError::NoTranscript(_)));
}

/// Test that tagged provider failures surface in the taxonomy
#[test]
fn test_get_transcript_withUnavailableVideo_shouldReturnVideoUnavailable() {
    let controller = controller_with(MockProvider::unavailable());

    let request = TranscriptRequest::new(URL);
    let err = tokio_test::block_on(controller.get_transcript(&request)).unwrap_err();
    assert!(matches!(err, TranscriptError::VideoUnavailable(_)));
}

/// Test that free-text provider failures classify by substring
#[test]
fn test_get_transcript_withFreeTextFailure_shouldClassifyMessage() {
    let controller =
        controller_with(MockProvider::failing("Transcript is disabled on this video"));

    let request = TranscriptRequest::new(URL);
    let err = tokio_test::block_on(controller.get_transcript(&request)).unwrap_err();
    assert!(matches!(err, TranscriptError::NoTranscript(_)));

    let controller = controller_with(MockProvider::failing("ECONNRESET"));
    let err = tokio_test::block_on(controller.get_transcript(&request)).unwrap_err();
    match err {
        TranscriptError::UnknownFetchFailure(msg) => assert_eq!(msg, "ECONNRESET"),
        other => panic!("expected UnknownFetchFailure, got {:?}", other),
    }
}

/// Test that provider diagnostics never leak into the rendered artifact
#[test]
fn test_get_transcript_withProviderDiagnostics_shouldKeepOutputClean() {
    let provider = MockProvider::working()
        .with_cues(vec![common::raw("Clean text only.", 0.0, 2.0)])
        .with_diagnostics(vec!["consent redirect followed".to_string()]);
    let controller = controller_with(provider);

    let mut request = TranscriptRequest::new(URL);
    request.format = OutputFormat::Plain;

    let text = tokio_test::block_on(controller.get_transcript(&request)).unwrap();
    assert_eq!(text, "Clean text only.");
}

/// Test that out-of-order cues are normalized before grouping
#[test]
fn test_get_transcript_withOutOfOrderCues_shouldSortBeforeRendering() {
    let provider = MockProvider::working().with_cues(vec![
        common::raw("second", 5.0, 2.0),
        common::raw("first", 0.0, 2.0),
    ]);
    let controller = controller_with(provider);

    let mut request = TranscriptRequest::new(URL);
    request.format = OutputFormat::Plain;

    let text = tokio_test::block_on(controller.get_transcript(&request)).unwrap();
    assert_eq!(text, "first second");
}

/// Test that the engine is pure: identical requests yield identical bytes
#[test]
fn test_get_transcript_withRepeatedRequest_shouldBeIdempotent() {
    let controller = controller_with(MockProvider::working());

    let mut request = TranscriptRequest::new(URL);
    request.include_timestamps = true;

    let first = tokio_test::block_on(controller.get_transcript(&request)).unwrap();
    let second = tokio_test::block_on(controller.get_transcript(&request)).unwrap();
    assert_eq!(first, second);
}

/// Test the info operation with captions present
#[test]
fn test_get_video_info_withCaptions_shouldFillSummary() {
    let provider = MockProvider::working().with_cues(vec![
        common::raw("Hello world test", 0.0, 2.0),
        common::raw("This is another test", 2.0, 2.0),
        common::raw("Final segment here", 4.0, 2.0),
    ]);
    let controller = controller_with(provider);

    let info = tokio_test::block_on(controller.get_video_info(URL)).unwrap();

    assert!(info.contains("Video ID: dQw4w9WgXcQ"));
    assert!(info.contains(&format!("URL: {}", URL)));
    assert!(info.contains("Segments: 3"));
    assert!(info.contains("Words: 10"));
    assert!(info.contains("Captions available: yes"));
}

/// Test the info operation when only the captions are missing
#[test]
fn test_get_video_info_withNoCaptions_shouldStillAnswer() {
    let controller = controller_with(MockProvider::no_captions());

    let info = tokio_test::block_on(controller.get_video_info(URL)).unwrap();
    assert!(info.contains("Captions available: no"));
    assert!(info.contains("Segments: 0"));
}

/// Test that the info operation still propagates hard failures
#[test]
fn test_get_video_info_withUnavailableVideo_shouldPropagateError() {
    let controller = controller_with(MockProvider::unavailable());

    let err = tokio_test::block_on(controller.get_video_info(URL)).unwrap_err();
    assert!(matches!(err, TranscriptError::VideoUnavailable(_)));
}
