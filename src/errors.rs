/*!
 * Error types for the ytscribe application.
 *
 * This module contains custom error types for the provider boundary and the
 * transcript engine, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Failures returned by a caption provider.
///
/// The provider boundary is tagged rather than free-text: a provider that can
/// tell captions-disabled apart from video-gone reports it directly, and only
/// genuinely unclassifiable failures travel as `Other`.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Captions are missing or disabled for the video
    #[error("No captions available: {0}")]
    NoCaptions(String),

    /// The video is private, deleted, or region/age restricted
    #[error("Video unavailable: {0}")]
    Unavailable(String),

    /// The identifier does not name a known video
    #[error("Invalid video id: {0}")]
    InvalidId(String),

    /// Any other failure, message carried verbatim
    #[error("Caption fetch failed: {0}")]
    Other(String),
}

/// Errors surfaced to the caller of the transcript engine
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// No URL pattern matched; raised before any fetch is attempted
    #[error("Could not extract a video id from '{0}'")]
    InvalidUrl(String),

    /// The provider returned no cues, or reported captions missing/disabled
    #[error("No transcript available for this video: {0}")]
    NoTranscript(String),

    /// The video is private, deleted, or otherwise restricted
    #[error("Video is unavailable: {0}")]
    VideoUnavailable(String),

    /// The resolved identifier was rejected by the caption source
    #[error("Invalid video: {0}")]
    InvalidVideo(String),

    /// Any other provider failure, original message wrapped verbatim
    #[error("Failed to fetch transcript: {0}")]
    UnknownFetchFailure(String),
}

/// Phrases that indicate missing or disabled captions in a free-text failure
const NO_CAPTIONS_PHRASES: [&str; 4] = [
    "transcript is disabled",
    "transcripts are disabled",
    "no transcript",
    "no captions",
];

/// Phrases that indicate a private/deleted/restricted video
const UNAVAILABLE_PHRASES: [&str; 4] = [
    "video unavailable",
    "video is unavailable",
    "private video",
    "video is private",
];

/// Phrases that indicate an unrecognized video identifier
const INVALID_VIDEO_PHRASES: [&str; 3] = [
    "invalid video id",
    "invalid id",
    "video id not found",
];

/// Classify a free-text provider failure message into the transcript taxonomy.
///
/// Substring sniffing is inherently fragile, which is why the tagged
/// `FetchError` variants exist; this only runs for `FetchError::Other`
/// messages so providers that cannot classify their own failures still land
/// in the right bucket.
pub fn classify_failure_message(message: &str) -> TranscriptError {
    let lowered = message.to_lowercase();

    if NO_CAPTIONS_PHRASES.iter().any(|p| lowered.contains(p)) {
        return TranscriptError::NoTranscript(message.to_string());
    }
    if UNAVAILABLE_PHRASES.iter().any(|p| lowered.contains(p)) {
        return TranscriptError::VideoUnavailable(message.to_string());
    }
    if INVALID_VIDEO_PHRASES.iter().any(|p| lowered.contains(p)) {
        return TranscriptError::InvalidVideo(message.to_string());
    }

    TranscriptError::UnknownFetchFailure(message.to_string())
}

impl From<FetchError> for TranscriptError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::NoCaptions(msg) => Self::NoTranscript(msg),
            FetchError::Unavailable(msg) => Self::VideoUnavailable(msg),
            FetchError::InvalidId(msg) => Self::InvalidVideo(msg),
            FetchError::Other(msg) => classify_failure_message(&msg),
        }
    }
}

impl From<anyhow::Error> for FetchError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error.to_string())
    }
}
