/*!
 * Mock caption providers for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Succeeds with a fixed cue sequence
 * - `MockProvider::empty()` - Succeeds with zero cues
 * - `MockProvider::failing()` - Always fails with an unclassified error
 * - `MockProvider::no_captions()` / `unavailable()` / `invalid_id()` -
 *   Fail with the corresponding tagged variant
 */

// Allow dead code - mock providers are for test consumers
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::cue::RawCue;
use crate::errors::FetchError;
use crate::providers::{CaptionProvider, DiagnosticSink};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Succeeds with the configured cues
    Working,
    /// Succeeds with an empty cue list
    Empty,
    /// Fails with `FetchError::NoCaptions`
    NoCaptions,
    /// Fails with `FetchError::Unavailable`
    Unavailable,
    /// Fails with `FetchError::InvalidId`
    InvalidId,
    /// Fails with `FetchError::Other` carrying the given message
    FailingWith(String),
}

/// Mock caption provider for testing engine behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Cues returned in `Working` mode
    cues: Vec<RawCue>,
    /// Diagnostic lines recorded into the sink on each call
    diagnostics: Vec<String>,
    /// Number of fetches served
    call_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            cues: default_cues(),
            diagnostics: Vec::new(),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock provider with a fixed cue sequence
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that returns zero cues
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock that fails with an unclassified error message
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::FailingWith(message.into()))
    }

    /// Create a mock that reports captions missing or disabled
    pub fn no_captions() -> Self {
        Self::new(MockBehavior::NoCaptions)
    }

    /// Create a mock that reports the video as unavailable
    pub fn unavailable() -> Self {
        Self::new(MockBehavior::Unavailable)
    }

    /// Create a mock that rejects the video id
    pub fn invalid_id() -> Self {
        Self::new(MockBehavior::InvalidId)
    }

    /// Replace the cues returned in `Working` mode
    pub fn with_cues(mut self, cues: Vec<RawCue>) -> Self {
        self.cues = cues;
        self
    }

    /// Record the given lines into the sink on every fetch
    pub fn with_diagnostics(mut self, lines: Vec<String>) -> Self {
        self.diagnostics = lines;
        self
    }

    /// Number of fetches this provider has served
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Handle to the shared call counter, for assertions after a move
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait]
impl CaptionProvider for MockProvider {
    async fn fetch_captions(
        &self,
        video_id: &str,
        _language: &str,
        diag: &DiagnosticSink,
    ) -> Result<Vec<RawCue>, FetchError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        for line in &self.diagnostics {
            diag.record(line.clone());
        }

        match &self.behavior {
            MockBehavior::Working => Ok(self.cues.clone()),
            MockBehavior::Empty => Ok(Vec::new()),
            MockBehavior::NoCaptions => Err(FetchError::NoCaptions(format!(
                "captions are disabled for video {}",
                video_id
            ))),
            MockBehavior::Unavailable => Err(FetchError::Unavailable(format!(
                "video {} is private or deleted",
                video_id
            ))),
            MockBehavior::InvalidId => Err(FetchError::InvalidId(video_id.to_string())),
            MockBehavior::FailingWith(message) => Err(FetchError::Other(message.clone())),
        }
    }
}

/// A small, plausible cue sequence for `Working` mode
fn default_cues() -> Vec<RawCue> {
    vec![
        RawCue::new("Welcome back to the channel.", 0.0, 3.2),
        RawCue::new("Today we are looking at caption processing.", 3.2, 4.1),
        RawCue::new("Let's get started!", 7.3, 2.0),
    ]
}
