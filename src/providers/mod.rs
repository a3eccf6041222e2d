/*!
 * Caption provider implementations.
 *
 * This module contains the caption-retrieval boundary:
 * - `youtube`: fetches caption tracks through the innertube player endpoint
 * - `mock`: configurable providers for tests
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::fmt::Debug;

use crate::cue::RawCue;
use crate::errors::FetchError;

/// Request-scoped sink for ambient provider diagnostics.
///
/// Providers talk to third-party endpoints that produce noise a caller never
/// asked for (consent redirects, track fallbacks, payload oddities). Instead
/// of printing or mutating any global output state, a provider records those
/// lines here and the controller drains them into the debug log once the
/// call returns, on success and error paths alike. Each request owns its own
/// sink, so overlapping requests cannot interleave.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    lines: Mutex<Vec<String>>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one diagnostic line
    pub fn record(&self, line: impl Into<String>) {
        self.lines.lock().push(line.into());
    }

    /// Take all recorded lines, leaving the sink empty
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

/// Common trait for caption providers.
///
/// A provider owns everything about retrieval: network access,
/// authentication, and caption-source specifics. The engine hands it a bare
/// video id and a language code and expects raw cues back, or a tagged
/// failure.
#[async_trait]
pub trait CaptionProvider: Send + Sync + Debug {
    /// Fetch the ordered raw cue list for a video in the given language.
    ///
    /// A single attempt: no retries, no internal suppression. Ambient
    /// diagnostics go into `diag` rather than any global channel.
    async fn fetch_captions(
        &self,
        video_id: &str,
        language: &str,
        diag: &DiagnosticSink,
    ) -> Result<Vec<RawCue>, FetchError>;
}

pub mod mock;
pub mod youtube;
