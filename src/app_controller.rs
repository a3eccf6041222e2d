use log::{debug, info, warn};
use std::sync::Arc;

use crate::app_config::Config;
use crate::cue::{Cue, RawCue, normalize_cues};
use crate::errors::TranscriptError;
use crate::language_utils;
use crate::providers::youtube::YouTubeProvider;
use crate::providers::{CaptionProvider, DiagnosticSink};
use crate::transcript::render::{self, RenderOptions, TranscriptDocument};
use crate::transcript::OutputFormat;
use crate::video_ref::VideoRef;

// @module: Application controller for transcript requests

/// One transcript request as delivered by the transport layer
#[derive(Debug, Clone)]
pub struct TranscriptRequest {
    /// URL to resolve a video from (required)
    pub url: String,

    /// Caption language code; falls back to the configured default
    pub language: Option<String>,

    /// Annotate output with timestamps
    pub include_timestamps: bool,

    /// Flat prose or structured document
    pub format: OutputFormat,
}

impl TranscriptRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            language: None,
            include_timestamps: false,
            format: OutputFormat::Structured,
        }
    }
}

/// Main application controller for transcript generation
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Caption retrieval collaborator
    provider: Arc<dyn CaptionProvider>,
}

impl Controller {
    // @method: Create a controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        let provider = Arc::new(YouTubeProvider::with_endpoint(
            &config.provider.endpoint,
            config.provider.timeout_secs,
        ));
        Self { config, provider }
    }

    /// Create a controller with an explicit provider, used by tests
    pub fn with_provider(config: Config, provider: Arc<dyn CaptionProvider>) -> Self {
        Self { config, provider }
    }

    /// Produce the transcript artifact for one request.
    ///
    /// Flow: resolve the video reference, fetch raw cues through the
    /// provider, normalize, render in the requested shape. Any provider
    /// failure maps into the transcript error taxonomy and propagates
    /// immediately; nothing is retried.
    pub async fn get_transcript(&self, request: &TranscriptRequest) -> Result<String, TranscriptError> {
        let video = self.resolve(&request.url)?;
        let language = self.effective_language(request.language.as_deref());

        info!("Fetching '{}' captions for video {}", language, video.id);
        let raw_cues = self.fetch(&video, &language).await?;

        if raw_cues.is_empty() {
            return Err(TranscriptError::NoTranscript(format!(
                "provider returned no cues for video {}",
                video.id
            )));
        }

        let cues = normalize_cues(&raw_cues);
        let options = RenderOptions {
            timestamps: request.include_timestamps,
            format: request.format,
            section_window_secs: self.config.transcript.section_window_secs,
            sentences_per_paragraph: self.config.transcript.sentences_per_paragraph,
        };

        let document = TranscriptDocument::compose(&cues, &video.watch_url(), &options);
        debug!(
            "Rendered {} transcript for {} ({} segments, {} words)",
            request.format, video.id, document.stats.segment_count, document.stats.word_count
        );

        Ok(document.into_text())
    }

    /// Produce the fixed-field info summary for a video URL
    pub async fn get_video_info(&self, url: &str) -> Result<String, TranscriptError> {
        let video = self.resolve(url)?;
        let language = self.effective_language(None);

        let cues: Vec<Cue> = match self.fetch(&video, &language).await {
            Ok(raw_cues) => normalize_cues(&raw_cues),
            // Info stays answerable when only the captions are missing
            Err(TranscriptError::NoTranscript(msg)) => {
                debug!("No captions for {}: {}", video.id, msg);
                Vec::new()
            }
            Err(other) => return Err(other),
        };

        let available = !cues.is_empty();
        Ok(render::render_video_info(&video, &cues, available))
    }

    fn resolve(&self, url: &str) -> Result<VideoRef, TranscriptError> {
        VideoRef::resolve(url).ok_or_else(|| TranscriptError::InvalidUrl(url.to_string()))
    }

    /// Normalize the requested language, warning and passing through codes
    /// the ISO tables do not know rather than failing the request
    fn effective_language(&self, requested: Option<&str>) -> String {
        let code = requested.unwrap_or(&self.config.default_language);
        match language_utils::normalize_to_part1_or_part2t(code) {
            Ok(normalized) => normalized,
            Err(e) => {
                warn!("Language code issue: {}", e);
                code.to_string()
            }
        }
    }

    /// Run the single provider call with a request-scoped diagnostic sink.
    ///
    /// The sink drains into the debug log on every exit path, so provider
    /// noise never reaches the caller's output and never leaks across
    /// requests.
    async fn fetch(
        &self,
        video: &VideoRef,
        language: &str,
    ) -> Result<Vec<RawCue>, TranscriptError> {
        let diag = DiagnosticSink::new();
        let result = self.provider.fetch_captions(&video.id, language, &diag).await;

        for line in diag.drain() {
            debug!("[provider] {}", line);
        }

        result.map_err(TranscriptError::from)
    }
}
