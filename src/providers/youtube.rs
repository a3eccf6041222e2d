use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::cue::RawCue;
use crate::errors::FetchError;
use crate::language_utils;
use crate::providers::{CaptionProvider, DiagnosticSink};

/// Caption provider backed by YouTube's innertube player endpoint.
///
/// One fetch is two requests: a player call that yields the caption track
/// list (and the video's playability), then a download of the selected
/// track in `json3` format.
#[derive(Debug)]
pub struct YouTubeProvider {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint base URL, overridable for tests
    endpoint: String,
}

/// Innertube client identification; the ANDROID client returns caption
/// tracks without the consent interstitials the WEB client is subject to.
const INNERTUBE_CLIENT_NAME: &str = "ANDROID";
const INNERTUBE_CLIENT_VERSION: &str = "20.10.38";
const DEFAULT_ENDPOINT: &str = "https://www.youtube.com";

/// Innertube player request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerRequest {
    context: InnertubeContext,
    video_id: String,
}

#[derive(Debug, Serialize)]
struct InnertubeContext {
    client: InnertubeClient,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InnertubeClient {
    client_name: String,
    client_version: String,
    android_sdk_version: u32,
}

/// Innertube player response, reduced to the fields this provider reads
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    playability_status: Option<PlayabilityStatus>,
    captions: Option<CaptionsRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayabilityStatus {
    status: Option<String>,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionsRenderer {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    caption_tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    /// `"asr"` marks an auto-generated track
    kind: Option<String>,
}

/// A `json3` caption payload
#[derive(Debug, Deserialize)]
struct Json3Track {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Json3Event {
    t_start_ms: Option<u64>,
    d_duration_ms: Option<u64>,
    segs: Option<Vec<Json3Seg>>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    utf8: Option<String>,
}

impl YouTubeProvider {
    /// Create a provider against the public endpoint
    pub fn new(timeout_secs: u64) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, timeout_secs)
    }

    /// Create a provider with an endpoint override
    pub fn with_endpoint(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    async fn player_response(&self, video_id: &str) -> Result<PlayerResponse, FetchError> {
        let api_url = format!("{}/youtubei/v1/player", self.endpoint.trim_end_matches('/'));

        let request = PlayerRequest {
            context: InnertubeContext {
                client: InnertubeClient {
                    client_name: INNERTUBE_CLIENT_NAME.to_string(),
                    client_version: INNERTUBE_CLIENT_VERSION.to_string(),
                    android_sdk_version: 30,
                },
            },
            video_id: video_id.to_string(),
        };

        let response = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| FetchError::Other(format!("Player request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Other(format!(
                "Player request returned status {}",
                response.status()
            )));
        }

        response
            .json::<PlayerResponse>()
            .await
            .map_err(|e| FetchError::Other(format!("Failed to parse player response: {}", e)))
    }

    /// Map a non-OK playability status to a tagged failure
    fn classify_playability(status: &PlayabilityStatus, video_id: &str) -> Option<FetchError> {
        let state = status.status.as_deref().unwrap_or("OK");
        if state == "OK" {
            return None;
        }

        let reason = status
            .reason
            .clone()
            .unwrap_or_else(|| format!("playability status {}", state));

        let error = match state {
            "ERROR" => {
                if reason.to_lowercase().contains("invalid") {
                    FetchError::InvalidId(format!("{}: {}", video_id, reason))
                } else {
                    FetchError::Unavailable(reason)
                }
            }
            "LOGIN_REQUIRED" | "UNPLAYABLE" | "AGE_CHECK_REQUIRED" | "CONTENT_CHECK_REQUIRED" => {
                FetchError::Unavailable(reason)
            }
            _ => FetchError::Other(reason),
        };

        Some(error)
    }

    /// Pick the caption track for a requested language.
    ///
    /// Manual tracks in the requested language win over auto-generated
    /// ones; with no language match at all, the first track is used and the
    /// fallback is recorded in the sink.
    fn select_track<'a>(
        tracks: &'a [CaptionTrack],
        language: &str,
        diag: &DiagnosticSink,
    ) -> Option<&'a CaptionTrack> {
        let matching: Vec<&CaptionTrack> = tracks
            .iter()
            .filter(|t| language_utils::track_matches_language(&t.language_code, language))
            .collect();

        if let Some(manual) = matching
            .iter()
            .copied()
            .find(|t| t.kind.as_deref() != Some("asr"))
        {
            return Some(manual);
        }
        if let Some(generated) = matching.first().copied() {
            diag.record(format!(
                "No manual '{}' track, using auto-generated captions",
                language
            ));
            return Some(generated);
        }

        let first = tracks.first()?;
        diag.record(format!(
            "No '{}' caption track, falling back to '{}'",
            language, first.language_code
        ));
        Some(first)
    }

    async fn download_track(&self, track: &CaptionTrack) -> Result<Vec<RawCue>, FetchError> {
        let url = format!("{}&fmt=json3", track.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Other(format!("Caption track request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Other(format!(
                "Caption track request returned status {}",
                response.status()
            )));
        }

        let payload = response
            .json::<Json3Track>()
            .await
            .map_err(|e| FetchError::Other(format!("Failed to parse caption track: {}", e)))?;

        let cues = payload
            .events
            .into_iter()
            .filter_map(|event| {
                // Events without segments are window markers, not captions
                let segs = event.segs?;
                let text: String = segs
                    .into_iter()
                    .filter_map(|seg| seg.utf8)
                    .collect::<String>()
                    .replace('\n', " ")
                    .trim()
                    .to_string();
                if text.is_empty() {
                    return None;
                }

                let start_ms = event.t_start_ms.unwrap_or(0);
                let dur_ms = event.d_duration_ms.unwrap_or(0);
                Some(RawCue::new(
                    text,
                    start_ms as f64 / 1000.0,
                    dur_ms as f64 / 1000.0,
                ))
            })
            .collect();

        Ok(cues)
    }
}

#[async_trait]
impl CaptionProvider for YouTubeProvider {
    async fn fetch_captions(
        &self,
        video_id: &str,
        language: &str,
        diag: &DiagnosticSink,
    ) -> Result<Vec<RawCue>, FetchError> {
        let player = self.player_response(video_id).await?;

        if let Some(status) = &player.playability_status {
            if let Some(error) = Self::classify_playability(status, video_id) {
                return Err(error);
            }
        }

        let tracks = player
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .and_then(|r| r.caption_tracks)
            .unwrap_or_default();

        if tracks.is_empty() {
            return Err(FetchError::NoCaptions(format!(
                "captions are disabled or missing for video {}",
                video_id
            )));
        }

        debug!("Found {} caption track(s) for {}", tracks.len(), video_id);

        let track = Self::select_track(&tracks, language, diag).ok_or_else(|| {
            FetchError::NoCaptions(format!("no usable caption track for video {}", video_id))
        })?;

        self.download_track(track).await
    }
}
