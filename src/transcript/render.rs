use std::fmt::Write as _;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::cue::Cue;
use crate::time_utils::{format_timestamp, format_timestamp_ms};
use crate::transcript::paragraphs::group_into_paragraphs;
use crate::transcript::sections::group_into_sections;
use crate::transcript::stats::TranscriptStats;
use crate::video_ref::VideoRef;

// @module: Document rendering for the four output shapes and the info summary

/// Output document shape
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Flat text, one line of prose
    Plain,
    /// Header block plus numbered section or paragraph blocks
    #[default]
    Structured,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Structured => write!(f, "structured"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "structured" => Ok(Self::Structured),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Rendering flags, independent of each other
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Annotate output with timestamps
    pub timestamps: bool,

    /// Flat prose or structured document
    pub format: OutputFormat,

    /// Section window length in seconds (structured + timestamps)
    pub section_window_secs: u64,

    /// Sentences per paragraph (structured, no timestamps)
    pub sentences_per_paragraph: usize,
}

/// Transient aggregate of transcript metadata plus a rendered body.
///
/// Built per request, rendered, and dropped; never persisted.
#[derive(Debug, Clone)]
pub struct TranscriptDocument {
    /// Canonical source URL
    pub source_url: String,

    /// Derived statistics for the header
    pub stats: TranscriptStats,

    /// The rendered body
    pub body: String,
}

impl TranscriptDocument {
    /// Compose a transcript document from normalized cues.
    ///
    /// Pure function of its inputs: rendering the same cues with the same
    /// options twice yields byte-identical output.
    pub fn compose(cues: &[Cue], source_url: &str, options: &RenderOptions) -> Self {
        let stats = TranscriptStats::from_cues(cues);

        let body = match (options.format, options.timestamps) {
            (OutputFormat::Plain, false) => render_plain(cues),
            (OutputFormat::Plain, true) => render_plain_timestamped(cues),
            (OutputFormat::Structured, false) => {
                render_structured_paragraphs(cues, source_url, &stats, options)
            }
            (OutputFormat::Structured, true) => {
                render_structured_sections(cues, source_url, &stats, options)
            }
        };

        TranscriptDocument {
            source_url: source_url.to_string(),
            stats,
            body,
        }
    }

    /// The rendered text artifact
    pub fn into_text(self) -> String {
        self.body
    }
}

/// Cue texts joined by single spaces
fn render_plain(cues: &[Cue]) -> String {
    cues.iter()
        .map(|cue| cue.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Each cue rendered as `[M:SS] text`, joined by single spaces
fn render_plain_timestamped(cues: &[Cue]) -> String {
    cues.iter()
        .map(|cue| format!("[{}] {}", format_timestamp_ms(cue.offset_ms), cue.text))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shared header block for structured output
fn write_header(out: &mut String, source_url: &str, stats: &TranscriptStats) {
    let _ = writeln!(out, "Video Transcript");
    let _ = writeln!(out, "Source: {}", source_url);
    let _ = writeln!(
        out,
        "Duration: {}",
        format_timestamp(stats.estimated_duration_secs())
    );
    let _ = writeln!(out, "Segments: {}", stats.segment_count);
}

fn render_structured_sections(
    cues: &[Cue],
    source_url: &str,
    stats: &TranscriptStats,
    options: &RenderOptions,
) -> String {
    let sections = group_into_sections(cues, options.section_window_secs);

    let mut out = String::new();
    write_header(&mut out, source_url, stats);

    for (i, section) in sections.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "[{}] {} - {}",
            i + 1,
            format_timestamp_ms(section.start_ms),
            format_timestamp_ms(section.end_ms)
        );
        let _ = writeln!(out, "{}", section.text);
    }

    out.trim_end().to_string()
}

fn render_structured_paragraphs(
    cues: &[Cue],
    source_url: &str,
    stats: &TranscriptStats,
    options: &RenderOptions,
) -> String {
    let paragraphs = group_into_paragraphs(cues, options.sentences_per_paragraph);

    let mut out = String::new();
    write_header(&mut out, source_url, stats);

    for (i, paragraph) in paragraphs.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}]", i + 1);
        let _ = writeln!(out, "{}", paragraph);
    }

    out.trim_end().to_string()
}

/// Render the fixed-field info summary for a video
pub fn render_video_info(video: &VideoRef, cues: &[Cue], captions_available: bool) -> String {
    let stats = TranscriptStats::from_cues(cues);

    let mut out = String::new();
    let _ = writeln!(out, "Video ID: {}", video.id);
    let _ = writeln!(out, "URL: {}", video.watch_url());
    let _ = writeln!(
        out,
        "Duration: {}",
        format_timestamp(stats.estimated_duration_secs())
    );
    let _ = writeln!(out, "Segments: {}", stats.segment_count);
    let _ = writeln!(out, "Words: {}", stats.word_count);
    let _ = writeln!(
        out,
        "Captions available: {}",
        if captions_available { "yes" } else { "no" }
    );

    out.trim_end().to_string()
}
