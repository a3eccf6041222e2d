/*!
 * # ytscribe - YouTube caption-to-transcript engine
 *
 * A Rust library that turns a video's timed caption cues into readable
 * transcript artifacts.
 *
 * ## Features
 *
 * - Resolve video ids from the common YouTube URL shapes
 * - Fetch caption tracks in any available language
 * - Flat and timestamp-annotated plain renderings
 * - Time-windowed "sectioned" and sentence-grouped "paragraphed" documents
 * - Aggregate statistics: estimated duration, segment count, word count
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `video_ref`: video reference resolution from URL strings
 * - `cue`: raw caption records and their canonical millisecond form
 * - `time_utils`: compact timestamp formatting
 * - `transcript`: the cue-to-document transformation engine:
 *   - `transcript::sections`: time-windowed grouping
 *   - `transcript::paragraphs`: sentence-count-bounded grouping
 *   - `transcript::stats`: derived statistics
 *   - `transcript::render`: output document composition
 * - `providers`: caption retrieval collaborators:
 *   - `providers::youtube`: innertube-backed provider
 *   - `providers::mock`: configurable providers for tests
 * - `app_config`: configuration management
 * - `app_controller`: request orchestration
 * - `language_utils`: ISO language code utilities
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod cue;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod time_utils;
pub mod transcript;
pub mod video_ref;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, TranscriptRequest};
pub use cue::{Cue, RawCue, normalize_cues};
pub use errors::{FetchError, TranscriptError};
pub use transcript::{OutputFormat, RenderOptions, Section, TranscriptDocument, TranscriptStats};
pub use video_ref::VideoRef;
