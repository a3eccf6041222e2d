/*!
 * The cue-to-document transformation engine.
 *
 * This module turns a normalized cue sequence into the transcript artifacts
 * exposed to callers:
 * - `sections`: time-windowed grouping of consecutive cues
 * - `paragraphs`: sentence-count-bounded grouping, timing-agnostic
 * - `stats`: estimated duration, segment count, word count
 * - `render`: composition of the above into the output shapes
 */

pub mod paragraphs;
pub mod render;
pub mod sections;
pub mod stats;

pub use paragraphs::group_into_paragraphs;
pub use render::{OutputFormat, RenderOptions, TranscriptDocument};
pub use sections::{Section, group_into_sections};
pub use stats::TranscriptStats;
