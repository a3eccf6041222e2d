use log::warn;
use serde::{Deserialize, Serialize};

// @module: Caption cue model and normalization

/// Seconds value as delivered by caption sources.
///
/// Caption payloads are inconsistent about numeric typing: the same field
/// arrives as a JSON number from one endpoint and a numeric string from
/// another. Both shapes deserialize here and resolve through [`Seconds::value`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seconds {
    /// Plain numeric seconds, any precision
    Number(f64),
    /// Numeric string seconds, e.g. `"12.645"`
    Text(String),
}

impl Seconds {
    /// Resolve to a float, treating unparseable text as zero.
    ///
    /// Partially-formed caption data is low-fidelity, not fatal; a record
    /// whose timing cannot be read still contributes its text.
    pub fn value(&self) -> f64 {
        match self {
            Seconds::Number(n) => *n,
            Seconds::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) => n,
                Err(_) => {
                    warn!("Unparseable seconds value '{}', treating as 0", s);
                    0.0
                }
            },
        }
    }
}

impl Default for Seconds {
    fn default() -> Self {
        Seconds::Number(0.0)
    }
}

/// One raw caption record as returned by a caption provider.
///
/// Every field is defaulted so malformed records deserialize instead of
/// erroring: missing timing normalizes to zero, missing text to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCue {
    /// Caption text
    #[serde(default)]
    pub text: String,

    /// Start offset in seconds
    #[serde(default)]
    pub start: Seconds,

    /// Duration in seconds
    #[serde(default, alias = "duration")]
    pub dur: Seconds,
}

impl RawCue {
    pub fn new(text: impl Into<String>, start_secs: f64, dur_secs: f64) -> Self {
        RawCue {
            text: text.into(),
            start: Seconds::Number(start_secs),
            dur: Seconds::Number(dur_secs),
        }
    }
}

// @struct: Canonical integer-millisecond cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Caption text
    pub text: String,

    // @field: Start offset in ms
    pub offset_ms: u64,

    // @field: Duration in ms
    pub duration_ms: u64,
}

impl Cue {
    pub fn new(text: impl Into<String>, offset_ms: u64, duration_ms: u64) -> Self {
        Cue {
            text: text.into(),
            offset_ms,
            duration_ms,
        }
    }

    /// End of the cue's span in ms
    pub fn end_ms(&self) -> u64 {
        self.offset_ms + self.duration_ms
    }

    /// Normalize one raw record into a canonical cue.
    ///
    /// Seconds convert to integer milliseconds by `round(secs * 1000)`,
    /// clamped at zero so negative timing artifacts cannot produce
    /// underflowed offsets.
    pub fn from_raw(raw: &RawCue) -> Self {
        Cue {
            text: raw.text.clone(),
            offset_ms: secs_to_ms(raw.start.value()),
            duration_ms: secs_to_ms(raw.dur.value()),
        }
    }
}

fn secs_to_ms(secs: f64) -> u64 {
    if !secs.is_finite() || secs <= 0.0 {
        return 0;
    }
    (secs * 1000.0).round() as u64
}

/// Normalize a raw cue sequence into canonical cues, sorted by offset.
///
/// Caption sources are assumed to deliver cues chronologically but this is
/// never guaranteed; sorting here means the groupers can rely on
/// non-decreasing offsets instead of guessing at negative deltas.
pub fn normalize_cues(raw_cues: &[RawCue]) -> Vec<Cue> {
    let mut cues: Vec<Cue> = raw_cues.iter().map(Cue::from_raw).collect();
    cues.sort_by_key(|cue| cue.offset_ms);
    cues
}
