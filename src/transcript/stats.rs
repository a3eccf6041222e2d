use crate::cue::Cue;

/// Aggregate statistics derived from a cue sequence.
///
/// All values are derived, never authoritative: cues are caption-source
/// artifacts, so duration and word count approximate the video rather than
/// measure it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptStats {
    /// Largest cue end seen, `None` for an empty sequence
    pub estimated_duration_ms: Option<u64>,

    /// Number of cues
    pub segment_count: usize,

    /// Naive whitespace-token count across all cue texts
    pub word_count: usize,
}

impl TranscriptStats {
    /// Compute statistics over a cue sequence.
    ///
    /// Word counting splits each text on single spaces and counts every
    /// token, empty ones included, so runs of spaces inflate the count.
    /// The imprecision is preserved deliberately for parity with the
    /// counts callers already rely on; tests pin the behavior.
    pub fn from_cues(cues: &[Cue]) -> Self {
        let estimated_duration_ms = cues.iter().map(Cue::end_ms).max();
        let word_count = cues.iter().map(|cue| cue.text.split(' ').count()).sum();

        TranscriptStats {
            estimated_duration_ms,
            segment_count: cues.len(),
            word_count,
        }
    }

    /// Estimated duration in seconds, zero when no cues exist
    pub fn estimated_duration_secs(&self) -> f64 {
        self.estimated_duration_ms.unwrap_or(0) as f64 / 1000.0
    }
}
