use log::debug;

use crate::cue::Cue;

// @module: Time-windowed section grouping

/// A contiguous run of cues rendered as one block with a timestamp range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    // @field: Start of the window in ms
    pub start_ms: u64,

    // @field: End of the window in ms
    pub end_ms: u64,

    // @field: Combined cue text, space-joined
    pub text: String,
}

impl Section {
    /// Displayed span of the section in ms
    pub fn span_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

/// Partition an ordered cue sequence into time-bounded sections.
///
/// Single greedy left-to-right pass: a section opens at the first cue's
/// offset and closes when the next cue starts more than `window_secs` after
/// the section opened; that cue's offset becomes the closing section's end
/// and opens the next one. The final section closes at the last cue's end.
/// A section always holds at least one cue regardless of the threshold, so
/// a long gap between two cues can produce a section whose displayed span
/// dwarfs its spoken content; that is accepted behavior.
///
/// Callers hand in cues sorted by offset (`normalize_cues` guarantees it);
/// the window comparison saturates so a stray out-of-order cue degrades to
/// joining the current section instead of wrapping around.
pub fn group_into_sections(cues: &[Cue], window_secs: u64) -> Vec<Section> {
    let mut sections = Vec::new();

    let first = match cues.first() {
        Some(cue) => cue,
        None => return sections,
    };

    let window_ms = window_secs * 1000;
    let mut start_ms = first.offset_ms;
    let mut text = first.text.clone();

    for cue in &cues[1..] {
        if cue.offset_ms.saturating_sub(start_ms) > window_ms {
            sections.push(Section {
                start_ms,
                end_ms: cue.offset_ms,
                text,
            });
            start_ms = cue.offset_ms;
            text = cue.text.clone();
        } else {
            text.push(' ');
            text.push_str(&cue.text);
        }
    }

    // Last cue is guaranteed present; the open section closes at its end
    let last = cues.last().expect("non-empty cue slice");
    sections.push(Section {
        start_ms,
        end_ms: last.end_ms(),
        text,
    });

    debug!(
        "Grouped {} cues into {} sections ({}s window)",
        cues.len(),
        sections.len(),
        window_secs
    );

    sections
}
