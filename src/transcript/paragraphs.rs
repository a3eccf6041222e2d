use once_cell::sync::Lazy;
use regex::Regex;

use crate::cue::Cue;

// @module: Sentence-count-bounded paragraph grouping

// @const: Sentence boundary; a run of terminators is one boundary
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("static sentence pattern must compile"));

/// Group cue text into paragraphs of at most `sentences_per_paragraph`
/// sentences, independent of cue timing.
///
/// All cue texts are joined with single spaces, split at sentence
/// terminators (`.`, `!`, `?` as one delimiter class), and fragments that
/// are empty after trimming are dropped. Each surviving sentence is
/// re-suffixed with `". "` on assembly, which deliberately normalizes the
/// original punctuation: a fragment that ended in `!` or `?` re-renders
/// with a period. The final partial group is always flushed; input with no
/// sentence content (punctuation only) yields zero paragraphs.
pub fn group_into_paragraphs(cues: &[Cue], sentences_per_paragraph: usize) -> Vec<String> {
    let joined = cues
        .iter()
        .map(|cue| cue.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let sentences: Vec<&str> = SENTENCE_BOUNDARY
        .split(&joined)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect();

    let group_size = sentences_per_paragraph.max(1);

    sentences
        .chunks(group_size)
        .map(|group| {
            let mut paragraph = String::new();
            for sentence in group {
                paragraph.push_str(sentence);
                paragraph.push_str(". ");
            }
            paragraph.trim().to_string()
        })
        .collect()
}
