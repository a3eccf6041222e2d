use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// Caption tracks advertise language codes in several shapes: ISO 639-1
/// (`en`), ISO 639-2 (`eng`, including bibliographic variants like `fre`),
/// and BCP-47 tags with region subtags (`en-US`). This module normalizes
/// and matches them so a requested language finds its track.
/// ISO 639-2/B codes that differ from their 639-2/T equivalent
const PART2B_TO_PART2T: [(&str, &str); 18] = [
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

fn bibliographic_to_terminological(code: &str) -> &str {
    PART2B_TO_PART2T
        .iter()
        .find(|(b, _)| *b == code)
        .map(|(_, t)| *t)
        .unwrap_or(code)
}

/// Strip a BCP-47 region subtag, e.g. `en-US` -> `en`
fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized = primary_subtag(code.trim()).to_lowercase();

    if normalized.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized) {
            return Ok(lang.to_639_3().to_string());
        }
    } else if normalized.len() == 3 {
        let part2t = bibliographic_to_terminological(&normalized);
        if Language::from_639_3(part2t).is_some() {
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Normalize a language code to ISO 639-1 (2-letter) format if possible,
/// falling back to ISO 639-2/T when no 2-letter code exists
pub fn normalize_to_part1_or_part2t(code: &str) -> Result<String> {
    let part2t = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&part2t)
        .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))?;

    match lang.to_639_1() {
        Some(part1) => Ok(part1.to_string()),
        None => Ok(part2t),
    }
}

/// Check if two language codes represent the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_to_part2t(code1), normalize_to_part2t(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Check if a caption track's language code satisfies a requested language.
///
/// Region subtags are ignored, so a request for `en` accepts an `en-GB`
/// track. Codes that fail ISO normalization fall back to a case-insensitive
/// primary-subtag comparison rather than rejecting the track outright.
pub fn track_matches_language(track_code: &str, requested: &str) -> bool {
    if language_codes_match(track_code, requested) {
        return true;
    }
    primary_subtag(track_code).eq_ignore_ascii_case(primary_subtag(requested))
}

/// Get the English language name for a code
pub fn get_language_name(code: &str) -> Result<String> {
    let part2t = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&part2t)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", part2t))?;

    Ok(lang.to_name().to_string())
}
