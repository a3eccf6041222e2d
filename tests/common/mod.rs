/*!
 * Common test utilities for the ytscribe test suite
 */

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use anyhow::Result;
use tempfile::TempDir;

use ytscribe::cue::{Cue, RawCue};

static LOGGER: Once = Once::new();

/// Initialize env_logger once for tests that want log output
pub fn init_test_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Build a canonical cue
pub fn cue(text: &str, offset_ms: u64, duration_ms: u64) -> Cue {
    Cue::new(text, offset_ms, duration_ms)
}

/// Build a raw cue with numeric seconds
pub fn raw(text: &str, start_secs: f64, dur_secs: f64) -> RawCue {
    RawCue::new(text, start_secs, dur_secs)
}

/// A short conversational cue sequence used across tests
pub fn sample_cues() -> Vec<Cue> {
    vec![
        cue("Hello and welcome to the show.", 0, 2500),
        cue("Today we talk about transcripts!", 2500, 3000),
        cue("Is there anything better?", 5500, 2000),
        cue("Probably not.", 7500, 1500),
        cue("Stay tuned for more.", 9000, 2000),
    ]
}
