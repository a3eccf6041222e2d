/// Timestamp formatting utilities
///
/// Renders durations the way transcript readers expect them: compact
/// `M:SS` for anything under an hour, `H:MM:SS` above. Fractional seconds
/// are truncated, never rounded up.
/// Format a duration in seconds as `H:MM:SS` or `M:SS`.
///
/// Hours are unpadded and only present when non-zero; minutes and seconds
/// are zero-padded to two digits once a larger field precedes them.
/// `0.0` renders as `"0:00"`. Negative or non-finite input clamps to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Format a millisecond offset with the same rules as [`format_timestamp`]
pub fn format_timestamp_ms(ms: u64) -> String {
    format_timestamp(ms as f64 / 1000.0)
}
