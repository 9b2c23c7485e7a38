//! Scrubber clock formatting

/// Format a playback position as `m:ss`
///
/// Minutes are not padded and grow past 59 (`75:03`). Non-finite, zero and
/// negative positions render as `0:00`.
pub fn format_playback_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
