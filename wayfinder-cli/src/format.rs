//! Human-readable formatting for distances and durations.

use std::time::Duration;

/// Format a length in metres as `"1.5 km"` above a kilometre and `"850 m"`
/// below.
pub(crate) fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{} m", meters.round() as i64)
    }
}

/// Format a duration as `"2h 5m"` above an hour and `"12 minutes"` below.
pub(crate) fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes} minutes")
    }
}
