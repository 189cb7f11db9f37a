//! Wall clock and duration helpers

use chrono::{DateTime, Duration, Utc};

/// Current wall-clock instant
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Zero-length duration
pub fn zero() -> Duration {
    Duration::zero()
}

/// Drop the sub-second part, rounding toward zero
pub fn truncate_to_seconds(duration: Duration) -> Duration {
    Duration::seconds(duration.num_seconds())
}

/// Format a duration as whole-second text, e.g. `1h2m3s`, `5m0s`, `0s`, `-4s`.
///
/// Sub-second precision is discarded. Units above the largest non-zero one are
/// omitted, but every unit below it is printed, including zeros.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds();
    if total == 0 {
        return "0s".to_string();
    }

    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}
