//! Duration formatting
//!
//! Provides the `MM:SS` countdown shown while a timed window is running and
//! a human-readable form used in log lines.

use std::time::Duration;

/// Format a remaining duration as a zero-padded `MM:SS` countdown.
///
/// Sub-second remainders are truncated, so 0.9s left renders as `00:00`.
/// Minutes are not wrapped into hours.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use inferno_common::time::format::format_countdown;
///
/// assert_eq!(format_countdown(Duration::from_secs(900)), "15:00");
/// assert_eq!(format_countdown(Duration::from_millis(65_400)), "01:05");
/// assert_eq!(format_countdown(Duration::ZERO), "00:00");
/// ```
pub fn format_countdown(remaining: Duration) -> String {
    let total_secs = remaining.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration into a human-readable string
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use inferno_common::time::format::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(5)), "5s");
/// assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
/// assert_eq!(format_duration(Duration::from_millis(350)), "350ms");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();

    if total_secs == 0 {
        return format!("{}ms", duration.as_millis());
    }

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let components = [(hours, "h"), (minutes, "m"), (seconds, "s")];
    let start_index = components.iter().position(|(value, _)| *value > 0).unwrap_or(2);

    components[start_index..]
        .iter()
        .map(|(value, suffix)| format!("{value}{suffix}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_pads_both_fields() {
        assert_eq!(format_countdown(Duration::from_secs(9)), "00:09");
        assert_eq!(format_countdown(Duration::from_secs(61)), "01:01");
        assert_eq!(format_countdown(Duration::from_secs(14 * 60 + 59)), "14:59");
    }

    #[test]
    fn countdown_truncates_partial_seconds() {
        assert_eq!(format_countdown(Duration::from_millis(999)), "00:00");
        assert_eq!(format_countdown(Duration::from_millis(1_999)), "00:01");
    }

    #[test]
    fn countdown_keeps_minutes_past_an_hour() {
        assert_eq!(format_countdown(Duration::from_secs(2 * 3600)), "120:00");
    }

    #[test]
    fn duration_skips_leading_zero_units() {
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h 0m 0s");
        assert_eq!(format_duration(Duration::from_secs(900)), "15m 0s");
        assert_eq!(format_duration(Duration::ZERO), "0ms");
    }
}
