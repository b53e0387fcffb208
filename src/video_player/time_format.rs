// SPDX-License-Identifier: MPL-2.0
//! Time display for the player's position and duration labels.

/// Formats a position as `M:SS`.
///
/// Minutes are not padded and keep growing past an hour. Negative and
/// non-finite input formats as `0:00`.
///
/// # Examples
///
/// ```
/// use codecast::video_player::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(65.4), "1:05");
/// assert_eq!(format_time(3_725.0), "62:05");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0:00".to_string();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_secs = seconds.max(0.0) as u64;
    let minutes = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn format_time_handles_seconds() {
        assert_eq!(format_time(45.9), "0:45");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(125.0), "2:05");
    }

    #[test]
    fn format_time_does_not_roll_into_hours() {
        assert_eq!(format_time(3_665.0), "61:05");
    }

    #[test]
    fn format_time_handles_negative_and_non_finite() {
        assert_eq!(format_time(-10.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
