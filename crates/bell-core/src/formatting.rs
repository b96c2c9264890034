//! Display formatting for notification timestamps.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Resolve a timezone name to a [`Tz`], treating `"auto"` and unparseable
/// names as UTC.
pub fn resolve_timezone(name: &str) -> Tz {
    if name == "auto" {
        return iana_local().unwrap_or(Tz::UTC);
    }
    name.parse().unwrap_or(Tz::UTC)
}

/// Best-effort system timezone lookup via the `TZ` environment variable.
fn iana_local() -> Option<Tz> {
    std::env::var("TZ").ok()?.parse().ok()
}

/// Format a notification timestamp for display in the given timezone.
///
/// Missing timestamps render as the empty string rather than an error;
/// the menu simply omits the time line.
///
/// # Examples
///
/// ```
/// use bell_core::formatting::format_timestamp;
/// use chrono_tz::Tz;
///
/// assert_eq!(format_timestamp(None, Tz::UTC), "");
/// ```
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>, tz: Tz) -> String {
    match timestamp {
        Some(ts) => ts
            .with_timezone(&tz)
            .format("%Y-%m-%d %I:%M:%S %p")
            .to_string(),
        None => String::new(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_none_is_empty() {
        assert_eq!(format_timestamp(None, Tz::UTC), "");
    }

    #[test]
    fn test_format_timestamp_utc() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 5).unwrap();
        assert_eq!(
            format_timestamp(Some(ts), Tz::UTC),
            "2024-06-01 12:30:05 PM"
        );
    }

    #[test]
    fn test_format_timestamp_respects_timezone() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let berlin: Tz = "Europe/Berlin".parse().unwrap();
        // Berlin is UTC+2 in June.
        assert_eq!(
            format_timestamp(Some(ts), berlin),
            "2024-06-01 02:00:00 PM"
        );
    }

    #[test]
    fn test_resolve_timezone_known_name() {
        let tz = resolve_timezone("Europe/Berlin");
        assert_eq!(tz.name(), "Europe/Berlin");
    }

    #[test]
    fn test_resolve_timezone_unknown_falls_back_to_utc() {
        assert_eq!(resolve_timezone("Not/AZone"), Tz::UTC);
    }
}
