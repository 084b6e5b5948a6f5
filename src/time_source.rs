//! Time source abstraction for supporting both real time and a pinned instant.
//!
//! The daily report is normally generated for "now", but `--at` pins the clock to a
//! chosen instant so a report can be reproduced for any date (and so the logger can
//! stamp its output with the instant being reported on).

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Global time source instance, defaults to RealTimeSource
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting time operations
pub trait TimeSource: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Local>;

    /// Check if this source always reports the same instant
    fn is_pinned(&self) -> bool;
}

/// Real-time implementation that uses actual system time
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn is_pinned(&self) -> bool {
        false
    }
}

/// Time source frozen at a single instant.
pub struct FixedTimeSource {
    instant: DateTime<Local>,
}

impl FixedTimeSource {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }

    fn is_pinned(&self) -> bool {
        true
    }
}

/// Initialize the global time source (call once at startup)
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Check if the time source has been initialized
pub fn is_initialized() -> bool {
    TIME_SOURCE.get().is_some()
}

/// Get the current time from the global time source
pub fn now() -> DateTime<Local> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)).now()
}

/// Check if the clock has been pinned with `--at`
pub fn is_pinned() -> bool {
    TIME_SOURCE
        .get_or_init(|| Arc::new(RealTimeSource))
        .is_pinned()
}

/// Parse an instant for `--at`.
///
/// Accepts RFC 3339 (`2024-06-21T12:00:00+02:00`) or `YYYY-MM-DD HH:MM:SS`. The latter is
/// read as wall-clock time in `tz` when one is given, otherwise in the host's local zone.
pub fn parse_instant(s: &str, tz: Option<chrono_tz::Tz>) -> Result<DateTime<Local>, String> {
    if let Ok(fixed) = DateTime::parse_from_rfc3339(s) {
        return Ok(fixed.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map_err(|e| {
        format!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS or RFC 3339")
    })?;

    match tz {
        Some(tz) => tz
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Local))
            .ok_or_else(|| format!("Ambiguous or invalid time in timezone {tz}")),
        None => Local
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| "Ambiguous or invalid local time".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_fixed_source_is_pinned() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 21, 10, 0, 0).unwrap();
        let source = FixedTimeSource::new(instant.with_timezone(&Local));

        assert!(source.is_pinned());
        assert_eq!(source.now().with_timezone(&Utc), instant);
        assert!(!RealTimeSource.is_pinned());
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_instant("2024-06-21T12:00:00+02:00", None).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 6, 21, 10, 0, 0).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), expected);
    }

    #[test]
    fn test_parse_wall_clock_in_timezone() {
        let parsed = parse_instant("2024-12-21 12:00:00", Some(chrono_tz::Europe::Oslo)).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 12, 21, 11, 0, 0).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_instant("tomorrow at noon", None).is_err());
        assert!(parse_instant("2024-13-01 00:00:00", None).is_err());
    }

    #[test]
    fn test_parse_rejects_skipped_dst_time() {
        // 02:30 does not exist in Oslo on the spring-forward night
        assert!(parse_instant("2024-03-31 02:30:00", Some(chrono_tz::Europe::Oslo)).is_err());
    }
}
