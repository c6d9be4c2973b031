use crate::error::{DevMeterError, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// Source of "now" for the time-windowed sub-scores.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses RFC 3339, then naive ISO-8601 date-times (`T` or space separated)
/// and bare dates, all read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

pub fn parse_reference_time(raw: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(raw).ok_or_else(|| DevMeterError::InvalidTimestamp(raw.to_string()))
}

/// True when `timestamp` parses and falls strictly inside the trailing window.
/// A window reaching past the earliest representable instant covers everything.
pub fn updated_within(timestamp: Option<&str>, now: DateTime<Utc>, days: u32) -> bool {
    let cutoff =
        Duration::try_days(i64::from(days)).and_then(|window| now.checked_sub_signed(window));
    timestamp
        .and_then(parse_timestamp)
        .map(|updated| cutoff.map_or(true, |cutoff| updated > cutoff))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_zulu_offset_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(parse_timestamp("2025-01-02T03:04:05Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-02T05:04:05+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-02T03:04:05"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-02T03:04:05.000"), Some(expected));
    }

    #[test]
    fn parses_space_separated_and_date_only_forms() {
        assert_eq!(
            parse_timestamp("2025-01-02 03:04:05"),
            Some(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap())
        );
        assert_eq!(
            parse_timestamp("2025-01-02"),
            Some(Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap())
        );
        assert!(updated_within(Some("2025-05-20"), now(), 90));
    }

    #[test]
    fn oversized_window_covers_every_parseable_timestamp() {
        assert!(updated_within(Some("1970-01-01T00:00:00Z"), now(), u32::MAX));
        assert!(!updated_within(Some("garbage"), now(), u32::MAX));
        assert!(!updated_within(None, now(), u32::MAX));
    }

    #[test]
    fn malformed_timestamps_are_not_recent() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert!(!updated_within(Some("not-a-date"), now(), 365));
        assert!(!updated_within(None, now(), 365));
    }

    #[test]
    fn window_boundary_is_exclusive() {
        assert!(updated_within(Some("2025-05-31T12:00:00Z"), now(), 1));
        assert!(!updated_within(Some("2025-05-31T12:00:00Z"), now(), 0));
        assert!(!updated_within(Some("2024-06-01T12:00:00Z"), now(), 365));
        assert!(updated_within(Some("2024-06-01T12:00:01Z"), now(), 365));
    }

    #[test]
    fn reference_time_rejects_garbage() {
        let err = parse_reference_time("soon").expect_err("garbage should fail");
        assert!(err.to_string().contains("invalid timestamp"));
    }
}
