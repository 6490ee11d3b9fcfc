//! Calendar date parsing
//!
//! Tier dates arrive as ISO strings, sometimes date-only (`2026-01-06`) and
//! sometimes as midnight-anchored timestamps (`2026-01-06T00:00:00.000Z`).
//! Only the written year/month/day is used. Converting the timestamp to an
//! instant first would move `2026-01-06T00:00Z` to January 5th for anyone
//! west of UTC.

use crate::error::{CalendarError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamps without an offset, `T` or space separated
const LOCAL_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored tier date into a calendar day.
///
/// Accepts a bare `YYYY-MM-DD` or a full timestamp, with or without an
/// offset. The day is read as written; the offset is never applied. Anything
/// else, including a valid date followed by junk, is `None`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_local().date());
    }
    LOCAL_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|timestamp| timestamp.date())
}

/// Parse a user supplied date, e.g. a CLI argument.
pub fn parse_query_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(raw.to_string()))
}

/// Calendar day of a local instant.
///
/// Calendar cells are usually built as local midnight; the day is read in the
/// instant's own offset so that it never shifts across a day boundary.
pub fn query_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(parse_calendar_date("2026-01-06"), Some(ymd(2026, 1, 6)));
        assert_eq!(parse_calendar_date("  2026-12-31 "), Some(ymd(2026, 12, 31)));
    }

    #[test]
    fn test_parse_ignores_time_and_offset() {
        assert_eq!(parse_calendar_date("2026-01-06T00:00:00.000Z"), Some(ymd(2026, 1, 6)));
        assert_eq!(parse_calendar_date("2026-01-06T23:30:00-05:00"), Some(ymd(2026, 1, 6)));
        assert_eq!(parse_calendar_date("2026-01-06 08:00:00"), Some(ymd(2026, 1, 6)));
        assert_eq!(parse_calendar_date("2026-01-06T08:00"), Some(ymd(2026, 1, 6)));
        assert_eq!(parse_calendar_date("2026-01-06T00:30:00+14:00"), Some(ymd(2026, 1, 6)));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("not a date"), None);
        assert_eq!(parse_calendar_date("2026-02-30"), None);
        assert_eq!(parse_calendar_date("06/01/2026"), None);
        assert_eq!(parse_calendar_date("T2026-01-06"), None);
        assert_eq!(parse_calendar_date("2026-03-10Tgarbage"), None);
        assert_eq!(parse_calendar_date("2026-03-10 not a time"), None);
        assert_eq!(parse_calendar_date("2026-03-10T99:99:99"), None);
        assert_eq!(parse_calendar_date("2026-03-10T"), None);
        assert_eq!(parse_calendar_date("2026-03-10T10:00:00+99:00"), None);
    }

    #[test]
    fn test_parse_query_date() {
        assert_eq!(parse_query_date("2026-03-10").unwrap(), ymd(2026, 3, 10));
        assert!(matches!(parse_query_date("2026-3"), Err(CalendarError::InvalidDate(_))));
    }

    #[test]
    fn test_query_date_local_midnight_any_offset() {
        let midnight = ymd(2026, 1, 6).and_time(NaiveTime::MIN);
        for hours in -12..=14 {
            let offset = FixedOffset::east_opt(hours * 3600).unwrap();
            let local = offset.from_local_datetime(&midnight).unwrap();
            assert_eq!(query_date(&local), ymd(2026, 1, 6), "offset {hours}h");
        }
    }
}
