//! Calendar month pages

use crate::error::{CalendarError, Result};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// A single visible month of the calendar.
///
/// Always a month chrono can represent; serialized as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// Create a month, validating `month` is 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| CalendarError::InvalidMonth(format!("{year}-{month:02}")))
    }

    /// Parse `YYYY-MM`
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || CalendarError::InvalidMonth(raw.to_string());
        let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }

    /// Month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        // Only the last month chrono supports has no successor
        self.next()
            .and_then(|next| next.first.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Every day of the month in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day();
        self.first.iter_days().take_while(move |d| *d <= last)
    }

    /// Following month, `None` past the end of the supported calendar
    pub fn next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
    }

    /// Up to `count` consecutive months starting with this one
    pub fn span(&self, count: usize) -> Vec<CalendarMonth> {
        std::iter::successors(Some(*self), CalendarMonth::next)
            .take(count)
            .collect()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl Serialize for CalendarMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse() {
        let march = CalendarMonth::parse("2026-03").unwrap();
        assert_eq!((march.year(), march.month()), (2026, 3));
        assert!(CalendarMonth::parse("2026-13").is_err());
        assert!(CalendarMonth::parse("2026-00").is_err());
        assert!(CalendarMonth::parse("2026").is_err());
        assert!(CalendarMonth::parse("march").is_err());
    }

    #[test]
    fn test_day_bounds() {
        let feb = CalendarMonth::new(2028, 2).unwrap();
        assert_eq!(feb.last_day(), ymd(2028, 2, 29));
        assert_eq!(feb.days().count(), 29);

        let dec = CalendarMonth::new(2026, 12).unwrap();
        assert_eq!(dec.last_day(), ymd(2026, 12, 31));
        assert_eq!(dec.next(), Some(CalendarMonth::new(2027, 1).unwrap()));
    }

    #[test]
    fn test_containing() {
        let month = CalendarMonth::containing(ymd(2026, 3, 17));
        assert_eq!(month.first_day(), ymd(2026, 3, 1));
        assert_eq!(month.to_string(), "2026-03");
    }

    #[test]
    fn test_span_crosses_year() {
        let span = CalendarMonth::new(2026, 11).unwrap().span(3);
        let labels: Vec<String> = span.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["2026-11", "2026-12", "2027-01"]);
    }

    #[test]
    fn test_last_supported_month() {
        let last = CalendarMonth::containing(NaiveDate::MAX);
        assert_eq!(last.next(), None);
        assert_eq!(last.last_day(), NaiveDate::MAX);
        assert_eq!(last.span(5), vec![last]);
    }

    #[test]
    fn test_serializes_as_label() {
        let month = CalendarMonth::new(2026, 3).unwrap();
        assert_eq!(serde_json::to_value(month).unwrap(), "2026-03");
    }
}
