//! Departure-weekday policy for destinations with fixed flight days
//!
//! Some packages only depart on set weekdays from a fixed hub, e.g. the
//! Istanbul circuit leaves Bogotá on Mondays and Tuesdays. Flight-day tiers
//! for such a destination must land on one of those weekdays.

use crate::tier::PriceTier;
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDayPolicy {
    /// Departure airport code, e.g. "BOG"
    pub hub: String,

    /// Weekdays with an outbound flight
    pub weekdays: Vec<Weekday>,

    /// Badge for generated flight-day tiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FlightDayPolicy {
    pub fn new(hub: impl Into<String>, weekdays: Vec<Weekday>) -> Self {
        Self {
            hub: hub.into(),
            weekdays,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Is there an outbound flight on `date`?
    pub fn allows(&self, date: NaiveDate) -> bool {
        self.weekdays.contains(&date.weekday())
    }

    /// Every flight day in `start..=end`
    pub fn flight_days_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        start.iter_days().take_while(|d| *d <= end).filter(|d| self.allows(*d)).collect()
    }

    /// Flight-day tiers for every flight day in `start..=end`
    pub fn generate_tiers(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        price: Decimal,
    ) -> Vec<PriceTier> {
        self.flight_days_between(start, end)
            .into_iter()
            .map(|day| PriceTier {
                price,
                ..PriceTier::flight_day(day.format("%Y-%m-%d").to_string(), self.label.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turkey() -> FlightDayPolicy {
        FlightDayPolicy::new("BOG", vec![Weekday::Mon, Weekday::Tue]).with_label("🇹🇷 BOG")
    }

    #[test]
    fn test_allows_weekdays() {
        let policy = turkey();
        // 2026-01-05 is a Monday
        assert!(policy.allows(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
        assert!(policy.allows(NaiveDate::from_ymd_opt(2026, 1, 6).unwrap()));
        assert!(!policy.allows(NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()));
    }

    #[test]
    fn test_flight_days_come_in_pairs() {
        let policy = turkey();
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let days = policy.flight_days_between(start, end);

        assert_eq!(days.len(), 8);
        for pair in days.chunks(2) {
            assert_eq!(pair[0].weekday(), Weekday::Mon);
            assert_eq!(pair[1], pair[0].succ_opt().unwrap());
        }
    }

    #[test]
    fn test_generate_tiers() {
        let policy = turkey();
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
        let tiers = policy.generate_tiers(start, end, Decimal::from(120));

        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[0].date.as_deref(), Some("2026-01-05"));
        assert!(tiers.iter().all(|t| t.is_flight_day && t.label() == Some("🇹🇷 BOG")));
        assert!(tiers.iter().all(|t| t.price == Decimal::from(120)));
    }

    #[test]
    fn test_deserialize_weekday_names() {
        let policy: FlightDayPolicy =
            serde_json::from_str(r#"{"hub": "BOG", "weekdays": ["Mon", "Tue"]}"#).unwrap();
        assert_eq!(policy.weekdays, vec![Weekday::Mon, Weekday::Tue]);
        assert_eq!(policy.label, None);
    }
}
