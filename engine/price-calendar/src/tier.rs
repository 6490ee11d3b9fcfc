//! Price tier data model

use crate::date::parse_calendar_date;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One dated entry in a destination's pricing calendar.
///
/// Serialized the way the catalog stores it: camelCase keys with the key
/// date under `endDate`. Despite the name, `endDate` is the day the tier
/// applies to, not the end of a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTier {
    /// Raw stored date, parsed lazily
    #[serde(rename = "endDate", alias = "date", default)]
    pub date: Option<String>,

    /// Package price in USD, exact to the cent
    #[serde(default)]
    pub price: Decimal,

    /// Mandatory outbound-flight day rather than a priced arrival day
    #[serde(default)]
    pub is_flight_day: bool,

    /// Short badge shown instead of the price on flight days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_label: Option<String>,

    /// Owning destination, set when lists from several destinations are merged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
}

/// Whether a tier prices a day or marks a flight day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierKind {
    Price,
    FlightDay,
}

impl PriceTier {
    /// Create a plain price tier
    pub fn priced(date: impl Into<String>, price: Decimal) -> Self {
        Self {
            date: Some(date.into()),
            price,
            is_flight_day: false,
            flight_label: None,
            destination_name: None,
        }
    }

    /// Create a flight-day tier
    pub fn flight_day(date: impl Into<String>, label: Option<String>) -> Self {
        Self {
            date: Some(date.into()),
            price: Decimal::ZERO,
            is_flight_day: true,
            flight_label: label,
            destination_name: None,
        }
    }

    /// Tag the tier with its destination
    pub fn with_destination(mut self, name: impl Into<String>) -> Self {
        self.destination_name = Some(name.into());
        self
    }

    /// Stored date as a calendar day, `None` when missing or malformed
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_calendar_date)
    }

    /// Does this tier apply to `date`?
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.calendar_date() == Some(date)
    }

    pub fn kind(&self) -> TierKind {
        if self.is_flight_day {
            TierKind::FlightDay
        } else {
            TierKind::Price
        }
    }

    /// Flight label, ignoring blank strings
    pub fn label(&self) -> Option<&str> {
        self.flight_label.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}
