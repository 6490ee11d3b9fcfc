//! # Price Calendar
//!
//! Date-keyed price tier resolution for destination pricing calendars.
//!
//! Each destination package carries a list of [`PriceTier`]s, one per travel
//! date. The [`PriceCalendarResolver`] maps a calendar date (or a visible
//! range of months) to the tiers that apply across one or more destinations,
//! and decides which badge a calendar cell shows: a flight-day label, a
//! rounded price, or a price plus an overflow count when several
//! destinations price the same day.
//!
//! Dates are always compared as plain year/month/day triples. A stored
//! `"2026-01-06T00:00:00.000Z"` is January 6th no matter which offset the
//! caller lives in.

pub mod config;
pub mod date;
pub mod error;
pub mod format;
pub mod month;
pub mod policy;
pub mod resolver;
pub mod tier;
pub mod validation;


pub use config::{CalendarConfig, DisplayConfig, ValidationConfig, ViewConfig};
pub use date::{parse_calendar_date, query_date};
pub use error::{CalendarError, Result};
pub use format::format_rounded_price;
pub use month::CalendarMonth;
pub use policy::FlightDayPolicy;
pub use resolver::{DayCell, MonthView, PriceBadge, PriceCalendarResolver};
pub use tier::{PriceTier, TierKind};
pub use validation::{
    apply_duplicate_policy, validate_tiers, DuplicatePolicy, TierIssue, ValidationReport,
};

/// Current version of the price calendar
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Badge shown on flight days whose tier has no label of its own
pub const DEFAULT_FLIGHT_LABEL: &str = "✈";

/// Tooltip label for tiers that carry no destination name
pub const DEFAULT_DESTINATION_LABEL: &str = "Destination";

/// Months shown side by side in the calendar view
pub const DEFAULT_VISIBLE_MONTHS: usize = 2;
