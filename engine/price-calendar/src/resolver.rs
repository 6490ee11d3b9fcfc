//! Price calendar resolution
//!
//! Maps calendar dates to the tiers of one or more destinations and decides
//! what each calendar cell shows. Everything here is a pure function of its
//! arguments; nothing is cached between calls.

use crate::config::{CalendarConfig, DisplayConfig};
use crate::error::{CalendarError, Result};
use crate::format::format_rounded_price;
use crate::month::CalendarMonth;
use crate::tier::{PriceTier, TierKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Primary badge for a calendar cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceBadge {
    /// A flight day; the price is not shown
    FlightDay { label: String },

    /// A priced day. `amount` is exact, `display` is rounded.
    Price {
        amount: Decimal,
        display: String,
        /// Number of matching tiers when more than one applies
        overflow: Option<usize>,
    },
}

impl PriceBadge {
    /// Text drawn in the cell
    pub fn text(&self) -> &str {
        match self {
            PriceBadge::FlightDay { label } => label,
            PriceBadge::Price { display, .. } => display,
        }
    }

    pub fn is_flight_day(&self) -> bool {
        matches!(self, PriceBadge::FlightDay { .. })
    }
}

/// Everything a calendar cell needs to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub matches: Vec<PriceTier>,
    pub badge: Option<PriceBadge>,
    /// Multi-line summary, empty unless several tiers match
    pub tooltip: String,
}

/// One rendered month of the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub month: CalendarMonth,
    pub cells: Vec<DayCell>,
}

impl MonthView {
    /// Cells that carry a badge
    pub fn priced_days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| c.badge.is_some())
    }
}

/// Resolves dates against destination tier lists
#[derive(Debug, Clone, Default)]
pub struct PriceCalendarResolver {
    display: DisplayConfig,
}

impl PriceCalendarResolver {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::new(config.display.clone())
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// All tiers dated `date`, across every list, in source order.
    ///
    /// Tiers whose date is missing or malformed never match. Duplicate dates
    /// within one list are all returned.
    pub fn tiers_for_date<L: AsRef<[PriceTier]>>(
        &self,
        lists: &[L],
        date: NaiveDate,
    ) -> Vec<PriceTier> {
        lists
            .iter()
            .flat_map(|list| list.as_ref().iter())
            .filter(|tier| tier.matches(date))
            .cloned()
            .collect()
    }

    /// Badge for a date's matches.
    ///
    /// A flight day anywhere in `matches` wins over every price. Otherwise the
    /// first match's price is shown rounded, with an overflow count when more
    /// than one tier applies.
    pub fn primary_price_for_date(&self, matches: &[PriceTier]) -> Option<PriceBadge> {
        if let Some(flight) = matches.iter().find(|t| t.kind() == TierKind::FlightDay) {
            let label = flight.label().unwrap_or(&self.display.flight_label).to_string();
            return Some(PriceBadge::FlightDay { label });
        }

        let first = matches.first()?;
        Some(PriceBadge::Price {
            amount: first.price,
            display: self.format_price(first.price),
            overflow: (matches.len() > 1).then_some(matches.len()),
        })
    }

    /// One `"<destination>: <price>"` line per match, or an empty string for
    /// fewer than two matches.
    pub fn tooltip_for_date(&self, matches: &[PriceTier]) -> String {
        if matches.len() < 2 {
            return String::new();
        }

        matches
            .iter()
            .map(|tier| {
                let name = tier
                    .destination_name
                    .as_deref()
                    .unwrap_or(&self.display.destination_fallback);
                format!("{name}: {}", self.format_price(tier.price))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Resolve a single calendar cell
    pub fn resolve_day<L: AsRef<[PriceTier]>>(&self, lists: &[L], date: NaiveDate) -> DayCell {
        let matches = self.tiers_for_date(lists, date);
        trace!("{} tiers match {}", matches.len(), date);
        self.build_cell(date, matches)
    }

    /// Resolve every day in `start..=end`.
    ///
    /// Tier dates are parsed once for the whole range; the cells are identical
    /// to calling [`resolve_day`](Self::resolve_day) per day.
    pub fn resolve_range<L: AsRef<[PriceTier]>>(
        &self,
        lists: &[L],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayCell>> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }

        let mut by_date: BTreeMap<NaiveDate, Vec<PriceTier>> = BTreeMap::new();
        for tier in lists.iter().flat_map(|list| list.as_ref().iter()) {
            match tier.calendar_date() {
                Some(date) if date >= start && date <= end => {
                    by_date.entry(date).or_default().push(tier.clone());
                }
                _ => {}
            }
        }

        let cells: Vec<DayCell> = start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|date| {
                let matches = by_date.remove(&date).unwrap_or_default();
                self.build_cell(date, matches)
            })
            .collect();

        debug!(
            "Resolved {} days from {} to {} across {} tier lists",
            cells.len(),
            start,
            end,
            lists.len()
        );
        Ok(cells)
    }

    /// Resolve `count` consecutive months starting at `first`
    pub fn resolve_months<L: AsRef<[PriceTier]>>(
        &self,
        lists: &[L],
        first: CalendarMonth,
        count: usize,
    ) -> Vec<MonthView> {
        let months = first.span(count);
        let (Some(start), Some(end)) = (months.first(), months.last()) else {
            return Vec::new();
        };

        let mut cells = match self.resolve_range(lists, start.first_day(), end.last_day()) {
            Ok(cells) => cells.into_iter(),
            Err(_) => return Vec::new(),
        };

        months
            .into_iter()
            .map(|month| {
                let days = month.days().count();
                MonthView {
                    month,
                    cells: cells.by_ref().take(days).collect(),
                }
            })
            .collect()
    }

    fn build_cell(&self, date: NaiveDate, matches: Vec<PriceTier>) -> DayCell {
        let badge = self.primary_price_for_date(&matches);
        let tooltip = self.tooltip_for_date(&matches);
        DayCell {
            date,
            matches,
            badge,
            tooltip,
        }
    }

    fn format_price(&self, amount: Decimal) -> String {
        format_rounded_price(
            amount,
            &self.display.currency_symbol,
            &self.display.thousands_separator,
        )
    }
}
