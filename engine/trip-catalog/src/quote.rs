//! Multi-destination quote pricing
//!
//! Each leg of a quote starts on a date; the leg's unit price is the first
//! non-flight-day tier of its destination on that date. Totals stay exact.

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use chrono::NaiveDate;
use price_calendar::{format_rounded_price, PriceCalendarResolver, TierKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// An advisor's quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub passengers: u32,
    pub legs: Vec<QuoteLeg>,
}

/// One destination of the trip and the date it starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLeg {
    pub destination_id: String,
    pub start_date: NaiveDate,
}

/// Priced leg of a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub destination_id: String,
    pub destination_name: String,
    pub start_date: NaiveDate,
    pub unit_price: Decimal,
    pub passengers: u32,
    pub subtotal: Decimal,
}

/// Priced quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub client_name: Option<String>,
    pub lines: Vec<QuoteLine>,
    /// Exact sum of all subtotals
    pub total: Decimal,
    /// Rounded total for display
    pub total_display: String,
}

impl QuoteRequest {
    pub fn new(passengers: u32) -> Self {
        Self {
            client_name: None,
            passengers,
            legs: Vec::new(),
        }
    }

    pub fn with_leg(mut self, destination_id: impl Into<String>, start_date: NaiveDate) -> Self {
        self.legs.push(QuoteLeg {
            destination_id: destination_id.into(),
            start_date,
        });
        self
    }
}

/// Price every leg of `request` against the catalog
pub fn price_quote(
    catalog: &Catalog,
    request: &QuoteRequest,
    resolver: &PriceCalendarResolver,
) -> Result<QuoteSummary> {
    if request.legs.is_empty() {
        return Err(CatalogError::EmptyQuote);
    }
    if request.passengers == 0 {
        return Err(CatalogError::NoPassengers);
    }

    let passengers = Decimal::from(request.passengers);
    let mut lines = Vec::with_capacity(request.legs.len());

    for leg in &request.legs {
        let destination = catalog.require(&leg.destination_id)?;
        let lists = [destination.price_tiers.as_slice()];
        let matches = resolver.tiers_for_date(&lists, leg.start_date);

        let unit_price = matches
            .iter()
            .find(|tier| tier.kind() == TierKind::Price)
            .map(|tier| tier.price)
            .ok_or_else(|| CatalogError::NoPriceForDate {
                destination: destination.id.clone(),
                date: leg.start_date,
            })?;

        if matches.len() > 1 {
            debug!(
                "{} tiers match {} on {}, using the first",
                matches.len(),
                destination.id,
                leg.start_date
            );
        }

        let subtotal = unit_price.checked_mul(passengers).ok_or_else(|| {
            CatalogError::AmountOverflow(format!(
                "{} x {} passengers for {}",
                unit_price, request.passengers, destination.id
            ))
        })?;

        lines.push(QuoteLine {
            destination_id: destination.id.clone(),
            destination_name: destination.name.clone(),
            start_date: leg.start_date,
            unit_price,
            passengers: request.passengers,
            subtotal,
        });
    }

    let total = lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.subtotal))
        .ok_or_else(|| CatalogError::AmountOverflow(format!("total of {} legs", lines.len())))?;
    let display = resolver.display();
    let total_display =
        format_rounded_price(total, &display.currency_symbol, &display.thousands_separator);

    info!(
        "Priced quote with {} legs for {} passengers: {}",
        lines.len(),
        request.passengers,
        total
    );
    Ok(QuoteSummary {
        client_name: request.client_name.clone(),
        lines,
        total,
        total_display,
    })
}
