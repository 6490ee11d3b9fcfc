//! Trip Catalog - destination packages and quote pricing
//!
//! Holds the destination catalog advisors quote from and prices
//! multi-destination quotes against each destination's price tiers.
//! Totals are exact decimals; only display strings are rounded.

mod catalog;
mod destination;
mod error;
mod quote;


pub use catalog::Catalog;
pub use destination::{Destination, Hotel, ItineraryDay};
pub use error::{CatalogError, Result};
pub use quote::{price_quote, QuoteLeg, QuoteLine, QuoteRequest, QuoteSummary};

/// Re-export commonly used types
pub use price_calendar::{CalendarConfig, PriceCalendarResolver, PriceTier, ValidationReport};
