//! Error types for the trip catalog

use chrono::NaiveDate;
use price_calendar::{CalendarError, TierIssue};
use thiserror::Error;

/// Result type for catalog and quote operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur in catalog and quote operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    #[error("Destination not found: {0}")]
    DestinationNotFound(String),

    #[error("Duplicate destination id: {0}")]
    DuplicateDestination(String),

    #[error("Rejected price tiers for {destination}: {} issues", .issues.len())]
    InvalidTiers {
        destination: String,
        issues: Vec<TierIssue>,
    },

    #[error("No priced tier for {destination} on {date}")]
    NoPriceForDate {
        destination: String,
        date: NaiveDate,
    },

    #[error("Quote has no destinations")]
    EmptyQuote,

    #[error("Quote needs at least one passenger")]
    NoPassengers,

    #[error("Amount out of range: {0}")]
    AmountOverflow(String),
}
