//! Error types for the price calendar

use thiserror::Error;

/// Result type for price calendar operations
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Errors raised while loading tiers or configuration.
///
/// Resolution itself never fails: malformed tier dates are non-matches.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}
