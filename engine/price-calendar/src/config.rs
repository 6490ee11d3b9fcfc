//! Configuration for the price calendar

use crate::error::{CalendarError, Result};
use crate::validation::DuplicatePolicy;
use crate::{DEFAULT_DESTINATION_LABEL, DEFAULT_FLIGHT_LABEL, DEFAULT_VISIBLE_MONTHS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for calendar rendering and tier authoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalendarConfig {
    /// Badge and tooltip formatting
    pub display: DisplayConfig,

    /// Tier authoring rules
    pub validation: ValidationConfig,

    /// Calendar view layout
    pub view: ViewConfig,
}

/// Badge and tooltip formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Badge for flight days whose tier has no label
    pub flight_label: String,

    /// Tooltip name for tiers without a destination
    pub destination_fallback: String,

    /// Prefix for rendered prices
    pub currency_symbol: String,

    /// Separator between thousands groups
    pub thousands_separator: String,
}

/// Tier authoring rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// How duplicate dates are resolved when tiers are written
    pub duplicate_policy: DuplicatePolicy,

    /// Refuse tier lists containing duplicate dates outright
    pub reject_duplicates: bool,
}

/// Calendar view layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Months rendered side by side
    pub months_visible: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            flight_label: DEFAULT_FLIGHT_LABEL.to_string(),
            destination_fallback: DEFAULT_DESTINATION_LABEL.to_string(),
            currency_symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            months_visible: DEFAULT_VISIBLE_MONTHS,
        }
    }
}

impl CalendarConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a key lookup, starting from defaults.
    ///
    /// Recognised keys all start with `PRICE_CALENDAR_`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(label) = lookup("PRICE_CALENDAR_FLIGHT_LABEL") {
            config.display.flight_label = label;
        }

        if let Some(label) = lookup("PRICE_CALENDAR_DESTINATION_LABEL") {
            config.display.destination_fallback = label;
        }

        if let Some(symbol) = lookup("PRICE_CALENDAR_CURRENCY_SYMBOL") {
            config.display.currency_symbol = symbol;
        }

        if let Some(separator) = lookup("PRICE_CALENDAR_THOUSANDS_SEPARATOR") {
            config.display.thousands_separator = separator;
        }

        if let Some(policy) = lookup("PRICE_CALENDAR_DUPLICATE_POLICY") {
            config.validation.duplicate_policy = match policy.trim() {
                "surface_all" => DuplicatePolicy::SurfaceAll,
                "first_wins" => DuplicatePolicy::FirstWins,
                "last_wins" => DuplicatePolicy::LastWins,
                other => {
                    return Err(CalendarError::Configuration(format!(
                        "unknown duplicate policy '{other}'"
                    )))
                }
            };
        }

        if let Some(reject) = lookup("PRICE_CALENDAR_REJECT_DUPLICATES") {
            config.validation.reject_duplicates = reject.trim().parse().map_err(|_| {
                CalendarError::Configuration(format!("invalid boolean '{reject}'"))
            })?;
        }

        if let Some(months) = lookup("PRICE_CALENDAR_VISIBLE_MONTHS") {
            config.view.months_visible = months.trim().parse().map_err(|_| {
                CalendarError::Configuration(format!("invalid month count '{months}'"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CalendarConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Override the visible month count within the configured bounds
    pub fn with_months_visible(mut self, months: usize) -> Result<Self> {
        self.view.months_visible = months;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.flight_label.trim().is_empty() {
            return Err(CalendarError::Configuration("flight label must not be empty".into()));
        }
        if !(1..=12).contains(&self.view.months_visible) {
            return Err(CalendarError::Configuration(format!(
                "months_visible must be between 1 and 12, got {}",
                self.view.months_visible
            )));
        }
        Ok(())
    }
}
