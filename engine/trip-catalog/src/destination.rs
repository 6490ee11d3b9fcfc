//! Destination package records

use price_calendar::{FlightDayPolicy, PriceTier};
use serde::{Deserialize, Serialize};

/// A sellable travel package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Catalog id (e.g. "turkey-classic")
    pub id: String,

    /// Display name (e.g. "Turquía Clásica")
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default)]
    pub nights: u32,

    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,

    #[serde(default)]
    pub hotels: Vec<Hotel>,

    #[serde(default)]
    pub inclusions: Vec<String>,

    #[serde(default)]
    pub exclusions: Vec<String>,

    /// Pricing calendar, one tier per travel date
    #[serde(default)]
    pub price_tiers: Vec<PriceTier>,

    /// Fixed departure weekdays, if the package has them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_policy: Option<FlightDayPolicy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub city: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Destination {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: None,
            nights: 0,
            itinerary: Vec::new(),
            hotels: Vec::new(),
            inclusions: Vec::new(),
            exclusions: Vec::new(),
            price_tiers: Vec::new(),
            flight_policy: None,
        }
    }

    pub fn with_tiers(mut self, tiers: Vec<PriceTier>) -> Self {
        self.price_tiers = tiers;
        self
    }

    pub fn with_flight_policy(mut self, policy: FlightDayPolicy) -> Self {
        self.flight_policy = Some(policy);
        self
    }

    /// Price tiers tagged with this destination's name.
    ///
    /// A name already present on a tier is kept.
    pub fn tagged_tiers(&self) -> Vec<PriceTier> {
        self.price_tiers
            .iter()
            .map(|tier| {
                let mut tier = tier.clone();
                if tier.destination_name.is_none() {
                    tier.destination_name = Some(self.name.clone());
                }
                tier
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_tagged_tiers_keep_existing_names() {
        let destination = Destination::new("cusco", "Cusco Mágico").with_tiers(vec![
            PriceTier::priced("2026-03-10", Decimal::from(500)),
            PriceTier::priced("2026-03-11", Decimal::from(510)).with_destination("Valle Sagrado"),
        ]);

        let names: Vec<Option<String>> =
            destination.tagged_tiers().into_iter().map(|t| t.destination_name).collect();
        assert_eq!(
            names,
            vec![Some("Cusco Mágico".to_string()), Some("Valle Sagrado".to_string())]
        );
        assert!(destination.price_tiers[0].destination_name.is_none());
    }

    #[test]
    fn test_minimal_record_deserializes() {
        let destination: Destination =
            serde_json::from_str(r#"{"id": "cancun", "name": "Cancún"}"#).unwrap();
        assert_eq!(destination, Destination::new("cancun", "Cancún"));
    }
}
