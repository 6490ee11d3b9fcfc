use crate::destination::Destination;
use crate::error::{CatalogError, Result};
use price_calendar::{
    apply_duplicate_policy, validate_tiers, PriceTier, ValidationConfig, ValidationReport,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// On-disk shape of a catalog export
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    destinations: Vec<Destination>,
}

/// Destination catalog
///
/// Keeps destinations in their authored order with an id index for lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    destinations: Vec<Destination>,

    /// Map from destination id to position in `destinations`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids
    pub fn from_destinations(destinations: Vec<Destination>) -> Result<Self> {
        let mut index = HashMap::with_capacity(destinations.len());
        for (position, destination) in destinations.iter().enumerate() {
            if index.insert(destination.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateDestination(destination.id.clone()));
            }
        }
        Ok(Self {
            destinations,
            index,
        })
    }

    /// Parse a `{"destinations": [...]}` document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_destinations(document.destinations)
    }

    /// Load a catalog export from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading destination catalog from: {:?}", path.as_ref());

        let json_content = std::fs::read_to_string(&path)?;
        let catalog = Self::from_json_str(&json_content)?;

        let tier_count: usize = catalog.destinations.iter().map(|d| d.price_tiers.len()).sum();
        info!("Loaded {} destinations with {} price tiers", catalog.len(), tier_count);
        Ok(catalog)
    }

    /// Serialize the catalog back to its document shape
    pub fn to_json_string(&self) -> Result<String> {
        let document = CatalogDocument {
            destinations: self.destinations.clone(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.index.get(id).map(|&position| &self.destinations[position])
    }

    /// Like [`get`](Self::get) but unknown ids are an error
    pub fn require(&self, id: &str) -> Result<&Destination> {
        self.get(id).ok_or_else(|| CatalogError::DestinationNotFound(id.to_string()))
    }

    /// Tier lists for a combined itinerary, tagged with destination names and
    /// in the order of `ids`
    pub fn tier_lists_for<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Vec<PriceTier>>> {
        ids.iter().map(|id| self.require(id.as_ref()).map(Destination::tagged_tiers)).collect()
    }

    /// Replace a destination's whole tier list, as the admin editor does.
    ///
    /// The list is validated against the destination's flight policy. With
    /// `reject_duplicates` set, duplicate dates refuse the write; otherwise the
    /// configured duplicate policy is applied before storing.
    pub fn replace_price_tiers(
        &mut self,
        id: &str,
        tiers: Vec<PriceTier>,
        rules: &ValidationConfig,
    ) -> Result<ValidationReport> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| CatalogError::DestinationNotFound(id.to_string()))?;
        let destination = &mut self.destinations[position];

        let report = validate_tiers(&tiers, destination.flight_policy.as_ref());
        if rules.reject_duplicates && report.has_duplicates() {
            return Err(CatalogError::InvalidTiers {
                destination: id.to_string(),
                issues: report.issues,
            });
        }

        for issue in &report.issues {
            warn!("Price tiers for {}: {}", id, issue);
        }

        destination.price_tiers = apply_duplicate_policy(&tiers, rules.duplicate_policy);
        info!(
            "Replaced price tiers for {}: {} submitted, {} stored",
            id,
            tiers.len(),
            destination.price_tiers.len()
        );
        Ok(report)
    }

    /// Validation report for every destination, in catalog order
    pub fn validate_all(&self) -> Vec<(String, ValidationReport)> {
        self.destinations
            .iter()
            .map(|d| (d.id.clone(), validate_tiers(&d.price_tiers, d.flight_policy.as_ref())))
            .collect()
    }
}
