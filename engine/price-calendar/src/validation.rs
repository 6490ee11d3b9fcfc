//! Authoring-time checks for tier lists
//!
//! The resolver tolerates bad data (malformed dates never match, duplicates
//! are all surfaced). These checks let the catalog surface report or fix
//! those problems when tiers are written.

use crate::policy::FlightDayPolicy;
use crate::tier::{PriceTier, TierKind};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use tracing::debug;

/// What to do with several tiers sharing one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep every tier; the resolver reports them all
    #[default]
    SurfaceAll,
    /// Keep the earliest tier per date
    FirstWins,
    /// Keep the latest tier per date
    LastWins,
}

/// A single problem found in a tier list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierIssue {
    MalformedDate { index: usize, raw: Option<String> },
    DuplicateDate {
        date: NaiveDate,
        indices: Vec<usize>,
    },
    FlightDayOffPolicy {
        index: usize,
        date: NaiveDate,
        weekday: Weekday,
    },
    NegativePrice { index: usize },
}

impl fmt::Display for TierIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierIssue::MalformedDate { index, raw: Some(raw) } => {
                write!(f, "tier #{index}: unparseable date '{raw}'")
            }
            TierIssue::MalformedDate { index, raw: None } => {
                write!(f, "tier #{index}: missing date")
            }
            TierIssue::DuplicateDate { date, indices } => {
                write!(f, "{date}: {} tiers share this date (#{indices:?})", indices.len())
            }
            TierIssue::FlightDayOffPolicy { index, date, weekday } => {
                write!(
                    f,
                    "tier #{index}: flight day {date} falls on {weekday}, no departure that day"
                )
            }
            TierIssue::NegativePrice { index } => write!(f, "tier #{index}: negative price"),
        }
    }
}

/// Result of validating one tier list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub tier_count: usize,
    pub issues: Vec<TierIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_duplicates(&self) -> bool {
        self.issues.iter().any(|i| matches!(i, TierIssue::DuplicateDate { .. }))
    }
}

/// Check a tier list for malformed dates, duplicates, off-policy flight days
/// and negative prices.
///
/// Issues are listed per tier in source order, with duplicate groups last in
/// date order.
pub fn validate_tiers(tiers: &[PriceTier], policy: Option<&FlightDayPolicy>) -> ValidationReport {
    let mut issues = Vec::new();
    let mut by_date: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();

    for (index, tier) in tiers.iter().enumerate() {
        if tier.price.is_sign_negative() && !tier.price.is_zero() {
            issues.push(TierIssue::NegativePrice { index });
        }

        let Some(date) = tier.calendar_date() else {
            issues.push(TierIssue::MalformedDate {
                index,
                raw: tier.date.clone(),
            });
            continue;
        };

        if tier.kind() == TierKind::FlightDay {
            if let Some(policy) = policy {
                if !policy.allows(date) {
                    issues.push(TierIssue::FlightDayOffPolicy {
                        index,
                        date,
                        weekday: date.weekday(),
                    });
                }
            }
        }

        by_date.entry(date).or_default().push(index);
    }

    issues.extend(
        by_date
            .into_iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(date, indices)| TierIssue::DuplicateDate { date, indices }),
    );

    debug!("Validated {} tiers, {} issues", tiers.len(), issues.len());
    ValidationReport {
        tier_count: tiers.len(),
        issues,
    }
}

/// Resolve duplicate dates according to `policy`.
///
/// Survivors keep their source order. Tiers without a usable date are never
/// dropped here; [`validate_tiers`] reports them.
pub fn apply_duplicate_policy(tiers: &[PriceTier], policy: DuplicatePolicy) -> Vec<PriceTier> {
    let winners = match policy {
        DuplicatePolicy::SurfaceAll => return tiers.to_vec(),
        DuplicatePolicy::FirstWins => first_per_date(tiers.iter().enumerate()),
        DuplicatePolicy::LastWins => first_per_date(tiers.iter().enumerate().rev()),
    };

    tiers
        .iter()
        .enumerate()
        .filter(|(i, _)| winners.contains(i))
        .map(|(_, t)| t.clone())
        .collect()
}

/// Indices of the first tier seen per date, plus every undated tier
fn first_per_date<'a>(tiers: impl Iterator<Item = (usize, &'a PriceTier)>) -> HashSet<usize> {
    let mut seen = HashSet::new();
    tiers
        .filter(|(_, t)| t.calendar_date().map_or(true, |d| seen.insert(d)))
        .map(|(i, _)| i)
        .collect()
}
