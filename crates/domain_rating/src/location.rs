//! Location risk scorer
//!
//! Produces a multiplier from the garaging state, the ZIP-derived region,
//! the territory type, and a crime-risk index. The ZIP-region and crime
//! mappings are placeholders for a real territory-rating/crime-data
//! integration and live behind the location tables so they can be swapped
//! without touching the orchestrator.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::factors::FactorBreakdown;
use crate::profile::{LocationProfile, TerritoryType};
use crate::tables::{default_tables, RatingTables};

/// Threshold above which the crime index is considered high-risk
pub const HIGH_CRIME_THRESHOLD: Decimal = dec!(1.10);

/// Derives the crime-risk index deterministically from a ZIP code
///
/// Stands in for a crime-statistics provider: the ZIP's digits are folded
/// into a hash and reduced into [0.95, 1.15] in cent steps, so the same ZIP
/// always yields the same index.
pub fn crime_rate_factor(zip_code: &str) -> Decimal {
    let hash = zip_code
        .trim()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.wrapping_mul(31).wrapping_add(d as u64));

    dec!(0.95) + Decimal::new((hash % 21) as i64, 2)
}

/// Scores the location dimension of a risk profile
#[derive(Debug, Clone)]
pub struct LocationRiskScorer {
    tables: Arc<RatingTables>,
}

impl LocationRiskScorer {
    /// Creates a scorer backed by the default reference tables
    pub fn new() -> Self {
        Self {
            tables: default_tables(),
        }
    }

    /// Creates a scorer backed by custom tables
    pub fn with_tables(tables: Arc<RatingTables>) -> Self {
        Self { tables }
    }

    /// Scores a location profile
    ///
    /// An unlisted state is not an error: the neutral factor is substituted
    /// and the fallback is logged.
    pub fn score(&self, location: &LocationProfile) -> FactorBreakdown {
        let mut breakdown = FactorBreakdown::new();

        let state_factor = match self.tables.location.state_factor(&location.state_code) {
            Some(factor) => factor,
            None => {
                warn!(
                    state = %location.state_code,
                    "state not in factor table, using neutral default"
                );
                dec!(1.0)
            }
        };
        breakdown.push("stateFactor", state_factor);
        breakdown.push(
            "zipCodeFactor",
            self.tables.location.zip_region_factor(&location.zip_code),
        );
        breakdown.push(
            "territoryTypeFactor",
            Self::territory_factor(location.territory_type),
        );
        breakdown.push("crimeRateFactor", crime_rate_factor(&location.zip_code));

        breakdown
    }

    fn territory_factor(territory: Option<TerritoryType>) -> Decimal {
        match territory {
            Some(TerritoryType::Urban) => dec!(1.25),
            Some(TerritoryType::Suburban) => dec!(1.0),
            Some(TerritoryType::Rural) => dec!(0.85),
            None => dec!(1.0),
        }
    }
}

impl Default for LocationRiskScorer {
    fn default() -> Self {
        Self::new()
    }
}
