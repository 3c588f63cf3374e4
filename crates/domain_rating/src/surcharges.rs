//! Surcharge engine
//!
//! Evaluates a fixed catalog of eight surcharge rules against the profile.
//! Surcharges are strictly additive percentages of the basis premium (the
//! post-discount premium) and are never capped in aggregate: a high-risk
//! profile can legitimately accumulate more than 100% surcharge.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rating_kernel::{Money, Percent};

use crate::driver::{within_lookback, DriverRiskScorer};
use crate::location::{crime_rate_factor, HIGH_CRIME_THRESHOLD};
use crate::profile::{RiskProfile, TerritoryType, ViolationSeverity};
use crate::result::SurchargeRecord;
use crate::tables::{default_tables, RatingTables};

/// Years of accident/violation history the surcharge rules look back over
const SURCHARGE_LOOKBACK_YEARS: u32 = 3;
/// Percentage added per at-fault accident
const PER_ACCIDENT_PERCENT: Decimal = dec!(30);

/// Result of the surcharge stage
#[derive(Debug, Clone)]
pub struct SurchargeOutcome {
    /// Applied surcharges
    pub surcharges: Vec<SurchargeRecord>,
    /// Sum of surcharge percentages (uncapped)
    pub total_percentage: Percent,
    /// Sum of surcharge amounts
    pub total_amount: Money,
    /// Basis premium plus the total surcharge amount
    pub premium_after_surcharges: Money,
}

/// Evaluates the surcharge catalog
#[derive(Debug, Clone)]
pub struct SurchargeEngine {
    tables: Arc<RatingTables>,
}

impl SurchargeEngine {
    /// Creates an engine backed by the default reference tables
    pub fn new() -> Self {
        Self {
            tables: default_tables(),
        }
    }

    /// Creates an engine backed by custom tables
    pub fn with_tables(tables: Arc<RatingTables>) -> Self {
        Self { tables }
    }

    /// Applies all triggered surcharges to the basis premium
    pub fn apply(&self, profile: &RiskProfile, basis: Money) -> SurchargeOutcome {
        let mut surcharges = Vec::new();
        let mut push = |code: &str, name: &str, points: Decimal| {
            let percentage = Percent::new(points);
            surcharges.push(SurchargeRecord {
                code: code.to_string(),
                name: name.to_string(),
                percentage,
                amount: percentage.of(basis),
            });
        };

        if let Some(pct) = Self::young_driver_percent(profile.driver.age) {
            push("YOUNG_DRIVER", "Young Driver Surcharge", pct);
        }

        if let Some(pct) = Self::inexperienced_percent(profile) {
            push("INEXPERIENCED_DRIVER", "Inexperienced Driver Surcharge", pct);
        }

        let at_fault_count = Self::recent_at_fault_accidents(profile);
        if at_fault_count > 0 {
            push(
                "AT_FAULT_ACCIDENT",
                "At-Fault Accident Surcharge",
                PER_ACCIDENT_PERCENT * Decimal::from(at_fault_count),
            );
        }

        let violation_pct = Self::violations_percent(profile);
        if !violation_pct.is_zero() {
            push("VIOLATIONS", "Moving Violation Surcharge", violation_pct);
        }

        if let Some(pct) = Self::high_mileage_percent(profile.annual_mileage) {
            push("HIGH_MILEAGE", "High Mileage Surcharge", pct);
        }

        if let Some(pct) = self.performance_percent(profile) {
            push(
                "HIGH_PERFORMANCE",
                "High Performance Vehicle Surcharge",
                pct,
            );
        }

        if let Some(pct) = Self::location_percent(profile) {
            push("HIGH_RISK_LOCATION", "High Risk Location Surcharge", pct);
        }

        if let Some(pct) = Self::poor_credit_percent(profile.driver.credit_score) {
            push("POOR_CREDIT", "Credit History Surcharge", pct);
        }

        let total_percentage: Percent = surcharges.iter().map(|s| s.percentage).sum();
        let total_amount: Money = surcharges.iter().map(|s| s.amount).sum();

        SurchargeOutcome {
            premium_after_surcharges: basis + total_amount,
            surcharges,
            total_percentage,
            total_amount,
        }
    }

    fn young_driver_percent(age: u32) -> Option<Decimal> {
        match age {
            a if a < 18 => Some(dec!(50)),
            a if a < 21 => Some(dec!(35)),
            a if a < 25 => Some(dec!(20)),
            _ => None,
        }
    }

    fn inexperienced_percent(profile: &RiskProfile) -> Option<Decimal> {
        let years = DriverRiskScorer::effective_years_licensed(
            profile.driver.age,
            profile.driver.years_licensed,
        );
        match years {
            y if y < 1 => Some(dec!(30)),
            y if y < 3 => Some(dec!(20)),
            y if y < 5 => Some(dec!(10)),
            _ => None,
        }
    }

    fn recent_at_fault_accidents(profile: &RiskProfile) -> usize {
        profile
            .driver
            .accidents
            .iter()
            .filter(|a| a.at_fault)
            .filter(|a| within_lookback(a.date, profile.effective_date, SURCHARGE_LOOKBACK_YEARS))
            .count()
    }

    /// Sums per-violation percentages by severity over the lookback window
    fn violations_percent(profile: &RiskProfile) -> Decimal {
        profile
            .driver
            .violations
            .iter()
            .filter(|v| within_lookback(v.date, profile.effective_date, SURCHARGE_LOOKBACK_YEARS))
            .map(|v| match v.violation_type.severity() {
                ViolationSeverity::Major => dec!(50),
                ViolationSeverity::Moderate => dec!(25),
                ViolationSeverity::Minor => dec!(15),
            })
            .sum()
    }

    fn high_mileage_percent(annual_mileage: Option<u32>) -> Option<Decimal> {
        match annual_mileage? {
            m if m > 20_000 => Some(dec!(20)),
            m if m > 15_000 => Some(dec!(10)),
            _ => None,
        }
    }

    fn performance_percent(&self, profile: &RiskProfile) -> Option<Decimal> {
        let vehicle = &profile.vehicle;
        let tables = &self.tables.vehicle;
        if tables.is_exotic_make(&vehicle.make) {
            Some(dec!(40))
        } else if tables.is_performance(&vehicle.make, &vehicle.model) {
            Some(dec!(20))
        } else {
            None
        }
    }

    fn location_percent(profile: &RiskProfile) -> Option<Decimal> {
        let urban = profile.location.territory_type == Some(TerritoryType::Urban);
        let high_crime = crime_rate_factor(&profile.location.zip_code) >= HIGH_CRIME_THRESHOLD;

        match (urban, high_crime) {
            (true, true) => Some(dec!(25)),
            (true, false) => Some(dec!(15)),
            (false, true) => Some(dec!(10)),
            (false, false) => None,
        }
    }

    fn poor_credit_percent(credit_score: Option<u32>) -> Option<Decimal> {
        match credit_score? {
            s if s < 550 => Some(dec!(30)),
            s if s < 620 => Some(dec!(20)),
            s if s < 680 => Some(dec!(10)),
            _ => None,
        }
    }
}

impl Default for SurchargeEngine {
    fn default() -> Self {
        Self::new()
    }
}
