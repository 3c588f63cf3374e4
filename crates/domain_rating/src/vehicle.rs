//! Vehicle risk scorer
//!
//! Produces a multiplier from vehicle age, make/model classification,
//! performance class, safety rating, anti-theft presence, and market value
//! band. Each rule contributes one named sub-factor; the scorer's total is
//! their product.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::factors::FactorBreakdown;
use crate::profile::VehicleProfile;
use crate::tables::{default_tables, RatingTables};

/// Scores the vehicle dimension of a risk profile
#[derive(Debug, Clone)]
pub struct VehicleRiskScorer {
    tables: Arc<RatingTables>,
}

impl VehicleRiskScorer {
    /// Creates a scorer backed by the default reference tables
    pub fn new() -> Self {
        Self {
            tables: default_tables(),
        }
    }

    /// Creates a scorer backed by custom tables (new policy year, tests)
    pub fn with_tables(tables: Arc<RatingTables>) -> Self {
        Self { tables }
    }

    /// Scores a vehicle profile
    ///
    /// Vehicle age is anchored to the policy effective date, not the wall
    /// clock, so identical profiles always rate identically.
    pub fn score(&self, vehicle: &VehicleProfile, effective_date: NaiveDate) -> FactorBreakdown {
        let mut breakdown = FactorBreakdown::new();

        let age = effective_date.year() - vehicle.year;
        breakdown.push("ageFactor", Self::age_factor(age));
        breakdown.push("makeModelFactor", self.make_model_factor(vehicle));
        breakdown.push("performanceFactor", self.performance_factor(vehicle));
        breakdown.push("safetyFactor", Self::safety_factor(vehicle.safety_rating));
        breakdown.push(
            "antiTheftFactor",
            if vehicle.anti_theft { dec!(0.95) } else { dec!(1.00) },
        );
        breakdown.push(
            "marketValueFactor",
            Self::market_value_factor(vehicle.market_value),
        );

        breakdown
    }

    fn age_factor(age: i32) -> Decimal {
        match age {
            a if a <= 3 => dec!(1.00),
            a if a <= 5 => dec!(1.05),
            a if a <= 10 => dec!(1.20),
            a if a <= 15 => dec!(1.30),
            _ => dec!(1.40),
        }
    }

    /// Make classification takes precedence over the model check: a luxury
    /// or economy make is rated as such even for a high-theft model name.
    fn make_model_factor(&self, vehicle: &VehicleProfile) -> Decimal {
        let tables = &self.tables.vehicle;
        if tables.is_luxury_make(&vehicle.make) {
            dec!(1.30)
        } else if tables.is_economy_make(&vehicle.make) {
            dec!(0.90)
        } else if tables.is_high_theft_model(&vehicle.model) {
            dec!(1.15)
        } else {
            dec!(1.00)
        }
    }

    fn performance_factor(&self, vehicle: &VehicleProfile) -> Decimal {
        let tables = &self.tables.vehicle;
        if tables.is_exotic_make(&vehicle.make) {
            dec!(2.00)
        } else if tables.is_performance(&vehicle.make, &vehicle.model) {
            dec!(1.50)
        } else if vehicle
            .body_type
            .as_deref()
            .is_some_and(|b| b.eq_ignore_ascii_case("coupe"))
        {
            dec!(1.20)
        } else {
            dec!(1.00)
        }
    }

    fn safety_factor(rating: Option<u8>) -> Decimal {
        match rating {
            Some(5) => dec!(0.85),
            Some(4) => dec!(0.90),
            Some(3) => dec!(0.95),
            _ => dec!(1.00),
        }
    }

    fn market_value_factor(value: Option<Decimal>) -> Decimal {
        match value {
            None => dec!(1.0),
            Some(v) if v < dec!(10_000) => dec!(0.90),
            Some(v) if v < dec!(30_000) => dec!(1.00),
            Some(v) if v < dec!(60_000) => dec!(1.15),
            Some(_) => dec!(1.30),
        }
    }
}

impl Default for VehicleRiskScorer {
    fn default() -> Self {
        Self::new()
    }
}
