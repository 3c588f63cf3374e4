//! Premium orchestrator
//!
//! Sequences the rating pipeline into one audited result:
//!
//! ```text
//! RiskProfile -> {vehicle, driver, location, coverage scorers}
//!             -> combined factor × base premium = adjusted premium
//!             -> DiscountEngine -> SurchargeEngine -> TaxFeeEngine
//!             -> PremiumCalculationResult
//! ```
//!
//! The orchestrator only sequences and assembles; every business rule lives
//! in the scorers and engines. A failure at any stage aborts the whole
//! calculation with no partial result. The canonical sequencing is:
//! discounts subtracted from, then surcharges added to, the factor-adjusted
//! premium, then taxes and fees appended.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use rating_kernel::Money;

use crate::coverage::CoverageRiskScorer;
use crate::discounts::DiscountEngine;
use crate::driver::DriverRiskScorer;
use crate::error::RatingError;
use crate::location::LocationRiskScorer;
use crate::profile::RiskProfile;
use crate::result::{PremiumCalculationResult, CALCULATION_VERSION};
use crate::surcharges::SurchargeEngine;
use crate::tables::{default_tables, RatingTables};
use crate::taxes::TaxFeeEngine;
use crate::vehicle::VehicleRiskScorer;

/// Orchestrates one premium calculation end to end
///
/// Stateless between invocations; the only held state is the shared
/// read-only reference tables, so one calculator can serve arbitrarily
/// many concurrent calculations without synchronization.
#[derive(Debug, Clone)]
pub struct PremiumCalculator {
    vehicle_scorer: VehicleRiskScorer,
    driver_scorer: DriverRiskScorer,
    location_scorer: LocationRiskScorer,
    coverage_scorer: CoverageRiskScorer,
    discount_engine: DiscountEngine,
    surcharge_engine: SurchargeEngine,
    tax_fee_engine: TaxFeeEngine,
}

impl PremiumCalculator {
    /// Creates a calculator backed by the default reference tables
    pub fn new() -> Self {
        Self::with_tables(default_tables())
    }

    /// Creates a calculator backed by custom tables (new policy year, new
    /// state rollout, tests)
    pub fn with_tables(tables: Arc<RatingTables>) -> Self {
        Self {
            vehicle_scorer: VehicleRiskScorer::with_tables(Arc::clone(&tables)),
            driver_scorer: DriverRiskScorer::new(),
            location_scorer: LocationRiskScorer::with_tables(Arc::clone(&tables)),
            coverage_scorer: CoverageRiskScorer::with_tables(Arc::clone(&tables)),
            discount_engine: DiscountEngine::new(),
            surcharge_engine: SurchargeEngine::with_tables(Arc::clone(&tables)),
            tax_fee_engine: TaxFeeEngine::with_tables(tables),
        }
    }

    /// Calculates the premium for a risk profile
    ///
    /// # Errors
    ///
    /// - [`RatingError::InvalidInput`] when the profile is logically
    ///   inconsistent (empty coverage list, implausible vehicle year, ...)
    /// - [`RatingError::Computation`] on an arithmetic inconsistency that
    ///   should be unreachable with valid input
    pub fn calculate_premium(
        &self,
        profile: &RiskProfile,
    ) -> Result<PremiumCalculationResult, RatingError> {
        self.validate(profile)?;

        // Stage 1: the four risk scorers are independent of each other
        let vehicle_factors = self
            .vehicle_scorer
            .score(&profile.vehicle, profile.effective_date);
        let driver_factors = self
            .driver_scorer
            .score(&profile.driver, profile.effective_date);
        let location_factors = self.location_scorer.score(&profile.location);
        let coverage_assessment = self.coverage_scorer.assess(&profile.coverages);

        let base_premium = coverage_assessment.base_premium;
        let total_factor_multiplier: Decimal = vehicle_factors.total()
            * driver_factors.total()
            * location_factors.total()
            * coverage_assessment.coverage_factor();
        let adjusted_premium = base_premium.multiply(total_factor_multiplier);

        debug!(
            base = %base_premium,
            multiplier = %total_factor_multiplier,
            adjusted = %adjusted_premium,
            "scored risk factors"
        );
        Self::check_basis(adjusted_premium, "adjusted premium")?;

        // Stage 2: discounts against the factor-adjusted premium
        let discount_outcome = self.discount_engine.apply(profile, adjusted_premium);
        Self::check_basis(
            discount_outcome.premium_after_discounts,
            "premium after discounts",
        )?;

        // Stage 3: surcharges against the post-discount premium
        let surcharge_outcome = self
            .surcharge_engine
            .apply(profile, discount_outcome.premium_after_discounts);

        // Stage 4: jurisdiction taxes and fees
        let tax_outcome = self.tax_fee_engine.assess(
            surcharge_outcome.premium_after_surcharges,
            &profile.location.state_code,
        );

        let total_premium = surcharge_outcome.premium_after_surcharges
            + tax_outcome.breakdown.total_taxes_and_fees;
        debug!(total = %total_premium, "calculation complete");

        Ok(PremiumCalculationResult {
            base_premium,
            vehicle_factors,
            driver_factors,
            location_factors,
            coverage_factors: coverage_assessment.breakdown,
            total_factor_multiplier,
            adjusted_premium,
            discounts: discount_outcome.discounts,
            total_discount_percentage: discount_outcome.total_percentage,
            total_discount_amount: discount_outcome.total_amount,
            premium_after_discounts: discount_outcome.premium_after_discounts,
            surcharges: surcharge_outcome.surcharges,
            total_surcharge_percentage: surcharge_outcome.total_percentage,
            total_surcharge_amount: surcharge_outcome.total_amount,
            premium_after_surcharges: surcharge_outcome.premium_after_surcharges,
            taxes_and_fees: tax_outcome.breakdown,
            total_premium,
            warnings: tax_outcome.warning.into_iter().collect(),
            calculated_at: Utc::now(),
            calculation_version: CALCULATION_VERSION.to_string(),
        })
    }

    /// Rejects logically inconsistent input the pipeline cannot price.
    /// Field-level validation is owned by the API layer upstream.
    fn validate(&self, profile: &RiskProfile) -> Result<(), RatingError> {
        if profile.coverages.is_empty() {
            return Err(RatingError::invalid_input(
                "at least one coverage selection is required",
            ));
        }

        let vehicle = &profile.vehicle;
        if vehicle.make.trim().is_empty() || vehicle.model.trim().is_empty() {
            return Err(RatingError::invalid_input("vehicle make and model are required"));
        }
        let max_year = profile.effective_date.year() + 1;
        if vehicle.year < 1900 || vehicle.year > max_year {
            return Err(RatingError::invalid_input(format!(
                "vehicle year {} is outside 1900-{max_year}",
                vehicle.year
            )));
        }
        if vehicle.market_value.is_some_and(|v| v.is_sign_negative()) {
            return Err(RatingError::invalid_input("vehicle market value cannot be negative"));
        }

        if profile.driver.age < 15 {
            return Err(RatingError::invalid_input(format!(
                "driver age {} is below the minimum rateable age",
                profile.driver.age
            )));
        }

        let location = &profile.location;
        if location.zip_code.trim().is_empty() || location.state_code.trim().is_empty() {
            return Err(RatingError::invalid_input("ZIP code and state code are required"));
        }

        if profile.policy_term_months == 0 {
            return Err(RatingError::invalid_input("policy term must be at least one month"));
        }

        Ok(())
    }

    /// A negative basis at any stage indicates a defect, not a business
    /// condition
    fn check_basis(basis: Money, stage: &str) -> Result<(), RatingError> {
        if basis.is_negative() {
            return Err(RatingError::computation(format!("negative {stage}: {basis}")));
        }
        Ok(())
    }

    /// The vehicle scorer, exposed for diagnostic use
    pub fn vehicle_scorer(&self) -> &VehicleRiskScorer {
        &self.vehicle_scorer
    }

    /// The driver scorer, exposed for diagnostic use
    pub fn driver_scorer(&self) -> &DriverRiskScorer {
        &self.driver_scorer
    }

    /// The location scorer, exposed for diagnostic use
    pub fn location_scorer(&self) -> &LocationRiskScorer {
        &self.location_scorer
    }

    /// The coverage scorer, exposed for diagnostic use
    pub fn coverage_scorer(&self) -> &CoverageRiskScorer {
        &self.coverage_scorer
    }
}

impl Default for PremiumCalculator {
    fn default() -> Self {
        Self::new()
    }
}
