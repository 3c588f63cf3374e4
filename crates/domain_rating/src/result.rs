//! Calculation result model
//!
//! The premium calculation result is the audit trail: every factor,
//! discount, surcharge, tax, and fee applied along the pipeline is retained
//! so a reviewer can reproduce the total from the parts. The result is
//! created once per request and never mutated; the caller owns persistence
//! and the association with a quote or policy identifier.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rating_kernel::{Money, Percent};

use crate::factors::FactorBreakdown;

/// Version tag for the rating logic; bumped whenever a rule or reference
/// table change alters produced numbers, so persisted results stay
/// interpretable
pub const CALCULATION_VERSION: &str = "2026.1";

/// One discount applied to the adjusted premium
///
/// The percentage is positive and represents a reduction;
/// `amount = basis × percentage / 100`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountRecord {
    /// Stable rule code (e.g. "GOOD_DRIVER")
    pub code: String,
    /// Human-readable rule name
    pub name: String,
    /// Discount percentage, post cap scaling
    pub percentage: Percent,
    /// Dollar amount against the basis premium
    pub amount: Money,
}

/// One surcharge applied to the post-discount premium
///
/// The percentage is positive and represents an increase;
/// `amount = basis × percentage / 100`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurchargeRecord {
    /// Stable rule code (e.g. "AT_FAULT_ACCIDENT")
    pub code: String,
    /// Human-readable rule name
    pub name: String,
    /// Surcharge percentage
    pub percentage: Percent,
    /// Dollar amount against the basis premium
    pub amount: Money,
}

/// Taxes and fees for the policy jurisdiction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxFeeBreakdown {
    /// Premium tax rate applied
    pub premium_tax_percentage: Percent,
    /// Premium tax amount, rounded to cents
    pub premium_tax_amount: Money,
    /// Flat policy fee
    pub policy_fee_amount: Money,
    /// Flat registration/administrative fee
    pub dmv_fee_amount: Money,
    /// Sum of taxes
    pub total_taxes: Money,
    /// Sum of fees
    pub total_fees: Money,
    /// Taxes plus fees
    pub total_taxes_and_fees: Money,
}

/// Output of the coverage scorer: summed base premium plus the
/// limit/deductible selection factors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageAssessment {
    /// Sum of per-line base rates
    pub base_premium: Money,
    /// Selection factor breakdown (limitFactor, deductibleFactor)
    pub breakdown: FactorBreakdown,
}

impl CoverageAssessment {
    /// The coverage selection multiplier
    pub fn coverage_factor(&self) -> Decimal {
        self.breakdown.total()
    }
}

/// The complete audited result of one premium calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremiumCalculationResult {
    /// Base premium from the selected coverages
    pub base_premium: Money,

    /// Vehicle factor breakdown
    pub vehicle_factors: FactorBreakdown,
    /// Driver factor breakdown
    pub driver_factors: FactorBreakdown,
    /// Location factor breakdown
    pub location_factors: FactorBreakdown,
    /// Coverage selection factor breakdown
    pub coverage_factors: FactorBreakdown,
    /// Product of the four scorer totals
    pub total_factor_multiplier: Decimal,

    /// `base_premium × total_factor_multiplier`
    pub adjusted_premium: Money,

    /// Discounts applied, post cap scaling
    pub discounts: Vec<DiscountRecord>,
    /// Sum of discount percentages
    pub total_discount_percentage: Percent,
    /// Sum of discount amounts
    pub total_discount_amount: Money,
    /// `adjusted_premium − total_discount_amount`
    pub premium_after_discounts: Money,

    /// Surcharges applied; never capped in aggregate
    pub surcharges: Vec<SurchargeRecord>,
    /// Sum of surcharge percentages
    pub total_surcharge_percentage: Percent,
    /// Sum of surcharge amounts
    pub total_surcharge_amount: Money,
    /// `premium_after_discounts + total_surcharge_amount`
    pub premium_after_surcharges: Money,

    /// Jurisdiction taxes and fees
    pub taxes_and_fees: TaxFeeBreakdown,
    /// `premium_after_surcharges + total_taxes_and_fees`
    pub total_premium: Money,

    /// Non-fatal conditions encountered (e.g. unknown jurisdiction fell
    /// back to default rates)
    pub warnings: Vec<String>,
    /// When the calculation ran; the only non-deterministic field
    pub calculated_at: DateTime<Utc>,
    /// Rating logic version that produced this result
    pub calculation_version: String,
}

impl PremiumCalculationResult {
    /// The vehicle scorer's total factor
    pub fn vehicle_factor(&self) -> Decimal {
        self.vehicle_factors.total()
    }

    /// The driver scorer's total factor
    pub fn driver_factor(&self) -> Decimal {
        self.driver_factors.total()
    }

    /// The location scorer's total factor
    pub fn location_factor(&self) -> Decimal {
        self.location_factors.total()
    }

    /// The coverage selection factor
    pub fn coverage_factor(&self) -> Decimal {
        self.coverage_factors.total()
    }
}
