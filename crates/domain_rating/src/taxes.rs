//! Tax and fee engine
//!
//! Looks up the jurisdiction's premium-tax rate and flat fee schedule.
//! An unknown jurisdiction is a non-fatal condition: the documented default
//! schedule is substituted, the fallback is logged, and a warning
//! annotation is returned for the calculation result.

use std::sync::Arc;

use tracing::{debug, warn};

use rating_kernel::{Money, Percent};

use crate::result::TaxFeeBreakdown;
use crate::tables::{default_tables, RatingTables};

/// Result of the tax/fee stage
#[derive(Debug, Clone)]
pub struct TaxFeeOutcome {
    /// Taxes and fees applied
    pub breakdown: TaxFeeBreakdown,
    /// Warning annotation when the jurisdiction fell back to defaults
    pub warning: Option<String>,
}

/// Assesses jurisdiction taxes and fees
#[derive(Debug, Clone)]
pub struct TaxFeeEngine {
    tables: Arc<RatingTables>,
}

impl TaxFeeEngine {
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

    /// Assesses taxes and fees on the basis premium for a jurisdiction
    ///
    /// Fees are flat per policy regardless of term length; the premium tax
    /// is proportional to the basis and rounded to cents.
    pub fn assess(&self, basis: Money, jurisdiction: &str) -> TaxFeeOutcome {
        let (rates, warning) = match self.tables.tax_fee.rates(jurisdiction) {
            Some(rates) => (rates, None),
            None => {
                warn!(
                    jurisdiction = %jurisdiction,
                    "jurisdiction not in tax/fee table, using default schedule"
                );
                (
                    self.tables.tax_fee.default_rates,
                    Some(format!(
                        "unknown jurisdiction '{}': default tax/fee schedule applied",
                        jurisdiction.trim().to_uppercase()
                    )),
                )
            }
        };

        let premium_tax_percentage = Percent::new(rates.premium_tax_percent);
        let premium_tax_amount = premium_tax_percentage.of(basis);
        let policy_fee_amount = Money::new(rates.policy_fee).round_to_cents();
        let dmv_fee_amount = Money::new(rates.dmv_fee).round_to_cents();

        let total_taxes = premium_tax_amount;
        let total_fees = policy_fee_amount + dmv_fee_amount;
        let total_taxes_and_fees = total_taxes + total_fees;

        debug!(
            jurisdiction = %jurisdiction,
            tax = %premium_tax_amount,
            fees = %total_fees,
            "assessed taxes and fees"
        );

        TaxFeeOutcome {
            breakdown: TaxFeeBreakdown {
                premium_tax_percentage,
                premium_tax_amount,
                policy_fee_amount,
                dmv_fee_amount,
                total_taxes,
                total_fees,
                total_taxes_and_fees,
            },
            warning,
        }
    }
}

impl Default for TaxFeeEngine {
    fn default() -> Self {
        Self::new()
    }
}
