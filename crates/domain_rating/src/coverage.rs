//! Coverage risk scorer
//!
//! Sums the per-coverage base rates into the base premium and derives a
//! coverage-selection multiplier from the chosen limits and deductibles:
//! broader limits increase the contribution, higher deductibles reduce it.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rating_kernel::Money;

use crate::factors::FactorBreakdown;
use crate::profile::CoverageSelection;
use crate::result::CoverageAssessment;
use crate::tables::{default_tables, RatingTables};

/// Scores the coverage dimension of a risk profile
#[derive(Debug, Clone)]
pub struct CoverageRiskScorer {
    tables: Arc<RatingTables>,
}

impl CoverageRiskScorer {
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

    /// Assesses the selected coverage lines
    ///
    /// The scorer-level `limitFactor` and `deductibleFactor` are arithmetic
    /// means of the per-line factors, so the selection factor stays the
    /// product of its declared sub-factors. The caller guarantees a
    /// non-empty selection.
    pub fn assess(&self, selections: &[CoverageSelection]) -> CoverageAssessment {
        let base_premium: Money = selections
            .iter()
            .map(|s| Money::new(self.tables.coverage.base_rate(&s.normalized_type())))
            .sum();

        let count = Decimal::from(selections.len().max(1));
        let limit_mean: Decimal = selections
            .iter()
            .map(|s| Self::limit_factor(s.limit_amount))
            .sum::<Decimal>()
            / count;
        let deductible_mean: Decimal = selections
            .iter()
            .map(|s| Self::deductible_factor(s.deductible_amount))
            .sum::<Decimal>()
            / count;

        let mut breakdown = FactorBreakdown::new();
        breakdown.push("limitFactor", limit_mean);
        breakdown.push("deductibleFactor", deductible_mean);

        CoverageAssessment {
            base_premium,
            breakdown,
        }
    }

    fn limit_factor(limit: Option<Decimal>) -> Decimal {
        match limit {
            Some(l) if l >= dec!(300_000) => dec!(1.15),
            Some(l) if l >= dec!(100_000) => dec!(1.05),
            _ => dec!(1.00),
        }
    }

    fn deductible_factor(deductible: Option<Decimal>) -> Decimal {
        match deductible {
            Some(d) if d >= dec!(1_000) => dec!(0.90),
            Some(d) if d >= dec!(500) => dec!(0.95),
            _ => dec!(1.00),
        }
    }
}

impl Default for CoverageRiskScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(
        coverage_type: &str,
        limit: Option<Decimal>,
        deductible: Option<Decimal>,
    ) -> CoverageSelection {
        CoverageSelection {
            coverage_type: coverage_type.to_string(),
            limit_amount: limit,
            deductible_amount: deductible,
        }
    }

    #[test]
    fn test_base_premium_sums_rates() {
        let scorer = CoverageRiskScorer::new();
        let assessment = scorer.assess(&[
            selection("liability", None, None),
            selection("collision", None, None),
            selection("comprehensive", None, None),
        ]);

        assert_eq!(assessment.base_premium.amount(), dec!(1050));
    }

    #[test]
    fn test_unrecognized_coverage_uses_default_rate() {
        let scorer = CoverageRiskScorer::new();
        let assessment = scorer.assess(&[selection("gap", None, None)]);

        assert_eq!(assessment.base_premium.amount(), dec!(100));
    }

    #[test]
    fn test_neutral_selection_factor_without_choices() {
        let scorer = CoverageRiskScorer::new();
        let assessment = scorer.assess(&[selection("liability", None, None)]);

        assert_eq!(assessment.coverage_factor(), dec!(1.00));
    }

    #[test]
    fn test_broad_limits_increase_factor() {
        let scorer = CoverageRiskScorer::new();
        let assessment = scorer.assess(&[selection("liability", Some(dec!(500_000)), None)]);

        assert_eq!(assessment.breakdown.get("limitFactor"), Some(dec!(1.15)));
        assert_eq!(assessment.coverage_factor(), dec!(1.15));
    }

    #[test]
    fn test_high_deductible_reduces_factor() {
        let scorer = CoverageRiskScorer::new();
        let assessment = scorer.assess(&[selection("collision", None, Some(dec!(1_000)))]);

        assert_eq!(assessment.breakdown.get("deductibleFactor"), Some(dec!(0.90)));
        assert_eq!(assessment.coverage_factor(), dec!(0.90));
    }

    #[test]
    fn test_factors_average_across_lines() {
        let scorer = CoverageRiskScorer::new();
        let assessment = scorer.assess(&[
            selection("liability", Some(dec!(300_000)), None),
            selection("collision", Some(dec!(50_000)), Some(dec!(500))),
        ]);

        // Limit factors 1.15 and 1.00 average to 1.075
        assert_eq!(assessment.breakdown.get("limitFactor"), Some(dec!(1.075)));
        // Deductible factors 1.00 and 0.95 average to 0.975
        assert_eq!(
            assessment.breakdown.get("deductibleFactor"),
            Some(dec!(0.975))
        );
        assert_eq!(assessment.coverage_factor(), dec!(1.075) * dec!(0.975));
    }
}
