//! Factor breakdowns
//!
//! Every risk scorer reports its result as a `FactorBreakdown`: an ordered
//! list of named sub-factors whose product is the scorer's total factor.
//! The breakdown is retained in the calculation result so each multiplier
//! stays individually inspectable for audit, not just the final product.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A single named risk multiplier; 1.0 is neutral
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedFactor {
    /// Factor name (e.g. "ageFactor")
    pub name: String,
    /// Factor value; always a positive multiplier
    pub value: Decimal,
}

/// An ordered set of named sub-factors produced by one risk scorer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    factors: Vec<NamedFactor>,
}

impl FactorBreakdown {
    /// Creates an empty breakdown
    pub fn new() -> Self {
        Self { factors: Vec::new() }
    }

    /// Appends a named sub-factor
    pub fn push(&mut self, name: impl Into<String>, value: Decimal) {
        self.factors.push(NamedFactor {
            name: name.into(),
            value,
        });
    }

    /// Looks up a sub-factor by name
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.factors
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value)
    }

    /// The sub-factors in insertion order
    pub fn factors(&self) -> &[NamedFactor] {
        &self.factors
    }

    /// The total factor: an ordered fold multiplying every sub-factor
    pub fn total(&self) -> Decimal {
        self.factors
            .iter()
            .fold(dec!(1.0), |product, f| product * f.value)
    }
}
