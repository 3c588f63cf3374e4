//! Money and percentage types with precise decimal arithmetic
//!
//! All premium math in the rating core runs on `rust_decimal` to avoid
//! floating-point drift: the same input must always produce a bit-identical
//! output. Every premium in this system is denominated in USD, so `Money`
//! carries no currency tag.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

/// A USD monetary amount
///
/// Amounts are stored with 4 decimal places internally so intermediate
/// pipeline stages keep full precision; call [`Money::round_to_cents`]
/// when a value becomes caller-visible (tax amounts, fees, record amounts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, normalized to 4 decimal places
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(4))
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rounds to whole cents (2 decimal places)
    pub fn round_to_cents(&self) -> Self {
        Self(self.0.round_dp(2))
    }

    /// Multiplies by a scalar factor (risk multipliers)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.0 * factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A percentage expressed in points (e.g. `20` means 20%)
///
/// Discount and surcharge records store their percentage in points because
/// that is how the audit trail reports them; [`Percent::of`] converts to a
/// dollar amount against a basis premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a percentage from points (e.g. `dec!(20)` for 20%)
    pub fn new(points: Decimal) -> Self {
        Self(points)
    }

    /// The zero percentage
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the percentage in points
    pub fn points(&self) -> Decimal {
        self.0
    }

    /// Returns the percentage as a decimal fraction (20% -> 0.20)
    pub fn as_fraction(&self) -> Decimal {
        self.0 / dec!(100)
    }

    /// Returns true if the percentage is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Applies this percentage to a basis amount, rounded to cents
    ///
    /// `amount = basis × points / 100`, per the audit-trail convention.
    pub fn of(&self, basis: Money) -> Money {
        basis.multiply(self.as_fraction()).round_to_cents()
    }

    /// Scales the percentage by a factor (pro-rata cap reduction)
    pub fn scale(&self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Add for Percent {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Percent {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Percent::zero(), |acc, p| acc + p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert!((b - a).is_negative());
    }

    #[test]
    fn test_money_rounding() {
        let m = Money::new(dec!(23.4567));
        assert_eq!(m.round_to_cents().amount(), dec!(23.46));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [dec!(10), dec!(20.5), dec!(0.25)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total.amount(), dec!(30.75));
    }

    #[test]
    fn test_percent_of_basis() {
        let pct = Percent::new(dec!(2.35));
        let basis = Money::new(dec!(1000));

        assert_eq!(pct.of(basis).amount(), dec!(23.50));
    }

    #[test]
    fn test_percent_scaling() {
        let pct = Percent::new(dec!(20));
        let scaled = pct.scale(dec!(50) / dec!(60));

        assert!(scaled.points() > dec!(16.6) && scaled.points() < dec!(16.7));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(dec!(63.5)).to_string(), "$63.50");
        assert_eq!(Percent::new(dec!(4)).to_string(), "4%");
    }
}
