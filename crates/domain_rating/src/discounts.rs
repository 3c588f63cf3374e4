//! Discount engine
//!
//! Evaluates a fixed catalog of seven discount rules against the profile.
//! Each rule yields zero or a fixed percentage converted to a dollar amount
//! against the basis premium (the factor-adjusted premium). The aggregate
//! is capped: when the summed percentages exceed the cap, every discount is
//! scaled down pro rata so the total equals the cap exactly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rating_kernel::{Money, Percent};

use crate::driver::within_lookback;
use crate::profile::RiskProfile;
use crate::result::DiscountRecord;

/// Aggregate cap on summed discount percentages
pub const DISCOUNT_CAP_PERCENT: Decimal = dec!(50.0);

/// Years of clean history required for the good-driver discount
const GOOD_DRIVER_LOOKBACK_YEARS: u32 = 3;
/// Minimum lead time for the advance-quote discount
const ADVANCE_QUOTE_MIN_DAYS: i64 = 7;

/// Result of the discount stage
#[derive(Debug, Clone)]
pub struct DiscountOutcome {
    /// Applied discounts, post cap scaling
    pub discounts: Vec<DiscountRecord>,
    /// Sum of discount percentages (≤ cap)
    pub total_percentage: Percent,
    /// Sum of discount amounts
    pub total_amount: Money,
    /// Basis premium minus the total discount amount
    pub premium_after_discounts: Money,
}

/// Evaluates the discount catalog
///
/// The rules have no reference-table data; eligibility comes entirely from
/// the profile, so the engine is a stateless unit struct.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountEngine;

impl DiscountEngine {
    pub fn new() -> Self {
        Self
    }

    /// Applies all eligible discounts to the basis premium
    pub fn apply(&self, profile: &RiskProfile, basis: Money) -> DiscountOutcome {
        let eligible = Self::eligible_discounts(profile);
        let raw_total: Decimal = eligible.iter().map(|(_, _, pct)| *pct).sum();

        let discounts = if raw_total > DISCOUNT_CAP_PERCENT {
            Self::scale_to_cap(eligible, raw_total, basis)
        } else {
            eligible
                .into_iter()
                .map(|(code, name, pct)| {
                    let percentage = Percent::new(pct);
                    DiscountRecord {
                        code: code.to_string(),
                        name: name.to_string(),
                        percentage,
                        amount: percentage.of(basis),
                    }
                })
                .collect()
        };

        let total_percentage: Percent = discounts.iter().map(|d| d.percentage).sum();
        let total_amount: Money = discounts.iter().map(|d| d.amount).sum();

        DiscountOutcome {
            premium_after_discounts: basis - total_amount,
            discounts,
            total_percentage,
            total_amount,
        }
    }

    /// Scales every discount by `cap / sum` so the summed percentage equals
    /// the cap exactly; the last discount absorbs the rounding residual of
    /// the scaled series (pro-rata reduction, not a priority ordering)
    fn scale_to_cap(
        eligible: Vec<(&'static str, &'static str, Decimal)>,
        raw_total: Decimal,
        basis: Money,
    ) -> Vec<DiscountRecord> {
        let scale = DISCOUNT_CAP_PERCENT / raw_total;
        let last = eligible.len().saturating_sub(1);
        let mut allocated = Decimal::ZERO;

        eligible
            .into_iter()
            .enumerate()
            .map(|(i, (code, name, pct))| {
                let points = if i == last {
                    DISCOUNT_CAP_PERCENT - allocated
                } else {
                    let scaled = (pct * scale).round_dp(4);
                    allocated += scaled;
                    scaled
                };
                let percentage = Percent::new(points);
                DiscountRecord {
                    code: code.to_string(),
                    name: name.to_string(),
                    percentage,
                    amount: percentage.of(basis),
                }
            })
            .collect()
    }

    /// Evaluates the seven independent rules, returning the eligible ones
    /// with their unscaled percentages
    fn eligible_discounts(profile: &RiskProfile) -> Vec<(&'static str, &'static str, Decimal)> {
        let mut eligible = Vec::new();

        if profile.multi_car {
            eligible.push(("MULTI_CAR", "Multi-Car Discount", dec!(10)));
        }

        if Self::is_good_driver(profile) {
            eligible.push(("GOOD_DRIVER", "Good Driver Discount", dec!(20)));
        }

        if profile.defensive_driving {
            eligible.push((
                "DEFENSIVE_DRIVER",
                "Defensive Driving Course Discount",
                dec!(8),
            ));
        }

        if let Some(pct) = Self::low_mileage_percent(profile.annual_mileage) {
            eligible.push(("LOW_MILEAGE", "Low Mileage Discount", pct));
        }

        if profile.homeowner {
            eligible.push(("HOMEOWNER", "Homeowner Discount", dec!(8)));
        }

        let lead_days = (profile.effective_date - profile.quote_date).num_days();
        if lead_days >= ADVANCE_QUOTE_MIN_DAYS {
            eligible.push(("ADVANCE_QUOTE", "Advance Quote Discount", dec!(5)));
        }

        if profile.paperless {
            eligible.push(("PAPERLESS", "Paperless Billing Discount", dec!(4)));
        }

        eligible
    }

    fn is_good_driver(profile: &RiskProfile) -> bool {
        let driver = &profile.driver;
        let clean_violations = !driver.violations.iter().any(|v| {
            within_lookback(v.date, profile.effective_date, GOOD_DRIVER_LOOKBACK_YEARS)
        });
        let clean_accidents = !driver.accidents.iter().any(|a| {
            within_lookback(a.date, profile.effective_date, GOOD_DRIVER_LOOKBACK_YEARS)
        });

        clean_violations && clean_accidents
    }

    fn low_mileage_percent(annual_mileage: Option<u32>) -> Option<Decimal> {
        match annual_mileage? {
            m if m < 5_000 => Some(dec!(15)),
            m if m < 7_500 => Some(dec!(10)),
            m if m < 10_000 => Some(dec!(5)),
            _ => None,
        }
    }
}
