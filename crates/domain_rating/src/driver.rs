//! Driver risk scorer
//!
//! Produces a multiplier from driver age, licensing experience,
//! gender/marital factors (where permitted), violation history, accident
//! history, and continuous-coverage history. Lookback windows are anchored
//! to the policy effective date.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::factors::FactorBreakdown;
use crate::profile::{Accident, DriverProfile, Gender, MaritalStatus, Violation, ViolationType};

/// Years of violation history considered by the violations factor
const VIOLATION_LOOKBACK_YEARS: u32 = 3;
/// Years of accident history considered by the accidents factor
const ACCIDENT_LOOKBACK_YEARS: u32 = 5;
/// Upper bound on the compounded violation factor
const VIOLATION_FACTOR_CAP: Decimal = dec!(2.5);
/// Upper bound on the accident factor
const ACCIDENT_FACTOR_CAP: Decimal = dec!(3.0);

/// Returns true when `date` falls within the last `years` years before the
/// effective date
pub(crate) fn within_lookback(date: NaiveDate, effective_date: NaiveDate, years: u32) -> bool {
    let cutoff = effective_date
        .checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN);
    date >= cutoff && date <= effective_date
}

/// Scores the driver dimension of a risk profile
///
/// The driver rules are pure band lookups with no reference-table data, so
/// the scorer is a stateless unit struct.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverRiskScorer;

impl DriverRiskScorer {
    pub fn new() -> Self {
        Self
    }

    /// Scores a driver profile
    pub fn score(&self, driver: &DriverProfile, effective_date: NaiveDate) -> FactorBreakdown {
        let mut breakdown = FactorBreakdown::new();

        breakdown.push("ageFactor", Self::age_factor(driver.age));
        breakdown.push(
            "experienceFactor",
            Self::experience_factor(driver.age, driver.years_licensed),
        );
        breakdown.push("genderFactor", Self::gender_factor(driver.gender));
        breakdown.push(
            "maritalStatusFactor",
            Self::marital_status_factor(driver.marital_status),
        );
        breakdown.push(
            "violationsFactor",
            Self::violations_factor(&driver.violations, effective_date),
        );
        breakdown.push(
            "accidentsFactor",
            Self::accidents_factor(&driver.accidents, effective_date),
        );
        breakdown.push(
            "continuousCoverageFactor",
            Self::continuous_coverage_factor(driver.continuous_coverage),
        );

        breakdown
    }

    fn age_factor(age: u32) -> Decimal {
        match age {
            a if a < 18 => dec!(2.5),
            a if a < 21 => dec!(2.0),
            a if a < 25 => dec!(1.5),
            a if a < 30 => dec!(1.2),
            a if a < 65 => dec!(0.9),
            a if a < 75 => dec!(1.0),
            _ => dec!(1.2),
        }
    }

    /// Effective experience is the reported years licensed, clamped to the
    /// maximum plausible for the driver's age (licensed at 16 or later)
    pub(crate) fn effective_years_licensed(age: u32, years_licensed: u32) -> u32 {
        years_licensed.min(age.saturating_sub(16))
    }

    fn experience_factor(age: u32, years_licensed: u32) -> Decimal {
        match Self::effective_years_licensed(age, years_licensed) {
            y if y < 1 => dec!(1.4),
            y if y < 3 => dec!(1.3),
            y if y < 5 => dec!(1.15),
            y if y < 10 => dec!(1.0),
            _ => dec!(0.9),
        }
    }

    fn gender_factor(gender: Option<Gender>) -> Decimal {
        match gender {
            Some(Gender::Female) => dec!(0.95),
            Some(Gender::Male) => dec!(1.05),
            Some(Gender::Other) | None => dec!(1.0),
        }
    }

    fn marital_status_factor(status: Option<MaritalStatus>) -> Decimal {
        match status {
            Some(MaritalStatus::Married) => dec!(0.85),
            _ => dec!(1.0),
        }
    }

    /// Violations within the lookback window compound multiplicatively,
    /// capped so a long record cannot dominate the other dimensions
    fn violations_factor(violations: &[Violation], effective_date: NaiveDate) -> Decimal {
        let factor = violations
            .iter()
            .filter(|v| within_lookback(v.date, effective_date, VIOLATION_LOOKBACK_YEARS))
            .fold(dec!(1.0), |product, v| {
                product
                    * match v.violation_type {
                        ViolationType::Dui => dec!(1.75),
                        ViolationType::Reckless => dec!(1.35),
                        ViolationType::Speeding => dec!(1.15),
                        ViolationType::Other => dec!(1.10),
                    }
            });

        factor.min(VIOLATION_FACTOR_CAP)
    }

    /// At-fault accidents within the lookback window each add 0.25, capped
    fn accidents_factor(accidents: &[Accident], effective_date: NaiveDate) -> Decimal {
        let count = accidents
            .iter()
            .filter(|a| a.at_fault)
            .filter(|a| within_lookback(a.date, effective_date, ACCIDENT_LOOKBACK_YEARS))
            .count();

        let factor = dec!(1.0) + dec!(0.25) * Decimal::from(count);
        factor.min(ACCIDENT_FACTOR_CAP)
    }

    fn continuous_coverage_factor(continuous: Option<bool>) -> Decimal {
        match continuous {
            Some(true) => dec!(0.95),
            Some(false) => dec!(1.15),
            None => dec!(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effective() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn clean_driver(age: u32, years_licensed: u32) -> DriverProfile {
        DriverProfile {
            age,
            years_licensed,
            gender: None,
            marital_status: None,
            violations: vec![],
            accidents: vec![],
            continuous_coverage: None,
            credit_score: None,
        }
    }

    #[test]
    fn test_seventeen_year_old_clean_record() {
        let scorer = DriverRiskScorer::new();
        let breakdown = scorer.score(&clean_driver(17, 1), effective());

        assert_eq!(breakdown.get("ageFactor"), Some(dec!(2.5)));
        // Age 17 clamps experience to at most one year, landing in the
        // newest-driver band
        assert_eq!(breakdown.get("experienceFactor"), Some(dec!(1.4)));
        assert_eq!(breakdown.get("violationsFactor"), Some(dec!(1.0)));
        assert_eq!(breakdown.get("accidentsFactor"), Some(dec!(1.0)));
    }

    #[test]
    fn test_age_bands() {
        for (age, expected) in [
            (16, dec!(2.5)),
            (19, dec!(2.0)),
            (23, dec!(1.5)),
            (27, dec!(1.2)),
            (45, dec!(0.9)),
            (70, dec!(1.0)),
            (80, dec!(1.2)),
        ] {
            let breakdown = DriverRiskScorer::new().score(&clean_driver(age, 10), effective());
            assert_eq!(breakdown.get("ageFactor"), Some(expected), "age {age}");
        }
    }

    #[test]
    fn test_experience_clamped_to_age() {
        // Claims 20 years licensed at age 22; only 6 are plausible
        assert_eq!(DriverRiskScorer::effective_years_licensed(22, 20), 6);
        assert_eq!(DriverRiskScorer::effective_years_licensed(15, 3), 0);

        let breakdown = DriverRiskScorer::new().score(&clean_driver(22, 20), effective());
        assert_eq!(breakdown.get("experienceFactor"), Some(dec!(1.0)));
    }

    #[test]
    fn test_gender_and_marital_factors() {
        let scorer = DriverRiskScorer::new();
        let mut driver = clean_driver(40, 20);

        driver.gender = Some(Gender::Female);
        driver.marital_status = Some(MaritalStatus::Married);
        let breakdown = scorer.score(&driver, effective());
        assert_eq!(breakdown.get("genderFactor"), Some(dec!(0.95)));
        assert_eq!(breakdown.get("maritalStatusFactor"), Some(dec!(0.85)));

        driver.gender = Some(Gender::Male);
        driver.marital_status = Some(MaritalStatus::Single);
        let breakdown = scorer.score(&driver, effective());
        assert_eq!(breakdown.get("genderFactor"), Some(dec!(1.05)));
        assert_eq!(breakdown.get("maritalStatusFactor"), Some(dec!(1.0)));
    }

    #[test]
    fn test_violations_compound_and_cap() {
        let scorer = DriverRiskScorer::new();
        let mut driver = clean_driver(40, 20);
        let recent = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        driver.violations = vec![
            Violation { violation_type: ViolationType::Speeding, date: recent },
            Violation { violation_type: ViolationType::Reckless, date: recent },
        ];
        let breakdown = scorer.score(&driver, effective());
        assert_eq!(
            breakdown.get("violationsFactor"),
            Some(dec!(1.15) * dec!(1.35))
        );

        // Two DUIs would compound to 3.0625; the cap holds at 2.5
        driver.violations = vec![
            Violation { violation_type: ViolationType::Dui, date: recent },
            Violation { violation_type: ViolationType::Dui, date: recent },
        ];
        let breakdown = scorer.score(&driver, effective());
        assert_eq!(breakdown.get("violationsFactor"), Some(dec!(2.5)));
    }

    #[test]
    fn test_old_violations_ignored() {
        let scorer = DriverRiskScorer::new();
        let mut driver = clean_driver(40, 20);
        driver.violations = vec![Violation {
            violation_type: ViolationType::Dui,
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        }];

        let breakdown = scorer.score(&driver, effective());
        assert_eq!(breakdown.get("violationsFactor"), Some(dec!(1.0)));
    }

    #[test]
    fn test_accidents_at_fault_only_within_five_years() {
        let scorer = DriverRiskScorer::new();
        let mut driver = clean_driver(40, 20);
        driver.accidents = vec![
            Accident {
                description: None,
                at_fault: true,
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            },
            Accident {
                description: None,
                at_fault: false,
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            },
            Accident {
                description: None,
                at_fault: true,
                date: NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
            },
        ];

        let breakdown = scorer.score(&driver, effective());
        assert_eq!(breakdown.get("accidentsFactor"), Some(dec!(1.25)));
    }

    #[test]
    fn test_accidents_factor_cap() {
        let scorer = DriverRiskScorer::new();
        let mut driver = clean_driver(40, 20);
        let recent = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        driver.accidents = (0..10)
            .map(|_| Accident {
                description: None,
                at_fault: true,
                date: recent,
            })
            .collect();

        let breakdown = scorer.score(&driver, effective());
        assert_eq!(breakdown.get("accidentsFactor"), Some(dec!(3.0)));
    }

    #[test]
    fn test_continuous_coverage_states() {
        let scorer = DriverRiskScorer::new();
        let mut driver = clean_driver(40, 20);

        driver.continuous_coverage = Some(true);
        assert_eq!(
            scorer.score(&driver, effective()).get("continuousCoverageFactor"),
            Some(dec!(0.95))
        );

        driver.continuous_coverage = Some(false);
        assert_eq!(
            scorer.score(&driver, effective()).get("continuousCoverageFactor"),
            Some(dec!(1.15))
        );

        driver.continuous_coverage = None;
        assert_eq!(
            scorer.score(&driver, effective()).get("continuousCoverageFactor"),
            Some(dec!(1.0))
        );
    }
}
