//! Risk profile input model
//!
//! The risk profile is the single input to the rating pipeline: vehicle,
//! driver, location, coverage selections, and the policy-level attributes
//! that drive discount eligibility. Profiles are immutable once submitted;
//! field-level validation (required fields, enumerations, numeric ranges)
//! is owned by the API layer upstream of this crate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A complete risk profile submitted for rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Vehicle being insured
    pub vehicle: VehicleProfile,
    /// Primary driver
    pub driver: DriverProfile,
    /// Garaging location
    pub location: LocationProfile,
    /// Selected coverage lines (must be non-empty)
    pub coverages: Vec<CoverageSelection>,
    /// Date the quote was requested; advance-quote eligibility is measured
    /// from this date so the calculation stays a pure function of its input
    pub quote_date: NaiveDate,
    /// Date coverage takes effect; violation/accident lookback windows and
    /// vehicle age are anchored here
    pub effective_date: NaiveDate,
    /// Policy term in months
    pub policy_term_months: u32,
    /// Expected annual mileage
    pub annual_mileage: Option<u32>,
    /// More than one vehicle on the household account
    #[serde(default)]
    pub multi_car: bool,
    /// Applicant owns their home
    #[serde(default)]
    pub homeowner: bool,
    /// Completed an approved defensive driving course
    #[serde(default)]
    pub defensive_driving: bool,
    /// Opted into paperless billing and documents
    #[serde(default)]
    pub paperless: bool,
}

/// Vehicle attributes used by the vehicle risk scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Model year
    pub year: i32,
    /// Manufacturer name
    pub make: String,
    /// Model name
    pub model: String,
    /// Body style (e.g. "sedan", "coupe")
    pub body_type: Option<String>,
    /// Current market value in USD
    pub market_value: Option<Decimal>,
    /// Safety rating on a 1-5 scale
    pub safety_rating: Option<u8>,
    /// Anti-theft device installed
    #[serde(default)]
    pub anti_theft: bool,
}

/// Driver attributes used by the driver risk scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverProfile {
    /// Driver age in years
    pub age: u32,
    /// Years since first licensed
    pub years_licensed: u32,
    /// Gender, where rating on it is permitted
    pub gender: Option<Gender>,
    /// Marital status
    pub marital_status: Option<MaritalStatus>,
    /// Moving violation history
    #[serde(default)]
    pub violations: Vec<Violation>,
    /// Accident history
    #[serde(default)]
    pub accidents: Vec<Accident>,
    /// Continuously insured up to the effective date; `None` when the
    /// coverage history is unknown
    pub continuous_coverage: Option<bool>,
    /// Credit score, where credit-based rating is permitted
    pub credit_score: Option<u32>,
}

/// Gender options for rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

/// Marital status options for rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

/// A moving violation on the driver record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Violation classification
    pub violation_type: ViolationType,
    /// Date of the violation
    pub date: NaiveDate,
}

/// Violation classifications recognized by the rating rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// Driving under the influence (DUI/DWI)
    Dui,
    /// Reckless driving
    Reckless,
    /// Speeding
    Speeding,
    /// Any other moving violation
    Other,
}

impl ViolationType {
    /// Severity band used by the violation surcharge rule
    pub fn severity(&self) -> ViolationSeverity {
        match self {
            ViolationType::Dui => ViolationSeverity::Major,
            ViolationType::Reckless => ViolationSeverity::Moderate,
            ViolationType::Speeding | ViolationType::Other => ViolationSeverity::Minor,
        }
    }
}

/// Severity bands for violation surcharges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationSeverity {
    Major,
    Moderate,
    Minor,
}

/// An accident on the driver record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accident {
    /// Free-form description of the accident
    pub description: Option<String>,
    /// Whether the driver was at fault
    pub at_fault: bool,
    /// Date of the accident
    pub date: NaiveDate,
}

/// Garaging location attributes used by the location risk scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationProfile {
    /// Five-digit ZIP code
    pub zip_code: String,
    /// Two-letter state code
    pub state_code: String,
    /// Territory classification
    pub territory_type: Option<TerritoryType>,
}

/// Territory classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TerritoryType {
    Urban,
    Suburban,
    Rural,
}

/// One selected coverage line
///
/// The coverage type is a free-form code normalized before lookup because
/// unrecognized codes are legal and fall back to the default base rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageSelection {
    /// Coverage type code (e.g. "liability", "COLLISION")
    pub coverage_type: String,
    /// Selected per-occurrence limit in USD
    pub limit_amount: Option<Decimal>,
    /// Selected deductible in USD
    pub deductible_amount: Option<Decimal>,
}

impl CoverageSelection {
    /// Normalizes the coverage type code for table lookup: trimmed,
    /// uppercased, spaces and hyphens collapsed to underscores
    pub fn normalized_type(&self) -> String {
        self.coverage_type
            .trim()
            .to_uppercase()
            .replace([' ', '-'], "_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_severity() {
        assert_eq!(ViolationType::Dui.severity(), ViolationSeverity::Major);
        assert_eq!(ViolationType::Reckless.severity(), ViolationSeverity::Moderate);
        assert_eq!(ViolationType::Speeding.severity(), ViolationSeverity::Minor);
        assert_eq!(ViolationType::Other.severity(), ViolationSeverity::Minor);
    }

    #[test]
    fn test_coverage_type_normalization() {
        let selection = CoverageSelection {
            coverage_type: "  personal injury-protection ".to_string(),
            limit_amount: None,
            deductible_amount: None,
        };

        assert_eq!(selection.normalized_type(), "PERSONAL_INJURY_PROTECTION");
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let json = r#"{
            "vehicle": {"year": 2020, "make": "Toyota", "model": "Camry",
                        "body_type": "sedan", "market_value": "28000",
                        "safety_rating": 5, "anti_theft": true},
            "driver": {"age": 35, "years_licensed": 18, "gender": "female",
                       "marital_status": "married",
                       "continuous_coverage": true, "credit_score": 740},
            "location": {"zip_code": "94105", "state_code": "CA",
                         "territory_type": "URBAN"},
            "coverages": [{"coverage_type": "liability",
                           "limit_amount": "100000",
                           "deductible_amount": "500"}],
            "quote_date": "2026-01-02",
            "effective_date": "2026-02-01",
            "policy_term_months": 6,
            "annual_mileage": 9000,
            "multi_car": true,
            "homeowner": true
        }"#;

        let profile: RiskProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.driver.gender, Some(Gender::Female));
        assert_eq!(profile.location.territory_type, Some(TerritoryType::Urban));
        assert!(profile.multi_car);
        assert!(!profile.paperless);

        let back = serde_json::to_string(&profile).unwrap();
        let again: RiskProfile = serde_json::from_str(&back).unwrap();
        assert_eq!(again.vehicle.make, "Toyota");
    }
}
