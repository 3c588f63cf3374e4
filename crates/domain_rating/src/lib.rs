//! Auto Premium Rating Domain
//!
//! This crate implements the deterministic rating/pricing pipeline: it
//! turns a risk profile (vehicle, driver, location, coverage selections)
//! into a premium with a complete, reproducible audit trail of every
//! multiplier, discount, surcharge, tax, and fee applied.
//!
//! # Pipeline
//!
//! ```text
//! RiskProfile -> risk scorers (vehicle × driver × location × coverage)
//!             -> adjusted premium
//!             -> discounts (capped, pro-rata)
//!             -> surcharges (additive, uncapped)
//!             -> jurisdiction taxes and fees
//!             -> PremiumCalculationResult
//! ```
//!
//! The four risk scorers are independent; the discount, surcharge, and
//! tax/fee stages are strictly ordered, each consuming the prior stage's
//! output. The whole pipeline is pure and synchronous: identical input
//! always yields identical output for a given version of the reference
//! tables (the result timestamp is the only non-deterministic field).
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::PremiumCalculator;
//!
//! let calculator = PremiumCalculator::new();
//! let result = calculator.calculate_premium(&profile)?;
//!
//! println!("total premium: {}", result.total_premium);
//! for discount in &result.discounts {
//!     println!("  {} -{}", discount.name, discount.amount);
//! }
//! ```

pub mod coverage;
pub mod discounts;
pub mod driver;
pub mod error;
pub mod factors;
pub mod location;
pub mod orchestrator;
pub mod profile;
pub mod result;
pub mod surcharges;
pub mod tables;
pub mod taxes;
pub mod vehicle;

pub use coverage::CoverageRiskScorer;
pub use discounts::{DiscountEngine, DiscountOutcome, DISCOUNT_CAP_PERCENT};
pub use driver::DriverRiskScorer;
pub use error::RatingError;
pub use factors::{FactorBreakdown, NamedFactor};
pub use location::LocationRiskScorer;
pub use orchestrator::PremiumCalculator;
pub use profile::{
    Accident, CoverageSelection, DriverProfile, Gender, LocationProfile, MaritalStatus,
    RiskProfile, TerritoryType, VehicleProfile, Violation, ViolationType,
};
pub use result::{
    CoverageAssessment, DiscountRecord, PremiumCalculationResult, SurchargeRecord,
    TaxFeeBreakdown, CALCULATION_VERSION,
};
pub use surcharges::{SurchargeEngine, SurchargeOutcome};
pub use tables::{
    CoverageTables, JurisdictionRates, LocationTables, RatingTables, TaxFeeTables, VehicleTables,
};
pub use taxes::{TaxFeeEngine, TaxFeeOutcome};
pub use vehicle::VehicleRiskScorer;
