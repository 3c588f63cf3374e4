//! Reference tables
//!
//! All static rating data lives here: make/model classifications, state and
//! ZIP-region factors, per-coverage base rates, and per-jurisdiction tax/fee
//! schedules. Tables are immutable, constructed once at process start, and
//! shared read-only across arbitrarily many concurrent calculations.
//!
//! Scorers receive tables through constructor injection so a new policy
//! year, a new state, or a real territory/crime data provider can be
//! swapped in without touching any scoring logic.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The full set of reference tables used by one rating configuration
#[derive(Debug, Clone)]
pub struct RatingTables {
    pub vehicle: VehicleTables,
    pub location: LocationTables,
    pub coverage: CoverageTables,
    pub tax_fee: TaxFeeTables,
}

impl Default for RatingTables {
    fn default() -> Self {
        Self {
            vehicle: VehicleTables::default(),
            location: LocationTables::default(),
            coverage: CoverageTables::default(),
            tax_fee: TaxFeeTables::default(),
        }
    }
}

static DEFAULT_TABLES: Lazy<Arc<RatingTables>> = Lazy::new(|| Arc::new(RatingTables::default()));

/// Returns the shared default rating tables
pub fn default_tables() -> Arc<RatingTables> {
    Arc::clone(&DEFAULT_TABLES)
}

/// Make/model classification lists for the vehicle scorer
///
/// Placeholder for a vehicle data provider integration; membership checks
/// are uppercase-exact for makes/models and substring for performance
/// keywords.
#[derive(Debug, Clone)]
pub struct VehicleTables {
    pub luxury_makes: HashSet<String>,
    pub economy_makes: HashSet<String>,
    pub exotic_makes: HashSet<String>,
    pub high_theft_models: HashSet<String>,
    pub performance_keywords: Vec<String>,
}

impl VehicleTables {
    pub fn is_luxury_make(&self, make: &str) -> bool {
        self.luxury_makes.contains(&make.trim().to_uppercase())
    }

    pub fn is_economy_make(&self, make: &str) -> bool {
        self.economy_makes.contains(&make.trim().to_uppercase())
    }

    pub fn is_exotic_make(&self, make: &str) -> bool {
        self.exotic_makes.contains(&make.trim().to_uppercase())
    }

    pub fn is_high_theft_model(&self, model: &str) -> bool {
        self.high_theft_models.contains(&model.trim().to_uppercase())
    }

    /// True when the make OR model contains any performance keyword
    pub fn is_performance(&self, make: &str, model: &str) -> bool {
        let make = make.to_uppercase();
        let model = model.to_uppercase();
        self.performance_keywords
            .iter()
            .any(|kw| make.contains(kw) || model.contains(kw))
    }
}

impl Default for VehicleTables {
    fn default() -> Self {
        let to_set = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();

        Self {
            luxury_makes: to_set(&[
                "BMW", "MERCEDES-BENZ", "AUDI", "LEXUS", "PORSCHE", "JAGUAR",
                "LAND ROVER", "CADILLAC", "INFINITI", "ACURA",
            ]),
            economy_makes: to_set(&[
                "HONDA", "TOYOTA", "HYUNDAI", "KIA", "MAZDA", "NISSAN",
                "CHEVROLET", "FORD",
            ]),
            exotic_makes: to_set(&[
                "FERRARI", "LAMBORGHINI", "MCLAREN", "BUGATTI", "ASTON MARTIN",
                "BENTLEY", "ROLLS-ROYCE", "MASERATI",
            ]),
            high_theft_models: to_set(&[
                "CIVIC", "ACCORD", "CAMRY", "COROLLA", "ALTIMA", "SILVERADO",
                "F-150", "ELANTRA",
            ]),
            performance_keywords: [
                "GT", "TURBO", "SPORT", "AMG", "M3", "M5", "SRT", "STI",
                "CORVETTE", "MUSTANG", "CAMARO", "CHARGER", "SUPRA",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// State and ZIP-region factor tables for the location scorer
///
/// Placeholder for a real territory-rating/crime-data integration.
#[derive(Debug, Clone)]
pub struct LocationTables {
    /// Per-state risk factors; unlisted states default to 1.0
    pub state_factors: HashMap<String, Decimal>,
    /// Regional factors indexed by ZIP leading digit (0-9)
    pub zip_region_factors: [Decimal; 10],
}

impl LocationTables {
    /// Looks up the state factor; `None` means the state is unlisted and
    /// the neutral default applies
    pub fn state_factor(&self, state_code: &str) -> Option<Decimal> {
        self.state_factors.get(&state_code.trim().to_uppercase()).copied()
    }

    /// Regional factor from the ZIP's leading digit; non-digit -> neutral
    pub fn zip_region_factor(&self, zip_code: &str) -> Decimal {
        zip_code
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| self.zip_region_factors[d as usize])
            .unwrap_or(dec!(1.0))
    }
}

impl Default for LocationTables {
    fn default() -> Self {
        let mut state_factors = HashMap::new();
        for (code, factor) in [
            ("CA", dec!(1.15)),
            ("NY", dec!(1.20)),
            ("TX", dec!(1.05)),
            ("FL", dec!(1.25)),
            ("MI", dec!(1.35)),
            ("NJ", dec!(1.20)),
            ("LA", dec!(1.30)),
            ("GA", dec!(1.10)),
            ("IL", dec!(1.00)),
            ("PA", dec!(1.05)),
            ("OH", dec!(0.90)),
            ("WA", dec!(1.00)),
            ("VT", dec!(0.85)),
            ("ME", dec!(0.85)),
            ("ID", dec!(0.90)),
            ("NC", dec!(0.95)),
        ] {
            state_factors.insert(code.to_string(), factor);
        }

        Self {
            state_factors,
            zip_region_factors: [
                dec!(1.10), // 0 - New England
                dec!(1.15), // 1 - NY/NJ metro
                dec!(1.05), // 2 - Mid-Atlantic
                dec!(1.00), // 3 - Southeast
                dec!(0.95), // 4 - Ohio Valley
                dec!(0.90), // 5 - Upper Midwest
                dec!(0.95), // 6 - Central Plains
                dec!(1.00), // 7 - South Central
                dec!(1.05), // 8 - Mountain West
                dec!(1.10), // 9 - Pacific
            ],
        }
    }
}

/// Per-coverage base rates for the coverage scorer
#[derive(Debug, Clone)]
pub struct CoverageTables {
    /// Base annual rate by normalized coverage code
    pub base_rates: HashMap<String, Decimal>,
    /// Rate used for unrecognized coverage codes
    pub default_base_rate: Decimal,
}

impl CoverageTables {
    /// Base rate for a normalized coverage code, falling back to the default
    pub fn base_rate(&self, normalized_code: &str) -> Decimal {
        self.base_rates
            .get(normalized_code)
            .copied()
            .unwrap_or(self.default_base_rate)
    }
}

impl Default for CoverageTables {
    fn default() -> Self {
        let mut base_rates = HashMap::new();
        for (code, rate) in [
            ("LIABILITY", dec!(450)),
            ("COLLISION", dec!(350)),
            ("COMPREHENSIVE", dec!(250)),
            ("UNINSURED_MOTORIST", dec!(100)),
            ("PERSONAL_INJURY_PROTECTION", dec!(150)),
            ("MEDICAL_PAYMENTS", dec!(75)),
            ("RENTAL_REIMBURSEMENT", dec!(50)),
            ("ROADSIDE_ASSISTANCE", dec!(25)),
        ] {
            base_rates.insert(code.to_string(), rate);
        }

        Self {
            base_rates,
            default_base_rate: dec!(100),
        }
    }
}

/// Tax rate and flat fee schedule for one jurisdiction
#[derive(Debug, Clone, Copy)]
pub struct JurisdictionRates {
    /// Premium tax rate in percentage points
    pub premium_tax_percent: Decimal,
    /// Flat policy fee
    pub policy_fee: Decimal,
    /// Flat registration/administrative (DMV) fee
    pub dmv_fee: Decimal,
}

/// Per-jurisdiction tax and fee schedules
#[derive(Debug, Clone)]
pub struct TaxFeeTables {
    /// Rates keyed by two-letter jurisdiction code
    pub jurisdictions: HashMap<String, JurisdictionRates>,
    /// Documented default applied for unknown jurisdictions
    pub default_rates: JurisdictionRates,
}

impl TaxFeeTables {
    /// Rates for a jurisdiction; `None` when the code is unknown and the
    /// default schedule applies
    pub fn rates(&self, jurisdiction: &str) -> Option<JurisdictionRates> {
        self.jurisdictions.get(&jurisdiction.trim().to_uppercase()).copied()
    }
}

impl Default for TaxFeeTables {
    fn default() -> Self {
        let mut jurisdictions = HashMap::new();
        for (code, tax, policy_fee, dmv_fee) in [
            ("CA", dec!(2.35), dec!(15.00), dec!(25.00)),
            ("TX", dec!(1.60), dec!(20.00), dec!(15.00)),
            ("NY", dec!(2.00), dec!(25.00), dec!(12.50)),
            ("FL", dec!(1.75), dec!(10.00), dec!(30.00)),
            ("WA", dec!(2.00), dec!(12.50), dec!(22.00)),
            ("IL", dec!(0.50), dec!(10.00), dec!(15.00)),
            ("PA", dec!(2.00), dec!(18.00), dec!(20.00)),
            ("OH", dec!(1.40), dec!(12.00), dec!(11.75)),
            ("GA", dec!(2.25), dec!(14.00), dec!(20.00)),
            ("MI", dec!(1.25), dec!(16.00), dec!(18.00)),
        ] {
            jurisdictions.insert(
                code.to_string(),
                JurisdictionRates {
                    premium_tax_percent: tax,
                    policy_fee,
                    dmv_fee,
                },
            );
        }

        Self {
            jurisdictions,
            default_rates: JurisdictionRates {
                premium_tax_percent: dec!(2.00),
                policy_fee: dec!(15.00),
                dmv_fee: dec!(20.00),
            },
        }
    }
}
