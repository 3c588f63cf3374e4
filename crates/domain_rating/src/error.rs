//! Rating domain errors
//!
//! Two fatal error kinds exist in the rating core. Everything else that can
//! go sideways (unknown jurisdiction, unlisted state) is a non-fatal
//! fallback reported as a warning on the calculation result, never an error.

use thiserror::Error;

/// Errors that can occur while rating a risk profile
#[derive(Debug, Error)]
pub enum RatingError {
    /// Required input missing or logically invalid; the calculation cannot
    /// proceed and no partial result is produced
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Arithmetic inconsistency that should be unreachable with valid input,
    /// e.g. a negative basis premium reaching an adjustment stage
    #[error("Computation error: {0}")]
    Computation(String),
}

impl RatingError {
    /// Creates an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        RatingError::InvalidInput(message.into())
    }

    /// Creates a computation error
    pub fn computation(message: impl Into<String>) -> Self {
        RatingError::Computation(message.into())
    }
}
