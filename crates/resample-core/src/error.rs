//! Error types for bootstrap resampling
//!
//! Provides a unified error type for all resample-stats crates.

use thiserror::Error;

/// Core error type for bootstrap operations
///
/// All variants are validation errors surfaced immediately to the caller;
/// none are retried and no operation substitutes a default on failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Sample or replicate has zero length
    #[error("Sample must contain at least one observation")]
    EmptySample,

    /// Unrecognized statistic requested
    #[error("Invalid statistic: {0}")]
    InvalidStatistic(String),

    /// Confidence level outside the open unit interval
    #[error("Confidence level {level} must be in (0, 1)")]
    InvalidConfidenceLevel { level: f64 },

    /// Proportion statistic requested for a success category absent
    /// from the sample's categorical domain
    #[error("Success category {category:?} does not occur in the sample")]
    InvalidSuccessCategory { category: String },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an invalid quantile probability
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile probability {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Check that a slice of observations is non-empty
    pub fn check_non_empty<T>(observations: &[T]) -> Result<()> {
        if observations.is_empty() {
            return Err(Error::EmptySample);
        }
        Ok(())
    }

    /// Check that a confidence level lies in (0, 1)
    pub fn check_level(level: f64) -> Result<()> {
        if !level.is_finite() || level <= 0.0 || level >= 1.0 {
            return Err(Error::InvalidConfidenceLevel { level });
        }
        Ok(())
    }
}
