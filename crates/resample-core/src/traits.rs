//! Core statistic trait
//!
//! A statistic is a pure function from a slice of observations to one real
//! number. Estimators are passed as parameters rather than stored, so the
//! same estimator instance serves the original sample and every replicate.

use crate::error::{Error, Result};

/// A summary statistic over observations of type `T`
pub trait StatisticEstimator<T> {
    /// Statistic name, as accepted by the string parsers
    fn name(&self) -> &'static str;

    /// Validate the original sample before any replicate is drawn
    ///
    /// Called once per estimation request with the full sample. The default
    /// rejects empty input; implementations add statistic-specific checks
    /// (e.g. the proportion estimator requires its success category to occur
    /// in the sample).
    fn validate(&self, observations: &[T]) -> Result<()> {
        Error::check_non_empty(observations)
    }

    /// Compute the statistic over a sample or replicate
    ///
    /// Empty input is invalid and fails immediately.
    fn estimate(&self, observations: &[T]) -> Result<f64>;
}
