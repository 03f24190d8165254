//! Proportion estimator for categorical observations

use resample_core::{Error, Result, StatisticEstimator};
use std::fmt;

/// Share of observations equal to a designated success category
///
/// Validation requires the success category to occur in the original
/// sample's categorical domain. Replicates are not re-validated: a
/// replicate that happens to contain no successes yields proportion 0.
#[derive(Debug, Clone)]
pub struct Proportion<T = String> {
    success: T,
}

impl<T> Proportion<T> {
    /// Create an estimator for the given success category
    pub fn new(success: T) -> Self {
        Self { success }
    }

    /// The designated success category
    pub fn success(&self) -> &T {
        &self.success
    }
}

impl Proportion<String> {
    /// Convenience constructor from a string slice
    pub fn of(success: &str) -> Self {
        Self::new(success.to_string())
    }
}

impl<T> StatisticEstimator<T> for Proportion<T>
where
    T: PartialEq + fmt::Display,
{
    fn name(&self) -> &'static str {
        "proportion"
    }

    fn validate(&self, observations: &[T]) -> Result<()> {
        Error::check_non_empty(observations)?;
        if !observations.iter().any(|o| *o == self.success) {
            return Err(Error::InvalidSuccessCategory {
                category: self.success.to_string(),
            });
        }
        Ok(())
    }

    fn estimate(&self, observations: &[T]) -> Result<f64> {
        Error::check_non_empty(observations)?;
        let successes = observations.iter().filter(|o| **o == self.success).count();
        Ok(successes as f64 / observations.len() as f64)
    }
}
