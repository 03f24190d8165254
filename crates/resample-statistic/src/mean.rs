//! Arithmetic mean estimator

use resample_core::{Error, Result, StatisticEstimator};

/// Arithmetic average of numeric observations
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl StatisticEstimator<f64> for Mean {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn estimate(&self, observations: &[f64]) -> Result<f64> {
        Error::check_non_empty(observations)?;
        Ok(observations.iter().sum::<f64>() / observations.len() as f64)
    }
}
