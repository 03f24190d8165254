//! Median estimator

use resample_core::{Error, Result, StatisticEstimator};
use std::cmp::Ordering;

/// Middle order statistic of numeric observations
///
/// For even-length input the two middle values are averaged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl StatisticEstimator<f64> for Median {
    fn name(&self) -> &'static str {
        "median"
    }

    fn estimate(&self, observations: &[f64]) -> Result<f64> {
        Error::check_non_empty(observations)?;

        let mut sorted = observations.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let n = sorted.len();
        let mid = n / 2;
        if n % 2 == 1 {
            Ok(sorted[mid])
        } else {
            Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
        }
    }
}
