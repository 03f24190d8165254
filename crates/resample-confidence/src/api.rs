//! High-level API for bootstrap confidence intervals
//!
//! Convenience functions for the common estimation requests. Every function
//! is a thin wrapper over [`Bootstrap`] with the percentile method and the
//! best available execution engine.

use crate::bootstrap::{Bootstrap, BootstrapReport};
use crate::method::PercentileInterval;
use resample_core::{
    auto_engine, CategoricalSample, Error, NumericSample, Result, Sample,
    StatisticEstimator,
};
use resample_statistic::{Mean, Median, Proportion, StatisticKind};

/// Quick number of resamples for rough estimates
pub const FAST_RESAMPLES: usize = 1_000;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// High-precision number of resamples
pub const HIGH_PRECISION_RESAMPLES: usize = 50_000;

/// Compute a bootstrap percentile confidence interval for any statistic
///
/// # Arguments
/// * `sample` - The observed sample
/// * `estimator` - The statistic to bootstrap
/// * `confidence_level` - Confidence level in (0, 1), e.g. 0.95
/// * `n_resamples` - Number of bootstrap replicates
/// * `seed` - Fixed seed for reproducible runs; `None` draws one
pub fn bootstrap_ci<T, Est>(
    sample: &Sample<T>,
    estimator: &Est,
    confidence_level: f64,
    n_resamples: usize,
    seed: Option<u64>,
) -> Result<BootstrapReport>
where
    T: Clone + Send + Sync,
    Est: StatisticEstimator<T> + Sync,
{
    let mut bootstrap = Bootstrap::new(auto_engine(), PercentileInterval)
        .with_resamples(n_resamples)
        .with_confidence_level(confidence_level);
    if let Some(seed) = seed {
        bootstrap = bootstrap.with_seed(seed);
    }
    bootstrap.confidence_interval(sample, estimator)
}

/// Percentile interval for the mean of a numeric sample
pub fn mean_ci(sample: &NumericSample, confidence_level: f64) -> Result<BootstrapReport> {
    bootstrap_ci(sample, &Mean, confidence_level, DEFAULT_RESAMPLES, None)
}

/// Percentile interval for the median of a numeric sample
pub fn median_ci(sample: &NumericSample, confidence_level: f64) -> Result<BootstrapReport> {
    bootstrap_ci(sample, &Median, confidence_level, DEFAULT_RESAMPLES, None)
}

/// Percentile interval for the proportion of a success category
pub fn proportion_ci(
    sample: &CategoricalSample,
    success: &str,
    confidence_level: f64,
) -> Result<BootstrapReport> {
    bootstrap_ci(
        sample,
        &Proportion::of(success),
        confidence_level,
        DEFAULT_RESAMPLES,
        None,
    )
}

/// Percentile interval for a named statistic over a numeric sample
///
/// Drives table-oriented callers that carry the statistic as a
/// [`StatisticKind`]. The proportion statistic needs a categorical sample
/// and a success category, so requesting it here is invalid.
pub fn numeric_ci(
    sample: &NumericSample,
    kind: StatisticKind,
    confidence_level: f64,
) -> Result<BootstrapReport> {
    match kind {
        StatisticKind::Mean => mean_ci(sample, confidence_level),
        StatisticKind::Median => median_ci(sample, confidence_level),
        StatisticKind::Proportion => Err(Error::InvalidStatistic(
            "proportion requires a categorical sample and a success category".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_ci_brackets_estimate() {
        let sample = NumericSample::numeric(vec![
            10.0, 12.0, 9.0, 14.0, 11.0, 13.0, 10.5, 12.5,
        ])
        .unwrap();
        let report = bootstrap_ci(&sample, &Mean, 0.95, FAST_RESAMPLES, Some(42)).unwrap();
        assert!(report.interval.contains(report.estimate));
    }

    #[test]
    fn test_numeric_ci_dispatch() {
        let sample = NumericSample::numeric(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(numeric_ci(&sample, StatisticKind::Mean, 0.95).is_ok());
        assert!(numeric_ci(&sample, StatisticKind::Median, 0.95).is_ok());
        assert!(matches!(
            numeric_ci(&sample, StatisticKind::Proportion, 0.95),
            Err(Error::InvalidStatistic(_))
        ));
    }

    #[test]
    fn test_proportion_ci() {
        let sample =
            CategoricalSample::categorical(["yes", "yes", "no", "yes"]).unwrap();
        let report = proportion_ci(&sample, "yes", 0.95).unwrap();
        assert!(report.interval.lower >= 0.0);
        assert!(report.interval.upper <= 1.0);
    }
}
