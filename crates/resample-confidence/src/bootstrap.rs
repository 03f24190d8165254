//! The bootstrap engine
//!
//! Ties the pieces together: draw `R` replicates of a sample, evaluate the
//! statistic on each, and hand the resulting distribution to an interval
//! method. Each replicate derives its own generator from a single base
//! seed, so results are identical for a fixed seed on the sequential and
//! parallel engines.

use crate::distribution::BootstrapDistribution;
use crate::method::IntervalMethod;
use crate::types::{ConfidenceInterval, ConfidenceLevel};
use rand::prelude::*;
use resample_core::{
    resample::{bootstrap_replicate, replicate_seed},
    Error, ExecutionEngine, Result, Sample, StatisticEstimator,
};
use tracing::{debug, instrument};

/// Result of one bootstrap confidence interval estimation
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    /// The confidence interval
    pub interval: ConfidenceInterval,
    /// The full bootstrap distribution, for histogramming and inspection
    pub distribution: BootstrapDistribution,
    /// Statistic value on the original sample
    pub estimate: f64,
    /// Number of bootstrap replicates drawn
    pub n_resamples: usize,
    /// Time taken for the bootstrap (if measured)
    pub elapsed_ms: Option<u64>,
}

/// Bootstrap engine with builder-style configuration
///
/// ```rust
/// use resample_confidence::{Bootstrap, PercentileInterval};
/// use resample_core::{sequential, NumericSample};
/// use resample_statistic::Mean;
///
/// let sample = NumericSample::numeric(vec![10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
/// let bootstrap = Bootstrap::new(sequential(), PercentileInterval)
///     .with_resamples(1000)
///     .with_confidence_level(0.95)
///     .with_seed(42);
///
/// let report = bootstrap.confidence_interval(&sample, &Mean).unwrap();
/// assert!(report.interval.lower <= report.interval.upper);
/// ```
#[derive(Clone)]
pub struct Bootstrap<E, M> {
    engine: E,
    method: M,
    n_resamples: usize,
    confidence_level: f64,
    seed: Option<u64>,
}

impl<E, M> Bootstrap<E, M>
where
    E: ExecutionEngine,
    M: IntervalMethod,
{
    /// Create a new bootstrap engine with default settings
    /// (10000 resamples, 95% level, random seed)
    pub fn new(engine: E, method: M) -> Self {
        Self {
            engine,
            method,
            n_resamples: crate::api::DEFAULT_RESAMPLES,
            confidence_level: 0.95,
            seed: None,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set the confidence level
    ///
    /// Validated when an estimation request runs, not here, so a bad level
    /// surfaces as [`Error::InvalidConfidenceLevel`] rather than a panic.
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Set the random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the empirical distribution of the statistic
    ///
    /// Draws `R` replicates independently and evaluates the estimator on
    /// each; `O(R·n)` work with no shared state beyond the base seed.
    #[instrument(skip(self, sample, estimator), fields(n = sample.len(), n_resamples = self.n_resamples, statistic = estimator.name()))]
    pub fn distribution<T, Est>(
        &self,
        sample: &Sample<T>,
        estimator: &Est,
    ) -> Result<BootstrapDistribution>
    where
        T: Clone + Send + Sync,
        Est: StatisticEstimator<T> + Sync,
    {
        if self.n_resamples == 0 {
            return Err(Error::InvalidParameter(
                "number of resamples must be positive".to_string(),
            ));
        }
        estimator.validate(sample.observations())?;

        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        debug!(
            "drawing {} replicates of {} observations",
            self.n_resamples,
            sample.len()
        );

        let estimates: Result<Vec<f64>> = self
            .engine
            .run(self.n_resamples, |i| {
                let mut rng = StdRng::seed_from_u64(replicate_seed(seed, i));
                let replicate = bootstrap_replicate(&mut rng, sample);
                estimator.estimate(&replicate)
            })
            .into_iter()
            .collect();

        BootstrapDistribution::new(estimates?)
    }

    /// Estimate a confidence interval for the statistic
    ///
    /// Evaluates the statistic on the original sample, builds the bootstrap
    /// distribution, and applies the interval method at the configured
    /// level.
    #[instrument(skip(self, sample, estimator), fields(n = sample.len(), n_resamples = self.n_resamples, confidence_level = self.confidence_level))]
    pub fn confidence_interval<T, Est>(
        &self,
        sample: &Sample<T>,
        estimator: &Est,
    ) -> Result<BootstrapReport>
    where
        T: Clone + Send + Sync,
        Est: StatisticEstimator<T> + Sync,
    {
        let level = ConfidenceLevel::new(self.confidence_level)?;
        estimator.validate(sample.observations())?;

        let start = std::time::Instant::now();
        let estimate = estimator.estimate(sample.observations())?;
        let distribution = self.distribution(sample, estimator)?;
        let interval = self
            .method
            .interval(distribution.values(), estimate, level)?;

        debug!(method = self.method.name(), %interval, "bootstrap complete");

        Ok(BootstrapReport {
            interval,
            distribution,
            estimate,
            n_resamples: self.n_resamples,
            elapsed_ms: Some(start.elapsed().as_millis() as u64),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::PercentileInterval;
    use resample_core::sequential;
    use resample_statistic::{Mean, Proportion};

    #[test]
    fn test_bootstrap_construction() {
        let bootstrap = Bootstrap::new(sequential(), PercentileInterval)
            .with_resamples(1000)
            .with_confidence_level(0.95)
            .with_seed(42);

        assert_eq!(bootstrap.n_resamples, 1000);
        assert_eq!(bootstrap.confidence_level, 0.95);
        assert_eq!(bootstrap.seed, Some(42));
    }

    #[test]
    fn test_distribution_length_and_reproducibility() {
        let sample = Sample::numeric(vec![10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
        let bootstrap = Bootstrap::new(sequential(), PercentileInterval)
            .with_resamples(200)
            .with_seed(42);

        let first = bootstrap.distribution(&sample, &Mean).unwrap();
        let second = bootstrap.distribution(&sample, &Mean).unwrap();

        assert_eq!(first.len(), 200);
        assert_eq!(first.values(), second.values());
    }

    #[test]
    fn test_zero_resamples_fails() {
        let sample = Sample::numeric(vec![1.0, 2.0]).unwrap();
        let bootstrap =
            Bootstrap::new(sequential(), PercentileInterval).with_resamples(0);
        assert!(matches!(
            bootstrap.distribution(&sample, &Mean),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_invalid_level_fails_without_resampling() {
        let sample = Sample::numeric(vec![1.0, 2.0, 3.0]).unwrap();
        for level in [0.0, 1.0] {
            let bootstrap = Bootstrap::new(sequential(), PercentileInterval)
                .with_resamples(10)
                .with_confidence_level(level)
                .with_seed(1);
            assert!(matches!(
                bootstrap.confidence_interval(&sample, &Mean),
                Err(Error::InvalidConfidenceLevel { .. })
            ));
        }
    }

    #[test]
    fn test_missing_success_category_fails() {
        let sample = Sample::categorical(["no", "no", "no"]).unwrap();
        let bootstrap = Bootstrap::new(sequential(), PercentileInterval)
            .with_resamples(10)
            .with_seed(1);
        assert!(matches!(
            bootstrap.confidence_interval(&sample, &Proportion::of("yes")),
            Err(Error::InvalidSuccessCategory { .. })
        ));
    }

    #[test]
    fn test_report_fields() {
        let sample = Sample::numeric(vec![10.0, 20.0, 30.0]).unwrap();
        let bootstrap = Bootstrap::new(sequential(), PercentileInterval)
            .with_resamples(100)
            .with_seed(7);

        let report = bootstrap.confidence_interval(&sample, &Mean).unwrap();
        assert_eq!(report.n_resamples, 100);
        assert_eq!(report.distribution.len(), 100);
        assert!((report.estimate - 20.0).abs() < 1e-12);
        assert!(report.interval.lower >= report.distribution.min());
        assert!(report.interval.upper <= report.distribution.max());
        assert!(report.elapsed_ms.is_some());
    }
}
