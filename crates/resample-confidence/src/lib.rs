//! Bootstrap percentile confidence interval estimation
//!
//! This crate approximates the sampling distribution of a statistic by
//! resampling the observed sample with replacement, then reads a two-sided
//! confidence interval off the empirical quantiles of that distribution:
//!
//! 1. Draw `R` replicates of the sample (same size, with replacement)
//! 2. Evaluate the statistic on each replicate
//! 3. Bound the interval by the type-7 quantiles at `α/2` and `1 − α/2`
//!
//! The resulting interval is frequentist: over repeated sampling, `L·100%`
//! of intervals built this way contain the population parameter.
//!
//! # Example
//!
//! ```rust
//! use resample_confidence::api::mean_ci;
//! use resample_core::NumericSample;
//!
//! let sample = NumericSample::numeric(vec![10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
//! let report = mean_ci(&sample, 0.95).unwrap();
//!
//! assert!(report.interval.lower <= report.interval.upper);
//! assert_eq!(report.distribution.len(), 10_000);
//! ```
//!
//! For full control over the engine, seed, and resample count, use
//! [`Bootstrap`] directly.

pub mod api;
mod bootstrap;
mod distribution;
mod method;
pub mod quantile;
mod types;

// Re-exports
pub use api::{
    bootstrap_ci, mean_ci, median_ci, numeric_ci, proportion_ci, DEFAULT_RESAMPLES,
    FAST_RESAMPLES, HIGH_PRECISION_RESAMPLES,
};
pub use bootstrap::{Bootstrap, BootstrapReport};
pub use distribution::BootstrapDistribution;
pub use method::{IntervalMethod, PercentileInterval};
pub use types::{ConfidenceInterval, ConfidenceLevel};

/// Convenience constructor for a percentile bootstrap on the default engine
pub fn percentile_bootstrap(
    n_resamples: usize,
    confidence_level: f64,
) -> Bootstrap<resample_core::execution::SequentialEngine, PercentileInterval> {
    Bootstrap::new(resample_core::sequential(), PercentileInterval)
        .with_resamples(n_resamples)
        .with_confidence_level(confidence_level)
}
