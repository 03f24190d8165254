//! Bootstrap resampling and percentile confidence intervals
//!
//! This crate re-exports the resample-stats workspace:
//!
//! - [`resample_core`]: samples, resampling, execution engines, the
//!   statistic trait
//! - [`resample_statistic`]: mean, median, and proportion estimators
//! - [`resample_confidence`]: the bootstrap engine and percentile intervals
//! - [`resample_histogram`]: binning of bootstrap distributions
//! - [`resample_table`]: named-column tables and CSV ingestion
//!
//! # Example
//!
//! ```rust
//! use resample_stats::{mean_ci, NumericSample};
//!
//! let waiting_times =
//!     NumericSample::numeric(vec![12.0, 9.5, 14.0, 11.0, 10.5, 13.0, 8.0, 12.5]).unwrap();
//! let report = mean_ci(&waiting_times, 0.95).unwrap();
//!
//! assert!(report.interval.contains(report.estimate));
//! ```

pub use resample_core::{
    auto_engine, bootstrap_indices, bootstrap_replicate, replicate_seed, resample_into,
    sequential, CategoricalSample, Error, ExecutionEngine, NumericSample, Result, Sample,
    SequentialEngine, StatisticEstimator,
};

#[cfg(feature = "parallel")]
pub use resample_core::{parallel, ParallelEngine};

pub use resample_statistic::{Mean, Median, Proportion, StatisticKind};

pub use resample_confidence::{
    bootstrap_ci, mean_ci, median_ci, numeric_ci, proportion_ci, Bootstrap,
    BootstrapDistribution, BootstrapReport, ConfidenceInterval, ConfidenceLevel,
    IntervalMethod, PercentileInterval, DEFAULT_RESAMPLES, FAST_RESAMPLES,
    HIGH_PRECISION_RESAMPLES,
};

pub use resample_histogram::{FixedWidthBuilder, Histogram, HistogramBin, HistogramBuilder, ScottsRule};

pub use resample_table::{Column, Table};

/// Prelude module for convenient imports
pub mod prelude {
    pub use resample_confidence::{
        bootstrap_ci, mean_ci, median_ci, proportion_ci, Bootstrap, ConfidenceInterval,
        ConfidenceLevel, PercentileInterval,
    };
    pub use resample_core::{
        auto_engine, sequential, CategoricalSample, Error, NumericSample, Result, Sample,
        StatisticEstimator,
    };
    pub use resample_statistic::{Mean, Median, Proportion, StatisticKind};
}
