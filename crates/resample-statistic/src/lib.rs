//! Summary statistic estimators
//!
//! Implementations of the [`StatisticEstimator`] trait from
//! `resample-core`: [`Mean`] and [`Median`] over numeric observations and
//! [`Proportion`] over categorical observations, plus [`StatisticKind`]
//! for parsing statistic names.
//!
//! Every estimator is a pure function of its input slice; the same instance
//! serves the original sample and every bootstrap replicate.

mod kind;
mod mean;
mod median;
mod proportion;

pub use kind::StatisticKind;
pub use mean::Mean;
pub use median::Median;
pub use proportion::Proportion;

pub use resample_core::StatisticEstimator;
