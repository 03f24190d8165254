//! Interval construction methods
//!
//! A method turns a bootstrap distribution into a confidence interval.
//! Only the percentile method is implemented; the trait is the seam for
//! alternatives.

use crate::quantile::quantile_sorted;
use crate::types::{ConfidenceInterval, ConfidenceLevel};
use resample_core::{Error, Result};
use std::cmp::Ordering;

/// Constructs a confidence interval from bootstrap estimates
pub trait IntervalMethod: Clone + Send + Sync {
    /// Calculate the interval from the replicate statistics
    fn interval(
        &self,
        estimates: &[f64],
        point_estimate: f64,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval>;

    /// Method name for reporting
    fn name(&self) -> &'static str;
}

/// Percentile interval
///
/// Sorts the bootstrap estimates ascending and bounds the interval by the
/// type-7 quantiles at `α/2` and `1 − α/2` where `α = 1 − level`. Both
/// bounds therefore lie within the range of the estimates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileInterval;

impl IntervalMethod for PercentileInterval {
    fn interval(
        &self,
        estimates: &[f64],
        point_estimate: f64,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        if estimates.is_empty() {
            return Err(Error::InvalidParameter(
                "no bootstrap estimates".to_string(),
            ));
        }

        let mut sorted = estimates.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let lower = quantile_sorted(&sorted, level.tail_probability())?;
        let upper = quantile_sorted(&sorted, 1.0 - level.tail_probability())?;

        Ok(ConfidenceInterval::new(
            lower,
            upper,
            point_estimate,
            level.value(),
        ))
    }

    fn name(&self) -> &'static str {
        "percentile"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percentile_interval() {
        let estimates: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let level = ConfidenceLevel::new(0.90).unwrap();

        let ci = PercentileInterval.interval(&estimates, 5.5, level).unwrap();

        // Type-7 at p=0.05 over 10 values: h = 0.45 between v[0] and v[1]
        assert_relative_eq!(ci.lower, 1.45);
        assert_relative_eq!(ci.upper, 9.55);
        assert_relative_eq!(ci.estimate, 5.5);
        assert_relative_eq!(ci.confidence_level, 0.90);
    }

    #[test]
    fn test_bounds_ordered_and_within_range() {
        let estimates = vec![9.0, 2.0, 7.0, 1.0, 8.0, 3.0];
        let level = ConfidenceLevel::NINETY_FIVE;

        let ci = PercentileInterval.interval(&estimates, 5.0, level).unwrap();
        assert!(ci.lower <= ci.upper);
        assert!(ci.lower >= 1.0);
        assert!(ci.upper <= 9.0);
    }

    #[test]
    fn test_single_estimate_degenerates() {
        let level = ConfidenceLevel::NINETY_FIVE;
        let ci = PercentileInterval.interval(&[4.0], 4.0, level).unwrap();
        assert_relative_eq!(ci.lower, 4.0);
        assert_relative_eq!(ci.upper, 4.0);
    }

    #[test]
    fn test_empty_estimates_fail() {
        let level = ConfidenceLevel::NINETY_FIVE;
        assert!(PercentileInterval.interval(&[], 0.0, level).is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(PercentileInterval.name(), "percentile");
    }
}
