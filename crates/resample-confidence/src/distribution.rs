//! The empirical bootstrap distribution of a statistic

use crate::quantile::quantile_sorted;
use resample_core::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// Statistic values from `R` bootstrap replicates
///
/// Values are kept in insertion order for inspection and histogramming, but
/// the order carries no meaning: every summary here treats the collection as
/// an unordered multiset. A sorted copy is kept alongside so quantile
/// queries are cheap and identical across repeated calls.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapDistribution {
    values: Vec<f64>,
    sorted: Vec<f64>,
}

impl BootstrapDistribution {
    /// Create a distribution from replicate statistics
    ///
    /// Fails for an empty vector.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidParameter(
                "bootstrap distribution must contain at least one estimate".to_string(),
            ));
        }
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Ok(Self { values, sorted })
    }

    /// Number of replicates
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: the constructor rejects empty input
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replicate statistics in insertion order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Replicate statistics sorted ascending
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Smallest replicate statistic
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Largest replicate statistic
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Mean of the replicate statistics
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Bootstrap standard error: standard deviation of the distribution
    pub fn standard_error(&self) -> f64 {
        let n = self.values.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .values
            .iter()
            .map(|&v| (v - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        variance.sqrt()
    }

    /// Type-7 empirical quantile of the distribution
    pub fn quantile(&self, p: f64) -> Result<f64> {
        quantile_sorted(&self.sorted, p)
    }

    /// Consume the distribution and return the values in insertion order
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl fmt::Display for BootstrapDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BootstrapDistribution(R={}, range=[{:.4}, {:.4}])",
            self.len(),
            self.min(),
            self.max()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_rejected() {
        assert!(BootstrapDistribution::new(vec![]).is_err());
    }

    #[test]
    fn test_summaries() {
        let dist = BootstrapDistribution::new(vec![3.0, 1.0, 2.0, 5.0, 4.0]).unwrap();
        assert_eq!(dist.len(), 5);
        assert_relative_eq!(dist.min(), 1.0);
        assert_relative_eq!(dist.max(), 5.0);
        assert_relative_eq!(dist.mean(), 3.0);
        // Sample variance of 1..=5 is 2.5
        assert_relative_eq!(dist.standard_error(), 2.5f64.sqrt());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let dist = BootstrapDistribution::new(vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(dist.values(), &[3.0, 1.0, 2.0]);
        assert_eq!(dist.sorted(), &[1.0, 2.0, 3.0]);
        assert_eq!(dist.into_values(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_quantile_idempotent() {
        let dist =
            BootstrapDistribution::new((0..1000).map(|i| i as f64).collect()).unwrap();
        let first = dist.quantile(0.975).unwrap();
        let second = dist.quantile(0.975).unwrap();
        assert_eq!(first, second);
        assert!(first >= dist.min() && first <= dist.max());
    }

    #[test]
    fn test_single_replicate() {
        let dist = BootstrapDistribution::new(vec![7.0]).unwrap();
        assert_eq!(dist.len(), 1);
        assert_relative_eq!(dist.standard_error(), 0.0);
        assert_relative_eq!(dist.quantile(0.5).unwrap(), 7.0);
    }

    #[test]
    fn test_display() {
        let dist = BootstrapDistribution::new(vec![1.0, 2.0]).unwrap();
        let display = format!("{}", dist);
        assert!(display.contains("R=2"));
    }
}
