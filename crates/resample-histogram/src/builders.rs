//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use resample_core::{Error, Result};
use std::cmp::Ordering;

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// `[min, max]`; the last bin includes the maximum.
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, values: &[f64]) -> Result<Histogram> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        self.build_sorted(&sorted)
    }

    fn build_sorted(&self, sorted_values: &[f64]) -> Result<Histogram> {
        Error::check_non_empty(sorted_values)?;

        let total = sorted_values.len();
        let min = sorted_values[0];
        let max = sorted_values[total - 1];

        if (max - min).abs() < 1e-10 {
            // All values are the same
            let bin = HistogramBin::new(min, max, total, total);
            return Ok(Histogram::new(vec![bin], total, min, max));
        }

        let width = (max - min) / self.num_bins as f64;

        // Count values per bin in one pass over the sorted data
        let mut counts = vec![0usize; self.num_bins];
        let mut current_bin = 0;
        for &value in sorted_values {
            while current_bin < self.num_bins - 1 && value >= min + (current_bin + 1) as f64 * width
            {
                current_bin += 1;
            }
            counts[current_bin] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let left = min + i as f64 * width;
                let right = if i == self.num_bins - 1 {
                    max // Last bin includes max
                } else {
                    min + (i + 1) as f64 * width
                };
                HistogramBin::new(left, right, count, total)
            })
            .collect();

        Ok(Histogram::new(bins, total, min, max))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Scott's rule for bin width
///
/// Uses the formula `h = 3.5 * σ * n^(-1/3)` where σ is the standard
/// deviation and n the number of values, then delegates to
/// [`FixedWidthBuilder`].
pub struct ScottsRule;

impl HistogramBuilder for ScottsRule {
    fn build(&self, values: &[f64]) -> Result<Histogram> {
        Error::check_non_empty(values)?;

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        let bin_width = 3.5 * std_dev * n.powf(-1.0 / 3.0);

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        let num_bins = if bin_width > 1e-10 {
            ((range / bin_width).ceil() as usize).max(1)
        } else {
            1
        };

        FixedWidthBuilder::new(num_bins).build(values)
    }

    fn build_sorted(&self, sorted_values: &[f64]) -> Result<Histogram> {
        self.build(sorted_values)
    }
}
