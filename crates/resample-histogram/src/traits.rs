//! Histogram builder trait

use crate::types::Histogram;
use resample_core::Result;

/// Strategy for binning a set of values into a histogram
pub trait HistogramBuilder {
    /// Build a histogram from unsorted values
    fn build(&self, values: &[f64]) -> Result<Histogram>;

    /// Build a histogram from ascending-sorted values
    fn build_sorted(&self, sorted_values: &[f64]) -> Result<Histogram>;

    /// Number of bins this builder aims for, if fixed
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
