//! Empirical quantiles with linear interpolation
//!
//! Implements the type-7 rule: for probability `p` over sorted values
//! `v[0..n-1]`, the index is `h = p·(n−1)` and the result interpolates
//! between `v[floor(h)]` and `v[ceil(h)]`. This is the default in most
//! statistical environments and keeps interval bounds inside the range of
//! the observed values.

use resample_core::{Error, Result};
use std::cmp::Ordering;

/// Type-7 quantile over ascending-sorted values
///
/// The input must be sorted; the function never mutates it, so repeated
/// calls with the same input are identical.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    Error::check_non_empty(sorted)?;
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }

    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }

    let h = p * (n - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    let fraction = h - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * fraction)
}

/// Type-7 quantile over unsorted values
///
/// Sorts a copy ascending and delegates to [`quantile_sorted`].
pub fn quantile(values: &[f64], p: f64) -> Result<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    quantile_sorted(&sorted, p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_values() {
        let sorted = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_relative_eq!(quantile_sorted(&sorted, 0.0).unwrap(), 10.0);
        assert_relative_eq!(quantile_sorted(&sorted, 0.25).unwrap(), 20.0);
        assert_relative_eq!(quantile_sorted(&sorted, 0.5).unwrap(), 30.0);
        assert_relative_eq!(quantile_sorted(&sorted, 1.0).unwrap(), 50.0);
    }

    #[test]
    fn test_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        // h = 0.5 * 3 = 1.5, halfway between v[1] and v[2]
        assert_relative_eq!(quantile_sorted(&sorted, 0.5).unwrap(), 2.5);
        // h = 0.05 * 3 = 0.15
        assert_relative_eq!(quantile_sorted(&sorted, 0.05).unwrap(), 1.15);
        // h = 0.95 * 3 = 2.85
        assert_relative_eq!(quantile_sorted(&sorted, 0.95).unwrap(), 3.85);
    }

    #[test]
    fn test_idempotent() {
        let sorted: Vec<f64> = (0..100).map(|i| i as f64 * 0.5).collect();
        let first = quantile_sorted(&sorted, 0.025).unwrap();
        let second = quantile_sorted(&sorted, 0.025).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_value() {
        assert_relative_eq!(quantile_sorted(&[42.0], 0.37).unwrap(), 42.0);
    }

    #[test]
    fn test_unsorted_input() {
        assert_relative_eq!(quantile(&[30.0, 10.0, 50.0, 20.0, 40.0], 0.5).unwrap(), 30.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(quantile_sorted(&[], 0.5).is_err());
        assert!(quantile_sorted(&[1.0], -0.1).is_err());
        assert!(quantile_sorted(&[1.0], 1.1).is_err());
    }

    #[test]
    fn test_bounds_within_range() {
        let sorted = [2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
        for p in [0.01, 0.025, 0.1, 0.5, 0.9, 0.975, 0.99] {
            let q = quantile_sorted(&sorted, p).unwrap();
            assert!(q >= sorted[0] && q <= sorted[5]);
        }
    }
}
