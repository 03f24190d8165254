//! Immutable observed samples
//!
//! A [`Sample`] is the fixed input of every estimation request: an ordered,
//! non-empty sequence of observations for one variable of interest. It is
//! loaded once and never mutated; replicates drawn from it are plain vectors
//! owned by the caller.

use crate::error::{Error, Result};

/// An ordered, non-empty sequence of observations for one variable
///
/// The zero-length case is rejected at construction, so every downstream
/// consumer can rely on `len() > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    observations: Vec<T>,
}

/// A sample of numeric observations
pub type NumericSample = Sample<f64>;

/// A sample of categorical observations
pub type CategoricalSample = Sample<String>;

impl<T> Sample<T> {
    /// Create a sample from a vector of observations
    ///
    /// Fails with [`Error::EmptySample`] for a zero-length vector.
    pub fn new(observations: Vec<T>) -> Result<Self> {
        Error::check_non_empty(&observations)?;
        Ok(Self { observations })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false: the constructor rejects empty samples
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The observations in their original order
    pub fn observations(&self) -> &[T] {
        &self.observations
    }

    /// Iterate over the observations
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.observations.iter()
    }
}

impl<T> AsRef<[T]> for Sample<T> {
    fn as_ref(&self) -> &[T] {
        &self.observations
    }
}

impl Sample<f64> {
    /// Create a numeric sample, rejecting NaN and infinite values
    pub fn numeric(values: Vec<f64>) -> Result<Self> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample"));
        }
        Self::new(values)
    }
}

impl Sample<String> {
    /// Create a categorical sample from anything that yields string-like items
    pub fn categorical<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(values.into_iter().map(Into::into).collect())
    }

    /// Distinct categories occurring in the sample, sorted
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> =
            self.observations.iter().map(String::as_str).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }
}
