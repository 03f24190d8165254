//! Bootstrap resampling
//!
//! Draws replicates of a [`Sample`] by sampling indices independently and
//! uniformly with replacement. Randomness is always an explicit generator
//! parameter: there is no ambient RNG state, so a fixed seed reproduces the
//! exact sequence of replicates, and parallel runs stay deterministic when
//! each replicate derives its own generator via [`replicate_seed`].

use crate::error::{Error, Result};
use crate::sample::Sample;
use rand::Rng;

/// Draw `n` indices uniformly from `{0, …, n - 1}` with replacement
///
/// Fails only for `n == 0`.
pub fn bootstrap_indices<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<Vec<usize>> {
    if n == 0 {
        return Err(Error::EmptySample);
    }
    Ok((0..n).map(|_| rng.gen_range(0..n)).collect())
}

/// Gather `source[indices]` into a reusable buffer
///
/// The buffer is cleared first; its capacity is reused across replicates.
pub fn resample_into<T: Clone>(source: &[T], indices: &[usize], out: &mut Vec<T>) {
    out.clear();
    out.extend(indices.iter().map(|&i| source[i].clone()));
}

/// Draw one bootstrap replicate of a sample
///
/// The replicate has the same length as the sample. It may contain repeated
/// observations and need not contain every original observation.
pub fn bootstrap_replicate<T, R>(rng: &mut R, sample: &Sample<T>) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let observations = sample.observations();
    let n = observations.len();
    let mut replicate = Vec::with_capacity(n);
    for _ in 0..n {
        replicate.push(observations[rng.gen_range(0..n)].clone());
    }
    replicate
}

/// Derive the seed for replicate `index` from a base seed
///
/// Each replicate owns an independent generator seeded this way, which keeps
/// the replicate stream identical whether iterations run sequentially or
/// are partitioned across workers.
pub fn replicate_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add(index as u64)
}
