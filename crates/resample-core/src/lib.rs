//! Core traits and types for bootstrap resampling
//!
//! This crate provides the foundation shared by the resample-stats crates:
//!
//! - **Samples**: immutable, non-empty observation sequences ([`Sample`])
//! - **Resampling**: with-replacement replicate drawing with explicit,
//!   seedable randomness ([`resample`])
//! - **Execution**: sequential or rayon-backed iteration over independent
//!   replicates ([`execution`])
//! - **Statistics**: the [`StatisticEstimator`] seam implemented by the
//!   estimator crates
//!
//! # Design
//!
//! Randomness is never ambient. Every resampling function takes a generator
//! as a parameter, and the bootstrap engine derives one generator per
//! replicate from a single base seed, so a fixed seed reproduces results
//! exactly on either execution engine.
//!
//! # Example
//!
//! ```rust
//! use resample_core::{resample, NumericSample};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let sample = NumericSample::numeric(vec![10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let replicate = resample::bootstrap_replicate(&mut rng, &sample);
//! assert_eq!(replicate.len(), sample.len());
//! ```

pub mod error;
pub mod execution;
pub mod resample;
pub mod sample;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use execution::{auto_engine, sequential, ExecutionEngine, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};
pub use resample::{bootstrap_indices, bootstrap_replicate, replicate_seed, resample_into};
pub use sample::{CategoricalSample, NumericSample, Sample};
pub use traits::StatisticEstimator;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::execution::{auto_engine, sequential, ExecutionEngine};
    pub use crate::sample::{CategoricalSample, NumericSample, Sample};
    pub use crate::traits::StatisticEstimator;
}
