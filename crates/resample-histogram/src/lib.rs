//! Histogram binning for bootstrap distributions
//!
//! The output-facing half of an estimation request: a bootstrap
//! distribution (or any slice of values) binned into a [`Histogram`] for a
//! downstream renderer. Plot drawing itself lives outside this workspace.

mod builders;
mod traits;
mod types;

pub use builders::{FixedWidthBuilder, ScottsRule};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};
