//! Named-column tables and CSV ingestion
//!
//! Bridges tabular records to the statistical core: load a [`Table`] from
//! CSV, then select a column by name to obtain the immutable sample the
//! bootstrap consumes. Remote sources are out of scope; any `io::Read`
//! works as input.

mod error;
mod table;

pub use error::{Error, Result};
pub use table::{Column, Table};
