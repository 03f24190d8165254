//! In-memory tables with named columns
//!
//! The loader-facing surface of the workspace: tabular records become a
//! [`Table`], and "select column by name" yields the immutable sample the
//! statistical core consumes. CSV is read from any `io::Read`; column types
//! are inferred, a column whose every cell parses as a finite number is
//! numeric and anything else is categorical.

use crate::error::{Error, Result};
use resample_core::{CategoricalSample, NumericSample};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A single named column
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric observations
    Numeric(Vec<f64>),
    /// Categorical observations
    Categorical(Vec<String>),
}

impl Column {
    /// Number of rows in the column
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Categorical(values) => values.len(),
        }
    }

    /// Whether the column has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column type name for error reporting
    pub fn type_name(&self) -> &'static str {
        match self {
            Column::Numeric(_) => "numeric",
            Column::Categorical(_) => "categorical",
        }
    }
}

/// A table of named columns of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
    n_rows: usize,
}

impl Table {
    /// Create a table from named columns
    ///
    /// All columns must have the same number of rows.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let columns: Vec<(String, Column)> = columns
            .into_iter()
            .map(|(name, column)| (name.into(), column))
            .collect();

        let n_rows = columns.first().map_or(0, |(_, column)| column.len());
        for (name, column) in &columns {
            if column.len() != n_rows {
                return Err(Error::InvalidColumn(format!(
                    "column {name:?} has {} rows, expected {n_rows}",
                    column.len()
                )));
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Read a table from CSV with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in csv_reader.records() {
            let record = record?;
            if record.len() != headers.len() {
                return Err(Error::InvalidColumn(format!(
                    "row has {} fields, expected {}",
                    record.len(),
                    headers.len()
                )));
            }
            for (column, field) in cells.iter_mut().zip(record.iter()) {
                column.push(field.to_string());
            }
        }

        Self::from_columns(headers.into_iter().zip(cells.into_iter().map(infer_column)))
    }

    /// Read a table from a CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_csv_reader(File::open(path)?)
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Column names in table order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Select a column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|(column_name, _)| column_name == name)
            .map(|(_, column)| column)
            .ok_or_else(|| Error::InvalidColumn(name.to_string()))
    }

    /// Select a numeric column as a sample
    pub fn numeric_sample(&self, name: &str) -> Result<NumericSample> {
        match self.column(name)? {
            Column::Numeric(values) => Ok(NumericSample::numeric(values.clone())?),
            other => Err(Error::TypeMismatch {
                expected: "numeric".to_string(),
                got: other.type_name().to_string(),
            }),
        }
    }

    /// Select a categorical column as a sample
    pub fn categorical_sample(&self, name: &str) -> Result<CategoricalSample> {
        match self.column(name)? {
            Column::Categorical(values) => {
                Ok(CategoricalSample::categorical(values.clone())?)
            }
            other => Err(Error::TypeMismatch {
                expected: "categorical".to_string(),
                got: other.type_name().to_string(),
            }),
        }
    }
}

/// Infer a column's type from its raw cells
fn infer_column(raw: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = raw
        .iter()
        .map(|cell| cell.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect();
    match parsed {
        Some(values) => Column::Numeric(values),
        None => Column::Categorical(raw),
    }
}
