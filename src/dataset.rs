//! Observation tables.
//!
//! The crate's input boundary: an ordered set of records with named numeric
//! fields, as produced by the external log scraper. Tables are validated on
//! construction (rectangular, finite values); everything downstream can
//! assume a well-formed matrix.

use faer::{Col, Mat};
use thiserror::Error;

/// Errors raised while building or querying a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("table has no data rows")]
    Empty,

    #[error("row {row} has {got} fields, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("row {row}, column '{column}': cannot parse '{value}' as a number")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}, column '{column}': value is not finite")]
    NonFinite { row: usize, column: String },

    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

/// An in-memory table of observations, column-major.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ObservationTable {
    /// Parse delimited text: a header line of column names followed by one
    /// numeric row per observation. Blank lines are skipped.
    pub fn from_delimited(text: &str, delimiter: char) -> Result<Self, TableError> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        let header = lines.next().ok_or(TableError::Empty)?;
        let names: Vec<String> = header
            .split(delimiter)
            .map(|s| s.trim().to_string())
            .collect();
        let width = names.len();

        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); width];
        for (row, line) in lines.enumerate() {
            let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
            if fields.len() != width {
                return Err(TableError::Ragged {
                    row,
                    expected: width,
                    got: fields.len(),
                });
            }
            for (j, field) in fields.iter().enumerate() {
                let value: f64 = field.parse().map_err(|_| TableError::Parse {
                    row,
                    column: names[j].clone(),
                    value: (*field).to_string(),
                })?;
                if !value.is_finite() {
                    return Err(TableError::NonFinite {
                        row,
                        column: names[j].clone(),
                    });
                }
                columns[j].push(value);
            }
        }

        if columns.is_empty() || columns[0].is_empty() {
            return Err(TableError::Empty);
        }

        Ok(Self { names, columns })
    }

    /// Number of observations.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Column names, in table order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn index_of(&self, name: &str) -> Result<usize, TableError> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// A single column as a vector.
    pub fn column(&self, name: &str) -> Result<Col<f64>, TableError> {
        let j = self.index_of(name)?;
        Ok(Col::from_fn(self.n_rows(), |i| self.columns[j][i]))
    }

    /// The named columns gathered into a design matrix, in the given order.
    pub fn design(&self, names: &[&str]) -> Result<Mat<f64>, TableError> {
        let indices: Vec<usize> = names
            .iter()
            .map(|name| self.index_of(name))
            .collect::<Result<_, _>>()?;
        Ok(Mat::from_fn(self.n_rows(), indices.len(), |i, j| {
            self.columns[indices[j]][i]
        }))
    }

    /// Append a derived column `<name>_inv` holding the reciprocal of
    /// `name`. A zero entry would produce an infinite parameter and is
    /// rejected.
    pub fn with_reciprocal(mut self, name: &str) -> Result<Self, TableError> {
        let j = self.index_of(name)?;
        let derived_name = format!("{name}_inv");

        let mut derived = Vec::with_capacity(self.n_rows());
        for (i, &value) in self.columns[j].iter().enumerate() {
            let reciprocal = 1.0 / value;
            if !reciprocal.is_finite() {
                return Err(TableError::NonFinite {
                    row: i,
                    column: derived_name,
                });
            }
            derived.push(reciprocal);
        }

        self.names.push(derived_name);
        self.columns.push(derived);
        Ok(self)
    }

    /// Indices of the rows where none of the named columns sits at that
    /// column's minimum value; the keep-list for one boundary-trimming pass.
    pub fn rows_off_minima(&self, names: &[&str]) -> Result<Vec<usize>, TableError> {
        let design = self.design(names)?;
        Ok(crate::utils::rows_off_minima(&design))
    }

    /// A copy keeping only the given rows, in the given order.
    pub fn retain_rows(&self, rows: &[usize]) -> Self {
        Self {
            names: self.names.clone(),
            columns: self
                .columns
                .iter()
                .map(|col| rows.iter().map(|&i| col[i]).collect())
                .collect(),
        }
    }
}
