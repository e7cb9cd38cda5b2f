//! Common test helpers.

use faer::{Col, Mat};

/// Build a matrix from row slices.
pub fn mat(rows: &[&[f64]]) -> Mat<f64> {
    let n_cols = rows.first().map_or(0, |r| r.len());
    Mat::from_fn(rows.len(), n_cols, |i, j| rows[i][j])
}

/// Build a column vector from a slice.
pub fn col(values: &[f64]) -> Col<f64> {
    Col::from_fn(values.len(), |i| values[i])
}
