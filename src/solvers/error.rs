//! Errors raised by fitting.

use thiserror::Error;

/// Errors that can occur during a least-squares fit or an extrapolation run.
///
/// All failures are raised synchronously from the fit call and carry no
/// partial results: a numerical failure means the input table is inadequate
/// (too few distinct parameter values, too-collinear features) and has to be
/// fixed upstream.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("Gram matrix is singular or nearly singular")]
    SingularMatrix,

    #[error("dimension mismatch: design matrix has {x_rows} rows but {y_len} were supplied")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("invalid weights: sample weights must be non-negative")]
    InvalidWeights,

    #[error("numerical error: {0}")]
    Numerical(String),
}
