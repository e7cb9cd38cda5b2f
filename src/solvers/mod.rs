//! Least-squares solving.

mod error;
mod least_squares;

pub use error::RegressionError;
pub use least_squares::{LeastSquares, LeastSquaresBuilder};
