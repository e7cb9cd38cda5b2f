//! Core types for extrapolation fits.

mod options;
mod result;

pub use options::{
    ExtrapolationStrategy, OptionsError, PolynomialOrder, RegressionOptions,
    RegressionOptionsBuilder,
};
pub use result::FitResult;
