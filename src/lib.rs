//! Extrapolation of quantum-chemistry correlation energies to the
//! infinite-basis/zero-cutoff limit via weighted polynomial regression.
//!
//! The crate consumes a table of calculation results (truncation parameters
//! plus the correlation-energy correction per run), expands the parameters
//! into a linear or quadratic design matrix, and fits weighted least squares
//! with full coefficient inference (standard errors, t-statistics, two-sided
//! significance probabilities). The extrapolated value is the fitted
//! intercept: the response at the point where every truncation parameter
//! vanishes.
//!
//! Two extrapolation policies are layered on the same engine and selected by
//! configuration: a two-pass fit that re-weights observations by their
//! estimated discretization error, and backward elimination that discards
//! insignificant expansion terms before a final weighted refit.
//!
//! # Example
//!
//! ```rust,ignore
//! use extrap::prelude::*;
//!
//! let table = ObservationTable::from_delimited(&csv_text, ',')?
//!     .with_reciprocal("n_orbs_var")?
//!     .with_reciprocal("n_orbs_pt")?;
//! let parameters = table.design(&["n_orbs_var_inv", "eps_var", "n_orbs_pt_inv", "eps_pt"])?;
//! let response = table.column("energy_corr")?;
//!
//! let options = RegressionOptions::builder().build()?;
//! let outcome = extrapolate(&parameters, &response, &options)?;
//! ```

pub mod core;
pub mod dataset;
pub mod expansion;
pub mod extrapolation;
pub mod inference;
pub mod report;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        ExtrapolationStrategy, FitResult, OptionsError, PolynomialOrder, RegressionOptions,
        RegressionOptionsBuilder,
    };
    pub use crate::dataset::{ObservationTable, TableError};
    pub use crate::extrapolation::{
        extrapolate, BackwardElimination, EliminationFit, ExtrapolationOutcome, VarianceWeighted,
        VarianceWeightedFit,
    };
    pub use crate::report::FitSummary;
    pub use crate::solvers::{LeastSquares, RegressionError};
}

pub use crate::core::{
    ExtrapolationStrategy, FitResult, OptionsError, PolynomialOrder, RegressionOptions,
    RegressionOptionsBuilder,
};
pub use crate::solvers::{LeastSquares, RegressionError};
