//! Extrapolation policies layered on the least-squares engine.
//!
//! Both policies consume the base parameter matrix (one column per
//! truncation parameter) and the response column, expand the parameters per
//! the configured polynomial order, and report the fitted intercept as the
//! extrapolated value. They differ only in how observation weights are
//! derived; the two weighting rationales are kept as independent,
//! selectable variants.

mod backward;
mod reweight;

pub use backward::{BackwardElimination, EliminationFit};
pub use reweight::{VarianceWeighted, VarianceWeightedFit};

use faer::{Col, Mat};

use crate::core::{ExtrapolationStrategy, RegressionOptions};
use crate::solvers::RegressionError;

/// Result of a strategy-dispatched extrapolation run.
#[derive(Debug, Clone)]
pub enum ExtrapolationOutcome {
    /// Two-pass variance-weighted fit.
    VarianceWeighted(VarianceWeightedFit),
    /// Backward-elimination reports, one per trimming pass (the first entry
    /// is the untrimmed run).
    BackwardElimination(Vec<EliminationFit>),
}

/// Run the policy selected by `options.strategy`.
pub fn extrapolate(
    parameters: &Mat<f64>,
    response: &Col<f64>,
    options: &RegressionOptions,
) -> Result<ExtrapolationOutcome, RegressionError> {
    match options.strategy {
        ExtrapolationStrategy::VarianceWeighted => {
            let fit = VarianceWeighted::new(options.clone()).run(parameters, response)?;
            Ok(ExtrapolationOutcome::VarianceWeighted(fit))
        }
        ExtrapolationStrategy::BackwardElimination => {
            let reports =
                BackwardElimination::new(options.clone()).run_trimmed(parameters, response)?;
            Ok(ExtrapolationOutcome::BackwardElimination(reports))
        }
    }
}
