//! Backward elimination with a final weighted refit.

use faer::{Col, Mat};

use crate::core::{FitResult, RegressionOptions};
use crate::expansion::polynomial_design;
use crate::solvers::{LeastSquares, RegressionError};
use crate::utils::{rows_off_minima, select_columns, select_entries, select_rows};

/// Backward elimination over an explicit active-feature set.
///
/// Starting from every expanded feature, each round fits with an intercept
/// and drops the feature with the largest p-value, until all survivors fall
/// below the significance threshold. Exhausting the active set before the
/// criterion is met raises `InsufficientData`. The accepted fit then seeds a
/// weighted refit: each observation's fitted magnitude squared serves as its
/// estimated variance, and the final fit uses the inverse of that as weight.
#[derive(Debug, Clone)]
pub struct BackwardElimination {
    options: RegressionOptions,
}

/// Result of one backward-elimination run.
#[derive(Debug, Clone)]
pub struct EliminationFit {
    /// Indices of the surviving features, into the expanded design.
    pub active: Vec<usize>,
    /// The accepted unweighted fit that stopped the elimination loop; every
    /// coefficient p-value here is below the significance threshold.
    pub selection: FitResult,
    /// The final weighted fit on the surviving features; its intercept is
    /// the extrapolated value.
    pub fit: FitResult,
}

impl EliminationFit {
    /// Extrapolated value with its standard error.
    pub fn extrapolated(&self) -> Option<(f64, f64)> {
        self.fit.intercept_with_error()
    }
}

impl BackwardElimination {
    /// Create the policy with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Run a single elimination pass on the (expanded) parameters.
    pub fn run(
        &self,
        parameters: &Mat<f64>,
        response: &Col<f64>,
    ) -> Result<EliminationFit, RegressionError> {
        let design = polynomial_design(
            parameters,
            self.options.polynomial_order,
            self.options.cross_term,
        );
        self.run_on_design(&design, response)
    }

    /// Run on the full parameter set, then re-run after each boundary trim.
    ///
    /// Each of the `trim_passes` (at most 2) excludes the observations
    /// sitting at any parameter's minimum value, recomputing the minima on
    /// the surviving subset, and produces an independent report.
    pub fn run_trimmed(
        &self,
        parameters: &Mat<f64>,
        response: &Col<f64>,
    ) -> Result<Vec<EliminationFit>, RegressionError> {
        let mut reports = vec![self.run(parameters, response)?];

        let mut params = parameters.clone();
        let mut y = response.clone();
        for _ in 0..self.options.trim_passes {
            let keep = rows_off_minima(&params);
            params = select_rows(&params, &keep);
            y = select_entries(&y, &keep);
            reports.push(self.run(&params, &y)?);
        }

        Ok(reports)
    }

    fn run_on_design(
        &self,
        design: &Mat<f64>,
        response: &Col<f64>,
    ) -> Result<EliminationFit, RegressionError> {
        let engine = LeastSquares::new(self.options.clone());
        let mut active: Vec<usize> = (0..design.ncols()).collect();

        // Each round either stops or removes one feature, so the loop runs
        // at most design.ncols() times.
        let selection = loop {
            if active.is_empty() {
                return Err(RegressionError::InsufficientData { needed: 1, got: 0 });
            }
            let candidate = engine.fit(&select_columns(design, &active), response)?;
            let Some((worst, p_max)) = candidate.worst_p_value() else {
                break candidate;
            };
            if p_max < self.options.significance_threshold {
                break candidate;
            }
            active.remove(worst);
        };

        // The accepted fit's magnitudes act as per-observation variance
        // estimates for the final weighted pass.
        let n = design.nrows();
        let mut weights = Col::zeros(n);
        for i in 0..n {
            let estimated_variance = selection.fitted_values[i] * selection.fitted_values[i];
            if estimated_variance == 0.0 {
                return Err(RegressionError::Numerical(format!(
                    "zero fitted magnitude for observation {i}"
                )));
            }
            weights[i] = 1.0 / estimated_variance;
        }

        let fit = LeastSquares::new(self.options.clone())
            .with_weights(weights)
            .fit(&select_columns(design, &active), response)?;

        Ok(EliminationFit {
            active,
            selection,
            fit,
        })
    }
}
