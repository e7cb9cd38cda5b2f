//! Two-pass variance-weighted extrapolation.

use faer::{Col, Mat};

use crate::core::{FitResult, RegressionOptions};
use crate::expansion::polynomial_design;
use crate::solvers::{LeastSquares, RegressionError};

/// Two-pass extrapolation: estimate, then re-weight by the estimated error.
///
/// Pass one fits the (expanded) parameters unweighted. Each observation's
/// uncertainty is then estimated as the squared sum of its linear error
/// contributions, Σⱼ (xᵢⱼ·βⱼ)² over the base parameters: larger truncation
/// parameters carry proportionally larger discretization error. Pass two
/// refits with weights 1/uncertainty, L2-normalized across observations.
/// The extrapolated value is the final intercept ± its standard error.
#[derive(Debug, Clone)]
pub struct VarianceWeighted {
    options: RegressionOptions,
}

/// Result of a two-pass variance-weighted run.
#[derive(Debug, Clone)]
pub struct VarianceWeightedFit {
    /// The unweighted first-pass fit.
    pub initial: FitResult,
    /// The derived, L2-normalized observation weights.
    pub weights: Col<f64>,
    /// The final weighted fit; its intercept is the extrapolated value.
    pub fit: FitResult,
}

impl VarianceWeightedFit {
    /// Extrapolated value with its standard error.
    pub fn extrapolated(&self) -> Option<(f64, f64)> {
        self.fit.intercept_with_error()
    }
}

impl VarianceWeighted {
    /// Create the policy with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Run both passes.
    ///
    /// `parameters` holds one column per base extrapolation parameter; the
    /// polynomial expansion configured in the options is applied here, so
    /// the first `parameters.ncols()` fitted coefficients always align with
    /// the base parameters.
    pub fn run(
        &self,
        parameters: &Mat<f64>,
        response: &Col<f64>,
    ) -> Result<VarianceWeightedFit, RegressionError> {
        let design = polynomial_design(
            parameters,
            self.options.polynomial_order,
            self.options.cross_term,
        );

        let initial = LeastSquares::new(self.options.clone()).fit(&design, response)?;

        let n = parameters.nrows();
        let p = parameters.ncols();
        let mut weights = Col::zeros(n);
        for i in 0..n {
            let mut uncertainty = 0.0;
            for j in 0..p {
                let contribution = parameters[(i, j)] * initial.coefficients[j];
                uncertainty += contribution * contribution;
            }
            if uncertainty == 0.0 {
                return Err(RegressionError::Numerical(format!(
                    "zero error estimate for observation {i}"
                )));
            }
            weights[i] = 1.0 / uncertainty;
        }

        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        for i in 0..n {
            weights[i] /= norm;
        }

        let fit = LeastSquares::new(self.options.clone())
            .with_weights(weights.clone())
            .fit(&design, response)?;

        Ok(VarianceWeightedFit {
            initial,
            weights,
            fit,
        })
    }
}
