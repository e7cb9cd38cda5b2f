//! Weighted and unweighted ordinary least-squares fitting.

use faer::{Col, Mat};

use crate::core::{FitResult, RegressionOptions, RegressionOptionsBuilder};
use crate::inference::CoefficientInference;
use crate::solvers::error::RegressionError;
use crate::utils::{append_ones_column, invert_symmetric};

/// Least-squares engine solving the normal equations directly.
///
/// Minimizes Σ wᵢ (yᵢ - xᵢ'β)². Weights reduce to ordinary least squares on
/// rescaled data: each row of X and entry of y is multiplied by sqrt(wᵢ)
/// before solving, so every downstream statistic (residual sum of squares,
/// coefficient covariances, t-statistics) is taken in the rescaled space.
///
/// When fitting with an intercept, the constant column is appended *after*
/// the feature columns; the reported intercept and its statistics are split
/// out of the solution vector, so callers never depend on that position.
///
/// # Example
///
/// ```rust,ignore
/// use extrap::solvers::LeastSquares;
/// use faer::{Col, Mat};
///
/// let x = Mat::from_fn(6, 1, |i, _| i as f64);
/// let y = Col::from_fn(6, |i| 2.0 + 3.0 * i as f64);
///
/// let fit = LeastSquares::builder().with_intercept(true).build().fit(&x, &y)?;
/// println!("slope = {}", fit.coefficients[0]);
/// ```
#[derive(Debug, Clone)]
pub struct LeastSquares {
    options: RegressionOptions,
    weights: Option<Col<f64>>,
}

/// Design-dependent state shared by every response column of one fit call.
struct Prepared {
    /// Intercept-augmented, sqrt-weight-scaled design matrix.
    design: Mat<f64>,
    /// Inverse of designᵗ·design.
    gram_inv: Mat<f64>,
    sqrt_weights: Option<Col<f64>>,
    dof: usize,
    n_features: usize,
}

impl LeastSquares {
    /// Create a new engine with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self {
            options,
            weights: None,
        }
    }

    /// Create a builder for configuring the engine.
    pub fn builder() -> LeastSquaresBuilder {
        LeastSquaresBuilder::default()
    }

    /// Set the observation weights.
    pub fn with_weights(mut self, weights: Col<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Fit a single response column.
    pub fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<FitResult, RegressionError> {
        let prepared = self.prepare(x, y.nrows())?;
        Ok(self.solve_response(&prepared, x, y))
    }

    /// Fit several response columns against the same design matrix.
    ///
    /// The Gram matrix is inverted once and shared; the returned results are
    /// aligned with the columns of `y`.
    pub fn fit_columns(
        &self,
        x: &Mat<f64>,
        y: &Mat<f64>,
    ) -> Result<Vec<FitResult>, RegressionError> {
        let prepared = self.prepare(x, y.nrows())?;
        let results = (0..y.ncols())
            .map(|k| {
                let column = Col::from_fn(y.nrows(), |i| y[(i, k)]);
                self.solve_response(&prepared, x, &column)
            })
            .collect();
        Ok(results)
    }

    /// Validate the inputs and factor the design matrix.
    fn prepare(&self, x: &Mat<f64>, y_rows: usize) -> Result<Prepared, RegressionError> {
        let n = x.nrows();
        let p = x.ncols();

        if y_rows != n {
            return Err(RegressionError::DimensionMismatch {
                x_rows: n,
                y_len: y_rows,
            });
        }

        let sqrt_weights = match &self.weights {
            Some(w) => {
                if w.nrows() != n {
                    return Err(RegressionError::DimensionMismatch {
                        x_rows: n,
                        y_len: w.nrows(),
                    });
                }
                for i in 0..n {
                    if w[i] < 0.0 {
                        return Err(RegressionError::InvalidWeights);
                    }
                }
                Some(Col::from_fn(n, |i| w[i].sqrt()))
            }
            None => None,
        };

        let n_params = if self.options.with_intercept { p + 1 } else { p };
        if n <= n_params {
            return Err(RegressionError::InsufficientData {
                needed: n_params + 1,
                got: n,
            });
        }
        let dof = n - n_params;

        let mut design = if self.options.with_intercept {
            append_ones_column(x)
        } else {
            x.clone()
        };
        if let Some(sw) = &sqrt_weights {
            for i in 0..n {
                for j in 0..n_params {
                    design[(i, j)] *= sw[i];
                }
            }
        }

        let gram = design.transpose() * &design;
        let gram_inv = invert_symmetric(&gram, self.options.singular_tolerance)
            .ok_or(RegressionError::SingularMatrix)?;

        Ok(Prepared {
            design,
            gram_inv,
            sqrt_weights,
            dof,
            n_features: p,
        })
    }

    /// Solve one response column against the prepared design.
    fn solve_response(&self, prep: &Prepared, x: &Mat<f64>, y: &Col<f64>) -> FitResult {
        let n = x.nrows();
        let p = prep.n_features;
        let n_params = prep.design.ncols();

        let y_scaled = match &prep.sqrt_weights {
            Some(sw) => Col::from_fn(n, |i| y[i] * sw[i]),
            None => y.clone(),
        };

        // beta = (X'X)⁻¹ X' y on the scaled data.
        let xty = prep.design.transpose() * &y_scaled;
        let mut beta = Col::zeros(n_params);
        for i in 0..n_params {
            let mut sum = 0.0;
            for j in 0..n_params {
                sum += prep.gram_inv[(i, j)] * xty[j];
            }
            beta[i] = sum;
        }

        // Residuals stay in the fitting space.
        let mut residuals = Col::zeros(n);
        let mut rss = 0.0;
        for i in 0..n {
            let mut pred = 0.0;
            for j in 0..n_params {
                pred += prep.design[(i, j)] * beta[j];
            }
            let r = y_scaled[i] - pred;
            residuals[i] = r;
            rss += r * r;
        }

        let dof = prep.dof;
        let residual_mean_square = rss / dof as f64;
        let se = CoefficientInference::standard_errors(&prep.gram_inv, residual_mean_square);
        let t = CoefficientInference::t_statistics(&beta, &se);
        let p_values = CoefficientInference::p_values(&t, dof as f64);

        let coefficients = Col::from_fn(p, |j| beta[j]);
        let (intercept, intercept_std_error, intercept_t_statistic, intercept_p_value) =
            if self.options.with_intercept {
                (Some(beta[p]), Some(se[p]), Some(t[p]), Some(p_values[p]))
            } else {
                (None, None, None, None)
            };

        let base = intercept.unwrap_or(0.0);
        let fitted_values = Col::from_fn(n, |i| {
            let mut pred = base;
            for j in 0..p {
                pred += x[(i, j)] * coefficients[j];
            }
            pred
        });

        FitResult {
            coefficients,
            intercept,
            residuals,
            fitted_values,
            std_errors: Col::from_fn(p, |j| se[j]),
            intercept_std_error,
            t_statistics: Col::from_fn(p, |j| t[j]),
            intercept_t_statistic,
            p_values: Col::from_fn(p, |j| p_values[j]),
            intercept_p_value,
            dof,
            rss,
            n_observations: n,
        }
    }
}

/// Builder for `LeastSquares`.
#[derive(Debug, Clone, Default)]
pub struct LeastSquaresBuilder {
    builder: RegressionOptionsBuilder,
    weights: Option<Col<f64>>,
}

impl LeastSquaresBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include an intercept term.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.builder = self.builder.with_intercept(include);
        self
    }

    /// Set the observation weights.
    pub fn weights(mut self, weights: Col<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Set the singularity tolerance for Gram-matrix inversion.
    pub fn singular_tolerance(mut self, tolerance: f64) -> Self {
        self.builder = self.builder.singular_tolerance(tolerance);
        self
    }

    /// Build the engine.
    pub fn build(self) -> LeastSquares {
        let mut engine = LeastSquares::new(self.builder.build_unchecked());
        if let Some(w) = self.weights {
            engine = engine.with_weights(w);
        }
        engine
    }
}
