//! Fit result structure.

use faer::{Col, Mat};

/// Complete result of a least-squares fit.
///
/// Coefficient-aligned vectors (`coefficients`, `std_errors`,
/// `t_statistics`, `p_values`) share the feature order of the design matrix
/// the fit was given; intercept statistics live in their own fields. When
/// the fit was weighted, `residuals` are taken in the sqrt-weight-scaled
/// space the solve runs in, while `fitted_values` are always in the
/// original, unscaled space.
///
/// Computed once per fit call and immutable afterwards.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Estimated coefficients, one per design-matrix column.
    pub coefficients: Col<f64>,

    /// Intercept term; `None` when fit without one (treated as zero).
    pub intercept: Option<f64>,

    /// Residuals `y - Xβ` in the (weight-scaled) fitting space.
    pub residuals: Col<f64>,

    /// Predictions `Xβ + intercept` on the training data, unscaled.
    pub fitted_values: Col<f64>,

    /// Standard errors of the coefficients.
    pub std_errors: Col<f64>,

    /// Standard error of the intercept.
    pub intercept_std_error: Option<f64>,

    /// t-statistics of the coefficients.
    pub t_statistics: Col<f64>,

    /// t-statistic of the intercept.
    pub intercept_t_statistic: Option<f64>,

    /// Two-sided significance probabilities of the coefficients.
    pub p_values: Col<f64>,

    /// Two-sided significance probability of the intercept.
    pub intercept_p_value: Option<f64>,

    /// Residual degrees of freedom.
    pub dof: usize,

    /// Residual sum of squares in the fitting space.
    pub rss: f64,

    /// Number of observations the fit saw.
    pub n_observations: usize,
}

impl FitResult {
    /// Predict responses for new rows; `x` must have one column per fitted
    /// coefficient.
    pub fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        let intercept = self.intercept.unwrap_or(0.0);
        Col::from_fn(x.nrows(), |i| {
            let mut pred = intercept;
            for j in 0..self.coefficients.nrows() {
                pred += x[(i, j)] * self.coefficients[j];
            }
            pred
        })
    }

    /// Index and value of the least significant coefficient, ranking a NaN
    /// p-value (degenerate zero-over-zero statistic) as 1.0. `None` when the
    /// fit has no coefficients.
    pub fn worst_p_value(&self) -> Option<(usize, f64)> {
        let mut worst: Option<(usize, f64)> = None;
        for j in 0..self.p_values.nrows() {
            let p = self.p_values[j];
            let p = if p.is_nan() { 1.0 } else { p };
            match worst {
                Some((_, current)) if p <= current => {}
                _ => worst = Some((j, p)),
            }
        }
        worst
    }

    /// The extrapolated value: intercept together with its standard error.
    pub fn intercept_with_error(&self) -> Option<(f64, f64)> {
        match (self.intercept, self.intercept_std_error) {
            (Some(value), Some(err)) => Some((value, err)),
            _ => None,
        }
    }
}
