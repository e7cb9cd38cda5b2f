//! Coefficient inference calculations.

use faer::{Col, Mat};
use statrs::function::beta::beta_reg;

/// Computes inference statistics for regression coefficients.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Standard errors from the Gram-inverse diagonal and the residual mean
    /// square.
    ///
    /// SE(β_j) = sqrt((X'X)⁻¹_{jj} · σ²) with σ² = RSS/dof.
    pub fn standard_errors(gram_inv: &Mat<f64>, residual_mean_square: f64) -> Col<f64> {
        Col::from_fn(gram_inv.nrows(), |j| {
            let var = gram_inv[(j, j)] * residual_mean_square;
            if var >= 0.0 {
                var.sqrt()
            } else {
                f64::NAN
            }
        })
    }

    /// t_j = β_j / SE(β_j).
    ///
    /// A zero standard error yields an infinite statistic (or NaN on an
    /// exactly zero estimate), matching plain IEEE division; `two_sided_p`
    /// maps those to 0 and NaN respectively.
    pub fn t_statistics(estimates: &Col<f64>, std_errors: &Col<f64>) -> Col<f64> {
        Col::from_fn(estimates.nrows(), |j| estimates[j] / std_errors[j])
    }

    /// Two-sided significance probability of a t-statistic.
    ///
    /// Uses the incomplete-beta identity for the Student's-t tail:
    /// P(|T| > |t|) = I_x(dof/2, 1/2) at x = dof/(dof + t²), which needs no
    /// t-distribution CDF.
    pub fn two_sided_p(t: f64, dof: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        if t.is_infinite() {
            return 0.0;
        }
        let x = dof / (dof + t * t);
        beta_reg(0.5 * dof, 0.5, x)
    }

    /// Two-sided p-values for a vector of t-statistics.
    pub fn p_values(t_statistics: &Col<f64>, dof: f64) -> Col<f64> {
        Col::from_fn(t_statistics.nrows(), |j| {
            Self::two_sided_p(t_statistics[j], dof)
        })
    }
}
