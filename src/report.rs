//! Human-readable rendering of fit results.

use std::fmt;

use crate::core::FitResult;

/// Display adapter for a [`FitResult`].
///
/// Renders the intercept with its standard error, then one row per feature
/// with coefficient, standard error and significance probability, with the
/// intercept row separated at the bottom. Pure presentation; nothing here
/// computes.
pub struct FitSummary<'a> {
    result: &'a FitResult,
    names: &'a [String],
    precision: usize,
}

impl<'a> FitSummary<'a> {
    /// Borrow a fit together with its feature names and the decimal
    /// precision to render with. Missing names fall back to `x<index>`.
    pub fn new(result: &'a FitResult, names: &'a [String], precision: usize) -> Self {
        Self {
            result,
            names,
            precision,
        }
    }
}

impl fmt::Display for FitSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.precision;
        let value_width = prec + 12;

        if let Some((intercept, err)) = self.result.intercept_with_error() {
            writeln!(
                f,
                "Intercept: {intercept:.prec$} +- {err:.prec$}",
                prec = prec
            )?;
        }

        writeln!(
            f,
            "{:<16} {:>value_width$} {:>value_width$} {:>10}",
            "feature", "coefficient", "std error", "p(>|t|)"
        )?;

        for j in 0..self.result.coefficients.nrows() {
            let name = self
                .names
                .get(j)
                .cloned()
                .unwrap_or_else(|| format!("x{j}"));
            writeln!(
                f,
                "{:<16} {:>value_width$.prec$} {:>value_width$.prec$} {:>10.5}",
                name,
                self.result.coefficients[j],
                self.result.std_errors[j],
                self.result.p_values[j],
                prec = prec,
            )?;
        }

        if let (Some(intercept), Some(err)) = (
            self.result.intercept,
            self.result.intercept_std_error,
        ) {
            writeln!(f, "{:-<16}", "")?;
            let p = self.result.intercept_p_value.unwrap_or(f64::NAN);
            writeln!(
                f,
                "{:<16} {:>value_width$.prec$} {:>value_width$.prec$} {:>10.5}",
                "(intercept)",
                intercept,
                err,
                p,
                prec = prec,
            )?;
        }

        Ok(())
    }
}
