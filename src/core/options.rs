//! Fit and extrapolation configuration.

use thiserror::Error;

/// Order of the polynomial expansion applied to the extrapolation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolynomialOrder {
    /// Fit the base parameters directly.
    Linear,
    /// Expand the base parameters with squares (and optionally cross
    /// products) before fitting.
    #[default]
    Quadratic,
}

/// Which extrapolation policy to run on top of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtrapolationStrategy {
    /// Two-pass fit, re-weighting observations by their estimated
    /// discretization error from an initial unweighted pass.
    #[default]
    VarianceWeighted,
    /// Backward elimination of insignificant expansion terms followed by a
    /// weighted refit on the surviving terms.
    BackwardElimination,
}

/// Configuration for fitting and extrapolation.
///
/// Every knob the original program kept as module-level state (polynomial
/// order, print precision) is an explicit field here.
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// Whether to include an intercept term (default: true).
    pub with_intercept: bool,
    /// Include pairwise cross products in the quadratic expansion, not just
    /// pure squares (default: true).
    pub cross_term: bool,
    /// Stopping p-value for backward elimination (default: 0.01).
    pub significance_threshold: f64,
    /// Polynomial order of the design expansion (default: quadratic).
    pub polynomial_order: PolynomialOrder,
    /// Extrapolation policy (default: variance-weighted two-pass).
    pub strategy: ExtrapolationStrategy,
    /// Boundary-trimming passes for backward elimination, at most 2
    /// (default: 0).
    pub trim_passes: usize,
    /// Tolerance below which an R diagonal entry, relative to the largest
    /// one, marks the Gram matrix as singular (default: 1e-10).
    pub singular_tolerance: f64,
    /// Decimal digits used when rendering reports (default: 12).
    pub report_precision: usize,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            with_intercept: true,
            cross_term: true,
            significance_threshold: 0.01,
            polynomial_order: PolynomialOrder::default(),
            strategy: ExtrapolationStrategy::default(),
            trim_passes: 0,
            singular_tolerance: 1e-10,
            report_precision: 12,
        }
    }
}

/// Errors that can occur when validating options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("significance_threshold must be in (0, 1), got {0}")]
    InvalidSignificanceThreshold(f64),
    #[error("singular_tolerance must be positive, got {0}")]
    InvalidSingularTolerance(f64),
    #[error("trim_passes must be at most 2, got {0}")]
    InvalidTrimPasses(usize),
}

impl RegressionOptions {
    /// Create a new builder with default options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.significance_threshold <= 0.0 || self.significance_threshold >= 1.0 {
            return Err(OptionsError::InvalidSignificanceThreshold(
                self.significance_threshold,
            ));
        }
        if self.singular_tolerance <= 0.0 {
            return Err(OptionsError::InvalidSingularTolerance(
                self.singular_tolerance,
            ));
        }
        if self.trim_passes > 2 {
            return Err(OptionsError::InvalidTrimPasses(self.trim_passes));
        }
        Ok(())
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include an intercept term.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.options.with_intercept = include;
        self
    }

    /// Set whether the quadratic expansion includes cross products.
    pub fn cross_term(mut self, include: bool) -> Self {
        self.options.cross_term = include;
        self
    }

    /// Set the stopping p-value for backward elimination.
    pub fn significance_threshold(mut self, threshold: f64) -> Self {
        self.options.significance_threshold = threshold;
        self
    }

    /// Set the polynomial order of the design expansion.
    pub fn polynomial_order(mut self, order: PolynomialOrder) -> Self {
        self.options.polynomial_order = order;
        self
    }

    /// Set the extrapolation policy.
    pub fn strategy(mut self, strategy: ExtrapolationStrategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    /// Set the number of boundary-trimming passes (at most 2).
    pub fn trim_passes(mut self, passes: usize) -> Self {
        self.options.trim_passes = passes;
        self
    }

    /// Set the singularity tolerance for Gram-matrix inversion.
    pub fn singular_tolerance(mut self, tolerance: f64) -> Self {
        self.options.singular_tolerance = tolerance;
        self
    }

    /// Set the decimal precision used by report rendering.
    pub fn report_precision(mut self, digits: usize) -> Self {
        self.options.report_precision = digits;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}
