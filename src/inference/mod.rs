//! Coefficient inference (standard errors, t-statistics, p-values).

mod coefficient;

pub use coefficient::CoefficientInference;
