//! Quadratic design-matrix expansion.
//!
//! Expansion columns are appended after the base columns in a fixed order:
//! for cross terms, every unordered pair (i, j) with i ≤ j, i ascending and
//! then j ascending; without cross terms, the p pure squares in column
//! order. Coefficient vectors from quadratic fits are interpreted by
//! position, so this order is part of the contract.

use faer::Mat;

use crate::core::PolynomialOrder;

/// Append quadratic expansion columns to `x`.
///
/// With `cross_term`, the p(p+1)/2 products xᵢ·xⱼ for i ≤ j; otherwise the
/// p pure squares xᵢ².
pub fn quadratic(x: &Mat<f64>, cross_term: bool) -> Mat<f64> {
    let n = x.nrows();
    let p = x.ncols();
    let extra = if cross_term { p * (p + 1) / 2 } else { p };

    let mut pairs = Vec::with_capacity(extra);
    if cross_term {
        for i in 0..p {
            for j in i..p {
                pairs.push((i, j));
            }
        }
    } else {
        for i in 0..p {
            pairs.push((i, i));
        }
    }

    Mat::from_fn(n, p + extra, |row, col| {
        if col < p {
            x[(row, col)]
        } else {
            let (i, j) = pairs[col - p];
            x[(row, i)] * x[(row, j)]
        }
    })
}

/// Feature labels matching the column order of [`quadratic`].
pub fn quadratic_names(base: &[String], cross_term: bool) -> Vec<String> {
    let p = base.len();
    let mut names: Vec<String> = base.to_vec();
    if cross_term {
        for i in 0..p {
            for j in i..p {
                if i == j {
                    names.push(format!("{}^2", base[i]));
                } else {
                    names.push(format!("{}*{}", base[i], base[j]));
                }
            }
        }
    } else {
        for name in base {
            names.push(format!("{name}^2"));
        }
    }
    names
}

/// Design matrix for the configured polynomial order.
pub fn polynomial_design(x: &Mat<f64>, order: PolynomialOrder, cross_term: bool) -> Mat<f64> {
    match order {
        PolynomialOrder::Linear => x.clone(),
        PolynomialOrder::Quadratic => quadratic(x, cross_term),
    }
}

/// Feature labels for the configured polynomial order.
pub fn polynomial_names(
    base: &[String],
    order: PolynomialOrder,
    cross_term: bool,
) -> Vec<String> {
    match order {
        PolynomialOrder::Linear => base.to_vec(),
        PolynomialOrder::Quadratic => quadratic_names(base, cross_term),
    }
}
