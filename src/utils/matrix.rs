//! Matrix utility functions.

use faer::{Col, Mat};

/// Invert a symmetric positive (semi-)definite matrix via QR decomposition.
///
/// Returns `None` when any diagonal entry of R falls below `tolerance`
/// relative to the largest diagonal entry, which marks the matrix as
/// singular to working precision. The relative comparison keeps the check
/// scale-invariant: truncation parameters of order 1e-6 produce quadratic
/// Gram entries of order 1e-24 that are still perfectly invertible.
pub fn invert_symmetric(m: &Mat<f64>, tolerance: f64) -> Option<Mat<f64>> {
    let size = m.nrows();

    let qr = m.qr();
    let q = qr.compute_Q();
    let r = qr.R();

    let mut max_diag: f64 = 0.0;
    for i in 0..size {
        max_diag = max_diag.max(r[(i, i)].abs());
    }
    if max_diag == 0.0 {
        return None;
    }
    for i in 0..size {
        if r[(i, i)].abs() < tolerance * max_diag {
            return None;
        }
    }

    // Solve R * inv = Q' column by column with back-substitution.
    let qt = q.transpose();
    let mut inv = Mat::zeros(size, size);

    for col in 0..size {
        for i in (0..size).rev() {
            let mut sum = qt[(i, col)];
            for j in (i + 1)..size {
                sum -= r[(i, j)] * inv[(j, col)];
            }
            inv[(i, col)] = sum / r[(i, i)];
        }
    }

    Some(inv)
}

/// Append a constant column of ones as the last column of `x`.
pub fn append_ones_column(x: &Mat<f64>) -> Mat<f64> {
    let n = x.nrows();
    let p = x.ncols();
    Mat::from_fn(n, p + 1, |i, j| if j == p { 1.0 } else { x[(i, j)] })
}

/// Gather the given columns of `x`, in the given order.
pub fn select_columns(x: &Mat<f64>, indices: &[usize]) -> Mat<f64> {
    Mat::from_fn(x.nrows(), indices.len(), |i, j| x[(i, indices[j])])
}

/// Gather the given rows of `x`, in the given order.
pub fn select_rows(x: &Mat<f64>, indices: &[usize]) -> Mat<f64> {
    Mat::from_fn(indices.len(), x.ncols(), |i, j| x[(indices[i], j)])
}

/// Gather the given entries of `y`, in the given order.
pub fn select_entries(y: &Col<f64>, indices: &[usize]) -> Col<f64> {
    Col::from_fn(indices.len(), |i| y[indices[i]])
}

/// Indices of the rows where no column sits at that column's minimum value.
///
/// Used for boundary trimming: observations at the edge of a parameter grid
/// carry the largest discretization error and can be excluded wholesale.
pub fn rows_off_minima(x: &Mat<f64>) -> Vec<usize> {
    let n = x.nrows();
    let p = x.ncols();
    if n == 0 {
        return Vec::new();
    }

    let mut minima = vec![f64::INFINITY; p];
    for j in 0..p {
        for i in 0..n {
            if x[(i, j)] < minima[j] {
                minima[j] = x[(i, j)];
            }
        }
    }

    (0..n)
        .filter(|&i| (0..p).all(|j| x[(i, j)] != minima[j]))
        .collect()
}
