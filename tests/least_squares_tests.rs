//! Least-squares engine tests.
//!
//! The closed-form scenarios pin the engine to the exact normal-equations
//! statistics (weighted Gram inverse, residual mean square, incomplete-beta
//! t-tails); reference values were computed independently.

mod common;

use approx::assert_relative_eq;
use common::{col, mat};
use extrap::expansion;
use extrap::solvers::{LeastSquares, RegressionError};
use faer::{Col, Mat};

// ============================================================================
// Closed-form scenarios
// ============================================================================

#[test]
fn test_weighted_single_feature_scenario() {
    let x = mat(&[&[6.0], &[7.0], &[8.0]]);
    let y = col(&[8000.0, 50000.0, 116000.0]);
    let weights = col(&[123.0, 123.0, 246.0]);

    let fit = LeastSquares::builder()
        .with_intercept(true)
        .weights(weights)
        .build()
        .fit(&x, &y)
        .expect("fit should succeed");

    assert_relative_eq!(fit.coefficients[0], 55090.90909091, epsilon = 1e-5);
    assert_relative_eq!(
        fit.intercept.expect("intercept exists"),
        -326909.09090909,
        epsilon = 1e-5
    );
    assert_relative_eq!(fit.std_errors[0], 6171.11372672, epsilon = 1e-5);
    assert_relative_eq!(
        fit.intercept_std_error.expect("intercept stderr exists"),
        45032.21987029,
        epsilon = 1e-5
    );
    assert_relative_eq!(fit.p_values[0], 0.071016, epsilon = 1e-5);
    assert_relative_eq!(
        fit.intercept_p_value.expect("intercept p exists"),
        0.087147,
        epsilon = 1e-5
    );
    assert_eq!(fit.dof, 1);
}

#[test]
fn test_weighted_quadratic_cross_term_scenario() {
    let x = mat(&[
        &[4.0, 1.0],
        &[5.0, 2.0],
        &[6.0, 3.0],
        &[7.0, 5.0],
        &[8.0, 8.0],
        &[9.0, 13.0],
        &[10.0, 21.0],
    ]);
    let y = col(&[
        3000.0, 4000.0, 5000.0, 8000.0, 50000.0, 116000.0, 200000.0,
    ]);
    let weights = col(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);

    let design = expansion::quadratic(&x, true);
    let fit = LeastSquares::builder()
        .with_intercept(true)
        .weights(weights)
        .build()
        .fit(&design, &y)
        .expect("fit should succeed");

    // Column order: x, y, x², x·y, y².
    let expected_coef = [
        59926.609491270,
        -63583.179647400,
        -7019.859097691,
        11165.359300379,
        -1372.826686406,
    ];
    for (j, &expected) in expected_coef.iter().enumerate() {
        assert_relative_eq!(fit.coefficients[j], expected, epsilon = 1e-5);
    }
    assert_relative_eq!(
        fit.intercept.expect("intercept exists"),
        -101467.379938516,
        epsilon = 1e-5
    );

    let expected_stdev = [
        90078.711333994,
        108980.816420539,
        8836.035263482,
        11622.378213880,
        950.480040222,
    ];
    for (j, &expected) in expected_stdev.iter().enumerate() {
        assert_relative_eq!(fit.std_errors[j], expected, epsilon = 1e-5);
    }
    assert_relative_eq!(
        fit.intercept_std_error.expect("intercept stderr exists"),
        213425.391893574,
        epsilon = 1e-5
    );

    let expected_p = [0.62628, 0.66377, 0.57260, 0.51277, 0.38552];
    for (j, &expected) in expected_p.iter().enumerate() {
        assert_relative_eq!(fit.p_values[j], expected, epsilon = 1e-5);
    }
    assert_relative_eq!(
        fit.intercept_p_value.expect("intercept p exists"),
        0.71747,
        epsilon = 1e-5
    );
}

#[test]
fn test_weighted_quadratic_squares_only_scenario() {
    let x = mat(&[
        &[4.0, 1.0],
        &[5.0, 2.0],
        &[6.0, 3.0],
        &[7.0, 5.0],
        &[8.0, 8.0],
        &[9.0, 13.0],
        &[10.0, 21.0],
    ]);
    let y = col(&[
        3000.0, 4000.0, 5000.0, 8000.0, 50000.0, 116000.0, 200000.0,
    ]);
    let weights = col(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);

    let design = expansion::quadratic(&x, false);
    let fit = LeastSquares::builder()
        .with_intercept(true)
        .weights(weights)
        .build()
        .fit(&design, &y)
        .expect("fit should succeed");

    // Column order: x, y, x², y².
    let expected_coef = [
        1622.948003888,
        38512.336773585,
        -4129.292382104,
        -539.871870522,
    ];
    for (j, &expected) in expected_coef.iter().enumerate() {
        assert_relative_eq!(fit.coefficients[j], expected, epsilon = 1e-5);
    }
    assert_relative_eq!(
        fit.intercept.expect("intercept exists"),
        26143.556236498,
        epsilon = 1e-5
    );

    let expected_stdev = [
        65269.245149855,
        23666.371976750,
        8146.250299299,
        381.827788241,
    ];
    for (j, &expected) in expected_stdev.iter().enumerate() {
        assert_relative_eq!(fit.std_errors[j], expected, epsilon = 1e-5);
    }
    assert_relative_eq!(
        fit.intercept_std_error.expect("intercept stderr exists"),
        163797.792370775,
        epsilon = 1e-5
    );

    let expected_p = [0.98242, 0.24520, 0.66259, 0.29297];
    for (j, &expected) in expected_p.iter().enumerate() {
        assert_relative_eq!(fit.p_values[j], expected, epsilon = 1e-5);
    }
    assert_relative_eq!(
        fit.intercept_p_value.expect("intercept p exists"),
        0.88785,
        epsilon = 1e-5
    );
}

// ============================================================================
// Algebraic properties
// ============================================================================

#[test]
fn test_residuals_orthogonal_to_design() {
    let n = 9;
    let x = Mat::from_fn(n, 2, |i, j| {
        let i = i as f64;
        if j == 0 {
            i
        } else {
            (i * 0.7).sin() * 3.0
        }
    });
    let y = Col::from_fn(n, |i| {
        let i = i as f64;
        2.0 + 1.5 * i - 0.8 * (i * 0.7).sin() + (i * 1.3).cos()
    });

    let fit = LeastSquares::builder()
        .with_intercept(true)
        .build()
        .fit(&x, &y)
        .expect("fit should succeed");

    // The residual must be orthogonal to every feature column and to the
    // constant column (normal-equations optimality).
    for j in 0..2 {
        let dot: f64 = (0..n).map(|i| x[(i, j)] * fit.residuals[i]).sum();
        assert!(dot.abs() < 1e-8, "column {j} not orthogonal: {dot}");
    }
    let sum: f64 = (0..n).map(|i| fit.residuals[i]).sum();
    assert!(sum.abs() < 1e-8, "residuals do not sum to zero: {sum}");
}

#[test]
fn test_uniform_weights_match_unweighted() {
    let x = Mat::from_fn(10, 1, |i, _| i as f64);
    let y = Col::from_fn(10, |i| 1.0 + 2.0 * i as f64 + ((i as f64) * 0.9).sin());

    let unweighted = LeastSquares::builder()
        .with_intercept(true)
        .build()
        .fit(&x, &y)
        .expect("fit should succeed");

    let uniform = LeastSquares::builder()
        .with_intercept(true)
        .weights(Col::from_fn(10, |_| 7.0))
        .build()
        .fit(&x, &y)
        .expect("fit should succeed");

    assert_relative_eq!(
        uniform.coefficients[0],
        unweighted.coefficients[0],
        max_relative = 1e-10
    );
    assert_relative_eq!(
        uniform.intercept.unwrap(),
        unweighted.intercept.unwrap(),
        max_relative = 1e-10
    );
    assert_relative_eq!(
        uniform.std_errors[0],
        unweighted.std_errors[0],
        max_relative = 1e-10
    );
    assert_relative_eq!(
        uniform.intercept_std_error.unwrap(),
        unweighted.intercept_std_error.unwrap(),
        max_relative = 1e-10
    );
}

#[test]
fn test_multi_response_matches_individual_fits() {
    let x = Mat::from_fn(8, 2, |i, j| ((i + 1) * (j + 2)) as f64 + ((i * 7 + j) as f64).sin());
    let y = Mat::from_fn(8, 2, |i, k| {
        let i = i as f64;
        if k == 0 {
            3.0 + i * 2.0 + (i * 0.5).cos()
        } else {
            -1.0 + i * 0.3 + (i * 1.1).sin()
        }
    });

    let engine = LeastSquares::builder().with_intercept(true).build();
    let joint = engine.fit_columns(&x, &y).expect("fit should succeed");
    assert_eq!(joint.len(), 2);

    for k in 0..2 {
        let yk = Col::from_fn(8, |i| y[(i, k)]);
        let single = engine.fit(&x, &yk).expect("fit should succeed");

        for j in 0..2 {
            assert_relative_eq!(
                joint[k].coefficients[j],
                single.coefficients[j],
                max_relative = 1e-12
            );
            assert_relative_eq!(
                joint[k].std_errors[j],
                single.std_errors[j],
                max_relative = 1e-12
            );
        }
        assert_relative_eq!(
            joint[k].intercept.unwrap(),
            single.intercept.unwrap(),
            max_relative = 1e-12
        );
    }
}

// ============================================================================
// Error conditions
// ============================================================================

#[test]
fn test_singular_design_is_rejected() {
    // Two identical feature columns.
    let x = Mat::from_fn(5, 2, |i, _| (i + 1) as f64);
    let y = Col::from_fn(5, |i| i as f64);

    let result = LeastSquares::builder()
        .with_intercept(true)
        .build()
        .fit(&x, &y);

    assert!(matches!(result, Err(RegressionError::SingularMatrix)));
}

#[test]
fn test_response_length_mismatch() {
    let x = Mat::from_fn(4, 1, |i, _| i as f64);
    let y = col(&[1.0, 2.0, 3.0]);

    let result = LeastSquares::builder().build().fit(&x, &y);
    assert!(matches!(
        result,
        Err(RegressionError::DimensionMismatch {
            x_rows: 4,
            y_len: 3
        })
    ));
}

#[test]
fn test_weight_length_mismatch() {
    let x = Mat::from_fn(4, 1, |i, _| i as f64);
    let y = col(&[1.0, 2.0, 3.0, 4.0]);

    let result = LeastSquares::builder()
        .weights(col(&[1.0, 1.0]))
        .build()
        .fit(&x, &y);
    assert!(matches!(
        result,
        Err(RegressionError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_negative_weights_rejected() {
    let x = Mat::from_fn(4, 1, |i, _| i as f64);
    let y = col(&[1.0, 2.0, 3.0, 4.0]);

    let result = LeastSquares::builder()
        .weights(col(&[1.0, -1.0, 1.0, 1.0]))
        .build()
        .fit(&x, &y);
    assert!(matches!(result, Err(RegressionError::InvalidWeights)));
}

#[test]
fn test_zero_degrees_of_freedom_rejected() {
    // Three observations, one feature plus intercept leaves dof = 1; two
    // features plus intercept would leave dof = 0.
    let x = Mat::from_fn(3, 2, |i, j| ((i + 1) * (j + 1)) as f64 + (i as f64).sin());
    let y = col(&[1.0, 2.0, 3.0]);

    let result = LeastSquares::builder()
        .with_intercept(true)
        .build()
        .fit(&x, &y);
    assert!(matches!(
        result,
        Err(RegressionError::InsufficientData { needed: 4, got: 3 })
    ));
}
