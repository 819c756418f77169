//! Polynomial interpolation through a set of sample points.

use crate::config::KernelConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::{inverse_with, ops, Matrix};

fn require_points(xs: &Matrix, ys: &Matrix) -> Result<usize> {
    if xs.ncols() != 1 || ys.ncols() != 1 {
        return Err(MatrixError::shape(
            "fit_curve",
            format!(
                "sample points must be column vectors, got {:?} and {:?}",
                xs.shape(),
                ys.shape()
            ),
        ));
    }
    if xs.nrows() != ys.nrows() {
        return Err(MatrixError::shape(
            "fit_curve",
            format!("{} x values but {} y values", xs.nrows(), ys.nrows()),
        ));
    }
    if xs.nrows() < 2 {
        return Err(MatrixError::shape(
            "fit_curve",
            "at least two sample points are required",
        ));
    }
    Ok(xs.nrows())
}

/// Vandermonde design matrix: entry (i, k) is `xs[i]^(n-1-k)`.
fn design_matrix(xs: &Matrix) -> Matrix {
    let n = xs.nrows();
    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        let x = xs[(i, 0)];
        for k in 0..n {
            data.push(x.powi((n - 1 - k) as i32));
        }
    }
    Matrix::from_raw(n, n, data)
}

/// Fit the degree `n-1` polynomial through `n` points.
///
/// Returns the coefficients as a column vector, highest power first.
pub fn fit_curve(xs: &Matrix, ys: &Matrix) -> Result<Matrix> {
    fit_curve_with(xs, ys, &KernelConfig::default())
}

pub fn fit_curve_with(xs: &Matrix, ys: &Matrix, config: &KernelConfig) -> Result<Matrix> {
    let points = require_points(xs, ys)?;
    let design = design_matrix(xs);
    let inv = inverse_with(&design, config).map_err(|e| match e {
        MatrixError::SingularMatrix { .. } => MatrixError::UnsolvableSystem {
            points,
            source: Box::new(e),
        },
        other => other,
    })?;
    let coeffs = ops::mul(&inv, ys)?;
    log::debug!("fitted polynomial of degree {} through {} points", points - 1, points);
    Ok(coeffs)
}

/// Evaluate a coefficient vector (highest power first) at `x`.
pub fn polyval(coeffs: &Matrix, x: f64) -> f64 {
    coeffs.as_slice().iter().fold(0.0, |acc, &c| acc * x + c)
}
