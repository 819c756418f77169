//! Determinant, cofactors, adjugate, inverse and rank.
//!
//! The determinant peels one row and column per level: reduce to echelon
//! form, take the top-left pivot (corrected by the swap parity) and recurse
//! on the trailing block. The inverse is the classical adjugate over the
//! determinant, which costs one determinant per entry. That is fine for the
//! small matrices this crate targets; `KernelConfig::max_cofactor_dim`
//! refuses anything larger.

use crate::config::KernelConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::echelon::{leading_indices, reduce};
use crate::matrix::structure::{sub_matrix, transpose};
use crate::matrix::Matrix;

fn require_square(op: &'static str, x: &Matrix) -> Result<usize> {
    if !x.is_square() {
        return Err(MatrixError::shape(
            op,
            format!("expected a square matrix, got {:?}", x.shape()),
        ));
    }
    Ok(x.nrows())
}

fn check_limit(op: &'static str, dim: usize, config: &KernelConfig) -> Result<()> {
    match config.max_cofactor_dim {
        Some(limit) if dim > limit => Err(MatrixError::DimensionLimit { op, dim, limit }),
        _ => Ok(()),
    }
}

/// Determinant of a square matrix.
pub fn determinant(x: &Matrix) -> Result<f64> {
    let n = require_square("determinant", x)?;
    match n {
        1 => Ok(x[(0, 0)]),
        2 => Ok(x[(0, 0)] * x[(1, 1)] - x[(0, 1)] * x[(1, 0)]),
        _ => {
            let reduced = reduce(x);
            let pivot = reduced.matrix[(0, 0)];
            if pivot == 0.0 {
                // first column is entirely zero
                return Ok(0.0);
            }
            let trailing = sub_matrix(&reduced.matrix, 2, 2, true)?;
            Ok(reduced.sign() * pivot * determinant(&trailing)?)
        }
    }
}

/// `x` without row `i` and column `j`.
fn minor_matrix(x: &Matrix, i: usize, j: usize) -> Matrix {
    let n = x.nrows();
    let mut data = Vec::with_capacity((n - 1) * (n - 1));
    for row in (0..n).filter(|&r| r != i) {
        for col in (0..n).filter(|&c| c != j) {
            data.push(x[(row, col)]);
        }
    }
    Matrix::from_raw(n - 1, n - 1, data)
}

/// Determinant of `x` with row `i` and column `j` removed.
pub fn cofactor(x: &Matrix, i: usize, j: usize) -> Result<f64> {
    let n = require_square("cofactor", x)?;
    if n < 2 {
        return Err(MatrixError::shape(
            "cofactor",
            "a 1x1 matrix has no minors",
        ));
    }
    if i >= n {
        return Err(MatrixError::range("cofactor", i, n));
    }
    if j >= n {
        return Err(MatrixError::range("cofactor", j, n));
    }
    determinant(&minor_matrix(x, i, j))
}

/// `(-1)^(i + j) * cofactor(x, i, j)`.
pub fn algebraic_cofactor(x: &Matrix, i: usize, j: usize) -> Result<f64> {
    let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
    Ok(sign * cofactor(x, i, j)?)
}

/// Transpose of the matrix of algebraic cofactors.
pub fn adjugate(x: &Matrix) -> Result<Matrix> {
    adjugate_with(x, &KernelConfig::default())
}

pub fn adjugate_with(x: &Matrix, config: &KernelConfig) -> Result<Matrix> {
    let n = require_square("adjugate", x)?;
    check_limit("adjugate", n, config)?;
    if n == 1 {
        return Ok(Matrix::scalar(1.0));
    }
    let mut cofactors = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            cofactors.push(algebraic_cofactor(x, i, j)?);
        }
    }
    Ok(transpose(&Matrix::from_raw(n, n, cofactors)))
}

/// Inverse of a square, non-singular matrix.
pub fn inverse(x: &Matrix) -> Result<Matrix> {
    inverse_with(x, &KernelConfig::default())
}

pub fn inverse_with(x: &Matrix, config: &KernelConfig) -> Result<Matrix> {
    let n = require_square("inverse", x)?;
    if n == 1 {
        let v = x[(0, 0)];
        if v == 0.0 {
            return Err(MatrixError::DivideByZero { op: "inverse" });
        }
        return Ok(Matrix::scalar(1.0 / v));
    }
    check_limit("inverse", n, config)?;

    let det = determinant(x)?;
    if det == 0.0 {
        log::debug!("inverse: {}x{} matrix is singular", n, n);
        return Err(MatrixError::SingularMatrix { dim: n });
    }
    let factor = 1.0 / det;
    Ok(adjugate_with(x, config)?.map(|v| v * factor))
}

/// Rank as the number of nonzero rows in the echelon form.
pub fn rank(x: &Matrix) -> usize {
    let reduced = reduce(x).matrix;
    leading_indices(&reduced)
        .into_iter()
        .filter(|&lead| lead < reduced.ncols())
        .count()
}

/// Index of the first all-zero row of `x` as given, or `nrows` when there
/// is none. This matches `rank` only when dependent rows already appear as
/// trailing zero rows.
pub fn first_zero_row(x: &Matrix) -> usize {
    (0..x.nrows())
        .find(|&row| x.row_slice(row).iter().all(|&v| v == 0.0))
        .unwrap_or(x.nrows())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn two_by_two_determinant() {
        assert_eq!(determinant(&m(&[&[1.0, 2.0], &[3.0, 4.0]])).unwrap(), -2.0);
    }

    #[test]
    fn odd_swap_parity_flips_sign() {
        // echelon ordering swaps the last two rows once
        let x = m(&[&[1.0, 2.0, 3.0], &[0.0, 1.0, 4.0], &[5.0, 6.0, 0.0]]);
        assert_eq!(determinant(&x).unwrap(), 1.0);

        let p = m(&[&[0.0, 1.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 0.0, 1.0]]);
        assert_eq!(determinant(&p).unwrap(), -1.0);
    }

    #[test]
    fn zero_first_column_gives_zero() {
        let x = m(&[&[0.0, 1.0, 2.0], &[0.0, 3.0, 4.0], &[0.0, 5.0, 6.0]]);
        assert_eq!(determinant(&x).unwrap(), 0.0);
    }

    #[test]
    fn non_square_determinant_fails() {
        let x = Matrix::ones(2, 3).unwrap();
        assert!(matches!(determinant(&x), Err(MatrixError::Shape { .. })));
    }

    #[test]
    fn cofactor_checks_bounds() {
        let x = Matrix::eye(3).unwrap();
        assert!(matches!(cofactor(&x, 3, 0), Err(MatrixError::Range { .. })));
        assert!(cofactor(&Matrix::scalar(2.0), 0, 0).is_err());
    }

    #[test]
    fn inverse_of_scalar() {
        assert_eq!(inverse(&Matrix::scalar(4.0)).unwrap(), Matrix::scalar(0.25));
        assert!(matches!(
            inverse(&Matrix::scalar(0.0)),
            Err(MatrixError::DivideByZero { .. })
        ));
    }

    #[test]
    fn dimension_limit_is_enforced() {
        let cfg = KernelConfig::new(Some(2), None);
        let x = Matrix::eye(3).unwrap();
        assert!(matches!(
            inverse_with(&x, &cfg),
            Err(MatrixError::DimensionLimit { dim: 3, limit: 2, .. })
        ));
        let unlimited = KernelConfig::new(None, None);
        assert_eq!(inverse_with(&x, &unlimited).unwrap(), x);
    }

    #[test]
    fn first_zero_row_reads_the_unreduced_input() {
        let x = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_eq!(first_zero_row(&x), 2);
        assert_eq!(rank(&x), 1);
    }
}
