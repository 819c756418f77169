//! Elementary matrices.
//!
//! Each generator starts from an `n x n` identity and encodes one primitive
//! row operation. Left-multiplying applies it to rows, right-multiplying
//! applies the transposed operation to columns.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

fn check_index(op: &'static str, n: usize, index: usize) -> Result<()> {
    if index >= n {
        return Err(MatrixError::range(op, index, n));
    }
    Ok(())
}

/// Identity with rows `i` and `j` exchanged. Self-inverse.
pub fn swap(n: usize, i: usize, j: usize) -> Result<Matrix> {
    let mut result = Matrix::eye(n)?;
    check_index("elementary::swap", n, i)?;
    check_index("elementary::swap", n, j)?;
    if i != j {
        result[(i, i)] = 0.0;
        result[(i, j)] = 1.0;
        result[(j, i)] = 1.0;
        result[(j, j)] = 0.0;
    }
    Ok(result)
}

/// Identity with diagonal entry `i` multiplied by `k`.
///
/// `k == 0.0` is allowed and yields a singular matrix; otherwise the inverse
/// is `scale(n, i, 1.0 / k)`.
pub fn scale(n: usize, i: usize, k: f64) -> Result<Matrix> {
    let mut result = Matrix::eye(n)?;
    check_index("elementary::scale", n, i)?;
    result[(i, i)] *= k;
    Ok(result)
}

/// Identity with entry `(i, j)` set to `k`.
///
/// `E * A` adds `k * row j` to row `i`; `A * E` adds `k * col i` to col `j`.
/// When `i == j` the identity is returned unchanged.
pub fn multiply_add(n: usize, i: usize, k: f64, j: usize) -> Result<Matrix> {
    let mut result = Matrix::eye(n)?;
    check_index("elementary::multiply_add", n, i)?;
    check_index("elementary::multiply_add", n, j)?;
    if i != j {
        result[(i, j)] = k;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::ops;

    #[test]
    fn swap_twice_is_identity() {
        let e = swap(4, 1, 3).unwrap();
        assert_eq!(ops::mul(&e, &e).unwrap(), Matrix::eye(4).unwrap());
    }

    #[test]
    fn scale_by_reciprocal_inverts() {
        let e = scale(3, 2, 4.0).unwrap();
        let inv = scale(3, 2, 0.25).unwrap();
        assert_eq!(ops::mul(&e, &inv).unwrap(), Matrix::eye(3).unwrap());
    }

    #[test]
    fn zero_scale_is_singular() {
        let e = scale(3, 1, 0.0).unwrap();
        assert_eq!(e[(1, 1)], 0.0);
        assert_eq!(crate::matrix::determinant(&e).unwrap(), 0.0);
        assert!(matches!(
            crate::matrix::inverse(&e),
            Err(MatrixError::SingularMatrix { dim: 3 })
        ));
    }

    #[test]
    fn multiply_add_on_diagonal_is_identity() {
        assert_eq!(multiply_add(3, 1, 7.0, 1).unwrap(), Matrix::eye(3).unwrap());
    }

    #[test]
    fn out_of_range_indices_fail() {
        assert!(matches!(swap(3, 3, 0), Err(MatrixError::Range { .. })));
        assert!(matches!(scale(2, 2, 1.0), Err(MatrixError::Range { .. })));
        assert!(matches!(
            multiply_add(2, 0, 1.0, 5),
            Err(MatrixError::Range { .. })
        ));
        assert!(matches!(swap(0, 0, 0), Err(MatrixError::Shape { .. })));
    }
}
