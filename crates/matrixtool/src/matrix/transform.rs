//! Row and column transforms.
//!
//! Each transform builds the matching elementary matrix and multiplies:
//! on the left for rows, on the right for columns.

use crate::error::{MatrixError, Result};
use crate::matrix::{elementary, ops, Matrix};

fn check(op: &'static str, index: usize, bound: usize) -> Result<()> {
    if index >= bound {
        return Err(MatrixError::range(op, index, bound));
    }
    Ok(())
}

/// Exchange rows `i` and `j`.
pub fn row_switch(x: &Matrix, i: usize, j: usize) -> Result<Matrix> {
    check("row_switch", i, x.nrows())?;
    check("row_switch", j, x.nrows())?;
    if i == j {
        return Ok(x.clone());
    }
    ops::mul(&elementary::swap(x.nrows(), i, j)?, x)
}

/// Exchange columns `i` and `j`.
pub fn column_switch(x: &Matrix, i: usize, j: usize) -> Result<Matrix> {
    check("column_switch", i, x.ncols())?;
    check("column_switch", j, x.ncols())?;
    if i == j {
        return Ok(x.clone());
    }
    ops::mul(x, &elementary::swap(x.ncols(), i, j)?)
}

/// Multiply row `i` by `k`.
pub fn row_multiple(x: &Matrix, i: usize, k: f64) -> Result<Matrix> {
    check("row_multiple", i, x.nrows())?;
    ops::mul(&elementary::scale(x.nrows(), i, k)?, x)
}

/// Multiply column `i` by `k`.
pub fn column_multiple(x: &Matrix, i: usize, k: f64) -> Result<Matrix> {
    check("column_multiple", i, x.ncols())?;
    ops::mul(x, &elementary::scale(x.ncols(), i, k)?)
}

/// Add `k * row j` to row `i`.
pub fn row_mul_add(x: &Matrix, i: usize, k: f64, j: usize) -> Result<Matrix> {
    check("row_mul_add", i, x.nrows())?;
    check("row_mul_add", j, x.nrows())?;
    if i == j {
        return Ok(x.clone());
    }
    ops::mul(&elementary::multiply_add(x.nrows(), i, k, j)?, x)
}

/// Add `k * column i` to column `j`.
pub fn column_mul_add(x: &Matrix, i: usize, k: f64, j: usize) -> Result<Matrix> {
    check("column_mul_add", i, x.ncols())?;
    check("column_mul_add", j, x.ncols())?;
    if i == j {
        return Ok(x.clone());
    }
    ops::mul(x, &elementary::multiply_add(x.ncols(), i, k, j)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn row_switch_twice_restores() {
        let x = sample();
        let once = row_switch(&x, 0, 1).unwrap();
        assert_eq!(once.row_slice(0), &[4.0, 5.0, 6.0]);
        assert_eq!(row_switch(&once, 0, 1).unwrap(), x);
    }

    #[test]
    fn column_operations_use_right_multiplication() {
        let x = sample();
        let swapped = column_switch(&x, 0, 2).unwrap();
        assert_eq!(swapped.row_slice(0), &[3.0, 2.0, 1.0]);

        let scaled = column_multiple(&x, 1, 10.0).unwrap();
        assert_eq!(scaled.row_slice(1), &[4.0, 50.0, 6.0]);

        // column 2 += 2 * column 0
        let added = column_mul_add(&x, 0, 2.0, 2).unwrap();
        assert_eq!(added.row_slice(0), &[1.0, 2.0, 5.0]);
        assert_eq!(added.row_slice(1), &[4.0, 5.0, 14.0]);
    }

    #[test]
    fn row_mul_add_adds_scaled_source_row() {
        let x = sample();
        let r = row_mul_add(&x, 1, -4.0, 0).unwrap();
        assert_eq!(r.row_slice(1), &[0.0, -3.0, -6.0]);
        assert_eq!(row_mul_add(&x, 1, 3.0, 1).unwrap(), x);
    }

    #[test]
    fn indices_are_validated() {
        let x = sample();
        assert!(matches!(row_switch(&x, 0, 2), Err(MatrixError::Range { .. })));
        assert!(matches!(
            column_multiple(&x, 3, 1.0),
            Err(MatrixError::Range { .. })
        ));
        assert!(row_multiple(&x, 1, 0.5).is_ok());
    }
}
