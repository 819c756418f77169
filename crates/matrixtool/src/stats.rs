//! Row and column reductions.
//!
//! Row reductions return a column vector with one entry per row, column
//! reductions return a row vector with one entry per column.

use crate::error::{MatrixError, Result};
use crate::matrix::structure::{concat_by_col, concat_by_row};
use crate::matrix::Matrix;

fn fold_rows(x: &Matrix, f: fn(f64, f64) -> f64) -> Matrix {
    let data = (0..x.nrows())
        .map(|r| {
            let slice = x.row_slice(r);
            slice[1..].iter().fold(slice[0], |acc, &v| f(acc, v))
        })
        .collect();
    Matrix::from_raw(x.nrows(), 1, data)
}

fn fold_cols(x: &Matrix, f: fn(f64, f64) -> f64) -> Matrix {
    let mut data = x.row_slice(0).to_vec();
    for r in 1..x.nrows() {
        for (acc, &v) in data.iter_mut().zip(x.row_slice(r)) {
            *acc = f(*acc, v);
        }
    }
    Matrix::from_raw(1, x.ncols(), data)
}

/// Smallest entry of each row.
pub fn min_of_rows(x: &Matrix) -> Matrix {
    fold_rows(x, f64::min)
}

/// Largest entry of each row.
pub fn max_of_rows(x: &Matrix) -> Matrix {
    fold_rows(x, f64::max)
}

pub fn min_of_cols(x: &Matrix) -> Matrix {
    fold_cols(x, f64::min)
}

pub fn max_of_cols(x: &Matrix) -> Matrix {
    fold_cols(x, f64::max)
}

/// Sum of all rows, as a row vector.
pub fn sum_rows(x: &Matrix) -> Matrix {
    fold_cols(x, |a, b| a + b)
}

/// Sum of all columns, as a column vector.
pub fn sum_cols(x: &Matrix) -> Matrix {
    fold_rows(x, |a, b| a + b)
}

/// Sum of the entries of a row or column vector.
pub fn sum_vector(x: &Matrix) -> Result<f64> {
    if x.nrows() != 1 && x.ncols() != 1 {
        return Err(MatrixError::shape(
            "sum_vector",
            format!("expected a vector, got {:?}", x.shape()),
        ));
    }
    Ok(x.as_slice().iter().sum())
}

/// Two columns: per-row minimum and per-row maximum.
pub fn min_max_rows(x: &Matrix) -> Result<Matrix> {
    let joined = concat_by_row(Some(&min_of_rows(x)), Some(&max_of_rows(x)))?;
    joined.ok_or_else(|| MatrixError::shape("min_max_rows", "empty result"))
}

/// Two rows: per-column minimum and per-column maximum.
pub fn min_max_cols(x: &Matrix) -> Result<Matrix> {
    let joined = concat_by_col(Some(&min_of_cols(x)), Some(&max_of_cols(x)))?;
    joined.ok_or_else(|| MatrixError::shape("min_max_cols", "empty result"))
}

/// Mean of every row, as a column vector.
pub fn row_means(x: &Matrix) -> Matrix {
    let n = x.ncols() as f64;
    sum_cols(x).map(|v| v / n)
}

/// Mean of every column, as a row vector.
pub fn col_means(x: &Matrix) -> Matrix {
    let n = x.nrows() as f64;
    sum_rows(x).map(|v| v / n)
}
