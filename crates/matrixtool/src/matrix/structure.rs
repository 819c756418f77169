//! Structural operations: blocks, concatenation, insertion/removal and
//! reshaping.

use crate::error::{MatrixError, Result};
use crate::matrix::transform::{column_switch, row_switch};
use crate::matrix::Matrix;

pub fn transpose(x: &Matrix) -> Matrix {
    let (rows, cols) = x.shape();
    let mut data = Vec::with_capacity(rows * cols);
    for col in 0..cols {
        for row in 0..rows {
            data.push(x[(row, col)]);
        }
    }
    Matrix::from_raw(cols, rows, data)
}

/// Leading `i x j` block, or with `reverse` the trailing block that starts
/// at `(i - 1, j - 1)`.
pub fn sub_matrix(x: &Matrix, i: usize, j: usize, reverse: bool) -> Result<Matrix> {
    if i == 0 || j == 0 {
        return Err(MatrixError::shape(
            "sub_matrix",
            format!("block extent ({}, {}) must be positive", i, j),
        ));
    }
    if i > x.nrows() {
        return Err(MatrixError::range("sub_matrix", i, x.nrows() + 1));
    }
    if j > x.ncols() {
        return Err(MatrixError::range("sub_matrix", j, x.ncols() + 1));
    }
    let (row0, col0, rows, cols) = if reverse {
        (i - 1, j - 1, x.nrows() - i + 1, x.ncols() - j + 1)
    } else {
        (0, 0, i, j)
    };
    let mut data = Vec::with_capacity(rows * cols);
    for row in row0..row0 + rows {
        data.extend_from_slice(&x.row_slice(row)[col0..col0 + cols]);
    }
    Ok(Matrix::from_raw(rows, cols, data))
}

/// Place `y` to the right of `x`. Row counts must match; an absent operand
/// returns the other one.
pub fn concat_by_row(x: Option<&Matrix>, y: Option<&Matrix>) -> Result<Option<Matrix>> {
    let (x, y) = match (x, y) {
        (None, y) => return Ok(y.cloned()),
        (x, None) => return Ok(x.cloned()),
        (Some(x), Some(y)) => (x, y),
    };
    if x.nrows() != y.nrows() {
        return Err(MatrixError::shape(
            "concat_by_row",
            format!("{} rows cannot be joined with {} rows", x.nrows(), y.nrows()),
        ));
    }
    let cols = x.ncols() + y.ncols();
    let mut data = Vec::with_capacity(x.nrows() * cols);
    for row in 0..x.nrows() {
        data.extend_from_slice(x.row_slice(row));
        data.extend_from_slice(y.row_slice(row));
    }
    Ok(Some(Matrix::from_raw(x.nrows(), cols, data)))
}

/// Place `y` below `x`. Column counts must match; an absent operand returns
/// the other one.
pub fn concat_by_col(x: Option<&Matrix>, y: Option<&Matrix>) -> Result<Option<Matrix>> {
    let (x, y) = match (x, y) {
        (None, y) => return Ok(y.cloned()),
        (x, None) => return Ok(x.cloned()),
        (Some(x), Some(y)) => (x, y),
    };
    if x.ncols() != y.ncols() {
        return Err(MatrixError::shape(
            "concat_by_col",
            format!(
                "{} columns cannot be joined with {} columns",
                x.ncols(),
                y.ncols()
            ),
        ));
    }
    let mut data = Vec::with_capacity(x.len() + y.len());
    data.extend_from_slice(x.as_slice());
    data.extend_from_slice(y.as_slice());
    Ok(Some(Matrix::from_raw(x.nrows() + y.nrows(), x.ncols(), data)))
}

fn require_row_vector(op: &'static str, v: &Matrix, cols: usize) -> Result<()> {
    if v.nrows() != 1 || v.ncols() != cols {
        return Err(MatrixError::shape(
            op,
            format!("expected a 1x{} row vector, got {:?}", cols, v.shape()),
        ));
    }
    Ok(())
}

fn require_col_vector(op: &'static str, v: &Matrix, rows: usize) -> Result<()> {
    if v.ncols() != 1 || v.nrows() != rows {
        return Err(MatrixError::shape(
            op,
            format!("expected a {}x1 column vector, got {:?}", rows, v.shape()),
        ));
    }
    Ok(())
}

/// Insert `row_vec` so that it becomes row `at`; later rows shift down.
pub fn insert_row(x: &Matrix, row_vec: &Matrix, at: usize) -> Result<Matrix> {
    require_row_vector("insert_row", row_vec, x.ncols())?;
    if at > x.nrows() {
        return Err(MatrixError::range("insert_row", at, x.nrows() + 1));
    }
    let mut data = Vec::with_capacity(x.len() + x.ncols());
    data.extend_from_slice(&x.as_slice()[..at * x.ncols()]);
    data.extend_from_slice(row_vec.as_slice());
    data.extend_from_slice(&x.as_slice()[at * x.ncols()..]);
    Ok(Matrix::from_raw(x.nrows() + 1, x.ncols(), data))
}

/// Insert `col_vec` so that it becomes column `at`; later columns shift right.
pub fn insert_col(x: &Matrix, col_vec: &Matrix, at: usize) -> Result<Matrix> {
    require_col_vector("insert_col", col_vec, x.nrows())?;
    if at > x.ncols() {
        return Err(MatrixError::range("insert_col", at, x.ncols() + 1));
    }
    let cols = x.ncols() + 1;
    let mut data = Vec::with_capacity(x.nrows() * cols);
    for row in 0..x.nrows() {
        let src = x.row_slice(row);
        data.extend_from_slice(&src[..at]);
        data.push(col_vec[(row, 0)]);
        data.extend_from_slice(&src[at..]);
    }
    Ok(Matrix::from_raw(x.nrows(), cols, data))
}

/// Drop row `row` by switching it down to the end and truncating.
pub fn remove_row(x: &Matrix, row: usize) -> Result<Matrix> {
    if row >= x.nrows() {
        return Err(MatrixError::range("remove_row", row, x.nrows()));
    }
    if x.nrows() == 1 {
        return Err(MatrixError::shape(
            "remove_row",
            "cannot remove the only row",
        ));
    }
    let mut result = x.clone();
    for i in row..x.nrows() - 1 {
        result = row_switch(&result, i, i + 1)?;
    }
    sub_matrix(&result, x.nrows() - 1, x.ncols(), false)
}

/// Drop column `col` by switching it right to the end and truncating.
pub fn remove_col(x: &Matrix, col: usize) -> Result<Matrix> {
    if col >= x.ncols() {
        return Err(MatrixError::range("remove_col", col, x.ncols()));
    }
    if x.ncols() == 1 {
        return Err(MatrixError::shape(
            "remove_col",
            "cannot remove the only column",
        ));
    }
    let mut result = x.clone();
    for i in col..x.ncols() - 1 {
        result = column_switch(&result, i, i + 1)?;
    }
    sub_matrix(&result, x.nrows(), x.ncols() - 1, false)
}

/// Refill the row-major elements of `x` into a `rows x cols` matrix.
/// Extra source elements are dropped; missing ones are zero.
pub fn reshape(x: &Matrix, rows: usize, cols: usize) -> Result<Matrix> {
    let mut result = Matrix::zeros(rows, cols)?;
    let source = x.as_slice();
    for idx in 0..rows * cols {
        if idx >= source.len() {
            break;
        }
        result[(idx / cols, idx % cols)] = source[idx];
    }
    Ok(result)
}

/// Row `i` as a 1xn matrix.
pub fn row(x: &Matrix, i: usize) -> Result<Matrix> {
    if i >= x.nrows() {
        return Err(MatrixError::range("row", i, x.nrows()));
    }
    Ok(Matrix::from_raw(1, x.ncols(), x.row_slice(i).to_vec()))
}

/// Column `j` as an nx1 matrix.
pub fn column(x: &Matrix, j: usize) -> Result<Matrix> {
    if j >= x.ncols() {
        return Err(MatrixError::range("column", j, x.ncols()));
    }
    let data = (0..x.nrows()).map(|r| x[(r, j)]).collect();
    Ok(Matrix::from_raw(x.nrows(), 1, data))
}

/// Copy of `x` with row `i` replaced by `row_vec`.
pub fn set_row(x: &Matrix, i: usize, row_vec: &Matrix) -> Result<Matrix> {
    require_row_vector("set_row", row_vec, x.ncols())?;
    if i >= x.nrows() {
        return Err(MatrixError::range("set_row", i, x.nrows()));
    }
    let mut result = x.clone();
    result.row_slice_mut(i).copy_from_slice(row_vec.as_slice());
    Ok(result)
}

/// Copy of `x` with column `j` replaced by `col_vec`.
pub fn set_col(x: &Matrix, j: usize, col_vec: &Matrix) -> Result<Matrix> {
    require_col_vector("set_col", col_vec, x.nrows())?;
    if j >= x.ncols() {
        return Err(MatrixError::range("set_col", j, x.ncols()));
    }
    let mut result = x.clone();
    for r in 0..x.nrows() {
        result[(r, j)] = col_vec[(r, 0)];
    }
    Ok(result)
}

/// Copy of `x` with every row replaced by `row_vec`.
pub fn fill_rows(x: &Matrix, row_vec: &Matrix) -> Result<Matrix> {
    require_row_vector("fill_rows", row_vec, x.ncols())?;
    let mut result = x.clone();
    for r in 0..x.nrows() {
        result.row_slice_mut(r).copy_from_slice(row_vec.as_slice());
    }
    Ok(result)
}

/// Copy of `x` with every column replaced by `col_vec`.
pub fn fill_cols(x: &Matrix, col_vec: &Matrix) -> Result<Matrix> {
    require_col_vector("fill_cols", col_vec, x.nrows())?;
    let mut result = x.clone();
    for r in 0..x.nrows() {
        let v = col_vec[(r, 0)];
        result.row_slice_mut(r).iter_mut().for_each(|e| *e = v);
    }
    Ok(result)
}

pub fn append_row(x: &Matrix, row_vec: &Matrix) -> Result<Matrix> {
    insert_row(x, row_vec, x.nrows())
}

pub fn append_col(x: &Matrix, col_vec: &Matrix) -> Result<Matrix> {
    insert_col(x, col_vec, x.ncols())
}

/// Main diagonal entries, `min(rows, cols)` of them.
pub fn diagonal_of(x: &Matrix) -> Vec<f64> {
    (0..x.nrows().min(x.ncols())).map(|i| x[(i, i)]).collect()
}

/// Keep the upper triangle (diagonal included), overwrite the rest with `fill`.
pub fn tri_upper(x: &Matrix, fill: f64) -> Matrix {
    let mut result = x.clone();
    for r in 0..x.nrows() {
        for c in 0..r.min(x.ncols()) {
            result[(r, c)] = fill;
        }
    }
    result
}

/// Keep the lower triangle (diagonal included), overwrite the rest with `fill`.
pub fn tri_lower(x: &Matrix, fill: f64) -> Matrix {
    let mut result = x.clone();
    for r in 0..x.nrows() {
        for c in (r + 1)..x.ncols() {
            result[(r, c)] = fill;
        }
    }
    result
}

/// Square part of `x` mirrored across the diagonal. The upper triangle is
/// copied down, or with `from_lower` the lower triangle is copied up.
pub fn symmetric(x: &Matrix, from_lower: bool) -> Result<Matrix> {
    mirror(x, from_lower, 1.0, "symmetric")
}

/// Like `symmetric` but the mirrored half is negated and the diagonal zeroed.
pub fn antisymmetric(x: &Matrix, from_lower: bool) -> Result<Matrix> {
    let mut result = mirror(x, from_lower, -1.0, "antisymmetric")?;
    for i in 0..result.nrows() {
        result[(i, i)] = 0.0;
    }
    Ok(result)
}

fn mirror(x: &Matrix, from_lower: bool, sign: f64, op: &'static str) -> Result<Matrix> {
    let n = x.nrows().min(x.ncols());
    let mut result = sub_matrix(x, n, n, false)?;
    for r in 0..n {
        for c in 0..r {
            if from_lower {
                result[(c, r)] = sign * result[(r, c)];
            } else {
                result[(r, c)] = sign * result[(c, r)];
            }
        }
    }
    log::trace!("{}: mirrored {}x{} block", op, n, n);
    Ok(result)
}
