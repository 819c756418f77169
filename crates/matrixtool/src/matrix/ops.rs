//! Arithmetic and comparison.
//!
//! The named functions are the fallible API. A scalar operand applies to
//! every element. The `std::ops` impls on `&Matrix` delegate to these
//! functions and panic when the shapes do not fit, the same way slice
//! indexing does.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::error::{MatrixError, Result};
use crate::matrix::determinant::inverse;
use crate::matrix::Matrix;

pub fn add(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    x.zip_map(y, "add", |a, b| a + b)
}

pub fn sub(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    x.zip_map(y, "sub", |a, b| a - b)
}

pub fn neg(x: &Matrix) -> Matrix {
    x.map(|v| -v)
}

pub fn add_scalar(x: &Matrix, y: f64) -> Matrix {
    x.map(|v| v + y)
}

/// `x - y` for scalar `y`.
pub fn sub_scalar(x: &Matrix, y: f64) -> Matrix {
    add_scalar(x, -y)
}

/// `y - x` for scalar `y`.
pub fn scalar_sub(y: f64, x: &Matrix) -> Matrix {
    add_scalar(&neg(x), y)
}

pub fn mul_scalar(x: &Matrix, y: f64) -> Matrix {
    x.map(|v| v * y)
}

/// Element-wise `x % y` (remainder with the sign of the dividend).
pub fn rem(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    x.zip_map(y, "rem", |a, b| a % b)
}

pub fn rem_scalar(x: &Matrix, y: f64) -> Matrix {
    x.map(|v| v % y)
}

/// Matrix product. `x.ncols()` must equal `y.nrows()`.
pub fn mul(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    if x.ncols() != y.nrows() {
        return Err(MatrixError::shape(
            "mul",
            format!(
                "left operand {:?} and right operand {:?} have different inner dimensions",
                x.shape(),
                y.shape()
            ),
        ));
    }
    let (rows, cols) = (x.nrows(), y.ncols());
    let mut data = vec![0.0; rows * cols];
    for i in 0..rows {
        let lhs = x.row_slice(i);
        for (k, &a) in lhs.iter().enumerate() {
            let rhs = y.row_slice(k);
            let out = &mut data[i * cols..(i + 1) * cols];
            for (o, &b) in out.iter_mut().zip(rhs.iter()) {
                *o += a * b;
            }
        }
    }
    Ok(Matrix::from_raw(rows, cols, data))
}

/// `x * inverse(y)`. `y` must be square and non-singular.
pub fn div(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    if !y.is_square() {
        return Err(MatrixError::shape(
            "div",
            format!("divisor must be square, got {:?}", y.shape()),
        ));
    }
    mul(x, &inverse(y)?)
}

pub fn div_scalar(x: &Matrix, y: f64) -> Result<Matrix> {
    if y == 0.0 {
        return Err(MatrixError::DivideByZero { op: "div_scalar" });
    }
    Ok(x.map(|v| v / y))
}

/// Element-wise `y / x` for scalar `y`. Zero entries follow IEEE rules.
pub fn scalar_div(y: f64, x: &Matrix) -> Matrix {
    x.map(|v| y / v)
}

/// Element-wise product.
pub fn hadamard(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    x.zip_map(y, "hadamard", |a, b| a * b)
}

/// Element-wise quotient. Zero divisors follow IEEE rules.
pub fn hadamard_div(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    x.zip_map(y, "hadamard_div", |a, b| a / b)
}

/// Integer power of a square matrix. Negative exponents invert first.
pub fn pow(x: &Matrix, k: i32) -> Result<Matrix> {
    if !x.is_square() {
        return Err(MatrixError::shape(
            "pow",
            format!("expected a square matrix, got {:?}", x.shape()),
        ));
    }
    if k == 0 {
        return Matrix::eye(x.nrows());
    }
    let base = if k < 0 { inverse(x)? } else { x.clone() };
    let mut result = base.clone();
    for _ in 1..k.unsigned_abs() {
        result = mul(&result, &base)?;
    }
    Ok(result)
}

fn indicator(x: &Matrix, y: &Matrix, op: &'static str, f: fn(f64, f64) -> bool) -> Result<Matrix> {
    x.zip_map(y, op, |a, b| if f(a, b) { 1.0 } else { 0.0 })
}

/// Element-wise `x > y` as 1.0 / 0.0.
pub fn gt(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    indicator(x, y, "gt", |a, b| a > b)
}

pub fn ge(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    indicator(x, y, "ge", |a, b| a >= b)
}

pub fn lt(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    indicator(x, y, "lt", |a, b| a < b)
}

pub fn le(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    indicator(x, y, "le", |a, b| a <= b)
}

pub fn gt_scalar(x: &Matrix, y: f64) -> Matrix {
    x.map(|a| if a > y { 1.0 } else { 0.0 })
}

pub fn ge_scalar(x: &Matrix, y: f64) -> Matrix {
    x.map(|a| if a >= y { 1.0 } else { 0.0 })
}

pub fn lt_scalar(x: &Matrix, y: f64) -> Matrix {
    x.map(|a| if a < y { 1.0 } else { 0.0 })
}

pub fn le_scalar(x: &Matrix, y: f64) -> Matrix {
    x.map(|a| if a <= y { 1.0 } else { 0.0 })
}

pub fn increment(x: &Matrix) -> Matrix {
    add_scalar(x, 1.0)
}

pub fn decrement(x: &Matrix) -> Matrix {
    add_scalar(x, -1.0)
}

/// Element-wise absolute value.
pub fn abs(x: &Matrix) -> Matrix {
    x.map(f64::abs)
}

/// Element-wise `-|v|`.
pub fn negative(x: &Matrix) -> Matrix {
    x.map(|v| -v.abs())
}

/// Element-wise `v^p`.
pub fn powf(x: &Matrix, p: f64) -> Matrix {
    x.map(|v| v.powf(p))
}

/// Element-wise `x[i, j]^y[i, j]`.
pub fn powf_elementwise(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    x.zip_map(y, "powf_elementwise", f64::powf)
}

/// Element-wise `base^v`.
pub fn scalar_powf(base: f64, x: &Matrix) -> Matrix {
    x.map(|v| base.powf(v))
}

fn expect_ok(result: Result<Matrix>) -> Matrix {
    match result {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Matrix {
        expect_ok(add(self, rhs))
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Matrix {
        expect_ok(sub(self, rhs))
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Matrix {
        expect_ok(mul(self, rhs))
    }
}

impl<'a, 'b> Div<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn div(self, rhs: &'b Matrix) -> Matrix {
        expect_ok(div(self, rhs))
    }
}

impl<'a, 'b> Rem<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn rem(self, rhs: &'b Matrix) -> Matrix {
        expect_ok(rem(self, rhs))
    }
}

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        neg(self)
    }
}

impl<'a> Add<f64> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: f64) -> Matrix {
        add_scalar(self, rhs)
    }
}

impl<'a> Sub<f64> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: f64) -> Matrix {
        sub_scalar(self, rhs)
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        mul_scalar(self, rhs)
    }
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Matrix {
        mul_scalar(rhs, self)
    }
}

impl<'a> Div<f64> for &'a Matrix {
    type Output = Matrix;

    fn div(self, rhs: f64) -> Matrix {
        expect_ok(div_scalar(self, rhs))
    }
}

impl<'a> Rem<f64> for &'a Matrix {
    type Output = Matrix;

    fn rem(self, rhs: f64) -> Matrix {
        rem_scalar(self, rhs)
    }
}
