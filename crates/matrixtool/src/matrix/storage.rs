use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::error::{MatrixError, Result};

/// Dense row-major matrix of `f64`.
///
/// `rows` and `cols` are always positive and `data.len() == rows * cols`.
/// Every operation that produces a matrix hands back a freshly owned buffer;
/// `Clone` is a deep copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Internal builder for code that has already validated the shape and
    /// fully populated `data`.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = check_extent("from_shape_vec", rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::shape(
                "from_shape_vec",
                format!(
                    "invalid shape ({}, {}) for buffer of length {}",
                    rows,
                    cols,
                    data.len()
                ),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// 1x1 matrix holding `value`.
    pub fn scalar(value: f64) -> Self {
        Self::from_raw(1, 1, vec![value])
    }

    /// 1xn row vector.
    pub fn row_vector(values: &[f64]) -> Result<Self> {
        Self::from_shape_vec((1, values.len()), values.to_vec())
    }

    /// nx1 column vector.
    pub fn column_vector(values: &[f64]) -> Result<Self> {
        Self::from_shape_vec((values.len(), 1), values.to_vec())
    }

    /// Build from a rectangular sequence of rows. Ragged input is rejected.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let len = check_extent("from_rows", nrows, ncols)?;

        let mut data = Vec::with_capacity(len);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatrixError::shape(
                    "from_rows",
                    format!(
                        "row {} has {} columns, expected {}",
                        idx,
                        row.len(),
                        ncols
                    ),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_raw(nrows, ncols, data))
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        let len = check_extent("filled", rows, cols)?;
        Ok(Self::from_raw(rows, cols, vec![value; len]))
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 1.0)
    }

    /// n x n identity.
    pub fn eye(n: usize) -> Result<Self> {
        let mut result = Self::zeros(n, n)?;
        for i in 0..n {
            result[(i, i)] = 1.0;
        }
        Ok(result)
    }

    /// Square matrix with `diag` on the main diagonal.
    pub fn diagonal(diag: &[f64]) -> Result<Self> {
        let mut result = Self::zeros(diag.len(), diag.len())?;
        for (i, &v) in diag.iter().enumerate() {
            result[(i, i)] = v;
        }
        Ok(result)
    }

    /// `rows x cols` matrix whose leading diagonal is filled from `diag`.
    /// Surplus diagonal values are ignored.
    pub fn diagonal_shape(diag: &[f64], rows: usize, cols: usize) -> Result<Self> {
        let mut result = Self::zeros(rows, cols)?;
        let n = rows.min(cols).min(diag.len());
        for i in 0..n {
            result[(i, i)] = diag[i];
        }
        Ok(result)
    }

    /// Square matrix with `diag[i]` placed at column `(i + shift) mod n`.
    /// Positive shifts move right, negative shifts move left.
    pub fn diagonal_shifted(diag: &[f64], shift: isize) -> Result<Self> {
        let mut result = Self::zeros(diag.len(), diag.len())?;
        let n = diag.len() as isize;
        for (i, &v) in diag.iter().enumerate() {
            let col = (i as isize + shift).rem_euclid(n) as usize;
            result[(i, col)] = v;
        }
        Ok(result)
    }

    /// Uniform `[0, 1)` entries drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let len = check_extent("random", rows, cols)?;
        let data = (0..len).map(|_| rng.gen::<f64>()).collect();
        Ok(Self::from_raw(rows, cols, data))
    }

    /// Uniform `[min, max)` entries. The bounds are swapped when `min > max`.
    pub fn random_range<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let (lo, hi) = if min > max { (max, min) } else { (min, max) };
        Ok(Self::random(rows, cols, rng)?.map(|v| v * (hi - lo) + lo))
    }

    /// Row vector `begin, begin±1, ...` covering `|end - begin|` whole steps.
    pub fn range_vector(begin: f64, end: f64) -> Result<Self> {
        let len = point_count("range_vector", (end - begin).abs())?;
        let step = if end >= begin { 1.0 } else { -1.0 };
        let data = (0..len).map(|i| begin + step * i as f64).collect();
        Ok(Self::from_raw(1, len, data))
    }

    /// Row vector from `begin` towards `end` in increments of `step`.
    pub fn range_step(begin: f64, step: f64, end: f64) -> Result<Self> {
        if step == 0.0 || (end > begin && step < 0.0) || (end < begin && step > 0.0) {
            return Err(MatrixError::shape(
                "range_step",
                format!("step {} never reaches {} from {}", step, end, begin),
            ));
        }
        let len = point_count("range_step", (end - begin) / step)?;
        let data = (0..len).map(|i| begin + step * i as f64).collect();
        Ok(Self::from_raw(1, len, data))
    }

    /// `num + 1` evenly spaced points from `begin` to `end` inclusive.
    pub fn linspace(begin: f64, end: f64, num: usize) -> Result<Self> {
        if num == 0 {
            return Ok(Self::scalar(begin));
        }
        let len = check_extent("linspace", 1, num.saturating_add(1))?;
        let data = (0..len)
            .map(|i| i as f64 * (end - begin) / num as f64 + begin)
            .collect();
        Ok(Self::from_raw(1, len, data))
    }

    /// `10^x` for each `x` in `linspace(begin, end, num)`.
    pub fn logspace(begin: f64, end: f64, num: usize) -> Result<Self> {
        Ok(Self::linspace(begin, end, num)?.map(|x| 10f64.powf(x)))
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a matrix has at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Row-major copy of the buffer.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::Index {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.offset(row, col))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let offset = self.check_index(row, col)?;
        Ok(self.data[offset])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let offset = self.check_index(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub(crate) fn row_slice_mut(&mut self, row: usize) -> &mut [f64] {
        let start = self.offset(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    /// Swap two rows of the buffer in place.
    pub(crate) fn swap_rows_in_place(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }

    /// Apply `f` to every element, keeping the shape.
    pub fn map<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Combine two same-shape matrices element by element.
    pub fn zip_map<F>(&self, other: &Matrix, op: &'static str, mut f: F) -> Result<Matrix>
    where
        F: FnMut(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::shape(
                op,
                format!("{:?} does not match {:?}", self.shape(), other.shape()),
            ));
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// Largest element count a `Vec<f64>` can hold.
const MAX_LEN: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Validate a shape and return its element count.
fn check_extent(op: &'static str, rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::shape(
            op,
            format!("extent ({}, {}) must be positive", rows, cols),
        ));
    }
    rows.checked_mul(cols)
        .filter(|&len| len <= MAX_LEN)
        .ok_or_else(|| {
            MatrixError::shape(
                op,
                format!("extent ({}, {}) exceeds the addressable size", rows, cols),
            )
        })
}

/// Number of points in a range covering `steps` whole steps.
fn point_count(op: &'static str, steps: f64) -> Result<usize> {
    if !steps.is_finite() || steps >= MAX_LEN as f64 {
        return Err(MatrixError::shape(
            op,
            format!("a range of {} steps cannot be materialised", steps),
        ));
    }
    let len = steps.floor() as usize + 1;
    check_extent(op, 1, len)
}

impl From<f64> for Matrix {
    fn from(value: f64) -> Self {
        Matrix::scalar(value)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, MatrixError::Shape { .. }));
    }

    #[test]
    fn zero_extent_is_rejected() {
        assert!(Matrix::zeros(0, 3).is_err());
        assert!(Matrix::row_vector(&[]).is_err());
        let empty: [Vec<f64>; 0] = [];
        assert!(Matrix::from_rows(&empty).is_err());
    }

    #[test]
    fn oversized_shapes_are_rejected() {
        assert!(matches!(
            Matrix::from_shape_vec((usize::MAX, 2), vec![1.0]),
            Err(MatrixError::Shape { .. })
        ));
        assert!(matches!(
            Matrix::zeros(usize::MAX / 2, 4),
            Err(MatrixError::Shape { .. })
        ));
        assert!(Matrix::filled(usize::MAX / 3, 5, 1.0).is_err());
        assert!(Matrix::eye(usize::MAX).is_err());
    }

    #[test]
    fn unbounded_ranges_are_rejected() {
        assert!(matches!(
            Matrix::range_vector(0.0, f64::INFINITY),
            Err(MatrixError::Shape { .. })
        ));
        assert!(Matrix::range_vector(f64::NAN, 1.0).is_err());
        assert!(Matrix::range_step(0.0, 1e-300, 1.0).is_err());
        assert!(Matrix::range_step(0.0, 1.0, f64::INFINITY).is_err());
        assert!(Matrix::linspace(0.0, 1.0, usize::MAX).is_err());
    }

    #[test]
    fn diagonal_generators() {
        let d = Matrix::diagonal(&[1.0, 2.0]).unwrap();
        assert_eq!(d.to_vec(), vec![1.0, 0.0, 0.0, 2.0]);

        let wide = Matrix::diagonal_shape(&[4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(wide.row_slice(0), &[4.0, 0.0, 0.0]);
        assert_eq!(wide.row_slice(1), &[0.0, 5.0, 0.0]);

        let tall = Matrix::diagonal_shape(&[7.0], 3, 2).unwrap();
        assert_eq!(tall.to_vec(), vec![7.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(Matrix::diagonal(&[]).is_err());
    }

    #[test]
    fn checked_access_reports_index_error() {
        let mut m = Matrix::eye(2).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 1.0);
        assert!(matches!(m.get(2, 0), Err(MatrixError::Index { .. })));
        assert!(m.set(0, 2, 1.0).is_err());
        m.set(0, 1, 5.0).unwrap();
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn unchecked_index_panics_outside_bounds() {
        let m = Matrix::zeros(2, 2).unwrap();
        let _ = m[(0, 2)];
    }

    #[test]
    fn clone_does_not_alias() {
        let a = Matrix::ones(2, 2).unwrap();
        let mut b = a.clone();
        b[(0, 0)] = 9.0;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn shifted_diagonal_wraps() {
        let m = Matrix::diagonal_shifted(&[1.0, 2.0, 3.0], -1).unwrap();
        assert_eq!(m[(0, 2)], 1.0);
        assert_eq!(m[(1, 0)], 2.0);
        assert_eq!(m[(2, 1)], 3.0);
    }

    #[test]
    fn random_range_swaps_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = Matrix::random_range(4, 4, 5.0, 2.0, &mut rng).unwrap();
        assert!(m.as_slice().iter().all(|&v| (2.0..5.0).contains(&v)));
    }

    #[test]
    fn ranges_and_spaces() {
        assert_eq!(
            Matrix::range_vector(3.0, 0.0).unwrap().to_vec(),
            vec![3.0, 2.0, 1.0, 0.0]
        );
        assert_eq!(
            Matrix::range_step(0.0, 0.5, 2.0).unwrap().to_vec(),
            vec![0.0, 0.5, 1.0, 1.5, 2.0]
        );
        assert!(Matrix::range_step(0.0, -1.0, 2.0).is_err());
        assert_eq!(
            Matrix::linspace(0.0, 1.0, 4).unwrap().to_vec(),
            vec![0.0, 0.25, 0.5, 0.75, 1.0]
        );
        assert_eq!(
            Matrix::logspace(0.0, 2.0, 2).unwrap().to_vec(),
            vec![1.0, 10.0, 100.0]
        );
    }
}
