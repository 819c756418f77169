//! Row echelon reduction.
//!
//! Rows are ordered by the column of their first nonzero entry and every
//! pivot column is cleared below its pivot with multiply-add steps. Only
//! row swaps and multiply-add operations are applied, so the determinant
//! of the result equals the input's determinant times `(-1)^swaps`.
//!
//! No magnitude pivoting is done. The reducer is meant for small, exactly
//! representable inputs, not ill-conditioned systems.

use crate::matrix::Matrix;

/// Result of a reduction together with the number of row swaps it applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Echelon {
    pub matrix: Matrix,
    pub swaps: usize,
}

impl Echelon {
    /// `1.0` for an even number of swaps, `-1.0` for odd.
    pub fn sign(&self) -> f64 {
        if self.swaps % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Column of the first nonzero entry of every row. All-zero rows map to
/// `ncols`.
pub fn leading_indices(x: &Matrix) -> Vec<usize> {
    (0..x.nrows())
        .map(|row| {
            x.row_slice(row)
                .iter()
                .position(|&v| v != 0.0)
                .unwrap_or(x.ncols())
        })
        .collect()
}

/// Stable sort of rows `from..` by leading index using adjacent swaps.
/// Returns the number of swaps performed.
fn sort_rows(m: &mut Matrix, lead: &mut [usize], from: usize) -> usize {
    let mut swaps = 0;
    for i in (from + 1)..lead.len() {
        let mut j = i;
        while j > from && lead[j - 1] > lead[j] {
            m.swap_rows_in_place(j - 1, j);
            lead.swap(j - 1, j);
            swaps += 1;
            j -= 1;
        }
    }
    swaps
}

/// Add `k * row src` to row `dst`, starting at column `from`.
fn mul_add_row(m: &mut Matrix, dst: usize, k: f64, src: usize, from: usize) {
    let pivot_row = m.row_slice(src)[from..].to_vec();
    let target = &mut m.row_slice_mut(dst)[from..];
    for (t, p) in target.iter_mut().zip(pivot_row.iter()) {
        *t += k * p;
    }
}

/// Reduce `x` to row echelon form, counting the row swaps used.
pub fn reduce(x: &Matrix) -> Echelon {
    let mut m = x.clone();
    let rows = m.nrows();
    let cols = m.ncols();
    let mut lead = leading_indices(&m);
    let mut swaps = sort_rows(&mut m, &mut lead, 0);

    for pivot in 0..rows.saturating_sub(1) {
        let col = lead[pivot];
        if col >= cols {
            // every row from here down is zero
            break;
        }
        let p = m[(pivot, col)];
        for row in (pivot + 1)..rows {
            let entry = m[(row, col)];
            if entry == 0.0 {
                continue;
            }
            mul_add_row(&mut m, row, -entry / p, pivot, col);
            m[(row, col)] = 0.0;
        }
        lead = leading_indices(&m);
        swaps += sort_rows(&mut m, &mut lead, pivot + 1);
    }

    log::trace!(
        "reduced {:?} matrix to echelon form with {} row swaps",
        x.shape(),
        swaps
    );
    Echelon { matrix: m, swaps }
}

/// Row echelon form of `x`.
pub fn echelon_form(x: &Matrix) -> Matrix {
    reduce(x).matrix
}
