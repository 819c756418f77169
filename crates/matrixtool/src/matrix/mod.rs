//! Dense matrix kernel.
//!
//! `Matrix` is an owned row-major buffer. Every operation in the submodules
//! takes its inputs by reference and returns a new matrix; the only in-place
//! mutation is element assignment through `set` or `IndexMut`.
pub mod determinant;
pub mod echelon;
pub mod elementary;
pub mod ops;
pub mod structure;
pub mod transform;

mod display;
mod storage;

pub use determinant::{
    adjugate, adjugate_with, algebraic_cofactor, cofactor, determinant, first_zero_row, inverse,
    inverse_with, rank,
};
pub use echelon::{echelon_form, leading_indices, reduce, Echelon};
pub use storage::Matrix;
pub use structure::{
    concat_by_col, concat_by_row, insert_col, insert_row, remove_col, remove_row, reshape,
    sub_matrix, transpose,
};
pub use transform::{
    column_multiple, column_mul_add, column_switch, row_mul_add, row_multiple, row_switch,
};
