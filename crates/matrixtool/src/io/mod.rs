//! Delimited text input/output for matrices.
pub mod delimited;

pub use delimited::{read_matrix, read_matrix_with, write_matrix};
