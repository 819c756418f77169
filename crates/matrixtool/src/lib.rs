//! matrixtool: a dense matrix algebra kernel.
//!
//! The crate provides an owned row-major `Matrix`, elementary row/column
//! transforms, echelon reduction, determinant/cofactor/adjugate/inverse and
//! rank, structural reshaping, the arithmetic and comparison operator set,
//! and polynomial curve fitting on top of matrix inversion.
//!
//! Results are exact for small integer-valued inputs. There is no pivoting
//! for stability, so large or ill-conditioned systems are out of scope.
pub mod config;
pub mod error;
pub mod fit;
pub mod io;
pub mod matrix;
pub mod stats;

pub use config::{Delimiter, KernelConfig};
pub use error::{MatrixError, Result};
pub use fit::{fit_curve, fit_curve_with, polyval};
pub use matrix::Matrix;
