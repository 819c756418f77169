use thiserror::Error;

/// Errors raised by the matrix kernel.
///
/// Every operation validates its preconditions before building a result, so
/// an error never leaves a partially written matrix behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// Dimensions are not valid for the attempted operation.
    #[error("shape error in {op}: {detail}")]
    Shape { op: &'static str, detail: String },

    /// Element access outside the declared bounds.
    #[error("index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    Index {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A row/column/elementary index outside its valid range.
    #[error("range error in {op}: index {index} is outside the valid range 0..{bound}")]
    Range {
        op: &'static str,
        index: usize,
        bound: usize,
    },

    /// Zero determinant where an inverse is required.
    #[error("matrix of dimension {dim} is singular and cannot be inverted")]
    SingularMatrix { dim: usize },

    /// Scalar division by zero, or inverting a 1x1 zero matrix.
    #[error("division by zero in {op}")]
    DivideByZero { op: &'static str },

    /// Curve fit could not be solved because the design matrix is singular.
    #[error("curve fit through {points} points has no unique solution")]
    UnsolvableSystem {
        points: usize,
        #[source]
        source: Box<MatrixError>,
    },

    /// Cofactor expansion was requested above the configured dimension limit.
    #[error("{op} refused a {dim}x{dim} matrix: cofactor expansion is limited to dimension {limit}")]
    DimensionLimit {
        op: &'static str,
        dim: usize,
        limit: usize,
    },
}

impl MatrixError {
    pub(crate) fn shape(op: &'static str, detail: impl Into<String>) -> Self {
        MatrixError::Shape {
            op,
            detail: detail.into(),
        }
    }

    pub(crate) fn range(op: &'static str, index: usize, bound: usize) -> Self {
        MatrixError::Range { op, index, bound }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
