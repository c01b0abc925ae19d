//! Error types for matrix inversion.
//!
//! Errors raised here are never handled inside the cache layer. They travel
//! unchanged to whoever asked for the inverse.

use thiserror::Error;

/// Reasons an inverse could not be produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InverseError {
    /// The matrix has a zero dimension (no matrix has been set yet)
    #[error("cannot invert an empty matrix")]
    Empty,

    /// The matrix is not square
    #[error("cannot invert a non-square matrix: {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The matrix is exactly singular
    #[error("matrix is singular ({dim}x{dim})")]
    Singular {
        /// Dimension of the square matrix
        dim: usize,
    },

    /// The matrix is computationally singular
    #[error("matrix is computationally singular: reciprocal condition number = {rcond:e} (tolerance {tolerance:e})")]
    IllConditioned {
        /// Reciprocal condition number in the 1-norm
        rcond: f64,
        /// Tolerance the estimate was checked against
        tolerance: f64,
    },
}

/// Result type for inversion operations.
pub type Result<T> = std::result::Result<T, InverseError>;

impl InverseError {
    /// Check if the matrix was rejected because of its shape.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, InverseError::Empty | InverseError::NotSquare { .. })
    }

    /// Check if the matrix was rejected as singular.
    ///
    /// Covers both exact and computational singularity.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            InverseError::Singular { .. } | InverseError::IllConditioned { .. }
        )
    }
}
