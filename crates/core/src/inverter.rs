//! Matrix inversion primitive
//!
//! The cache layer never inverts a matrix itself. It goes through the
//! [`Inverter`] trait, so the dense implementation here can be replaced
//! (for example by a call-counting inverter in tests).
//!
//! ## Failure Modes
//!
//! [`DenseInverter`] checks, in order:
//! 1. Zero dimension → [`InverseError::Empty`]
//! 2. rows != cols → [`InverseError::NotSquare`]
//! 3. No inverse exists → [`InverseError::Singular`]
//! 4. Reciprocal condition number below tolerance → [`InverseError::IllConditioned`]

use crate::error::{InverseError, Result};
use crate::matrix::{self, Matrix};
use crate::options::InverseOptions;
use tracing::trace;

/// Something that can compute the inverse of a matrix.
pub trait Inverter {
    /// Compute the inverse of `matrix`.
    ///
    /// Must not modify any cache; callers decide what to do with the result.
    fn invert(&self, matrix: &Matrix) -> Result<Matrix>;
}

impl<I: Inverter + ?Sized> Inverter for &I {
    fn invert(&self, matrix: &Matrix) -> Result<Matrix> {
        (**self).invert(matrix)
    }
}

impl<I: Inverter + ?Sized> Inverter for Box<I> {
    fn invert(&self, matrix: &Matrix) -> Result<Matrix> {
        (**self).invert(matrix)
    }
}

/// Dense inverter backed by nalgebra's LU decomposition with partial pivoting.
///
/// Never goes through a closed-form determinant, so uniformly tiny or huge
/// matrices invert as long as they are well conditioned.
#[derive(Debug, Clone, Default)]
pub struct DenseInverter {
    options: InverseOptions,
}

impl DenseInverter {
    /// Create an inverter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inverter with explicit options
    pub fn with_options(options: InverseOptions) -> Self {
        DenseInverter { options }
    }

    /// Options in use
    pub fn options(&self) -> &InverseOptions {
        &self.options
    }
}

impl Inverter for DenseInverter {
    fn invert(&self, m: &Matrix) -> Result<Matrix> {
        let (rows, cols) = m.shape();
        if rows == 0 || cols == 0 {
            return Err(InverseError::Empty);
        }
        if rows != cols {
            return Err(InverseError::NotSquare { rows, cols });
        }

        let inverse = m
            .clone()
            .lu()
            .try_inverse()
            .ok_or(InverseError::Singular { dim: rows })?;

        let rcond = matrix::reciprocal_condition(m, &inverse);
        let tolerance = self.options.tolerance;
        trace!(dim = rows, rcond, tolerance, "Inverted matrix");

        if rcond.is_nan() || rcond < tolerance {
            return Err(InverseError::IllConditioned { rcond, tolerance });
        }

        Ok(inverse)
    }
}
