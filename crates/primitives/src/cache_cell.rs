//! CacheCell primitive
//!
//! A matrix bundled with a private slot for its inverse.
//!
//! ## Design
//!
//! Both fields are private. The only ways to change them are:
//! - `set_matrix()`: replaces the matrix and clears the slot
//! - `set_cached_inverse()`: fills the slot
//!
//! So the slot can never hold an inverse computed for an earlier matrix.
//! Clearing is unconditional: writing a matrix equal to the current one still
//! clears the slot and bumps the generation.
//!
//! ## Reads
//!
//! `matrix()` and `cached_inverse()` hand out shared borrows. Nothing can be
//! mutated through them; an owned copy (`.clone()`) is independent of the
//! cell.
//!
//! `set_cached_inverse()` does not check that the value really is the
//! inverse. It is the write-back hook for the solver and trusts its caller.

use matcache_core::matrix::{self, Matrix};

/// A matrix and its (optional) cached inverse
#[derive(Debug, Clone)]
pub struct CacheCell {
    matrix: Matrix,
    inverse: Option<Matrix>,
    /// Starts at 1, incremented by every `set_matrix`
    generation: u64,
}

impl CacheCell {
    /// Create a cell holding `matrix`, with nothing cached
    pub fn new(matrix: Matrix) -> Self {
        CacheCell {
            matrix,
            inverse: None,
            generation: 1,
        }
    }

    /// Create a cell holding the empty 0x0 matrix
    pub fn empty() -> Self {
        Self::new(matrix::empty())
    }

    /// Replace the stored matrix and drop any cached inverse
    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
        self.inverse = None;
        self.generation += 1;
    }

    /// The stored matrix
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Store an inverse for the current matrix
    pub fn set_cached_inverse(&mut self, inverse: Matrix) {
        self.inverse = Some(inverse);
    }

    /// The cached inverse, or `None` if nothing is cached
    pub fn cached_inverse(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }

    /// Check if an inverse is cached
    pub fn is_cached(&self) -> bool {
        self.inverse.is_some()
    }

    /// Number of matrices this cell has held
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Consume the cell, returning the stored matrix
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }
}

impl Default for CacheCell {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Matrix> for CacheCell {
    fn from(matrix: Matrix) -> Self {
        Self::new(matrix)
    }
}
