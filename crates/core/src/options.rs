//! Inversion options

/// Options for the dense inverter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseOptions {
    /// Minimum reciprocal condition number (1-norm) accepted before a
    /// matrix is reported as computationally singular
    pub tolerance: f64,
}

impl Default for InverseOptions {
    fn default() -> Self {
        InverseOptions {
            tolerance: f64::EPSILON,
        }
    }
}

impl InverseOptions {
    /// Strict options - reject anything close to singular
    pub fn strict() -> Self {
        InverseOptions { tolerance: 1e-12 }
    }

    /// Permissive options - only exactly singular matrices are rejected
    pub fn permissive() -> Self {
        InverseOptions { tolerance: 0.0 }
    }

    /// Set the tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
