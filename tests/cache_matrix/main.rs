//! Cache Matrix Test Suite
//!
//! Integration tests for the public matcache API.
//!
//! ## Modules
//!
//! - `basic_ops`: construction, reads, round-trip correctness
//! - `invalidation`: cache clearing on matrix writes
//! - `errors`: shape and singularity failures
//! - `properties`: property-based checks over random matrices

mod errors;

pub use matcache::matrix::{approx_eq, is_identity};
pub use matcache::prelude::*;

use std::cell::Cell;

/// Tolerance for `M * R ≈ I` checks
pub const TOLERANCE: f64 = 1e-9;

/// Install a subscriber that writes to the test output.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Inverter that counts calls and delegates to the dense inverter
#[derive(Default)]
pub struct CountingInverter {
    calls: Cell<usize>,
    inner: DenseInverter,
}

impl CountingInverter {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Inverter for CountingInverter {
    fn invert(&self, matrix: &Matrix) -> Result<Matrix> {
        self.calls.set(self.calls.get() + 1);
        self.inner.invert(matrix)
    }
}

/// Assert `R` is a two-sided inverse of `M`
pub fn assert_two_sided_inverse(m: &Matrix, r: &Matrix) {
    assert!(is_identity(&(m * r), TOLERANCE), "M*R is not identity: {}", m * r);
    assert!(is_identity(&(r * m), TOLERANCE), "R*M is not identity: {}", r * m);
}
