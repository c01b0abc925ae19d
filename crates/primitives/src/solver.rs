//! Cached inverse solver
//!
//! Computes a cell's inverse once and serves it from the cell afterwards.
//!
//! ## Solve Sequence
//!
//! ```text
//! 1. cell.cached_inverse()
//! 2. IF present: return a copy (hit, inverter not called, cell untouched)
//! 3. inverter.invert(cell.matrix())
//! 4. IF error: return it unchanged (cell stays uncached)
//! 5. cell.set_cached_inverse(result), return a copy
//! ```
//!
//! `solve` needs `&mut CacheCell`, so nothing else can touch the cell between
//! the check in step 1 and the write in step 5.

use crate::cache_cell::CacheCell;
use crate::stats::CacheStats;
use matcache_core::{DenseInverter, Inverter, Matrix, Result};
use tracing::{debug, info, warn};

/// Compute-once, read-many access to a cell's inverse
#[derive(Debug, Clone, Default)]
pub struct CachedInverse<I = DenseInverter> {
    inverter: I,
    stats: CacheStats,
    /// Log hits and misses at info level instead of debug
    verbose: bool,
}

impl CachedInverse<DenseInverter> {
    /// Create a solver using the default dense inverter
    pub fn new() -> Self {
        Self::with_inverter(DenseInverter::new())
    }
}

impl<I: Inverter> CachedInverse<I> {
    /// Create a solver using `inverter` for cache misses
    pub fn with_inverter(inverter: I) -> Self {
        CachedInverse {
            inverter,
            stats: CacheStats::default(),
            verbose: false,
        }
    }

    /// Report cache hits and misses at info level
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Return the inverse of the cell's matrix
    ///
    /// # Errors
    ///
    /// Whatever the inverter returns for the stored matrix. The cell is not
    /// modified on failure.
    pub fn solve(&mut self, cell: &mut CacheCell) -> Result<Matrix> {
        if let Some(inverse) = cell.cached_inverse() {
            self.stats.hits += 1;
            if self.verbose {
                info!(generation = cell.generation(), "getting cached inverse");
            } else {
                debug!(generation = cell.generation(), "getting cached inverse");
            }
            return Ok(inverse.clone());
        }

        let inverse = match self.inverter.invert(cell.matrix()) {
            Ok(inverse) => inverse,
            Err(e) => {
                self.stats.failures += 1;
                warn!(
                    generation = cell.generation(),
                    error = %e,
                    "Inversion failed, nothing cached"
                );
                return Err(e);
            }
        };

        self.stats.misses += 1;
        let (rows, cols) = inverse.shape();
        if self.verbose {
            info!(generation = cell.generation(), rows, cols, "computed fresh inverse");
        } else {
            debug!(generation = cell.generation(), rows, cols, "computed fresh inverse");
        }

        cell.set_cached_inverse(inverse.clone());
        Ok(inverse)
    }

    /// Counters accumulated by this solver
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// The inverter used on cache misses
    pub fn inverter(&self) -> &I {
        &self.inverter
    }
}

/// Return the inverse of the cell's matrix using the default dense inverter
///
/// Computes and caches the inverse on the first call; later calls with the
/// same matrix return the cached value.
pub fn cached_inverse(cell: &mut CacheCell) -> Result<Matrix> {
    CachedInverse::new().solve(cell)
}
