//! Solver statistics

/// Counters kept by a [`CachedInverse`](crate::CachedInverse) solver
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from a cell's cache
    pub hits: u64,
    /// Lookups that computed and stored a fresh inverse
    pub misses: u64,
    /// Lookups where inversion failed
    pub failures: u64,
}

impl CacheStats {
    /// Total number of lookups
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses + self.failures
    }

    /// Fraction of lookups served from cache (0.0 when there were none)
    pub fn hit_ratio(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        }
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} lookups: {} hits, {} misses, {} failures ({:.1}% hit ratio)",
            self.lookups(),
            self.hits,
            self.misses,
            self.failures,
            self.hit_ratio() * 100.0
        )
    }
}
