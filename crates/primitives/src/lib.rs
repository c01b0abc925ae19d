//! Cache primitives for matcache
//!
//! - `CacheCell`: a matrix plus a private slot for its inverse
//! - `CachedInverse`: solver that fills the slot on first use and serves it
//!   afterwards
//! - `CacheStats`: hit/miss counters kept by the solver

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache_cell;
pub mod solver;
pub mod stats;

pub use cache_cell::CacheCell;
pub use solver::{cached_inverse, CachedInverse};
pub use stats::CacheStats;
