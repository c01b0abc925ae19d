//! # matcache
//!
//! Memoized matrix inversion.
//!
//! A [`CacheCell`] owns a matrix and a private slot for its inverse. The
//! [`cached_inverse`] solver fills that slot on first use and serves it on
//! every later call, until the matrix is replaced with
//! [`CacheCell::set_matrix`].
//!
//! ## Quick Start
//!
//! ```
//! use matcache::prelude::*;
//!
//! let mut cell = CacheCell::new(dmatrix![2.0, 0.0; 0.0, 2.0]);
//!
//! // Computed and cached
//! let inverse = cached_inverse(&mut cell)?;
//! assert_eq!(inverse, dmatrix![0.5, 0.0; 0.0, 0.5]);
//!
//! // Served from the cell
//! assert_eq!(cell.cached_inverse(), Some(&inverse));
//!
//! // Replacing the matrix clears the cache
//! cell.set_matrix(dmatrix![4.0, 0.0; 0.0, 4.0]);
//! assert!(cell.cached_inverse().is_none());
//! # Ok::<(), matcache::Error>(())
//! ```
//!
//! ## Components
//!
//! - [`CacheCell`] - matrix plus cached inverse, invalidated on every write
//! - [`CachedInverse`] - solver with a pluggable [`Inverter`] and [`CacheStats`]
//! - [`DenseInverter`] - nalgebra-backed inverter configured by [`InverseOptions`]

#![warn(missing_docs)]

pub mod prelude;

// Re-export the linear algebra crate so callers can build matrices
pub use nalgebra;

// Error handling
pub use matcache_core::{InverseError as Error, Result};

// Matrix and inversion
pub use matcache_core::matrix;
pub use matcache_core::{DenseInverter, InverseOptions, Inverter, Matrix};

// Cache primitives
pub use matcache_primitives::{cached_inverse, CacheCell, CacheStats, CachedInverse};
