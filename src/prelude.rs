//! Convenient imports for matcache.
//!
//! ```
//! use matcache::prelude::*;
//!
//! let mut cell = CacheCell::new(dmatrix![1.0, 0.0; 0.0, 1.0]);
//! let inverse = cached_inverse(&mut cell).unwrap();
//! ```

// Cache primitives
pub use crate::{cached_inverse, CacheCell, CacheStats, CachedInverse};

// Inversion
pub use crate::{DenseInverter, InverseOptions, Inverter, Matrix};

// Error handling
pub use crate::{Error, Result};

// Matrix literals
pub use nalgebra::dmatrix;
