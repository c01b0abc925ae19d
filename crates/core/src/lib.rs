//! Core types for matcache
//!
//! This crate defines the pieces the cache layer is built on:
//! - `Matrix`: dense `f64` matrix and a few numeric helpers
//! - `Inverter`: the inversion primitive, with a dense implementation
//! - `InverseOptions`: tolerance settings for the dense inverter
//! - `InverseError`: everything that can go wrong while inverting

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod inverter;
pub mod matrix;
pub mod options;

pub use error::{InverseError, Result};
pub use inverter::{DenseInverter, Inverter};
pub use matrix::Matrix;
pub use options::InverseOptions;
