//! Error types for spatial math operations.
//!
//! This module provides a unified error handling system for all vector,
//! matrix, and rotation operations in the spatial-rs workspace.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of pure geometric
//! computation:
//!
//! - Normalizing a vector (or rotation axis) that is too short to carry
//!   a direction
//! - Inverting a matrix whose determinant vanishes
//! - Constructing a fixed-arity type from a slice of the wrong length
//!
//! Every error is detected synchronously at the offending call and
//! returned to the immediate caller. No operation substitutes a default
//! value on failure: a silent zero or NaN vector would corrupt downstream
//! geometry in ways that are very hard to diagnose.
//!
//! # Usage
//!
//! ```rust
//! use spatial_core::{Error, Result};
//!
//! fn checked_direction(x: f64, y: f64, z: f64) -> Result<(f64, f64, f64)> {
//!     let len = (x * x + y * y + z * z).sqrt();
//!     if len < 1e-8 {
//!         return Err(Error::DegenerateVector { length: len, epsilon: 1e-8 });
//!     }
//!     Ok((x / len, y / len, z / len))
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `spatial-math` - All fallible vector/matrix/quaternion operations

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during spatial math operations.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// Each variant carries the offending values so callers can report exactly
/// what went wrong without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A vector (or rotation axis, or quaternion) is too short to normalize.
    ///
    /// Returned instead of dividing by a near-zero length, which would
    /// produce NaN or Inf components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spatial_core::Error;
    ///
    /// let err = Error::DegenerateVector { length: 0.0, epsilon: 1e-8 };
    /// assert!(err.to_string().contains("cannot normalize"));
    /// ```
    #[error("cannot normalize: length {length} is below epsilon {epsilon}")]
    DegenerateVector {
        /// Euclidean length of the offending vector
        length: f64,
        /// Threshold below which the vector is treated as zero
        epsilon: f64,
    },

    /// A matrix is singular (or numerically close to singular) and cannot
    /// be inverted.
    #[error("cannot invert: |determinant| {determinant} is below epsilon {epsilon}")]
    SingularMatrix {
        /// Determinant of the offending matrix
        determinant: f64,
        /// Threshold below which the matrix is treated as singular
        epsilon: f64,
    },

    /// A slice-based constructor received the wrong number of components.
    ///
    /// Returned by `from_slice`-style constructors on the fixed-arity
    /// value types (e.g. 3 components for a `Vec3`, 16 for a `Mat4`).
    #[error("dimension mismatch: expected {expected} components, got {got}")]
    DimensionMismatch {
        /// Number of components the type requires
        expected: usize,
        /// Number of components actually supplied
        got: usize,
    },
}
