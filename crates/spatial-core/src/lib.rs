//! # spatial-core
//!
//! Core types for the spatial-rs 3D math workspace.
//!
//! This crate provides the foundation the math types build on:
//!
//! - [`Error`] / [`Result`] - Unified error taxonomy for degenerate
//!   vectors, singular matrices, and dimension mismatches
//! - [`scalar`] - Tolerance comparison, clamping, interpolation, and
//!   angle conversion helpers
//! - [`Tolerances`] / [`StorageOrder`] - The numeric configuration surface
//!
//! ## Design Philosophy
//!
//! Everything in spatial-rs is a pure function over plain value types.
//! The one policy this crate fixes workspace-wide is **no silent
//! degeneracy**: operations that would produce NaN or Inf (normalizing a
//! zero vector, inverting a singular matrix) return an [`Error`] instead
//! of a poisoned value.
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies; `spatial-math` sits on top:
//!
//! ```text
//! spatial-core (this crate)
//!    ^
//!    |
//!    +-- spatial-math (vectors, matrices, quaternions, frames)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for configuration types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod scalar;

// Re-exports for convenience
pub use config::{StorageOrder, Tolerances};
pub use error::{Error, Result};
pub use scalar::{EPSILON_COMPARE, EPSILON_DETERMINANT, EPSILON_LENGTH};
