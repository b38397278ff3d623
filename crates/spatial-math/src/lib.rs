//! # spatial-math
//!
//! 3D math types for spatial-rs.
//!
//! This crate provides the value types 3D geometry is built from:
//!
//! - [`Vec2`] / [`Vec3`] / [`Vec4`] - Vectors with full component-wise
//!   algebra, dot/cross products, and checked normalization
//! - [`Mat3`] / [`Mat4`] - Linear and affine transform matrices with
//!   checked inversion
//! - [`Quat`] - Rotation quaternions with slerp and matrix conversion
//! - [`Basis`] - Right-handed orthonormal frames steered incrementally
//!   (look-at, rotate, level)
//! - [`Pose`] - Rigid placements (orientation + position) that compose
//!   hierarchically
//!
//! # Conventions
//!
//! These are the error-prone choices in any 3D library, fixed once here:
//!
//! - Scalars are `f64`; angles are **radians**
//!   ([`spatial_core::scalar::radians`] converts from degrees)
//! - Matrices are stored **row-major** and multiply **column vectors**:
//!   `result = matrix * vector`
//! - Composition reads right to left: `a * b` applies `b` first, for
//!   matrices and quaternions alike
//! - Cross products and rotations are **right-handed**;
//!   `Vec3::X.cross(Vec3::Y) == Vec3::Z`
//! - Quaternions store `(x, y, z, w)` with `w` the scalar part
//!
//! # Error policy
//!
//! Anything that would have to divide by a vanishing quantity —
//! normalizing a near-zero vector, inverting a near-singular matrix —
//! returns a [`spatial_core::Error`] instead of letting NaN leak into
//! downstream geometry. Fixed-arity constructors from slices reject
//! wrong lengths the same way.
//!
//! # Usage
//!
//! ```rust
//! use spatial_math::{Mat4, Quat, Vec3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let spin = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2)?;
//! let place = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0)) * spin.to_mat4();
//! let p = place.transform_point(Vec3::X);
//! assert!(p.approx_eq(Vec3::new(0.0, 1.0, -1.0), 1e-12));
//! # Ok::<(), spatial_core::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`spatial_core`] - Errors, scalar utilities, numeric configuration
//! - [`glam`] - Interop with the wider Rust graphics ecosystem
//!
//! # Feature Flags
//!
//! - `serde` - Enable serialization for all value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod basis;
mod mat3;
mod mat4;
mod pose;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use basis::*;
pub use mat3::*;
pub use mat4::*;
pub use pose::*;
pub use quat::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DMat4, DQuat, DVec2, DVec3, DVec4};
}
