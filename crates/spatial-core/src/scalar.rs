//! Scalar utilities for spatial math.
//!
//! This module provides the small floating-point helpers the rest of the
//! workspace builds on:
//!
//! - Tolerance-based comparison ([`approx_eq`])
//! - Clamping ([`clamp`], [`clamp01`])
//! - Linear interpolation ([`lerp`])
//! - Angle conversions ([`degrees`], [`radians`])
//! - Default epsilon constants for degeneracy checks
//!
//! # Usage
//!
//! ```rust
//! use spatial_core::scalar::{approx_eq, lerp, radians};
//!
//! assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! let right_angle = radians(90.0);
//! ```

/// Default length threshold below which a vector is considered degenerate.
///
/// Used by `normalize` on vectors and quaternions, and by axis-angle
/// constructors that must normalize their axis.
pub const EPSILON_LENGTH: f64 = 1e-8;

/// Default determinant threshold below which a matrix is considered singular.
pub const EPSILON_DETERMINANT: f64 = 1e-10;

/// Default tolerance for approximate component-wise comparisons.
pub const EPSILON_COMPARE: f64 = 1e-9;

/// Returns true if `a` and `b` differ by at most `eps`.
///
/// Absolute comparison; callers choose an epsilon appropriate to the
/// magnitude of their values.
///
/// # Example
///
/// ```rust
/// use spatial_core::scalar::approx_eq;
///
/// assert!(approx_eq(1.0, 1.0 + 1e-12, 1e-9));
/// assert!(!approx_eq(1.0, 1.1, 1e-9));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Clamps a value to the range [min, max].
///
/// # Example
///
/// ```rust
/// use spatial_core::scalar::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Clamps a value to [0, 1].
///
/// Shorthand for `clamp(value, 0.0, 1.0)`.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use spatial_core::scalar::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Converts radians to degrees.
///
/// # Example
///
/// ```rust
/// use spatial_core::scalar::degrees;
///
/// assert!((degrees(std::f64::consts::PI) - 180.0).abs() < 1e-10);
/// ```
#[inline]
pub fn degrees(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Converts degrees to radians.
///
/// All angles in the spatial-rs API are radians; this is the entry point
/// for callers working in degrees.
///
/// # Example
///
/// ```rust
/// use spatial_core::scalar::radians;
///
/// assert!((radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn radians(deg: f64) -> f64 {
    deg.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0, 0.0));
        assert!(approx_eq(1.0, 1.0 + 1e-10, 1e-9));
        assert!(!approx_eq(1.0, 1.0 + 1e-8, 1e-9));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
    }

    #[test]
    fn test_angle_conversion_roundtrip() {
        assert_relative_eq!(radians(degrees(1.234)), 1.234, epsilon = 1e-12);
        assert_relative_eq!(degrees(radians(45.0)), 45.0, epsilon = 1e-12);
    }
}
