//! 2D vector type.
//!
//! [`Vec2`] covers planar computations: texture coordinates, screen
//! positions, 2D offsets. It carries the same algebra as [`Vec3`](crate::Vec3)
//! minus the cross product, which is only defined for three components.
//!
//! # Usage
//!
//! ```rust
//! use spatial_math::Vec2;
//!
//! let a = Vec2::new(3.0, 4.0);
//! assert_eq!(a.length(), 5.0);
//! let unit = a.normalize().unwrap();
//! ```

use spatial_core::{scalar::EPSILON_LENGTH, Error, Result};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 2D vector with `f64` components.
///
/// Plain value type; always copied, never aliased.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Creates from a slice of exactly 2 components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for any other slice length.
    #[inline]
    pub fn from_slice(s: &[f64]) -> Result<Self> {
        match s {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(Error::DimensionMismatch {
                expected: 2,
                got: s.len(),
            }),
        }
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Normalizes the vector to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] when the length is below the
    /// default epsilon ([`EPSILON_LENGTH`]).
    #[inline]
    pub fn normalize(self) -> Result<Self> {
        self.normalize_with(EPSILON_LENGTH)
    }

    /// Normalizes with a caller-chosen degeneracy threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] when the length is below `eps`.
    #[inline]
    pub fn normalize_with(self, eps: f64) -> Result<Self> {
        let len = self.length();
        if len < eps {
            return Err(Error::DegenerateVector { length: len, epsilon: eps });
        }
        Ok(self / len)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        (other - self).length_squared()
    }

    /// True iff every component pair differs by at most `eps`.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Clamps each component to [min, max].
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Linear interpolation between self and other.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Returns true if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Converts to glam DVec2.
    #[inline]
    pub fn to_glam(self) -> glam::DVec2 {
        glam::DVec2::new(self.x, self.y)
    }

    /// Creates from glam DVec2.
    #[inline]
    pub fn from_glam(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

// Indexing
impl Index<usize> for Vec2 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

// Vec2 + Vec2
impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// Vec2 - Vec2
impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// -Vec2
impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Vec2 * Vec2 (component-wise)
impl Mul for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self * rhs.x, self * rhs.y)
    }
}

// Vec2 / Vec2 (component-wise)
impl Div for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

// Vec2 / f64
impl Div<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec2> for [f64; 2] {
    #[inline]
    fn from(v: Vec2) -> [f64; 2] {
        v.to_array()
    }
}

impl From<glam::DVec2> for Vec2 {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec2> for glam::DVec2 {
    #[inline]
    fn from(v: Vec2) -> glam::DVec2 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn test_vec2_length_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        let n = v.normalize().unwrap();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vec2_normalize_zero_fails() {
        assert!(matches!(
            Vec2::ZERO.normalize(),
            Err(spatial_core::Error::DegenerateVector { .. })
        ));
    }

    #[test]
    fn test_vec2_from_slice() {
        assert_eq!(Vec2::from_slice(&[1.0, 2.0]).unwrap(), Vec2::new(1.0, 2.0));
        assert!(matches!(
            Vec2::from_slice(&[1.0, 2.0, 3.0]),
            Err(spatial_core::Error::DimensionMismatch { expected: 2, got: 3 })
        ));
    }

    #[test]
    fn test_vec2_lerp() {
        let a = Vec2::ZERO;
        let b = Vec2::ONE;
        assert_eq!(a.lerp(b, 0.5), Vec2::splat(0.5));
    }
}
