//! 4D vector type.
//!
//! [`Vec4`] is the homogeneous-coordinate companion to
//! [`Vec3`](crate::Vec3): a point with `w = 1`, a direction with `w = 0`.
//! [`Mat4`](crate::Mat4) rows and columns are also `Vec4`s.
//!
//! # Usage
//!
//! ```rust
//! use spatial_math::{Vec3, Vec4};
//!
//! let p = Vec4::from_point(Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(p.w, 1.0);
//! let d = Vec4::from_direction(Vec3::Z);
//! assert_eq!(d.w, 0.0);
//! ```

use crate::Vec3;
use spatial_core::{scalar::EPSILON_LENGTH, Error, Result};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 4D vector with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
    /// W component (1 for points, 0 for directions)
    pub w: f64,
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit Z vector (0, 0, 1, 0).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit W vector (0, 0, 0, 1).
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Homogeneous point: `(v.x, v.y, v.z, 1)`.
    #[inline]
    pub const fn from_point(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 1.0)
    }

    /// Homogeneous direction: `(v.x, v.y, v.z, 0)`.
    #[inline]
    pub const fn from_direction(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Drops the w component.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Creates from a slice of exactly 4 components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for any other slice length.
    #[inline]
    pub fn from_slice(s: &[f64]) -> Result<Self> {
        match s {
            [x, y, z, w] => Ok(Self::new(*x, *y, *z, *w)),
            _ => Err(Error::DimensionMismatch {
                expected: 4,
                got: s.len(),
            }),
        }
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
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

    /// True iff every component pair differs by at most `eps`.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
            && (self.w - other.w).abs() <= eps
    }

    /// Linear interpolation between self and other.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }

    /// Converts to glam DVec4.
    #[inline]
    pub fn to_glam(self) -> glam::DVec4 {
        glam::DVec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam DVec4.
    #[inline]
    pub fn from_glam(v: glam::DVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

// Indexing
impl Index<usize> for Vec4 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

// Vec4 + Vec4
impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

// Vec4 - Vec4
impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

// -Vec4
impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Vec4 * Vec4 (component-wise)
impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.z * rhs.z,
            self.w * rhs.w,
        )
    }
}

// Vec4 * f64
impl Mul<f64> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

// f64 * Vec4
impl Mul<Vec4> for f64 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs * self
    }
}

// Vec4 / f64
impl Div<f64> for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl From<[f64; 4]> for Vec4 {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f64; 4] {
    #[inline]
    fn from(v: Vec4) -> [f64; 4] {
        v.to_array()
    }
}

impl From<glam::DVec4> for Vec4 {
    #[inline]
    fn from(v: glam::DVec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4> for glam::DVec4 {
    #[inline]
    fn from(v: Vec4) -> glam::DVec4 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec4_point_direction() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec4::from_point(v).w, 1.0);
        assert_eq!(Vec4::from_direction(v).w, 0.0);
        assert_eq!(Vec4::from_point(v).truncate(), v);
    }

    #[test]
    fn test_vec4_dot_length() {
        let v = Vec4::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(v.dot(v), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_vec4_normalize() {
        let n = Vec4::new(1.0, 1.0, 1.0, 1.0).normalize().unwrap();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert!(Vec4::ZERO.normalize().is_err());
    }

    #[test]
    fn test_vec4_from_slice() {
        assert!(Vec4::from_slice(&[1.0, 2.0, 3.0, 4.0]).is_ok());
        assert!(matches!(
            Vec4::from_slice(&[1.0, 2.0]),
            Err(Error::DimensionMismatch { expected: 4, got: 2 })
        ));
    }

    #[test]
    fn test_vec4_ops() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::splat(2.0);
        assert_eq!(a + b, Vec4::new(3.0, 4.0, 5.0, 6.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a[3], 4.0);
    }
}
