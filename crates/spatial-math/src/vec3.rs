//! 3D vector type.
//!
//! [`Vec3`] is the workhorse of the library: points, directions, axes,
//! and offsets in 3D space. It carries the full algebra — component-wise
//! arithmetic, dot and cross products, normalization, axis rotation — and
//! converts to/from [`glam::DVec3`] for interop.
//!
//! # Usage
//!
//! ```rust
//! use spatial_math::Vec3;
//!
//! let a = Vec3::X;
//! let b = Vec3::Y;
//! assert_eq!(a.cross(b), Vec3::Z);
//! assert_eq!(a.dot(b), 0.0);
//! ```

use spatial_core::{scalar::EPSILON_LENGTH, Error, Result};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 3D vector with `f64` components.
///
/// Used for both points and directions; [`Mat4`](crate::Mat4)
/// distinguishes the two when transforming
/// ([`transform_point`](crate::Mat4::transform_point) vs
/// [`transform_direction`](crate::Mat4::transform_direction)).
///
/// # Example
///
/// ```rust
/// use spatial_math::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v[2], 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from a slice of exactly 3 components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for any other slice length.
    #[inline]
    pub fn from_slice(s: &[f64]) -> Result<Self> {
        match s {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(Error::DimensionMismatch {
                expected: 3,
                got: s.len(),
            }),
        }
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, right-handed.
    ///
    /// `X.cross(Y) == Z`. Anti-commutative: `a.cross(b) == -(b.cross(a))`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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
    /// default epsilon ([`EPSILON_LENGTH`]). Never returns a zero or NaN
    /// vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spatial_math::Vec3;
    ///
    /// let n = Vec3::new(0.0, 3.0, 4.0).normalize().unwrap();
    /// assert!((n.length() - 1.0).abs() < 1e-12);
    /// assert!(Vec3::ZERO.normalize().is_err());
    /// ```
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

    /// Angle to another vector, in radians, in [0, π].
    ///
    /// The cosine is clamped before `acos` so accumulated rounding on
    /// near-parallel inputs cannot produce NaN.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] if either vector is too short
    /// to carry a direction.
    #[inline]
    pub fn angle_to(self, other: Self) -> Result<f64> {
        let denom = self.length() * other.length();
        if denom < EPSILON_LENGTH {
            let length = self.length().min(other.length());
            return Err(Error::DegenerateVector {
                length,
                epsilon: EPSILON_LENGTH,
            });
        }
        Ok((self.dot(other) / denom).clamp(-1.0, 1.0).acos())
    }

    /// Reflects this vector about a plane through the origin.
    ///
    /// `normal` is assumed to be unit length; not re-validated.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Rotates this vector around `axis` by `angle` radians.
    ///
    /// Right-handed: looking down the axis toward the origin, positive
    /// angles rotate counter-clockwise. Uses Rodrigues' rotation formula;
    /// the axis is normalized internally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] if `axis` cannot be normalized.
    pub fn rotate_around(self, axis: Self, angle: f64) -> Result<Self> {
        let k = axis.normalize()?;
        let (s, c) = angle.sin_cos();
        Ok(self * c + k.cross(self) * s + k * (k.dot(self) * (1.0 - c)))
    }

    /// Returns an arbitrary unit vector orthogonal to this one.
    ///
    /// Picks the world axis least aligned with this vector as a helper,
    /// then orthogonalizes. Useful for building a frame around a single
    /// direction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] if this vector is too short.
    pub fn any_orthonormal(self) -> Result<Self> {
        let d = self.normalize()?;
        // Helper axis least parallel to d; its cross with d cannot vanish.
        let helper = if d.y * d.y < d.z * d.z { Self::Y } else { Self::Z };
        d.cross(helper).normalize()
    }

    /// True iff every component pair differs by at most `eps`.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
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

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// Indexing
impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// Vec3 + Vec3
impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vec3 - Vec3
impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// -Vec3
impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

// Vec3 * f64
impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f64 * Vec3
impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

// Vec3 / Vec3 (component-wise)
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

// Vec3 / f64
impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> glam::DVec3 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        // Orthogonal unit axes
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
    }

    #[test]
    fn test_vec3_cross_right_handed() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn test_vec3_cross_anticommutative() {
        let a = Vec3::new(1.5, -2.0, 0.25);
        let b = Vec3::new(-0.5, 4.0, 3.0);
        assert_eq!(a.cross(b), b.cross(a) * -1.0);
    }

    #[test]
    fn test_vec3_normalize_unit_length() {
        let v = Vec3::new(1.0, -2.0, 2.0);
        let n = v.normalize().unwrap();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vec3_normalize_zero_fails() {
        let err = Vec3::ZERO.normalize().unwrap_err();
        assert!(matches!(err, Error::DegenerateVector { .. }));
        // Below the default epsilon but not exactly zero
        let tiny = Vec3::splat(1e-10);
        assert!(tiny.normalize().is_err());
        // But fine with a smaller caller epsilon
        assert!(tiny.normalize_with(1e-12).is_ok());
    }

    #[test]
    fn test_vec3_distance_angle() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);

        assert_relative_eq!(Vec3::X.angle_to(Vec3::Y).unwrap(), FRAC_PI_2);
        assert_relative_eq!(Vec3::X.angle_to(-Vec3::X).unwrap(), PI);
        // Near-parallel must not NaN
        let almost = Vec3::new(1.0, 1e-16, 0.0);
        assert!(Vec3::X.angle_to(almost).unwrap().is_finite());
        assert!(Vec3::X.angle_to(Vec3::ZERO).is_err());
    }

    #[test]
    fn test_vec3_reflect() {
        // Bounce off the XZ plane
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert!(v.reflect(Vec3::Y).approx_eq(Vec3::new(1.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_vec3_rotate_around() {
        let r = Vec3::X.rotate_around(Vec3::Z, FRAC_PI_2).unwrap();
        assert!(r.approx_eq(Vec3::Y, 1e-12));

        // Full turn is identity
        let v = Vec3::new(1.0, 2.0, 3.0);
        let back = v.rotate_around(Vec3::new(1.0, 1.0, 1.0), TAU).unwrap();
        assert!(back.approx_eq(v, 1e-9));

        // Forward then back cancels
        let axis = Vec3::new(0.3, -0.7, 0.2);
        let there = v.rotate_around(axis, 0.9).unwrap();
        let again = there.rotate_around(axis, -0.9).unwrap();
        assert!(again.approx_eq(v, 1e-9));

        assert!(v.rotate_around(Vec3::ZERO, 1.0).is_err());
    }

    #[test]
    fn test_vec3_any_orthonormal() {
        for v in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(0.1, -4.0, 2.5)] {
            let o = v.any_orthonormal().unwrap();
            assert_relative_eq!(o.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(o.dot(v.normalize().unwrap()), 0.0, epsilon = 1e-12);
        }
        assert!(Vec3::ZERO.any_orthonormal().is_err());
    }

    #[test]
    fn test_vec3_from_slice() {
        let v = Vec3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert!(matches!(
            Vec3::from_slice(&[1.0]),
            Err(Error::DimensionMismatch { expected: 3, got: 1 })
        ));
    }

    #[test]
    fn test_vec3_lerp_clamp() {
        let a = Vec3::ZERO;
        let b = Vec3::ONE;
        assert_eq!(a.lerp(b, 0.5), Vec3::splat(0.5));

        let v = Vec3::new(-0.5, 0.5, 1.5);
        assert_eq!(v.clamp(Vec3::ZERO, Vec3::ONE), Vec3::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec3::from_glam(v.to_glam()), v);
    }
}
