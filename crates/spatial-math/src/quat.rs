//! Rotation quaternion type.
//!
//! [`Quat`] is the compact rotation representation: cheaper to compose
//! and interpolate than matrices, immune to gimbal lock, and convertible
//! to/from [`Mat3`](crate::Mat3) at the rendering boundary.
//!
//! # Convention
//!
//! Components are stored `(x, y, z, w)` with `w` the scalar part — the
//! same layout as [`glam::DQuat`]. Composition follows the matrix
//! convention: `a * b` applies `b` first, then `a`, and a unit quaternion
//! `q` rotates a vector via [`Quat::rotate`] exactly as `q.to_mat3()`
//! would.
//!
//! Only unit quaternions represent rotations. Construction via
//! [`Quat::from_axis_angle`] always yields a unit quaternion; after long
//! chains of multiplications call [`Quat::normalize`] to shed accumulated
//! drift.
//!
//! # Usage
//!
//! ```rust
//! use spatial_math::{Quat, Vec3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2).unwrap();
//! assert!(q.rotate(Vec3::X).approx_eq(Vec3::Y, 1e-12));
//! ```

use crate::{Mat3, Mat4, Vec3};
use spatial_core::{scalar::EPSILON_LENGTH, Error, Result};
use std::ops::{Mul, Neg};

/// Threshold on |dot| above which slerp endpoints count as parallel and
/// interpolation falls back to nlerp. cos of about 0.25 degrees.
const SLERP_PARALLEL_DOT: f64 = 0.9999905;

/// A rotation quaternion with `f64` components, scalar part last.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    /// X component of the vector part
    pub x: f64,
    /// Y component of the vector part
    pub y: f64,
    /// Z component of the vector part
    pub z: f64,
    /// Scalar part
    pub w: f64,
}

impl Quat {
    /// Identity rotation (0, 0, 0, 1).
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components.
    ///
    /// Does not normalize; prefer [`Quat::from_axis_angle`] for building
    /// rotations.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a rotation quaternion from an axis and angle (radians).
    ///
    /// The axis is normalized internally; the result is a unit
    /// quaternion. Same handedness as [`Mat3::from_rotation`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] if `axis` cannot be normalized.
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Result<Self> {
        let k = axis.normalize()?;
        let (s, c) = (angle * 0.5).sin_cos();
        Ok(Self::new(k.x * s, k.y * s, k.z * s, c))
    }

    /// Creates from an array `[x, y, z, w]`.
    #[inline]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Creates from a slice of exactly 4 components `[x, y, z, w]`.
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

    /// Dot product with another quaternion.
    ///
    /// For unit quaternions this is the cosine of half the angle between
    /// the two rotations.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Norm of the quaternion.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared norm (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Normalizes to a unit quaternion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] when the norm is below the
    /// default epsilon ([`EPSILON_LENGTH`]).
    #[inline]
    pub fn normalize(self) -> Result<Self> {
        self.normalize_with(EPSILON_LENGTH)
    }

    /// Normalizes with a caller-chosen degeneracy threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] when the norm is below `eps`.
    pub fn normalize_with(self, eps: f64) -> Result<Self> {
        let len = self.length();
        if len < eps {
            return Err(Error::DegenerateVector { length: len, epsilon: eps });
        }
        let inv = 1.0 / len;
        Ok(Self::new(
            self.x * inv,
            self.y * inv,
            self.z * inv,
            self.w * inv,
        ))
    }

    /// Conjugate: vector part negated.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// The inverse rotation.
    ///
    /// Equals the conjugate; assumes a unit quaternion and does not
    /// re-validate.
    #[inline]
    pub fn inverse_rotation(self) -> Self {
        self.conjugate()
    }

    /// Rotates a vector by this quaternion.
    ///
    /// Assumes a unit quaternion. Agrees with `self.to_mat3() * v`.
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        // q v q* expanded: v + 2 u x (u x v + w v), u = vector part
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }

    /// Converts to a 3x3 rotation matrix.
    ///
    /// Assumes a unit quaternion.
    pub fn to_mat3(self) -> Mat3 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, xz, yz) = (x * y2, x * z2, y * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);
        Mat3::from_rows([
            [1.0 - (yy + zz), xy - wz, xz + wy],
            [xy + wz, 1.0 - (xx + zz), yz - wx],
            [xz - wy, yz + wx, 1.0 - (xx + yy)],
        ])
    }

    /// Converts to a 4x4 rotation matrix with zero translation.
    #[inline]
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_mat3(self.to_mat3())
    }

    /// Creates from a rotation matrix.
    ///
    /// Assumes `m` is orthonormal with determinant +1 and does not
    /// re-validate. Uses Shepperd's method: branch on the largest of
    /// trace and diagonal entries so the division is always by a
    /// well-conditioned quantity.
    pub fn from_mat3(m: &Mat3) -> Self {
        let t = m.m[0][0] + m.m[1][1] + m.m[2][2];
        if t > 0.0 {
            let s = (t + 1.0).sqrt() * 2.0;
            Self::new(
                (m.m[2][1] - m.m[1][2]) / s,
                (m.m[0][2] - m.m[2][0]) / s,
                (m.m[1][0] - m.m[0][1]) / s,
                0.25 * s,
            )
        } else if m.m[0][0] > m.m[1][1] && m.m[0][0] > m.m[2][2] {
            let s = (1.0 + m.m[0][0] - m.m[1][1] - m.m[2][2]).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (m.m[0][1] + m.m[1][0]) / s,
                (m.m[0][2] + m.m[2][0]) / s,
                (m.m[2][1] - m.m[1][2]) / s,
            )
        } else if m.m[1][1] > m.m[2][2] {
            let s = (1.0 + m.m[1][1] - m.m[0][0] - m.m[2][2]).sqrt() * 2.0;
            Self::new(
                (m.m[0][1] + m.m[1][0]) / s,
                0.25 * s,
                (m.m[1][2] + m.m[2][1]) / s,
                (m.m[0][2] - m.m[2][0]) / s,
            )
        } else {
            let s = (1.0 + m.m[2][2] - m.m[0][0] - m.m[1][1]).sqrt() * 2.0;
            Self::new(
                (m.m[0][2] + m.m[2][0]) / s,
                (m.m[1][2] + m.m[2][1]) / s,
                0.25 * s,
                (m.m[1][0] - m.m[0][1]) / s,
            )
        }
    }

    /// Normalized linear interpolation.
    ///
    /// Faster than [`Quat::slerp`] but the angular velocity is not
    /// constant. Takes the short arc.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] if the interpolated quaternion
    /// collapses to zero (antipodal endpoints at `t = 0.5`).
    pub fn nlerp(self, other: Self, t: f64) -> Result<Self> {
        let other = if self.dot(other) < 0.0 { -other } else { other };
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.w + (other.w - self.w) * t,
        )
        .normalize()
    }

    /// Spherical linear interpolation.
    ///
    /// Constant angular velocity along the short arc from `self`
    /// (`t = 0`) to `other` (`t = 1`). Endpoints closer than about a
    /// quarter degree fall back to [`Quat::nlerp`], where the sine in the
    /// slerp denominator would be too small to divide by safely.
    ///
    /// Both endpoints are assumed unit quaternions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] only in the nlerp fallback's
    /// degenerate case; for unit endpoints within the parallel window
    /// this cannot happen.
    pub fn slerp(self, other: Self, t: f64) -> Result<Self> {
        let mut dot = self.dot(other);
        // Short arc: q and -q are the same rotation
        let other = if dot < 0.0 {
            dot = -dot;
            -other
        } else {
            other
        };

        if dot > SLERP_PARALLEL_DOT {
            return self.nlerp(other, t);
        }

        let theta = dot.clamp(-1.0, 1.0).acos();
        let sin_theta = theta.sin();
        let wa = ((1.0 - t) * theta).sin() / sin_theta;
        let wb = (t * theta).sin() / sin_theta;
        Ok(Self::new(
            self.x * wa + other.x * wb,
            self.y * wa + other.y * wb,
            self.z * wa + other.z * wb,
            self.w * wa + other.w * wb,
        ))
    }

    /// True iff every component pair differs by at most `eps`.
    ///
    /// Componentwise only: `q` and `-q` are the same rotation but do not
    /// compare equal here.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
            && (self.w - other.w).abs() <= eps
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to glam DQuat.
    #[inline]
    pub fn to_glam(self) -> glam::DQuat {
        glam::DQuat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam DQuat.
    #[inline]
    pub fn from_glam(q: glam::DQuat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Hamilton product: a * b applies b first
impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<glam::DQuat> for Quat {
    #[inline]
    fn from(q: glam::DQuat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quat> for glam::DQuat {
    #[inline]
    fn from(q: Quat) -> glam::DQuat {
        q.to_glam()
    }
}
