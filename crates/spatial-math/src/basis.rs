//! Orthonormal basis type.
//!
//! [`Basis`] is a right-handed orthonormal frame: three unit axes that
//! define an orientation in world space. It is the rotation-only half of
//! a [`Pose`](crate::Pose), and the natural representation for camera
//! and object orientation that is steered incrementally (look-at,
//! rotate, remove roll) rather than composed algebraically.
//!
//! # Convention
//!
//! `x_axis` points right, `y_axis` up, `z_axis` front. As a matrix the
//! axes are the **columns** of the local-to-world rotation:
//! [`Basis::to_world`] of `(1, 0, 0)` is `x_axis`.
//!
//! Incremental rotation accumulates rounding; after long chains of
//! [`Basis::rotated`] calls the axes drift away from orthonormal.
//! [`Basis::rotated`] re-orthonormalizes on every call, and
//! [`Basis::orthonormalize`] is available for frames mutated by hand.
//!
//! # Usage
//!
//! ```rust
//! use spatial_math::{Basis, Vec3};
//!
//! let b = Basis::IDENTITY.looking_along(Vec3::new(1.0, 0.0, 1.0)).unwrap();
//! assert!((b.z_axis.length() - 1.0).abs() < 1e-12);
//! ```

use crate::{Mat3, Vec3};
use spatial_core::Result;

/// Squared cross-product length below which two directions are treated
/// as parallel when steering a frame.
const ALIGNED_CROSS_LEN2: f64 = 0.001;

/// A right-handed orthonormal frame of three unit axes.
///
/// Constructors and steering operations always return orthonormal
/// frames. [`Basis::new`] trusts the caller; feed it non-orthonormal
/// axes and every later operation silently inherits the skew, so run
/// [`Basis::orthonormalize`] when in doubt.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Basis {
    /// Right
    pub x_axis: Vec3,
    /// Up
    pub y_axis: Vec3,
    /// Front
    pub z_axis: Vec3,
}

impl Basis {
    /// The world frame: x right, y up, z front.
    pub const IDENTITY: Self = Self {
        x_axis: Vec3::X,
        y_axis: Vec3::Y,
        z_axis: Vec3::Z,
    };

    /// Creates a frame from three axes.
    ///
    /// The axes are assumed orthonormal and right-handed; not validated.
    #[inline]
    pub const fn new(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self { x_axis, y_axis, z_axis }
    }

    /// Maps a vector from this frame's local coordinates to world space.
    ///
    /// `v.x * x_axis + v.y * y_axis + v.z * z_axis`.
    #[inline]
    pub fn to_world(&self, v: Vec3) -> Vec3 {
        self.x_axis * v.x + self.y_axis * v.y + self.z_axis * v.z
    }

    /// Maps a world-space vector into this frame's local coordinates.
    ///
    /// Inverse of [`Basis::to_world`] for orthonormal frames (the
    /// transpose trick).
    #[inline]
    pub fn to_local(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.x_axis.dot(v), self.y_axis.dot(v), self.z_axis.dot(v))
    }

    /// Expresses a frame given in local coordinates in world space.
    #[inline]
    pub fn to_world_basis(&self, local: &Self) -> Self {
        Self::new(
            self.to_world(local.x_axis),
            self.to_world(local.y_axis),
            self.to_world(local.z_axis),
        )
    }

    /// Expresses a world-space frame in this frame's local coordinates.
    #[inline]
    pub fn to_local_basis(&self, world: &Self) -> Self {
        Self::new(
            self.to_local(world.x_axis),
            self.to_local(world.y_axis),
            self.to_local(world.z_axis),
        )
    }

    /// Returns this frame rotated around `axis` by `angle` radians.
    ///
    /// All three axes rotate together; the result is re-orthonormalized
    /// (keeping the front direction exact) so repeated rotation cannot
    /// accumulate skew.
    ///
    /// # Errors
    ///
    /// Returns [`spatial_core::Error::DegenerateVector`] if `axis` cannot
    /// be normalized.
    pub fn rotated(&self, axis: Vec3, angle: f64) -> Result<Self> {
        let rotated = Self::new(
            self.x_axis.rotate_around(axis, angle)?,
            self.y_axis.rotate_around(axis, angle)?,
            self.z_axis.rotate_around(axis, angle)?,
        );
        rotated.orthonormalize()
    }

    /// Restores orthonormality, keeping the front (`z_axis`) direction.
    ///
    /// Gram-Schmidt: front is renormalized exactly, up is rebuilt from
    /// front and right, right from up and front.
    ///
    /// # Errors
    ///
    /// Returns [`spatial_core::Error::DegenerateVector`] if the frame has
    /// collapsed (a zero axis, or front parallel to right).
    pub fn orthonormalize(&self) -> Result<Self> {
        let z = self.z_axis.normalize()?;
        let y = z.cross(self.x_axis).normalize()?;
        let x = y.cross(z);
        Ok(Self::new(x, y, z))
    }

    /// Turns the frame to look along `dir`, keeping the orientation as
    /// close as possible to what it was.
    ///
    /// When the new front is nearly parallel to the current up, the roll
    /// is derived from the current right axis instead.
    ///
    /// # Errors
    ///
    /// Returns [`spatial_core::Error::DegenerateVector`] if `dir` cannot
    /// be normalized.
    pub fn looking_along(&self, dir: Vec3) -> Result<Self> {
        let z = dir.normalize()?;
        if z.cross(self.y_axis).length_squared() < ALIGNED_CROSS_LEN2 {
            // Up is useless here; rebuild it from the right axis first
            let y = z.cross(self.x_axis).normalize()?;
            let x = y.cross(z);
            Ok(Self::new(x, y, z))
        } else {
            let x = self.y_axis.cross(z).normalize()?;
            let y = z.cross(x);
            Ok(Self::new(x, y, z))
        }
    }

    /// Turns the frame to look along `dir` with up pointing toward
    /// `up_hint`.
    ///
    /// If `dir` and `up_hint` are nearly parallel the hint is unusable;
    /// the previous up is tried, and failing that an arbitrary valid
    /// roll is generated ([`Basis::looking_along_any`]).
    ///
    /// # Errors
    ///
    /// Returns [`spatial_core::Error::DegenerateVector`] if `dir` cannot
    /// be normalized.
    pub fn looking_along_up(&self, dir: Vec3, up_hint: Vec3) -> Result<Self> {
        let z = dir.normalize()?;
        let up = if z.cross(up_hint).length_squared() < ALIGNED_CROSS_LEN2 {
            if z.cross(self.y_axis).length_squared() < ALIGNED_CROSS_LEN2 {
                return Self::looking_along_any(z);
            }
            self.y_axis
        } else {
            up_hint
        };
        let x = up.cross(z).normalize()?;
        let y = z.cross(x);
        Ok(Self::new(x, y, z))
    }

    /// Builds a frame looking along `dir` with an arbitrary but valid
    /// roll.
    ///
    /// The right and up axes are derived from whichever world axis is
    /// least aligned with `dir`, so the result is always orthonormal.
    ///
    /// # Errors
    ///
    /// Returns [`spatial_core::Error::DegenerateVector`] if `dir` cannot
    /// be normalized.
    pub fn looking_along_any(dir: Vec3) -> Result<Self> {
        let z = dir.normalize()?;
        let helper = if z.y * z.y < z.z * z.z { Vec3::Y } else { Vec3::Z };
        let y = z.cross(helper).normalize()?;
        let x = y.cross(z);
        Ok(Self::new(x, y, z))
    }

    /// Removes roll: re-levels the right axis against `up`.
    ///
    /// After this the right axis is horizontal with respect to `up`
    /// (perpendicular to it), picking whichever horizontal direction is
    /// closer to the current right axis. When already looking straight
    /// along `up`, the front axis is adjusted instead.
    ///
    /// # Errors
    ///
    /// Returns [`spatial_core::Error::DegenerateVector`] if the frame or
    /// `up` is degenerate.
    pub fn leveled(&self, up: Vec3) -> Result<Self> {
        if self.z_axis.cross(up).length_squared() > ALIGNED_CROSS_LEN2 {
            let candidate = up.cross(self.z_axis).normalize()?;
            let x = if self.x_axis.dot(candidate) < 0.0 {
                -candidate
            } else {
                candidate
            };
            let y = self.z_axis.cross(x);
            Ok(Self::new(x, y, self.z_axis))
        } else {
            // Looking along up itself; level the front axis instead
            let candidate = up.cross(self.y_axis);
            let x = if self.x_axis.distance_squared(candidate) > self.x_axis.length_squared() {
                -candidate
            } else {
                candidate
            };
            let z = x.cross(self.y_axis).normalize()?;
            Ok(Self::new(x, self.y_axis, z))
        }
    }

    /// Renormalizes each axis without touching their directions.
    ///
    /// # Errors
    ///
    /// Returns [`spatial_core::Error::DegenerateVector`] if any axis has
    /// collapsed to zero length.
    pub fn renormalized(&self) -> Result<Self> {
        Ok(Self::new(
            self.x_axis.normalize()?,
            self.y_axis.normalize()?,
            self.z_axis.normalize()?,
        ))
    }

    /// The local-to-world rotation matrix (axes as columns).
    ///
    /// `basis.to_mat3() * v == basis.to_world(v)`.
    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_col_vecs(self.x_axis, self.y_axis, self.z_axis)
    }

    /// True iff every axis pair differs by at most `eps` per component.
    #[inline]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.x_axis.approx_eq(other.x_axis, eps)
            && self.y_axis.approx_eq(other.y_axis, eps)
            && self.z_axis.approx_eq(other.z_axis, eps)
    }

    /// Returns true if all axes are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x_axis.is_finite() && self.y_axis.is_finite() && self.z_axis.is_finite()
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Basis> for Mat3 {
    #[inline]
    fn from(b: Basis) -> Mat3 {
        b.to_mat3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_orthonormal(b: &Basis) {
        assert_relative_eq!(b.x_axis.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(b.y_axis.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(b.z_axis.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(b.x_axis.dot(b.y_axis), 0.0, epsilon = 1e-9);
        assert_relative_eq!(b.y_axis.dot(b.z_axis), 0.0, epsilon = 1e-9);
        assert_relative_eq!(b.z_axis.dot(b.x_axis), 0.0, epsilon = 1e-9);
        // Right-handed
        assert!(b.x_axis.cross(b.y_axis).approx_eq(b.z_axis, 1e-9));
    }

    #[test]
    fn test_basis_identity_mapping() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Basis::IDENTITY.to_world(v), v);
        assert_eq!(Basis::IDENTITY.to_local(v), v);
    }

    #[test]
    fn test_basis_world_local_roundtrip() {
        let b = Basis::looking_along_any(Vec3::new(1.0, -2.0, 0.5)).unwrap();
        let v = Vec3::new(-3.0, 0.25, 7.0);
        assert!(b.to_local(b.to_world(v)).approx_eq(v, 1e-12));
        assert!(b.to_world(b.to_local(v)).approx_eq(v, 1e-12));
    }

    #[test]
    fn test_basis_to_mat3_agrees() {
        let b = Basis::looking_along_any(Vec3::new(0.3, 1.0, -2.0)).unwrap();
        let m = b.to_mat3();
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!((m * v).approx_eq(b.to_world(v), 1e-12));
        // Orthonormal: transpose maps the other way
        assert!((m.transpose() * v).approx_eq(b.to_local(v), 1e-12));
    }

    #[test]
    fn test_basis_rotated() {
        let b = Basis::IDENTITY.rotated(Vec3::Y, FRAC_PI_2).unwrap();
        assert_orthonormal(&b);
        // Rotating around Y sends Z to X
        assert!(b.z_axis.approx_eq(Vec3::X, 1e-12));
        assert!(b.y_axis.approx_eq(Vec3::Y, 1e-12));

        assert!(Basis::IDENTITY.rotated(Vec3::ZERO, 1.0).is_err());
    }

    #[test]
    fn test_basis_rotated_many_stays_orthonormal() {
        let axis = Vec3::new(0.3, 1.0, -0.2);
        let mut b = Basis::IDENTITY;
        for _ in 0..500 {
            b = b.rotated(axis, 0.013).unwrap();
        }
        assert_orthonormal(&b);
    }

    #[test]
    fn test_basis_looking_along() {
        let b = Basis::IDENTITY.looking_along(Vec3::new(1.0, 0.0, 1.0)).unwrap();
        assert_orthonormal(&b);
        assert!(b.z_axis.approx_eq(Vec3::new(1.0, 0.0, 1.0).normalize().unwrap(), 1e-12));
        // Up stays up when the target is near the horizon
        assert!(b.y_axis.dot(Vec3::Y) > 0.9);

        assert!(Basis::IDENTITY.looking_along(Vec3::ZERO).is_err());
    }

    #[test]
    fn test_basis_looking_along_parallel_to_up() {
        // Looking straight up: previous up is useless, frame still valid
        let b = Basis::IDENTITY.looking_along(Vec3::Y).unwrap();
        assert_orthonormal(&b);
        assert!(b.z_axis.approx_eq(Vec3::Y, 1e-12));
    }

    #[test]
    fn test_basis_looking_along_up_hint() {
        let b = Basis::IDENTITY
            .looking_along_up(Vec3::Z, Vec3::new(0.2, 1.0, 0.0))
            .unwrap();
        assert_orthonormal(&b);
        assert!(b.z_axis.approx_eq(Vec3::Z, 1e-12));
        // Up leans toward the hint
        assert!(b.y_axis.dot(Vec3::new(0.2, 1.0, 0.0)) > 0.9);

        // Degenerate hint falls back to a valid frame
        let fallback = Basis::IDENTITY.looking_along_up(Vec3::Y, Vec3::Y).unwrap();
        assert_orthonormal(&fallback);
    }

    #[test]
    fn test_basis_looking_along_any() {
        for dir in [Vec3::X, Vec3::Y, Vec3::Z, -Vec3::Z, Vec3::new(0.1, 0.9, -0.4)] {
            let b = Basis::looking_along_any(dir).unwrap();
            assert_orthonormal(&b);
            assert!(b.z_axis.approx_eq(dir.normalize().unwrap(), 1e-12));
        }
    }

    #[test]
    fn test_basis_leveled() {
        // Roll the frame, then level it against world up
        let rolled = Basis::IDENTITY.rotated(Vec3::Z, 0.4).unwrap();
        assert!(rolled.x_axis.dot(Vec3::Y).abs() > 0.1);
        let leveled = rolled.leveled(Vec3::Y).unwrap();
        assert_orthonormal(&leveled);
        assert_relative_eq!(leveled.x_axis.dot(Vec3::Y), 0.0, epsilon = 1e-9);
        // Front unchanged
        assert!(leveled.z_axis.approx_eq(rolled.z_axis, 1e-12));
    }

    #[test]
    fn test_basis_orthonormalize_fixes_drift() {
        // Perturb the axes slightly
        let skewed = Basis::new(
            Vec3::new(1.0, 0.01, 0.0),
            Vec3::new(0.0, 1.0, 0.02),
            Vec3::new(0.01, 0.0, 1.0),
        );
        let fixed = skewed.orthonormalize().unwrap();
        assert_orthonormal(&fixed);
        // Front direction preserved
        assert!(fixed.z_axis.approx_eq(skewed.z_axis.normalize().unwrap(), 1e-12));
    }

    #[test]
    fn test_basis_compose_roundtrip() {
        let outer = Basis::looking_along_any(Vec3::new(1.0, 1.0, 0.0)).unwrap();
        let inner = Basis::looking_along_any(Vec3::new(0.0, 1.0, 2.0)).unwrap();
        let world = outer.to_world_basis(&inner);
        let back = outer.to_local_basis(&world);
        assert!(back.approx_eq(&inner, 1e-12));
    }
}
