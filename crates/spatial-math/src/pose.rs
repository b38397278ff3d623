//! Rigid placement type.
//!
//! [`Pose`] pairs an orthonormal [`Basis`] with an origin: the placement
//! of an object or camera in world space. It maps points and directions
//! between local and world coordinates, composes hierarchically, and
//! exports the two affine matrices a renderer wants (model and view).
//!
//! # Usage
//!
//! ```rust
//! use spatial_math::{Basis, Pose, Vec3};
//!
//! let pose = Pose::new(Basis::IDENTITY, Vec3::new(10.0, 0.0, 0.0));
//! assert_eq!(pose.point_to_world(Vec3::ZERO), Vec3::new(10.0, 0.0, 0.0));
//! ```

use crate::{Basis, Mat4, Vec3};
use spatial_core::Result;

/// A rigid placement: orientation plus position.
///
/// Pure rotation and translation; no scale or shear. The basis is
/// assumed orthonormal (see [`Basis`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// Orientation of the local frame in world space.
    pub basis: Basis,
    /// World-space position of the local origin.
    pub origin: Vec3,
}

impl Pose {
    /// The world placement: identity orientation at the origin.
    pub const IDENTITY: Self = Self {
        basis: Basis::IDENTITY,
        origin: Vec3::ZERO,
    };

    /// Creates a pose from an orientation and a position.
    #[inline]
    pub const fn new(basis: Basis, origin: Vec3) -> Self {
        Self { basis, origin }
    }

    /// Creates a pose at `origin` with identity orientation.
    #[inline]
    pub const fn from_origin(origin: Vec3) -> Self {
        Self::new(Basis::IDENTITY, origin)
    }

    /// Maps a local point to world space.
    #[inline]
    pub fn point_to_world(&self, p: Vec3) -> Vec3 {
        self.origin + self.basis.to_world(p)
    }

    /// Maps a world point into local coordinates.
    ///
    /// Inverse of [`Pose::point_to_world`].
    #[inline]
    pub fn point_to_local(&self, p: Vec3) -> Vec3 {
        self.basis.to_local(p - self.origin)
    }

    /// Maps a local direction to world space (ignores the origin).
    #[inline]
    pub fn dir_to_world(&self, d: Vec3) -> Vec3 {
        self.basis.to_world(d)
    }

    /// Maps a world direction into local coordinates (ignores the origin).
    #[inline]
    pub fn dir_to_local(&self, d: Vec3) -> Vec3 {
        self.basis.to_local(d)
    }

    /// Expresses a pose given in this pose's local coordinates in world
    /// space.
    ///
    /// Hierarchies compose this way: a child pose stored relative to its
    /// parent becomes a world pose via `parent.to_world_pose(&child)`.
    #[inline]
    pub fn to_world_pose(&self, local: &Self) -> Self {
        Self::new(
            self.basis.to_world_basis(&local.basis),
            self.point_to_world(local.origin),
        )
    }

    /// Expresses a world-space pose relative to this pose.
    ///
    /// Inverse of [`Pose::to_world_pose`].
    #[inline]
    pub fn to_local_pose(&self, world: &Self) -> Self {
        Self::new(
            self.basis.to_local_basis(&world.basis),
            self.point_to_local(world.origin),
        )
    }

    /// Returns this pose orbited around `pivot`: the frame rotates and
    /// the origin swings around the pivot on the same axis.
    ///
    /// # Errors
    ///
    /// Returns [`spatial_core::Error::DegenerateVector`] if `axis` cannot
    /// be normalized.
    pub fn rotated_around(&self, pivot: Vec3, axis: Vec3, angle: f64) -> Result<Self> {
        let basis = self.basis.rotated(axis, angle)?;
        let origin = pivot + (self.origin - pivot).rotate_around(axis, angle)?;
        Ok(Self::new(basis, origin))
    }

    /// The local-to-world (model) matrix.
    ///
    /// `pose.to_mat4().transform_point(p) == pose.point_to_world(p)`.
    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_linear_translation(self.basis.to_mat3(), self.origin)
    }

    /// The world-to-local (view) matrix.
    ///
    /// Inverse of [`Pose::to_mat4`], built directly from the transpose
    /// rather than a general matrix inversion.
    #[inline]
    pub fn to_view_mat4(&self) -> Mat4 {
        let rot = self.basis.to_mat3().transpose();
        Mat4::from_linear_translation(rot, -self.basis.to_local(self.origin))
    }

    /// True iff basis and origin agree within `eps` per component.
    #[inline]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.basis.approx_eq(&other.basis, eps) && self.origin.approx_eq(other.origin, eps)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.basis.is_finite() && self.origin.is_finite()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn sample_pose() -> Pose {
        Pose::new(
            Basis::looking_along_any(Vec3::new(1.0, 0.5, -2.0)).unwrap(),
            Vec3::new(3.0, -1.0, 4.0),
        )
    }

    #[test]
    fn test_pose_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Pose::IDENTITY.point_to_world(p), p);
        assert_eq!(Pose::IDENTITY.point_to_local(p), p);
    }

    #[test]
    fn test_pose_point_roundtrip() {
        let pose = sample_pose();
        let p = Vec3::new(-2.0, 0.5, 1.0);
        assert!(pose.point_to_local(pose.point_to_world(p)).approx_eq(p, 1e-12));
        assert!(pose.point_to_world(pose.point_to_local(p)).approx_eq(p, 1e-12));
    }

    #[test]
    fn test_pose_directions_ignore_origin() {
        let pose = Pose::from_origin(Vec3::new(100.0, 0.0, 0.0));
        assert_eq!(pose.dir_to_world(Vec3::X), Vec3::X);
        assert_eq!(pose.point_to_world(Vec3::X), Vec3::new(101.0, 0.0, 0.0));
    }

    #[test]
    fn test_pose_compose_roundtrip() {
        let parent = sample_pose();
        let child = Pose::new(
            Basis::looking_along_any(Vec3::new(0.0, 1.0, 1.0)).unwrap(),
            Vec3::new(0.0, 2.0, 0.0),
        );
        let world = parent.to_world_pose(&child);
        let back = parent.to_local_pose(&world);
        assert!(back.approx_eq(&child, 1e-12));

        // Composing agrees with mapping a point through both frames
        let p = Vec3::new(0.1, -0.3, 0.7);
        let direct = parent.point_to_world(child.point_to_world(p));
        let via = world.point_to_world(p);
        assert!(direct.approx_eq(via, 1e-12));
    }

    #[test]
    fn test_pose_rotated_around_pivot() {
        let pose = Pose::from_origin(Vec3::new(1.0, 0.0, 0.0));
        let orbited = pose
            .rotated_around(Vec3::ZERO, Vec3::Y, PI)
            .unwrap();
        assert!(orbited.origin.approx_eq(Vec3::new(-1.0, 0.0, 0.0), 1e-12));

        // Orbiting around its own origin leaves the origin fixed
        let spun = pose
            .rotated_around(pose.origin, Vec3::Y, FRAC_PI_2)
            .unwrap();
        assert!(spun.origin.approx_eq(pose.origin, 1e-12));

        assert!(pose.rotated_around(Vec3::ZERO, Vec3::ZERO, 1.0).is_err());
    }

    #[test]
    fn test_pose_matrices() {
        let pose = sample_pose();
        let model = pose.to_mat4();
        let view = pose.to_view_mat4();
        let p = Vec3::new(0.4, -1.2, 2.0);

        assert!(model.transform_point(p).approx_eq(pose.point_to_world(p), 1e-12));
        assert!(view.transform_point(p).approx_eq(pose.point_to_local(p), 1e-12));
        // view is the inverse of model
        assert!((model * view).approx_eq(&Mat4::IDENTITY, 1e-12));
    }
}
