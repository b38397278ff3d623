//! 4x4 matrix type for affine 3D transforms.
//!
//! [`Mat4`] composes rotation, scale, and translation through homogeneous
//! coordinates: points carry `w = 1` and are affected by translation,
//! directions carry `w = 0` and are not.
//!
//! # Convention
//!
//! Same as [`Mat3`](crate::Mat3): **row-major** storage, **column
//! vectors**, `result = M * v`, and `a * b` applies `b` first. The
//! translation lives in the last column:
//!
//! ```text
//! | r00 r01 r02 tx |
//! | r10 r11 r12 ty |
//! | r20 r21 r22 tz |
//! |  0   0   0   1 |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use spatial_math::{Mat4, Vec3};
//!
//! let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
//! // Directions ignore translation
//! assert_eq!(m.transform_direction(Vec3::X), Vec3::X);
//! ```

use crate::{Mat3, Vec3, Vec4};
use spatial_core::{scalar::EPSILON_DETERMINANT, Error, Result, StorageOrder};
use std::ops::{Index, Mul};

/// A 4x4 matrix for affine 3D transforms.
///
/// Stored in row-major order. [`transform_point`](Mat4::transform_point)
/// and [`transform_direction`](Mat4::transform_direction) assume the
/// bottom row is `(0, 0, 0, 1)` and perform no perspective divide; use
/// `Mul<Vec4>` for the full homogeneous product.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f64; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[f64; 4]; 4]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0], cols[3][0]],
                [cols[0][1], cols[1][1], cols[2][1], cols[3][1]],
                [cols[0][2], cols[1][2], cols[2][2], cols[3][2]],
                [cols[0][3], cols[1][3], cols[2][3], cols[3][3]],
            ],
        }
    }

    /// Creates a translation matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spatial_math::{Mat4, Vec3};
    ///
    /// let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub const fn from_translation(t: Vec3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, t.x],
            [0.0, 1.0, 0.0, t.y],
            [0.0, 0.0, 1.0, t.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a per-axis scale matrix.
    #[inline]
    pub const fn from_scale(s: Vec3) -> Self {
        Self::from_rows([
            [s.x, 0.0, 0.0, 0.0],
            [0.0, s.y, 0.0, 0.0],
            [0.0, 0.0, s.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix from an axis and angle (radians).
    ///
    /// See [`Mat3::from_rotation`] for the convention.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] if `axis` cannot be normalized.
    #[inline]
    pub fn from_rotation(axis: Vec3, angle: f64) -> Result<Self> {
        Ok(Self::from_mat3(Mat3::from_rotation(axis, angle)?))
    }

    /// Embeds a linear 3x3 transform with zero translation.
    #[inline]
    pub const fn from_mat3(m: Mat3) -> Self {
        Self::from_linear_translation(m, Vec3::ZERO)
    }

    /// Builds an affine matrix from a linear part and a translation.
    ///
    /// Applies `linear` first, then translates.
    #[inline]
    pub const fn from_linear_translation(linear: Mat3, t: Vec3) -> Self {
        Self::from_rows([
            [linear.m[0][0], linear.m[0][1], linear.m[0][2], t.x],
            [linear.m[1][0], linear.m[1][1], linear.m[1][2], t.y],
            [linear.m[2][0], linear.m[2][1], linear.m[2][2], t.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns the upper-left 3x3 linear part.
    #[inline]
    pub fn linear(&self) -> Mat3 {
        Mat3::from_rows([
            [self.m[0][0], self.m[0][1], self.m[0][2]],
            [self.m[1][0], self.m[1][1], self.m[1][2]],
            [self.m[2][0], self.m[2][1], self.m[2][2]],
        ])
    }

    /// Returns the translation column.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }

    /// Returns a row as Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    /// Returns a column as Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// Returns the transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[j][i];
            }
        }
        out
    }

    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        // 2x2 minors of the lower two rows
        let s0 = m[2][0] * m[3][1] - m[2][1] * m[3][0];
        let s1 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
        let s2 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
        let s3 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
        let s4 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
        let s5 = m[2][2] * m[3][3] - m[2][3] * m[3][2];

        m[0][0] * (m[1][1] * s5 - m[1][2] * s4 + m[1][3] * s3)
            - m[0][1] * (m[1][0] * s5 - m[1][2] * s2 + m[1][3] * s1)
            + m[0][2] * (m[1][0] * s4 - m[1][1] * s2 + m[1][3] * s0)
            - m[0][3] * (m[1][0] * s3 - m[1][1] * s1 + m[1][2] * s0)
    }

    /// Computes the inverse of this matrix.
    ///
    /// General cofactor inverse — valid for any invertible 4x4, not just
    /// affine ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] when |determinant| is below the
    /// default epsilon ([`EPSILON_DETERMINANT`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use spatial_math::{Mat4, Vec3};
    ///
    /// let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    /// let inv = m.inverse().unwrap();
    /// assert!((m * inv).approx_eq(&Mat4::IDENTITY, 1e-12));
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(EPSILON_DETERMINANT)
    }

    /// Inverse with a caller-chosen singularity threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] when |determinant| is below `eps`.
    pub fn inverse_with(&self, eps: f64) -> Result<Self> {
        let m = &self.m;

        // 2x2 minors of the top two rows ...
        let a0 = m[0][0] * m[1][1] - m[0][1] * m[1][0];
        let a1 = m[0][0] * m[1][2] - m[0][2] * m[1][0];
        let a2 = m[0][0] * m[1][3] - m[0][3] * m[1][0];
        let a3 = m[0][1] * m[1][2] - m[0][2] * m[1][1];
        let a4 = m[0][1] * m[1][3] - m[0][3] * m[1][1];
        let a5 = m[0][2] * m[1][3] - m[0][3] * m[1][2];
        // ... and of the bottom two rows
        let b0 = m[2][0] * m[3][1] - m[2][1] * m[3][0];
        let b1 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
        let b2 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
        let b3 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
        let b4 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
        let b5 = m[2][2] * m[3][3] - m[2][3] * m[3][2];

        let det = a0 * b5 - a1 * b4 + a2 * b3 + a3 * b2 - a4 * b1 + a5 * b0;
        if det.abs() < eps {
            return Err(Error::SingularMatrix {
                determinant: det,
                epsilon: eps,
            });
        }
        let inv_det = 1.0 / det;

        // Adjugate rows, each scaled by 1/det
        Ok(Self::from_rows([
            [
                (m[1][1] * b5 - m[1][2] * b4 + m[1][3] * b3) * inv_det,
                (-m[0][1] * b5 + m[0][2] * b4 - m[0][3] * b3) * inv_det,
                (m[3][1] * a5 - m[3][2] * a4 + m[3][3] * a3) * inv_det,
                (-m[2][1] * a5 + m[2][2] * a4 - m[2][3] * a3) * inv_det,
            ],
            [
                (-m[1][0] * b5 + m[1][2] * b2 - m[1][3] * b1) * inv_det,
                (m[0][0] * b5 - m[0][2] * b2 + m[0][3] * b1) * inv_det,
                (-m[3][0] * a5 + m[3][2] * a2 - m[3][3] * a1) * inv_det,
                (m[2][0] * a5 - m[2][2] * a2 + m[2][3] * a1) * inv_det,
            ],
            [
                (m[1][0] * b4 - m[1][1] * b2 + m[1][3] * b0) * inv_det,
                (-m[0][0] * b4 + m[0][1] * b2 - m[0][3] * b0) * inv_det,
                (m[3][0] * a4 - m[3][1] * a2 + m[3][3] * a0) * inv_det,
                (-m[2][0] * a4 + m[2][1] * a2 - m[2][3] * a0) * inv_det,
            ],
            [
                (-m[1][0] * b3 + m[1][1] * b1 - m[1][2] * b0) * inv_det,
                (m[0][0] * b3 - m[0][1] * b1 + m[0][2] * b0) * inv_det,
                (-m[3][0] * a3 + m[3][1] * a1 - m[3][2] * a0) * inv_det,
                (m[2][0] * a3 - m[2][1] * a1 + m[2][2] * a0) * inv_det,
            ],
        ]))
    }

    /// Applies this matrix to a point (homogeneous `w = 1`).
    ///
    /// Translation applies. Assumes an affine matrix; no perspective
    /// divide is performed.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2] * p.z + self.m[0][3],
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2] * p.z + self.m[1][3],
            self.m[2][0] * p.x + self.m[2][1] * p.y + self.m[2][2] * p.z + self.m[2][3],
        )
    }

    /// Applies this matrix to a direction (homogeneous `w = 0`).
    ///
    /// Translation is ignored; only the linear part acts.
    #[inline]
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * d.x + self.m[0][1] * d.y + self.m[0][2] * d.z,
            self.m[1][0] * d.x + self.m[1][1] * d.y + self.m[1][2] * d.z,
            self.m[2][0] * d.x + self.m[2][1] * d.y + self.m[2][2] * d.z,
        )
    }

    /// Multiplies two matrices.
    ///
    /// `a.mul_mat(&b)` applies `b` first, then `a`.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        result
    }

    /// True iff every element pair differs by at most `eps`.
    #[inline]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Exports the 16 elements as a flat array in the given order.
    ///
    /// Column-major is the layout OpenGL-style hosts expect. Internal
    /// storage is always row-major.
    pub fn to_flat_array(&self, order: StorageOrder) -> [f64; 16] {
        let mut out = [0.0; 16];
        for i in 0..4 {
            for j in 0..4 {
                match order {
                    StorageOrder::RowMajor => out[i * 4 + j] = self.m[i][j],
                    StorageOrder::ColumnMajor => out[j * 4 + i] = self.m[i][j],
                }
            }
        }
        out
    }

    /// Imports 16 elements laid out in the given order.
    pub fn from_flat_array(a: [f64; 16], order: StorageOrder) -> Self {
        let mut m = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                m[i][j] = match order {
                    StorageOrder::RowMajor => a[i * 4 + j],
                    StorageOrder::ColumnMajor => a[j * 4 + i],
                };
            }
        }
        Self { m }
    }

    /// Imports 16 elements from a slice laid out in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for any other slice length.
    pub fn from_flat_slice(s: &[f64], order: StorageOrder) -> Result<Self> {
        let a: [f64; 16] = s.try_into().map_err(|_| Error::DimensionMismatch {
            expected: 16,
            got: s.len(),
        })?;
        Ok(Self::from_flat_array(a, order))
    }

    /// Converts to glam DMat4 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat4 {
        glam::DMat4::from_cols_array(&self.to_flat_array(StorageOrder::ColumnMajor))
    }

    /// Creates from glam DMat4.
    #[inline]
    pub fn from_glam(m: glam::DMat4) -> Self {
        Self::from_flat_array(m.to_cols_array(), StorageOrder::ColumnMajor)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Vec4 (full homogeneous product)
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(rhs),
            self.row(1).dot(rhs),
            self.row(2).dot(rhs),
            self.row(3).dot(rhs),
        )
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = [f64; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 4] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn sample_affine() -> Mat4 {
        let rot = Mat3::from_rotation(Vec3::new(0.2, 1.0, -0.5), 0.8).unwrap();
        Mat4::from_linear_translation(rot, Vec3::new(1.0, -2.0, 0.5))
            * Mat4::from_scale(Vec3::new(2.0, 0.5, 3.0))
    }

    #[test]
    fn test_mat4_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat4::IDENTITY.transform_point(p), p);
        assert_eq!(Mat4::IDENTITY.transform_direction(p), p);
    }

    #[test]
    fn test_mat4_translation() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        // Directions are unaffected by translation
        assert_eq!(m.transform_direction(Vec3::new(0.0, 0.0, 4.0)), Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(m.translation(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mat4_scale() {
        let m = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.transform_point(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_mat4_compose_order() {
        // a * b applies b first: translate after scaling
        let t = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let s = Mat4::from_scale(Vec3::splat(2.0));
        let m = t * s;
        assert_eq!(m.transform_point(Vec3::X), Vec3::new(3.0, 0.0, 0.0));
        // Other order scales the translation too
        let m2 = s * t;
        assert_eq!(m2.transform_point(Vec3::X), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_mat4_determinant() {
        assert_relative_eq!(Mat4::IDENTITY.determinant(), 1.0);
        let m = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_relative_eq!(m.determinant(), 24.0, epsilon = 1e-12);
        // Determinant of a product is the product of determinants
        let a = sample_affine();
        let b = Mat4::from_translation(Vec3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(
            (a * b).determinant(),
            a.determinant() * b.determinant(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_mat4_inverse_roundtrip() {
        let m = sample_affine();
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Mat4::IDENTITY, 1e-9));
        assert!((inv * m).approx_eq(&Mat4::IDENTITY, 1e-9));

        let p = Vec3::new(-1.0, 4.0, 2.0);
        let q = m.transform_point(p);
        assert!(inv.transform_point(q).approx_eq(p, 1e-9));
    }

    #[test]
    fn test_mat4_inverse_non_affine() {
        // Perspective-like bottom row still inverts
        let mut m = sample_affine();
        m.m[3] = [0.1, -0.2, 0.05, 1.0];
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Mat4::IDENTITY, 1e-9));
    }

    #[test]
    fn test_mat4_singular_fails() {
        let flat = Mat4::from_scale(Vec3::new(0.0, 1.0, 1.0));
        assert!(matches!(
            flat.inverse(),
            Err(Error::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_mat4_rotation_matches_mat3() {
        let axis = Vec3::new(1.0, 1.0, 0.0);
        let m3 = Mat3::from_rotation(axis, FRAC_PI_2).unwrap();
        let m4 = Mat4::from_rotation(axis, FRAC_PI_2).unwrap();
        let v = Vec3::new(0.3, -1.0, 2.0);
        assert!(m4.transform_direction(v).approx_eq(m3 * v, 1e-12));
        assert!(m4.linear().approx_eq(&m3, 1e-15));
    }

    #[test]
    fn test_mat4_transpose() {
        let m = sample_affine();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().col(0), m.row(0));
    }

    #[test]
    fn test_mat4_vec4_product() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let p = m * Vec4::from_point(Vec3::ZERO);
        assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
        let d = m * Vec4::from_direction(Vec3::X);
        assert_eq!(d, Vec4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_mat4_flat_array_orders() {
        let m = sample_affine();
        let row = m.to_flat_array(StorageOrder::RowMajor);
        let col = m.to_flat_array(StorageOrder::ColumnMajor);
        // Column-major flat equals the transpose's row-major flat
        assert_eq!(col, m.transpose().to_flat_array(StorageOrder::RowMajor));
        assert_eq!(Mat4::from_flat_array(row, StorageOrder::RowMajor), m);
        assert_eq!(Mat4::from_flat_array(col, StorageOrder::ColumnMajor), m);
        assert!(matches!(
            Mat4::from_flat_slice(&row[..7], StorageOrder::RowMajor),
            Err(Error::DimensionMismatch { expected: 16, got: 7 })
        ));
    }

    #[test]
    fn test_mat4_glam_roundtrip() {
        let m = sample_affine();
        let back = Mat4::from_glam(m.to_glam());
        assert!(back.approx_eq(&m, 1e-12));
        // glam agrees on the product
        let g = m.to_glam() * glam::DVec4::new(1.0, 2.0, 3.0, 1.0);
        let ours = m * Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert!(Vec4::from_glam(g).approx_eq(ours, 1e-12));
    }
}
