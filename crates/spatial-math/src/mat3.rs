//! 3x3 matrix type for linear 3D transforms.
//!
//! [`Mat3`] represents rotations, scales, and general linear maps — any
//! 3D transform without translation. For affine transforms (with
//! translation) see [`Mat4`](crate::Mat4).
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! Composition reads right to left: `a * b` applies `b` first, then `a`.
//!
//! # Usage
//!
//! ```rust
//! use spatial_math::{Mat3, Vec3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let rot = Mat3::from_rotation(Vec3::Z, FRAC_PI_2).unwrap();
//! let v = rot * Vec3::X;
//! assert!(v.approx_eq(Vec3::Y, 1e-12));
//! ```

use crate::Vec3;
use spatial_core::{scalar::EPSILON_DETERMINANT, Error, Result, StorageOrder};
use std::ops::{Index, Mul};

/// A 3x3 matrix for linear 3D transforms.
///
/// Stored in row-major order. Use [`Mat3::from_rows`] or [`Mat3::from_cols`]
/// to construct from component arrays.
///
/// # Example
///
/// ```rust
/// use spatial_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[f64; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a matrix from Vec3 rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Creates a matrix from Vec3 columns.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::from_rows([
            [d0, 0.0, 0.0],
            [0.0, d1, 0.0],
            [0.0, 0.0, d2],
        ])
    }

    /// Creates a per-axis scale matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spatial_math::{Mat3, Vec3};
    ///
    /// let m = Mat3::from_scale(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(m * Vec3::ONE, Vec3::new(2.0, 3.0, 4.0));
    /// ```
    #[inline]
    pub const fn from_scale(s: Vec3) -> Self {
        Self::diagonal(s.x, s.y, s.z)
    }

    /// Creates a rotation matrix from an axis and angle (radians).
    ///
    /// Rodrigues' formula; the axis is normalized internally. Right-handed:
    /// positive angles rotate counter-clockwise looking down the axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] if `axis` cannot be normalized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spatial_math::{Mat3, Vec3};
    /// use std::f64::consts::PI;
    ///
    /// let half_turn = Mat3::from_rotation(Vec3::Y, PI).unwrap();
    /// assert!((half_turn * Vec3::X).approx_eq(-Vec3::X, 1e-12));
    /// ```
    pub fn from_rotation(axis: Vec3, angle: f64) -> Result<Self> {
        let k = axis.normalize()?;
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Ok(Self::from_rows([
            [
                t * k.x * k.x + c,
                t * k.x * k.y - s * k.z,
                t * k.x * k.z + s * k.y,
            ],
            [
                t * k.x * k.y + s * k.z,
                t * k.y * k.y + c,
                t * k.y * k.z - s * k.x,
            ],
            [
                t * k.x * k.z - s * k.y,
                t * k.y * k.z + s * k.x,
                t * k.z * k.z + c,
            ],
        ]))
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the inverse of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] when |determinant| is below the
    /// default epsilon ([`EPSILON_DETERMINANT`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use spatial_math::{Mat3, Vec3};
    ///
    /// let m = Mat3::from_scale(Vec3::splat(2.0));
    /// let inv = m.inverse().unwrap();
    /// assert!((m * inv).approx_eq(&Mat3::IDENTITY, 1e-12));
    ///
    /// // Zero scale on one axis is singular
    /// let flat = Mat3::from_scale(Vec3::new(0.0, 1.0, 1.0));
    /// assert!(flat.inverse().is_err());
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
        let det = self.determinant();
        if det.abs() < eps {
            return Err(Error::SingularMatrix {
                determinant: det,
                epsilon: eps,
            });
        }

        let m = &self.m;
        let inv_det = 1.0 / det;

        // Cofactor matrix, transposed and scaled by 1/det
        Ok(Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Multiplies two matrices.
    ///
    /// `a.mul_mat(&b)` applies `b` first, then `a`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
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

    /// Exports the 9 elements as a flat array in the given order.
    ///
    /// This is the binding-layer surface: host languages pick the layout
    /// they expect. Internal storage is always row-major.
    pub fn to_flat_array(&self, order: StorageOrder) -> [f64; 9] {
        let mut out = [0.0; 9];
        for i in 0..3 {
            for j in 0..3 {
                match order {
                    StorageOrder::RowMajor => out[i * 3 + j] = self.m[i][j],
                    StorageOrder::ColumnMajor => out[j * 3 + i] = self.m[i][j],
                }
            }
        }
        out
    }

    /// Imports 9 elements laid out in the given order.
    pub fn from_flat_array(a: [f64; 9], order: StorageOrder) -> Self {
        let mut m = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] = match order {
                    StorageOrder::RowMajor => a[i * 3 + j],
                    StorageOrder::ColumnMajor => a[j * 3 + i],
                };
            }
        }
        Self { m }
    }

    /// Imports 9 elements from a slice laid out in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for any other slice length.
    pub fn from_flat_slice(s: &[f64], order: StorageOrder) -> Result<Self> {
        let a: [f64; 9] = s.try_into().map_err(|_| Error::DimensionMismatch {
            expected: 9,
            got: s.len(),
        })?;
        Ok(Self::from_flat_array(a, order))
    }

    /// Converts to glam DMat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        // glam uses column-major, so we transpose
        glam::DMat3::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Creates from glam DMat3.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        let cols = m.to_cols_array_2d();
        Self::from_cols(cols)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat3 * f64
impl Mul<f64> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        let mut out = self;
        for row in out.m.iter_mut() {
            for e in row.iter_mut() {
                *e *= rhs;
            }
        }
        out
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}
