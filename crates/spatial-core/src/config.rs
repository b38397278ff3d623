//! Numeric configuration for spatial math.
//!
//! Two small knobs cover everything configurable in this workspace:
//!
//! - [`Tolerances`] - the epsilon thresholds for degeneracy checks
//! - [`StorageOrder`] - the element order used when matrices cross the
//!   flat-array boundary to a host language
//!
//! Internal matrix storage is always row-major; [`StorageOrder`] only
//! affects import/export through `to_flat_array`/`from_flat_array`.
//!
//! # Usage
//!
//! ```rust
//! use spatial_core::{StorageOrder, Tolerances};
//!
//! let tol = Tolerances::default();
//! assert_eq!(tol.epsilon_length, 1e-8);
//! assert_eq!(StorageOrder::default(), StorageOrder::RowMajor);
//! ```

use crate::scalar::{EPSILON_DETERMINANT, EPSILON_LENGTH};

/// Epsilon thresholds for degeneracy checks.
///
/// Operations that can fail (normalize, invert) use these defaults unless
/// the caller passes an explicit epsilon via a `*_with` variant. Callers
/// that carry one policy across many calls (binding layers especially)
/// hold a `Tolerances` and feed its fields to those variants:
/// `v.normalize_with(tol.epsilon_length)`,
/// `m.inverse_with(tol.epsilon_determinant)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    /// Length below which a vector cannot be normalized.
    pub epsilon_length: f64,
    /// |determinant| below which a matrix cannot be inverted.
    pub epsilon_determinant: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            epsilon_length: EPSILON_LENGTH,
            epsilon_determinant: EPSILON_DETERMINANT,
        }
    }
}

/// Element order for flat-array matrix import/export.
///
/// Row-major lists elements row by row; column-major (the OpenGL
/// convention) lists them column by column. The two orderings of the same
/// matrix are transposes of each other as flat arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StorageOrder {
    /// Elements listed row by row. The workspace default.
    #[default]
    RowMajor,
    /// Elements listed column by column (OpenGL-style).
    ColumnMajor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerances() {
        let tol = Tolerances::default();
        assert_eq!(tol.epsilon_length, 1e-8);
        assert_eq!(tol.epsilon_determinant, 1e-10);
    }

    #[test]
    fn test_default_storage_order() {
        assert_eq!(StorageOrder::default(), StorageOrder::RowMajor);
    }
}
