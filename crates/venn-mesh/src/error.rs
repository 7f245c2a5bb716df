//! Error types for fixture generation.

use thiserror::Error;

/// Caller input errors. All are detected before any output is built.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum VennError {
    /// A cell count is zero.
    #[error("grid dimensions must be positive, got nx={nx}, ny={ny}")]
    InvalidDimension {
        /// Requested cells along x.
        nx: usize,
        /// Requested cells along y.
        ny: usize,
    },

    /// The radius is zero, negative, or not finite.
    #[error("radius must be a finite positive number, got {0}")]
    InvalidRadius(f64),

    /// The matset encoding name is not one of the supported three.
    #[error(
        "unsupported matset type {0:?} (expected \"full\", \"sparse_by_material\" or \"sparse_by_element\")"
    )]
    UnsupportedMatsetType(String),

    /// A `VennCfg` violates the layout guarantees.
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}
