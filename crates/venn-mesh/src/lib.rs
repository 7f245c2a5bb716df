//! Venn-diagram mesh fixtures for multi-material pipelines.
//!
//! Builds a rectilinear grid over three mutually overlapping circles and
//! reports, per cell, how much area falls into each of the eight region
//! combinations. The result is a material set in one of three encodings
//! (`full`, `sparse_by_material`, `sparse_by_element`) wrapped in a small
//! explicit output document (`VennMesh`).
//!
//! Pipeline (strictly forward):
//! grid → circle layout → cell classifier → matset encoder → document.

pub mod api;
pub mod cfg;
pub mod classify;
pub mod error;
pub mod grid;
pub mod layout;
pub mod matset;
pub mod mesh;
pub mod region;

pub use cfg::VennCfg;
pub use error::VennError;
pub use matset::{Matset, MatsetType};
pub use mesh::{generate, generate_with_cfg, VennMesh};
pub use region::Region;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{classify_cells, CellFractions, FractionTable};
    pub use crate::grid::{CellRect, Grid};
    pub use crate::layout::{Circle, CircleLayout};
    pub use crate::matset::{Matset, MatsetType, MatsetValues};
    pub use crate::mesh::{generate, generate_with_cfg, Field, VennMesh};
    pub use crate::{Region, VennCfg, VennError};
    pub use nalgebra::Vector2 as Vec2;
}
