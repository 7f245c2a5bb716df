//! Curated surface for fixture-generating callers (UNSTABLE).
//!
//! Re-exports the handful of items a test harness needs to build and check a
//! Venn fixture without reaching into submodules.

pub use crate::classify::exact::{disk_rect_area, disk_rect_coverage};
pub use crate::classify::{classify_cells, FractionTable};
pub use crate::grid::Grid;
pub use crate::layout::CircleLayout;
pub use crate::matset::{encode, Matset, MatsetType, MatsetValues};
pub use crate::mesh::{generate, generate_with_cfg, VennMesh, VerifyError};
pub use crate::region::{Region, REGION_COUNT};
