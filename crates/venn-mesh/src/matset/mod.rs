//! Material sets: the per-cell region fractions in one of three layouts.
//!
//! - `full`: dense, cell-major, one entry per material per cell (zeros kept).
//! - `sparse_by_material`: per material, the cells where it is present.
//! - `sparse_by_element`: per cell, the materials present, with `sizes` and
//!   `offsets` so a cell's entries can be sliced without scanning.
//!
//! Sparse layouts never store zero fractions. `MatsetValues` carries
//! per-material per-cell values (e.g. `importance`) in the same layout as the
//! matset they were derived from.

mod decode;
mod encode;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::VennError;
use crate::region::Region;

pub use encode::encode;

/// Requested matset encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatsetType {
    Full,
    SparseByMaterial,
    SparseByElement,
}

impl MatsetType {
    pub const ALL: [MatsetType; 3] = [
        MatsetType::Full,
        MatsetType::SparseByMaterial,
        MatsetType::SparseByElement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatsetType::Full => "full",
            MatsetType::SparseByMaterial => "sparse_by_material",
            MatsetType::SparseByElement => "sparse_by_element",
        }
    }
}

impl fmt::Display for MatsetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatsetType {
    type Err = VennError;

    /// Exact names only; there is no fallback encoding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| VennError::UnsupportedMatsetType(s.to_string()))
    }
}

/// Cells holding one material, with their fractions (`sparse_by_material`).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MaterialSlice {
    pub element_ids: Vec<usize>,
    pub volume_fractions: Vec<f64>,
}

impl MaterialSlice {
    #[inline]
    pub fn len(&self) -> usize {
        self.element_ids.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.element_ids.is_empty()
    }
}

/// Encoded material set.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "encoding", rename_all = "snake_case")]
pub enum Matset {
    /// `volume_fractions[cell * REGION_COUNT + material]`.
    Full {
        num_elements: usize,
        volume_fractions: Vec<f64>,
    },
    /// `materials[id]` lists the cells where material `id` is present.
    SparseByMaterial {
        num_elements: usize,
        materials: Vec<MaterialSlice>,
        element_counts: Vec<usize>,
    },
    /// Entries of cell `k` live at `offsets[k]..offsets[k] + sizes[k]`.
    SparseByElement {
        material_ids: Vec<usize>,
        volume_fractions: Vec<f64>,
        sizes: Vec<usize>,
        offsets: Vec<usize>,
    },
}

/// Per-material per-cell values laid out like the matset that produced them.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "encoding", rename_all = "snake_case")]
pub enum MatsetValues {
    Full { values: Vec<f64> },
    SparseByMaterial { values: Vec<Vec<f64>> },
    SparseByElement { values: Vec<f64> },
}

impl Matset {
    pub fn matset_type(&self) -> MatsetType {
        match self {
            Matset::Full { .. } => MatsetType::Full,
            Matset::SparseByMaterial { .. } => MatsetType::SparseByMaterial,
            Matset::SparseByElement { .. } => MatsetType::SparseByElement,
        }
    }

    pub fn num_elements(&self) -> usize {
        match self {
            Matset::Full { num_elements, .. } | Matset::SparseByMaterial { num_elements, .. } => {
                *num_elements
            }
            Matset::SparseByElement { sizes, .. } => sizes.len(),
        }
    }

    /// Material name → id, shared by every encoding.
    pub fn material_map() -> BTreeMap<&'static str, usize> {
        Region::ALL.iter().map(|r| (r.name(), r.id())).collect()
    }

    /// Number of stored (cell, material) entries.
    pub fn num_entries(&self) -> usize {
        match self {
            Matset::Full {
                volume_fractions, ..
            }
            | Matset::SparseByElement {
                volume_fractions, ..
            } => volume_fractions.len(),
            Matset::SparseByMaterial { materials, .. } => {
                materials.iter().map(MaterialSlice::len).sum()
            }
        }
    }
}

#[cfg(test)]
mod tests;
