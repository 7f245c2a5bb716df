//! Structural checks for an assembled fixture.

use thiserror::Error;

use super::VennMesh;
use crate::cfg::SUM_EPS;
use crate::matset::{Matset, MatsetValues};
use crate::region::REGION_COUNT;

/// First inconsistency found by `VennMesh::verify`.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum VerifyError {
    #[error("coordinate axis {axis} has {found} values, expected {expected}")]
    CoordLength {
        axis: char,
        expected: usize,
        found: usize,
    },

    #[error("coordinate axis {axis} is not strictly increasing")]
    CoordOrder { axis: char },

    #[error("field {name} has {found} values, expected {expected}")]
    FieldLength {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("field {name} matset values do not match the matset layout")]
    MatsetValuesShape { name: String },

    #[error("matset covers {found} elements, expected {expected}")]
    ElementCount { expected: usize, found: usize },

    #[error("matset layout is inconsistent: {0}")]
    Layout(String),

    #[error("matset stores a zero fraction (element {element}, material {material})")]
    ZeroEntry { element: usize, material: usize },

    #[error("volume fractions of element {element} sum to {sum}")]
    FractionSum { element: usize, sum: f64 },
}

fn layout_err(msg: impl Into<String>) -> VerifyError {
    VerifyError::Layout(msg.into())
}

impl VennMesh {
    /// Check array lengths, matset layout, and per-cell fraction sums.
    pub fn verify(&self) -> Result<(), VerifyError> {
        let n = self.num_cells();
        for (axis, values, cells) in [
            ('x', &self.coords.x, self.topology.nx),
            ('y', &self.coords.y, self.topology.ny),
        ] {
            if values.len() != cells + 1 {
                return Err(VerifyError::CoordLength {
                    axis,
                    expected: cells + 1,
                    found: values.len(),
                });
            }
            if !values.windows(2).all(|w| w[0] < w[1]) {
                return Err(VerifyError::CoordOrder { axis });
            }
        }

        for (name, field) in &self.fields {
            if field.values.len() != n {
                return Err(VerifyError::FieldLength {
                    name: name.clone(),
                    expected: n,
                    found: field.values.len(),
                });
            }
            if let Some(mv) = &field.matset_values {
                if !values_match_layout(mv, &self.matset) {
                    return Err(VerifyError::MatsetValuesShape { name: name.clone() });
                }
            }
        }

        if self.matset.num_elements() != n {
            return Err(VerifyError::ElementCount {
                expected: n,
                found: self.matset.num_elements(),
            });
        }
        check_layout(&self.matset)?;

        for (element, row) in self.matset.to_dense().iter().enumerate() {
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > SUM_EPS {
                return Err(VerifyError::FractionSum { element, sum });
            }
        }
        Ok(())
    }
}

fn check_layout(matset: &Matset) -> Result<(), VerifyError> {
    match matset {
        Matset::Full {
            num_elements,
            volume_fractions,
        } => {
            if volume_fractions.len() != num_elements * REGION_COUNT {
                return Err(layout_err("full matset length is not elements × materials"));
            }
        }
        Matset::SparseByMaterial {
            num_elements,
            materials,
            element_counts,
        } => {
            if materials.len() != REGION_COUNT || element_counts.len() != REGION_COUNT {
                return Err(layout_err("sparse_by_material needs one entry per material"));
            }
            for (material, (slice, &count)) in materials.iter().zip(element_counts).enumerate() {
                if slice.element_ids.len() != count || slice.volume_fractions.len() != count {
                    return Err(layout_err(format!("material {material} count mismatch")));
                }
                if !slice.element_ids.windows(2).all(|w| w[0] < w[1]) {
                    return Err(layout_err(format!("material {material} ids not increasing")));
                }
                if slice.element_ids.last().is_some_and(|&e| e >= *num_elements) {
                    return Err(layout_err(format!("material {material} element out of range")));
                }
                if let Some(pos) = slice.volume_fractions.iter().position(|&f| f <= 0.0) {
                    return Err(VerifyError::ZeroEntry {
                        element: slice.element_ids[pos],
                        material,
                    });
                }
            }
        }
        Matset::SparseByElement {
            material_ids,
            volume_fractions,
            sizes,
            offsets,
        } => {
            if sizes.len() != offsets.len() || material_ids.len() != volume_fractions.len() {
                return Err(layout_err("sparse_by_element array lengths disagree"));
            }
            let mut expected_offset = 0;
            for (element, (&off, &size)) in offsets.iter().zip(sizes).enumerate() {
                if off != expected_offset {
                    return Err(layout_err(format!(
                        "element {element} offset {off} != {expected_offset}"
                    )));
                }
                expected_offset += size;
                let ids = material_ids
                    .get(off..off + size)
                    .ok_or_else(|| layout_err(format!("element {element} entries out of range")))?;
                if !ids.windows(2).all(|w| w[0] < w[1]) || ids.iter().any(|&m| m >= REGION_COUNT) {
                    return Err(layout_err(format!("element {element} has bad material ids")));
                }
                for (k, &f) in volume_fractions[off..off + size].iter().enumerate() {
                    if f <= 0.0 {
                        return Err(VerifyError::ZeroEntry {
                            element,
                            material: ids[k],
                        });
                    }
                }
            }
            if expected_offset != material_ids.len() {
                return Err(layout_err("sparse_by_element has trailing entries"));
            }
        }
    }
    Ok(())
}

fn values_match_layout(values: &MatsetValues, matset: &Matset) -> bool {
    match (values, matset) {
        (
            MatsetValues::Full { values },
            Matset::Full {
                volume_fractions, ..
            },
        )
        | (
            MatsetValues::SparseByElement { values },
            Matset::SparseByElement {
                volume_fractions, ..
            },
        ) => values.len() == volume_fractions.len(),
        (MatsetValues::SparseByMaterial { values }, Matset::SparseByMaterial { materials, .. }) => {
            values.len() == materials.len()
                && values.iter().zip(materials).all(|(v, m)| v.len() == m.len())
        }
        _ => false,
    }
}
