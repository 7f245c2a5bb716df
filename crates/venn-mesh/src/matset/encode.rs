use super::{MaterialSlice, Matset, MatsetType, MatsetValues};
use crate::classify::FractionTable;
use crate::region::{Region, REGION_COUNT};

/// Encode a fraction table in the requested layout.
pub fn encode(table: &FractionTable, kind: MatsetType) -> Matset {
    match kind {
        MatsetType::Full => Matset::Full {
            num_elements: table.num_cells(),
            volume_fractions: table.rows.iter().flatten().copied().collect(),
        },
        MatsetType::SparseByMaterial => {
            let mut materials = vec![MaterialSlice::default(); REGION_COUNT];
            for (cell, row) in table.rows.iter().enumerate() {
                for (slice, &f) in materials.iter_mut().zip(row) {
                    if f > 0.0 {
                        slice.element_ids.push(cell);
                        slice.volume_fractions.push(f);
                    }
                }
            }
            let element_counts = materials.iter().map(MaterialSlice::len).collect();
            Matset::SparseByMaterial {
                num_elements: table.num_cells(),
                materials,
                element_counts,
            }
        }
        MatsetType::SparseByElement => {
            let n = table.num_cells();
            let mut material_ids = Vec::new();
            let mut volume_fractions = Vec::new();
            let mut sizes = Vec::with_capacity(n);
            let mut offsets = Vec::with_capacity(n);
            for row in &table.rows {
                offsets.push(material_ids.len());
                let before = material_ids.len();
                for (id, &f) in row.iter().enumerate() {
                    if f > 0.0 {
                        material_ids.push(id);
                        volume_fractions.push(f);
                    }
                }
                sizes.push(material_ids.len() - before);
            }
            Matset::SparseByElement {
                material_ids,
                volume_fractions,
                sizes,
                offsets,
            }
        }
    }
}

impl Matset {
    /// Matset values for every stored entry: `f(cell, material, fraction)`.
    ///
    /// The full layout evaluates `f` for zero-fraction entries as well.
    pub fn map_values<F>(&self, f: F) -> MatsetValues
    where
        F: Fn(usize, Region, f64) -> f64,
    {
        match self {
            Matset::Full {
                volume_fractions, ..
            } => MatsetValues::Full {
                values: volume_fractions
                    .chunks_exact(REGION_COUNT)
                    .enumerate()
                    .flat_map(|(cell, row)| {
                        Region::ALL
                            .iter()
                            .zip(row)
                            .map(|(&r, &vf)| f(cell, r, vf))
                            .collect::<Vec<_>>()
                    })
                    .collect(),
            },
            Matset::SparseByMaterial { materials, .. } => MatsetValues::SparseByMaterial {
                values: Region::ALL
                    .iter()
                    .zip(materials)
                    .map(|(&r, slice)| {
                        slice
                            .element_ids
                            .iter()
                            .zip(&slice.volume_fractions)
                            .map(|(&cell, &vf)| f(cell, r, vf))
                            .collect()
                    })
                    .collect(),
            },
            Matset::SparseByElement {
                material_ids,
                volume_fractions,
                sizes,
                offsets,
            } => {
                let mut values = vec![0.0; material_ids.len()];
                for (cell, (&off, &size)) in offsets.iter().zip(sizes).enumerate() {
                    for e in off..off + size {
                        if let Some(region) = Region::from_id(material_ids[e]) {
                            values[e] = f(cell, region, volume_fractions[e]);
                        }
                    }
                }
                MatsetValues::SparseByElement { values }
            }
        }
    }
}
