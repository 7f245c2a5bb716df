use super::Matset;
use crate::classify::CellFractions;
use crate::region::REGION_COUNT;

impl Matset {
    /// Rebuild the dense per-cell table; materials absent from a sparse
    /// layout are zero. Out-of-range ids or cells are skipped (see
    /// `VennMesh::verify` for structural checks).
    pub fn to_dense(&self) -> Vec<CellFractions> {
        let mut rows = vec![[0.0; REGION_COUNT]; self.num_elements()];
        match self {
            Matset::Full {
                volume_fractions, ..
            } => {
                let chunks = volume_fractions.chunks_exact(REGION_COUNT);
                for (row, chunk) in rows.iter_mut().zip(chunks) {
                    row.copy_from_slice(chunk);
                }
            }
            Matset::SparseByMaterial { materials, .. } => {
                for (id, slice) in materials.iter().enumerate().take(REGION_COUNT) {
                    for (&cell, &vf) in slice.element_ids.iter().zip(&slice.volume_fractions) {
                        if let Some(row) = rows.get_mut(cell) {
                            row[id] = vf;
                        }
                    }
                }
            }
            Matset::SparseByElement {
                material_ids,
                volume_fractions,
                sizes,
                offsets,
            } => {
                for (row, (&off, &size)) in rows.iter_mut().zip(offsets.iter().zip(sizes)) {
                    let ids = material_ids.get(off..off + size).unwrap_or(&[]);
                    let vfs = volume_fractions.get(off..off + size).unwrap_or(&[]);
                    for (&id, &vf) in ids.iter().zip(vfs) {
                        if id < REGION_COUNT {
                            row[id] = vf;
                        }
                    }
                }
            }
        }
        rows
    }

    /// Fraction of `material` in `cell`, zero if absent or out of range.
    pub fn fraction(&self, cell: usize, material: usize) -> f64 {
        if material >= REGION_COUNT || cell >= self.num_elements() {
            return 0.0;
        }
        match self {
            Matset::Full {
                volume_fractions, ..
            } => volume_fractions
                .get(cell * REGION_COUNT + material)
                .copied()
                .unwrap_or(0.0),
            Matset::SparseByMaterial { materials, .. } => materials
                .get(material)
                .and_then(|slice| {
                    let pos = slice.element_ids.binary_search(&cell).ok()?;
                    slice.volume_fractions.get(pos).copied()
                })
                .unwrap_or(0.0),
            Matset::SparseByElement {
                material_ids,
                volume_fractions,
                sizes,
                offsets,
            } => {
                let (Some(&off), Some(&size)) = (offsets.get(cell), sizes.get(cell)) else {
                    return 0.0;
                };
                (off..off + size)
                    .find(|&e| material_ids.get(e) == Some(&material))
                    .and_then(|e| volume_fractions.get(e).copied())
                    .unwrap_or(0.0)
            }
        }
    }
}
