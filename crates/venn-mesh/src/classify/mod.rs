//! Cell–region classifier.
//!
//! For each cell, the fraction of its area in each of the eight regions.
//!
//! Model
//! - Pure cells are decided exactly: if every circle either contains the cell
//!   or misses it, the whole cell has one signature.
//! - Mixed cells are sub-sampled on a fixed `S × S` grid of sample centers;
//!   each sample contributes its signature count, counts are divided by `S²`.
//!   Rows sum to one because every sample has exactly one signature.
//! - Cells are independent, so the table is filled with a rayon fan-out that
//!   collects in cell order (identical to a sequential run).
//!
//! `exact` holds the analytic disk ∩ rectangle area used for the per-circle
//! coverage fields and for checking the sampler.

pub mod exact;

use nalgebra::Vector2;
use rayon::prelude::*;

use crate::grid::{CellRect, Grid};
use crate::layout::CircleLayout;
use crate::region::{Region, REGION_COUNT};

/// Region fractions of one cell, indexed by material id.
pub type CellFractions = [f64; REGION_COUNT];

/// Per-cell region fractions for a whole grid, in flat cell order.
#[derive(Clone, Debug, PartialEq)]
pub struct FractionTable {
    pub nx: usize,
    pub ny: usize,
    pub rows: Vec<CellFractions>,
}

impl FractionTable {
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn fraction(&self, cell: usize, region: Region) -> f64 {
        self.rows[cell][region.id()]
    }

    /// Sum over cells of `fraction * cell_area`, per region.
    pub fn region_areas(&self, grid: &Grid) -> CellFractions {
        let mut out = [0.0; REGION_COUNT];
        for (row, rect) in self.rows.iter().zip(grid.cells()) {
            let area = rect.area();
            for (acc, f) in out.iter_mut().zip(row) {
                *acc += f * area;
            }
        }
        out
    }
}

/// Classify every cell of `grid` against `layout`.
pub fn classify_cells(
    grid: &Grid,
    layout: &CircleLayout,
    samples_per_axis: usize,
) -> FractionTable {
    let rows: Vec<CellFractions> = (0..grid.num_cells())
        .into_par_iter()
        .map(|k| classify_cell(&grid.cell_rect(k), layout, samples_per_axis))
        .collect();
    let mixed = rows
        .iter()
        .filter(|row| row.iter().all(|&f| f < 1.0))
        .count();
    tracing::trace!(cells = rows.len(), mixed, "classified cells");
    FractionTable {
        nx: grid.nx,
        ny: grid.ny,
        rows,
    }
}

/// Region fractions for a single cell.
pub fn classify_cell(
    rect: &CellRect,
    layout: &CircleLayout,
    samples_per_axis: usize,
) -> CellFractions {
    if let Some(mask) = pure_signature(rect, layout) {
        let mut row = [0.0; REGION_COUNT];
        row[Region::from_mask(mask).id()] = 1.0;
        return row;
    }
    let s = samples_per_axis.max(1);
    let dx = rect.width() / s as f64;
    let dy = rect.height() / s as f64;
    let mut counts = [0u32; REGION_COUNT];
    for sj in 0..s {
        let y = rect.y0 + (sj as f64 + 0.5) * dy;
        for si in 0..s {
            let x = rect.x0 + (si as f64 + 0.5) * dx;
            let mask = layout.signature(Vector2::new(x, y));
            counts[Region::from_mask(mask).id()] += 1;
        }
    }
    let total = (s * s) as f64;
    counts.map(|n| n as f64 / total)
}

/// Signature shared by every point of `rect`, if each circle decides it.
fn pure_signature(rect: &CellRect, layout: &CircleLayout) -> Option<u8> {
    let mut mask = 0;
    for (circle, bit) in layout.circles() {
        if circle.contains_rect(rect) {
            mask |= bit;
        } else if !circle.misses_rect(rect) {
            return None;
        }
    }
    Some(mask)
}

#[cfg(test)]
mod tests;
