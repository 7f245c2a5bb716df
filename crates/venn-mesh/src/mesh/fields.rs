//! Element fields attached to the fixture.
//!
//! - `area`: cell area.
//! - `circle_a`, `circle_b`, `circle_c`: exact fraction of the cell inside
//!   each circle.
//! - `overlap`: mean number of circles covering a point of the cell.
//! - `mat_check`: `Σ fraction × material id`.
//! - `importance`: `Σ fraction × weight`, with per-material matset values.

use std::collections::BTreeMap;

use super::Field;
use crate::classify::exact::disk_rect_coverage;
use crate::classify::FractionTable;
use crate::grid::Grid;
use crate::layout::CircleLayout;
use crate::matset::Matset;
use crate::region::Region;

fn plain(values: Vec<f64>) -> Field {
    Field {
        values,
        matset_values: None,
    }
}

/// Weighted sum over regions of each row.
fn per_cell(table: &FractionTable, weight: impl Fn(Region) -> f64) -> Vec<f64> {
    table
        .rows
        .iter()
        .map(|row| Region::ALL.iter().zip(row).map(|(&r, f)| f * weight(r)).sum())
        .collect()
}

pub(super) fn build_fields(
    grid: &Grid,
    layout: &CircleLayout,
    table: &FractionTable,
    matset: &Matset,
) -> BTreeMap<String, Field> {
    let mut fields = BTreeMap::new();
    let area = grid.cells().map(|c| c.area()).collect();
    fields.insert("area".to_string(), plain(area));

    let circles = [
        ("circle_a", layout.a),
        ("circle_b", layout.b),
        ("circle_c", layout.c),
    ];
    for (name, circle) in circles {
        let coverage = grid.cells().map(|c| disk_rect_coverage(&circle, &c)).collect();
        fields.insert(name.to_string(), plain(coverage));
    }

    fields.insert(
        "overlap".to_string(),
        plain(per_cell(table, |r| r.circle_count() as f64)),
    );
    fields.insert(
        "mat_check".to_string(),
        plain(per_cell(table, |r| r.id() as f64)),
    );
    fields.insert(
        "importance".to_string(),
        Field {
            values: per_cell(table, Region::importance),
            matset_values: Some(matset.map_values(|_, r, _| r.importance())),
        },
    );
    fields
}
