//! Output document and the `generate` entry point.
//!
//! `VennMesh` is the whole fixture: rectilinear coordinates, an implicit
//! structured topology, element fields, and the encoded matset. It derives
//! `Serialize` so callers can hand it to whatever document layer they use.

mod fields;
mod verify;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cfg::VennCfg;
use crate::classify::classify_cells;
use crate::error::VennError;
use crate::grid::Grid;
use crate::layout::CircleLayout;
use crate::matset::{encode, Matset, MatsetType, MatsetValues};

pub use verify::VerifyError;

/// Rectilinear coordinates: `x.len() == nx + 1`, `y.len() == ny + 1`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RectilinearCoords {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Implicit structured topology over `nx × ny` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StructuredTopology {
    pub nx: usize,
    pub ny: usize,
}

/// Element-associated field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matset_values: Option<MatsetValues>,
}

/// Inputs the document was generated from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VennParams {
    pub matset_type: MatsetType,
    pub nx: usize,
    pub ny: usize,
    pub radius: f64,
    pub layout: CircleLayout,
}

/// Generated fixture.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VennMesh {
    pub params: VennParams,
    pub coords: RectilinearCoords,
    pub topology: StructuredTopology,
    pub fields: BTreeMap<String, Field>,
    pub material_map: BTreeMap<&'static str, usize>,
    pub matset: Matset,
}

impl VennMesh {
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.topology.nx * self.topology.ny
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }
}

/// Build the Venn fixture with default settings.
///
/// `matset_type` must be `"full"`, `"sparse_by_material"` or
/// `"sparse_by_element"`. Fails before doing any work on bad input.
pub fn generate(
    matset_type: &str,
    nx: usize,
    ny: usize,
    radius: f64,
) -> Result<VennMesh, VennError> {
    let kind: MatsetType = matset_type.parse()?;
    generate_with_cfg(kind, nx, ny, radius, &VennCfg::default())
}

/// Build the Venn fixture with explicit generator settings.
pub fn generate_with_cfg(
    kind: MatsetType,
    nx: usize,
    ny: usize,
    radius: f64,
    cfg: &VennCfg,
) -> Result<VennMesh, VennError> {
    cfg.validate()?;
    let grid = Grid::new(nx, ny, radius, cfg.extent_factor)?;
    tracing::debug!(
        matset = %kind,
        nx,
        ny,
        radius,
        samples = cfg.samples_per_axis,
        "generate venn"
    );

    let layout = CircleLayout::canonical(radius, cfg.center_spacing);
    let table = classify_cells(&grid, &layout, cfg.samples_per_axis);
    let matset = encode(&table, kind);
    let fields = fields::build_fields(&grid, &layout, &table, &matset);

    Ok(VennMesh {
        params: VennParams {
            matset_type: kind,
            nx,
            ny,
            radius,
            layout,
        },
        coords: RectilinearCoords {
            x: grid.xs,
            y: grid.ys,
        },
        topology: StructuredTopology { nx, ny },
        fields,
        material_map: Matset::material_map(),
        matset,
    })
}
