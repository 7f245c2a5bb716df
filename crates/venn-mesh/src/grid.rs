//! Uniform rectilinear grid over `[-extent, extent]²`.
//!
//! Cells are indexed row-major: cell `(i, j)` with `i ∈ [0, nx)`,
//! `j ∈ [0, ny)` has flat index `j * nx + i`.

use nalgebra::Vector2;

use crate::error::VennError;

/// Axis-aligned cell bounds `[x0, x1] × [y0, y1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl CellRect {
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }
    /// Corners in counterclockwise order starting at `(x0, y0)`.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            Vector2::new(self.x0, self.y0),
            Vector2::new(self.x1, self.y0),
            Vector2::new(self.x1, self.y1),
            Vector2::new(self.x0, self.y1),
        ]
    }
    /// Point of the rectangle closest to `p`.
    #[inline]
    pub fn closest_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(p.x.clamp(self.x0, self.x1), p.y.clamp(self.y0, self.y1))
    }
}

/// Rectilinear grid: `nx + 1` x-coordinates, `ny + 1` y-coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub nx: usize,
    pub ny: usize,
    pub extent: f64,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Grid {
    /// Build the grid for `radius`, spanning `extent_factor` radii each way.
    ///
    /// The domain's side and area must be finite, which bounds the radius
    /// from above (about `1e153` at the default extent).
    pub fn new(
        nx: usize,
        ny: usize,
        radius: f64,
        extent_factor: f64,
    ) -> Result<Self, VennError> {
        if nx == 0 || ny == 0 {
            return Err(VennError::InvalidDimension { nx, ny });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(VennError::InvalidRadius(radius));
        }
        let extent = extent_factor * radius;
        let side = 2.0 * extent;
        if !(side * side).is_finite() {
            return Err(VennError::InvalidRadius(radius));
        }
        Ok(Self {
            nx,
            ny,
            extent,
            xs: linspace(-extent, extent, nx),
            ys: linspace(-extent, extent, ny),
        })
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.nx * self.ny
    }

    #[inline]
    pub fn cell_index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny);
        j * self.nx + i
    }

    /// Inverse of `cell_index`.
    #[inline]
    pub fn cell_ij(&self, index: usize) -> (usize, usize) {
        (index % self.nx, index / self.nx)
    }

    pub fn cell_rect(&self, index: usize) -> CellRect {
        let (i, j) = self.cell_ij(index);
        CellRect {
            x0: self.xs[i],
            x1: self.xs[i + 1],
            y0: self.ys[j],
            y1: self.ys[j + 1],
        }
    }

    /// Cell rectangles in flat index order.
    pub fn cells(&self) -> impl Iterator<Item = CellRect> + '_ {
        (0..self.num_cells()).map(move |k| self.cell_rect(k))
    }
}

/// `n + 1` evenly spaced values from `lo` to `hi`, endpoints exact.
fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / n as f64;
    let mut out: Vec<f64> = (0..=n).map(|k| lo + step * k as f64).collect();
    out[n] = hi;
    out
}
