//! Canonical placement of circles A, B, C.
//!
//! Centers sit on an equilateral triangle of side `spacing * r` centered on
//! the origin: A on top, B lower-left, C lower-right. With `spacing < 2`
//! every pair overlaps; with `spacing < √3` the triangle's centroid (the
//! origin) lies inside all three, so the triple region is non-empty too.
//! Both hold for every radius because the layout scales with `r`.

use nalgebra::Vector2;
use serde::Serialize;

use crate::grid::CellRect;
use crate::region::{MASK_A, MASK_B, MASK_C};

/// Closed disk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle {
    pub center: [f64; 2],
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn center_v(&self) -> Vector2<f64> {
        Vector2::new(self.center[0], self.center[1])
    }

    /// Boundary points count as inside. Compared in units of the radius so
    /// tiny and huge radii neither underflow nor overflow.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        ((p - self.center_v()) / self.radius).norm_squared() <= 1.0
    }

    /// All of `rect` lies in the disk (convexity: corners suffice).
    pub fn contains_rect(&self, rect: &CellRect) -> bool {
        rect.corners().iter().all(|&c| self.contains(c))
    }

    /// `rect` and the disk share no point.
    pub fn misses_rect(&self, rect: &CellRect) -> bool {
        let c = self.center_v();
        ((rect.closest_point(c) - c) / self.radius).norm_squared() > 1.0
    }
}

/// The three circles of the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CircleLayout {
    pub a: Circle,
    pub b: Circle,
    pub c: Circle,
}

impl CircleLayout {
    /// Triangle of side `spacing * radius` around the origin.
    pub fn canonical(radius: f64, spacing: f64) -> Self {
        let side = spacing * radius;
        let circum = side / 3f64.sqrt();
        let circle = |x: f64, y: f64| Circle {
            center: [x, y],
            radius,
        };
        Self {
            a: circle(0.0, circum),
            b: circle(-0.5 * side, -0.5 * circum),
            c: circle(0.5 * side, -0.5 * circum),
        }
    }

    /// Circles paired with their signature bit, in A, B, C order.
    #[inline]
    pub fn circles(&self) -> [(Circle, u8); 3] {
        [(self.a, MASK_A), (self.b, MASK_B), (self.c, MASK_C)]
    }

    /// Signature bitmask of the circles containing `p`.
    #[inline]
    pub fn signature(&self, p: Vector2<f64>) -> u8 {
        self.circles()
            .iter()
            .filter(|(c, _)| c.contains(p))
            .fold(0, |acc, (_, bit)| acc | bit)
    }

    /// Largest distance from the origin covered by any circle.
    pub fn reach(&self) -> f64 {
        self.circles()
            .iter()
            .map(|(c, _)| c.center_v().norm() + c.radius)
            .fold(0.0, f64::max)
    }
}
