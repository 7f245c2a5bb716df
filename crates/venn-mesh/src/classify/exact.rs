//! Exact area of a closed disk intersected with an axis-aligned rectangle.
//!
//! Works in units of the radius (unit disk at the origin) and integrates the
//! vertical overlap of rectangle and disk across x. Breakpoints split the
//! x-range where the disk's arcs cross `y0` or `y1`; on each piece the
//! integrand is a constant or `±sqrt(1 - u²)`, whose antiderivative is
//! closed-form.

use crate::grid::CellRect;
use crate::layout::Circle;

/// `∫₀ᵗ sqrt(1 - u²) du` for `t ∈ [-1, 1]` (odd in `t`).
#[inline]
fn half_chord_integral(t: f64) -> f64 {
    let t = t.clamp(-1.0, 1.0);
    0.5 * (t * (1.0 - t * t).max(0.0).sqrt() + t.asin())
}

#[inline]
fn half_chord(u: f64) -> f64 {
    (1.0 - u * u).max(0.0).sqrt()
}

/// Area of the unit disk inside `[x0, x1] × [y0, y1]`.
fn unit_disk_rect_area(x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let lo = x0.max(-1.0);
    let hi = x1.min(1.0);
    if lo >= hi || y0 >= y1 {
        return 0.0;
    }
    let mut cuts = vec![lo, hi];
    for d in [y0.abs(), y1.abs()] {
        if d < 1.0 {
            let u = (1.0 - d * d).sqrt();
            cuts.extend([-u, u].into_iter().filter(|&b| b > lo && b < hi));
        }
    }
    cuts.sort_by(|a, b| a.total_cmp(b));

    let mut area = 0.0;
    for w in cuts.windows(2) {
        let (p, q) = (w[0], w[1]);
        let len = q - p;
        if len <= 0.0 {
            continue;
        }
        let a_mid = half_chord(0.5 * (p + q));
        let top_is_edge = y1 < a_mid;
        let bottom_is_edge = y0 > -a_mid;
        let top = if top_is_edge { y1 } else { a_mid };
        let bottom = if bottom_is_edge { y0 } else { -a_mid };
        if top <= bottom {
            continue;
        }
        let arc = half_chord_integral(q) - half_chord_integral(p);
        let top_int = if top_is_edge { y1 * len } else { arc };
        let bottom_int = if bottom_is_edge { y0 * len } else { -arc };
        area += top_int - bottom_int;
    }
    area.clamp(0.0, (x1 - x0) * (y1 - y0))
}

/// `rect` in coordinates centered on `circle` and scaled by its radius.
#[inline]
fn normalized(circle: &Circle, rect: &CellRect) -> (f64, f64, f64, f64) {
    let [cx, cy] = circle.center;
    let r = circle.radius;
    (
        (rect.x0 - cx) / r,
        (rect.x1 - cx) / r,
        (rect.y0 - cy) / r,
        (rect.y1 - cy) / r,
    )
}

/// Area of `circle ∩ rect`.
pub fn disk_rect_area(circle: &Circle, rect: &CellRect) -> f64 {
    let (x0, x1, y0, y1) = normalized(circle, rect);
    let r = circle.radius;
    (unit_disk_rect_area(x0, x1, y0, y1) * r * r).min(rect.area())
}

/// Fraction of `rect` covered by `circle`, in `[0, 1]`.
pub fn disk_rect_coverage(circle: &Circle, rect: &CellRect) -> f64 {
    let (x0, x1, y0, y1) = normalized(circle, rect);
    let cell = (x1 - x0) * (y1 - y0);
    if cell <= 0.0 {
        return 0.0;
    }
    (unit_disk_rect_area(x0, x1, y0, y1) / cell).clamp(0.0, 1.0)
}
