use super::exact::{disk_rect_area, disk_rect_coverage};
use super::*;
use crate::cfg::SAMPLED_FRACTION_TOL;
use crate::layout::Circle;
use std::f64::consts::PI;

fn unit_circle() -> Circle {
    Circle {
        center: [0.3, -0.2],
        radius: 1.0,
    }
}

fn rect(x0: f64, x1: f64, y0: f64, y1: f64) -> CellRect {
    CellRect { x0, x1, y0, y1 }
}

#[test]
fn exact_area_whole_disk_and_quadrant() {
    let c = unit_circle();
    let [cx, cy] = c.center;
    let big = rect(cx - 5.0, cx + 5.0, cy - 5.0, cy + 5.0);
    assert!((disk_rect_area(&c, &big) - PI).abs() < 1e-12);
    let quad = rect(cx, cx + 5.0, cy, cy + 5.0);
    assert!((disk_rect_area(&c, &quad) - PI / 4.0).abs() < 1e-12);
    let half = rect(cx - 5.0, cx + 5.0, cy - 5.0, cy);
    assert!((disk_rect_area(&c, &half) - PI / 2.0).abs() < 1e-12);
}

#[test]
fn exact_area_inside_and_outside() {
    let c = unit_circle();
    let inner = rect(0.0, 0.5, -0.5, 0.0);
    assert!((disk_rect_area(&c, &inner) - inner.area()).abs() < 1e-12);
    assert!((disk_rect_coverage(&c, &inner) - 1.0).abs() < 1e-12);
    let outer = rect(3.0, 4.0, 3.0, 4.0);
    assert_eq!(disk_rect_area(&c, &outer), 0.0);
    // Corner region outside the disk but inside its bounding box.
    let corner = rect(1.1, 1.3, 0.6, 0.8);
    assert_eq!(disk_rect_area(&c, &corner), 0.0);
}

#[test]
fn exact_area_thin_strip_matches_segment_formula() {
    // Strip y ∈ [h, r] above a chord at height h: circular segment area.
    let c = Circle {
        center: [0.0, 0.0],
        radius: 2.0,
    };
    let h: f64 = 1.2;
    let r = c.radius;
    let segment = r * r * (h / r).acos() - h * (r * r - h * h).sqrt();
    let strip = rect(-3.0, 3.0, h, 3.0);
    assert!((disk_rect_area(&c, &strip) - segment).abs() < 1e-12);
}

#[test]
fn exact_areas_partition_the_disk() {
    let c = unit_circle();
    let g = Grid {
        nx: 7,
        ny: 5,
        extent: 2.0,
        xs: (0..=7).map(|k| -2.0 + 4.0 * k as f64 / 7.0).collect(),
        ys: (0..=5).map(|k| -2.0 + 4.0 * k as f64 / 5.0).collect(),
    };
    let total: f64 = g.cells().map(|r| disk_rect_area(&c, &r)).sum();
    assert!((total - PI).abs() < 1e-10);
}

#[test]
fn rows_sum_to_one_and_pure_cells_are_exact() {
    let layout = CircleLayout::canonical(1.0, 1.0);
    let grid = Grid::new(12, 9, 1.0, 2.0).unwrap();
    let table = classify_cells(&grid, &layout, 16);
    assert_eq!(table.num_cells(), 108);
    for row in &table.rows {
        let s: f64 = row.iter().sum();
        assert!((s - 1.0).abs() < 1e-12);
        assert!(row.iter().all(|&f| (0.0..=1.0).contains(&f)));
    }
    // Corner cells are far from every circle.
    for k in [0, 11, 96, 107] {
        let mut want = [0.0; REGION_COUNT];
        want[0] = 1.0;
        assert_eq!(table.rows[k], want);
    }
}

#[test]
fn single_cell_covering_domain_sees_every_region() {
    let layout = CircleLayout::canonical(1.0, 1.0);
    let grid = Grid::new(1, 1, 1.0, 2.0).unwrap();
    let table = classify_cells(&grid, &layout, 64);
    for region in Region::ALL {
        assert!(table.fraction(0, region) > 0.0, "{region:?} missing");
    }
}

/// Largest per-cell gap between sampled and exact circle coverage.
fn worst_coverage_error(n: usize, samples_per_axis: usize) -> f64 {
    let layout = CircleLayout::canonical(1.0, 1.0);
    let grid = Grid::new(n, n, 1.0, 2.0).unwrap();
    let table = classify_cells(&grid, &layout, samples_per_axis);
    let mut worst: f64 = 0.0;
    for (circle, bit) in layout.circles() {
        for (k, rect) in grid.cells().enumerate() {
            let sampled: f64 = Region::ALL
                .iter()
                .filter(|r| r.mask() & bit != 0)
                .map(|&r| table.fraction(k, r))
                .sum();
            worst = worst.max((sampled - disk_rect_coverage(&circle, &rect)).abs());
        }
    }
    worst
}

#[test]
fn sampled_coverage_tracks_exact_coverage() {
    let s = crate::cfg::DEFAULT_SAMPLES_PER_AXIS;
    for n in [4, 9, 16, 32] {
        let worst = worst_coverage_error(n, s);
        assert!(
            worst < SAMPLED_FRACTION_TOL,
            "n={n}: worst error {worst}"
        );
    }
}

#[test]
fn coarse_sampling_exceeds_the_bound() {
    // The tolerance must be tight enough to notice a much smaller S.
    assert!(worst_coverage_error(4, 4) > SAMPLED_FRACTION_TOL);
}

#[test]
fn region_areas_add_up_to_circle_area() {
    let layout = CircleLayout::canonical(1.0, 1.0);
    let grid = Grid::new(20, 20, 1.0, 2.0).unwrap();
    let table = classify_cells(&grid, &layout, 64);
    let areas = table.region_areas(&grid);
    let domain = 16.0;
    assert!((areas.iter().sum::<f64>() - domain).abs() < 1e-9);
    let a_total: f64 = Region::ALL
        .iter()
        .filter(|r| r.mask() & crate::region::MASK_A != 0)
        .map(|r| areas[r.id()])
        .sum();
    assert!((a_total - PI).abs() / PI < 1e-2);
}

#[test]
fn classification_is_deterministic() {
    let layout = CircleLayout::canonical(0.7, 1.0);
    let grid = Grid::new(15, 11, 0.7, 2.0).unwrap();
    let first = classify_cells(&grid, &layout, 24);
    let second = classify_cells(&grid, &layout, 24);
    assert_eq!(first, second);
}
