//! Print the total area of each region for a Venn fixture.
//!
//! Usage: cargo run -p venn-mesh --example region_areas -- [n] [radius]

use venn_mesh::prelude::*;

fn main() -> Result<(), VennError> {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(64);
    let radius: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1.0);

    let cfg = VennCfg::default();
    let grid = Grid::new(n, n, radius, cfg.extent_factor)?;
    let layout = CircleLayout::canonical(radius, cfg.center_spacing);
    let table = classify_cells(&grid, &layout, cfg.samples_per_axis);
    let areas = table.region_areas(&grid);

    println!("grid {n}x{n}, radius {radius}");
    for region in Region::ALL {
        println!("{:>10}  {:.6}", region.name(), areas[region.id()]);
    }
    let disk = std::f64::consts::PI * radius * radius;
    println!("{:>10}  {:.6}", "disk", disk);
    Ok(())
}
