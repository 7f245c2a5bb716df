mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use venn_mesh::{generate, VennMesh};

#[derive(Parser)]
#[command(name = "venn")]
#[command(about = "Generate Venn-diagram material-set mesh fixtures")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Fixture parameters shared by subcommands.
#[derive(Args, Debug)]
struct FixtureArgs {
    /// full | sparse_by_material | sparse_by_element
    #[arg(long, default_value = "full")]
    matset: String,
    #[arg(long, default_value_t = 32)]
    nx: usize,
    #[arg(long, default_value_t = 32)]
    ny: usize,
    #[arg(long, default_value_t = 0.25)]
    radius: f64,
}

#[derive(Subcommand)]
enum Action {
    /// Write the fixture as JSON plus a provenance sidecar
    Generate {
        #[command(flatten)]
        fixture: FixtureArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Log per-material areas of a fixture without writing anything
    Summary {
        #[command(flatten)]
        fixture: FixtureArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate { fixture, out } => write_fixture(&fixture, &out).map(|_| ()),
        Action::Summary { fixture } => summary(&fixture),
        Action::Report => report(),
    }
}

fn build(fixture: &FixtureArgs) -> Result<VennMesh> {
    let mesh = generate(&fixture.matset, fixture.nx, fixture.ny, fixture.radius)
        .with_context(|| format!("generating venn fixture {fixture:?}"))?;
    mesh.verify().context("generated fixture failed verification")?;
    Ok(mesh)
}

/// Write `out` and its provenance sidecar; returns the sidecar path.
fn write_fixture(fixture: &FixtureArgs, out: &Path) -> Result<PathBuf> {
    let mesh = build(fixture)?;
    tracing::info!(
        matset = %mesh.params.matset_type,
        cells = mesh.num_cells(),
        entries = mesh.matset.num_entries(),
        out = %out.display(),
        "generate"
    );
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&mesh)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(json!({
        "matset": fixture.matset,
        "nx": fixture.nx,
        "ny": fixture.ny,
        "radius": fixture.radius,
        "lib_version": venn_mesh::VERSION,
    }))
    .with_fixture(&mesh);
    provenance::write_sidecar(out, payload)
}

fn summary(fixture: &FixtureArgs) -> Result<()> {
    let mesh = build(fixture)?;
    let area = &mesh
        .field("area")
        .context("fixture has no area field")?
        .values;
    let mut totals = [0.0; venn_mesh::region::REGION_COUNT];
    for (row, cell_area) in mesh.matset.to_dense().iter().zip(area) {
        for (acc, f) in totals.iter_mut().zip(row) {
            *acc += f * cell_area;
        }
    }
    for region in venn_mesh::Region::ALL {
        tracing::info!(
            material = region.name(),
            id = region.id(),
            area = totals[region.id()],
            "material"
        );
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": venn_mesh::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
