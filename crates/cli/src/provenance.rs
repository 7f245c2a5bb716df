use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use venn_mesh::VennMesh;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    /// Inputs the fixture was generated from.
    pub params: Value,
    /// Shape of the written fixture (encoding, cell and entry counts).
    pub fixture: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            fixture: Value::Null,
        }
    }

    /// Record the encoding and sizes of the generated fixture.
    pub fn with_fixture(mut self, mesh: &VennMesh) -> Self {
        self.fixture = json!({
            "encoding": mesh.params.matset_type,
            "nx": mesh.topology.nx,
            "ny": mesh.topology.ny,
            "cells": mesh.num_cells(),
            "entries": mesh.matset.num_entries(),
            "materials": mesh.material_map.len(),
            "fields": mesh.fields.keys().collect::<Vec<_>>(),
        });
        self
    }
}

/// Write `<artifact>.provenance.json` containing the git commit, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "fixture": payload.fixture,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("fixture"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build or run time), else `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/fixtures/venn_full.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/fixtures/venn_full.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("venn.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"matset": "full", "nx": 4}));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["nx"], 4);
        assert!(parsed["fixture"].is_null());
    }

    #[test]
    fn fixture_summary_names_encoding_and_sizes() {
        let mesh = venn_mesh::generate("sparse_by_material", 5, 3, 1.0).unwrap();
        let payload = Payload::new(json!({})).with_fixture(&mesh);
        assert_eq!(payload.fixture["encoding"], "sparse_by_material");
        assert_eq!(payload.fixture["cells"], 15);
        assert_eq!(payload.fixture["entries"], mesh.matset.num_entries());
        assert_eq!(payload.fixture["materials"], 8);
        assert_eq!(payload.fixture["fields"][0], "area");
    }
}
