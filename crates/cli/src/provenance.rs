use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Provenance document written next to every file output.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub planar_version: &'static str,
    pub callsite: Callsite,
    pub inputs: Vec<String>,
    pub params: Value,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Provenance {
    /// Provenance for the current build with the caller's location.
    #[track_caller]
    pub fn new(params: Value) -> Self {
        let loc = Location::caller();
        Self {
            code_rev: current_git_rev(),
            planar_version: planar::VERSION,
            callsite: Callsite {
                file: loc.file(),
                line: loc.line(),
            },
            inputs: Vec::new(),
            params,
            outputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: &Path) -> Self {
        self.inputs.push(input.to_string_lossy().into_owned());
        self
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, mut prov: Provenance) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    prov.outputs.push(artifact.to_string_lossy().into_owned());
    fs::write(&provenance_path, serde_json::to_vec_pretty(&prov)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Git revision from the build environment, the runtime environment, or `git`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
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
