//! Provenance sidecars: every file a run writes gets a
//! `<file name>.provenance.json` next to it describing the run.

use anyhow::{Context, Result};
use polyclose::prelude::{Angle, CorrectionResult};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ViewParams {
    pub size: f64,
    pub zoom: f64,
}

/// Inputs, closure summary and artifacts of one `correct` or `polygon` run.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub code_rev: String,
    pub version: &'static str,
    pub command: &'static str,
    /// Measured angles as given, in `D:M:S` form.
    pub angles: Vec<String>,
    pub sides: usize,
    pub error_seconds: i128,
    pub residual_seconds: i128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewParams>,
    pub outputs: Vec<String>,
}

impl RunRecord {
    pub fn new(command: &'static str, raw: &[Angle], result: &CorrectionResult) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: polyclose::VERSION,
            command,
            angles: raw.iter().map(|a| format!("{a:#}")).collect(),
            sides: result.sides(),
            error_seconds: result.error_seconds,
            residual_seconds: result.residual_seconds(),
            view: None,
            outputs: Vec::new(),
        }
    }

    pub fn with_view(mut self, view: ViewParams) -> Self {
        self.view = Some(view);
        self
    }

    /// Note an artifact that has been written.
    pub fn push_output(&mut self, path: &Path) {
        self.outputs.push(path.to_string_lossy().into_owned());
    }

    /// One sidecar per recorded output; each lists all outputs of the run.
    pub fn write_sidecars(&self) -> Result<Vec<PathBuf>> {
        if self.outputs.is_empty() {
            return Ok(Vec::new());
        }
        let body = serde_json::to_vec_pretty(self)?;
        self.outputs
            .iter()
            .map(|artifact| {
                let path = sidecar_path(Path::new(artifact));
                fs::write(&path, &body).with_context(|| format!("writing {}", path.display()))?;
                Ok(path)
            })
            .collect()
    }
}

/// `out/report.csv` -> `out/report.csv.provenance.json`. The full file name
/// is kept so a JSON report and a CSV table sharing a stem do not collide.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}
