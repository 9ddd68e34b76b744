use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::Utc;

use super::AppError;
use super::host::parse_assignment;

/// Variables handed to the playbook as `extravars`.
pub type ExtraVars = BTreeMap<String, String>;

/// Everything the runner needs for one playbook run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// Runner working directory (`env/`, `project/`, `inventory/` live here).
    pub private_data_dir: PathBuf,
    pub playbook: PathBuf,
    pub inventory: PathBuf,
    pub extravars: ExtraVars,
    pub artifact_dir: PathBuf,
    /// Host pattern passed through as `--limit`.
    pub limit: Option<String>,
    /// Names the artifact subdirectory for this run.
    pub ident: String,
}

impl RunRequest {
    /// Directory the runner writes this run's artifacts into.
    pub fn run_artifact_dir(&self) -> PathBuf {
        self.artifact_dir.join(&self.ident)
    }

    /// Per-run extra variables file, kept beside (not inside) the run's artifact directory.
    pub fn extravars_file(&self) -> PathBuf {
        self.artifact_dir.join("extravars").join(format!("{}.yml", self.ident))
    }
}

/// Fresh run identifier: UTC timestamp plus process id.
pub fn new_run_ident() -> String {
    format!("{}-{}", Utc::now().format("%Y%m%dT%H%M%S%.3f"), std::process::id())
}

/// Merge `key=value` overrides over a base set of extra variables.
pub fn merge_extravars<S: AsRef<str>>(
    base: &ExtraVars,
    overrides: &[S],
) -> Result<ExtraVars, AppError> {
    let mut merged = base.clone();
    for raw in overrides {
        let (key, value) = parse_assignment(raw.as_ref())?;
        merged.insert(key, value);
    }
    Ok(merged)
}
