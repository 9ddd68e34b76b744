//! Run configuration loading and path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, RunConfig};

/// Config file name looked up in the base directory.
pub const CONFIG_FILE: &str = "playrun.toml";

/// Resolved directory layout for one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePaths {
    /// Runner private data directory.
    pub base_dir: PathBuf,
    pub project_dir: PathBuf,
    pub inventory_dir: PathBuf,
    pub artifact_dir: PathBuf,
}

impl ServicePaths {
    /// Resolve configured directories against `base_dir`. Absolute entries are kept as-is.
    pub fn resolve(base_dir: &Path, config: &RunConfig) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            project_dir: base_dir.join(&config.paths.project_dir),
            inventory_dir: base_dir.join(&config.paths.inventory_dir),
            artifact_dir: base_dir.join(&config.paths.artifact_dir),
        }
    }

    /// Playbook path for a name inside the project directory.
    pub fn playbook(&self, name: &str) -> PathBuf {
        self.project_dir.join(name)
    }

    /// Inventory path for a name inside the inventory directory.
    pub fn inventory(&self, name: &str) -> PathBuf {
        self.inventory_dir.join(name)
    }

    /// Scratch inventory for one run's overlay, hidden next to `base_inventory`.
    ///
    /// Sharing the directory keeps `group_vars/` and `host_vars/` resolution intact.
    pub fn overlay_inventory(base_inventory: &Path, ident: &str) -> PathBuf {
        let stem = base_inventory
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "inventory".to_string());
        base_inventory.with_file_name(format!(".{}.overlay-{}.yml", stem, ident))
    }
}

/// Load `playrun.toml` from `base_dir`, falling back to defaults when absent.
pub fn load_config(base_dir: &Path) -> Result<RunConfig, AppError> {
    let config_path = base_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        log::debug!("No {} in {}, using defaults", CONFIG_FILE, base_dir.display());
        return Ok(RunConfig::default());
    }

    let content = fs::read_to_string(&config_path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<RunConfig, AppError> {
    let config: RunConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
