//! Run configuration domain models.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::inventory::DEFAULT_GROUP;
use crate::domain::run_request::ExtraVars;

/// Configuration loaded from `playrun.toml` in the base directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Resource directory layout.
    #[serde(default)]
    pub paths: PathsConfig,
    /// External tool configuration.
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Inventory editing defaults.
    #[serde(default)]
    pub inventory: InventoryConfig,
    /// Extra variables applied to every run.
    #[serde(default)]
    pub extravars: ExtraVars,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.paths.validate()?;
        self.runner.validate()?;
        self.inventory.validate()?;
        if self.extravars.keys().any(|key| key.trim().is_empty()) {
            return Err(AppError::InvalidConfig("extravars keys must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Directories relative to the base (private data) directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Playbook directory.
    #[serde(default = "default_project_dir")]
    pub project_dir: String,
    #[serde(default = "default_inventory_dir")]
    pub inventory_dir: String,
    /// Where the runner writes per-run artifacts.
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            project_dir: default_project_dir(),
            inventory_dir: default_inventory_dir(),
            artifact_dir: default_artifact_dir(),
        }
    }
}

impl PathsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("project_dir", &self.project_dir),
            ("inventory_dir", &self.inventory_dir),
            ("artifact_dir", &self.artifact_dir),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::InvalidConfig(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}

fn default_project_dir() -> String {
    "project".to_string()
}

fn default_inventory_dir() -> String {
    "inventory".to_string()
}

fn default_artifact_dir() -> String {
    "artifact".to_string()
}

/// External tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Playbook runner executable.
    #[serde(default = "default_runner_binary")]
    pub binary: String,
    /// Inventory inspection executable.
    #[serde(default = "default_inventory_binary")]
    pub inventory_binary: String,
    /// Default host pattern for `--limit`.
    #[serde(default)]
    pub limit: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            binary: default_runner_binary(),
            inventory_binary: default_inventory_binary(),
            limit: None,
        }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.binary.trim().is_empty() {
            return Err(AppError::InvalidConfig("runner.binary must not be empty".to_string()));
        }
        if self.inventory_binary.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "runner.inventory_binary must not be empty".to_string(),
            ));
        }
        if matches!(&self.limit, Some(limit) if limit.trim().is_empty()) {
            return Err(AppError::InvalidConfig("runner.limit must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_runner_binary() -> String {
    "ansible-runner".to_string()
}

fn default_inventory_binary() -> String {
    "ansible-inventory".to_string()
}

/// Inventory editing defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryConfig {
    /// Group under `all.children` that host edits target.
    #[serde(default = "default_group")]
    pub group: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { group: default_group() }
    }
}

impl InventoryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.group.trim().is_empty() {
            return Err(AppError::InvalidConfig("inventory.group must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}
