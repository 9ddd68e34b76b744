//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{AnsibleInventoryCommand, AnsibleRunnerCommand, FilesystemInventoryStore};
use crate::app::{
    AppContext,
    commands::{host, inventory, resources, run},
};
use crate::domain::configuration::load_config;
use crate::domain::{AppError, HostVars, Resources, ServicePaths};
use crate::ports::{InventoryAction, InventoryView};

pub use crate::app::commands::host::AddHostOutcome;
pub use crate::app::commands::run::{RunOptions, RunOutcome};

type LiveContext =
    AppContext<FilesystemInventoryStore, AnsibleRunnerCommand, AnsibleInventoryCommand>;

/// Create an `AppContext` for a base directory, reading `playrun.toml` if present.
fn create_context(base_dir: &Path) -> Result<LiveContext, AppError> {
    let config = load_config(base_dir)?;
    let paths = ServicePaths::resolve(base_dir, &config);
    let runner = AnsibleRunnerCommand::new(config.runner.binary.clone());
    let inspector = AnsibleInventoryCommand::new(config.runner.inventory_binary.clone());
    Ok(AppContext::new(paths, config, FilesystemInventoryStore::new(), runner, inspector))
}

// =============================================================================
// Resources API
// =============================================================================

/// Discover playbooks and inventories under the current directory.
pub fn resources() -> Result<Resources, AppError> {
    resources_at(std::env::current_dir()?)
}

/// Discover playbooks and inventories under `base_dir`.
pub fn resources_at(base_dir: impl Into<PathBuf>) -> Result<Resources, AppError> {
    let ctx = create_context(&base_dir.into())?;
    resources::discover(ctx.paths())
}

// =============================================================================
// Host API
// =============================================================================

/// Request for adding or replacing one inventory host.
#[derive(Debug, Clone, Default)]
pub struct AddHostRequest {
    pub host: String,
    /// Target group; `inventory.group` from config when absent.
    pub group: Option<String>,
    /// `key=value` host variables in order.
    pub vars: Vec<String>,
    /// Inventory name (or path) to edit; first discovered when absent.
    pub inventory: Option<String>,
    /// Write here instead of back to the source inventory.
    pub output: Option<PathBuf>,
}

/// Add a host to an inventory under `base_dir`.
pub fn add_host_at(
    base_dir: impl Into<PathBuf>,
    request: AddHostRequest,
) -> Result<AddHostOutcome, AppError> {
    let ctx = create_context(&base_dir.into())?;
    let vars = HostVars::from_assignments(&request.vars)?;

    let inventory_dir = &ctx.paths().inventory_dir;
    let discovered = match request.inventory {
        Some(_) => Vec::new(),
        None => resources::discover(ctx.paths())?.inventories,
    };
    let source =
        resources::resolve(inventory_dir, request.inventory.as_deref(), &discovered, "Inventory")?;

    let options = host::AddHostOptions {
        source,
        destination: request.output,
        group: request.group.unwrap_or_else(|| ctx.config().inventory.group.clone()),
        host: request.host,
        vars,
    };
    host::add(ctx.inventories(), options)
}

// =============================================================================
// Run API
// =============================================================================

/// Run a playbook from the current directory.
pub fn run(options: RunOptions) -> Result<RunOutcome, AppError> {
    run_at(std::env::current_dir()?, options)
}

/// Run a playbook with `base_dir` as the runner's private data directory.
pub fn run_at(base_dir: impl Into<PathBuf>, options: RunOptions) -> Result<RunOutcome, AppError> {
    let ctx = create_context(&base_dir.into())?;
    run::execute(&ctx, options)
}

// =============================================================================
// Inventory API
// =============================================================================

/// Inspect an inventory under `base_dir` with the inventory tool.
pub fn inspect_inventory_at(
    base_dir: impl Into<PathBuf>,
    inventory: Option<&str>,
    action: &InventoryAction,
) -> Result<InventoryView, AppError> {
    let ctx = create_context(&base_dir.into())?;
    inventory::inspect(&ctx, inventory, action)
}
