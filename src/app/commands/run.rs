//! Playbook execution: resolve resources, build the request, hand it to the runner.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::resources;
use crate::domain::run_request::{merge_extravars, new_run_ident};
use crate::domain::{AppError, HostName, Resources, RunRequest, RunResult, ServicePaths};
use crate::ports::{InventoryInspector, InventoryStore, PlaybookRunner};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Playbook name in the project directory, or a path. First discovered when absent.
    pub playbook: Option<String>,
    /// Inventory name in the inventory directory, or a path. First discovered when absent.
    pub inventory: Option<String>,
    /// `key=value` overrides on top of the configured extra variables.
    pub extravars: Vec<String>,
    /// Host pattern; falls back to `runner.limit` from config.
    pub limit: Option<String>,
    /// `HOST` or `HOST@GROUP` entries added to a scratch copy of the inventory.
    pub overlay_hosts: Vec<String>,
    /// Fixed run ident instead of a generated one.
    pub ident: Option<String>,
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Discovery found nothing to run; the runner was not invoked.
    NothingToRun(Resources),
    Completed { playbook: PathBuf, inventory: PathBuf, result: RunResult },
}

pub fn execute<S, R, I>(
    ctx: &AppContext<S, R, I>,
    options: RunOptions,
) -> Result<RunOutcome, AppError>
where
    S: InventoryStore,
    R: PlaybookRunner,
    I: InventoryInspector,
{
    let paths = ctx.paths();
    let config = ctx.config();

    let discovered = if options.playbook.is_some() && options.inventory.is_some() {
        Resources::default()
    } else {
        let found = resources::discover(paths)?;
        let playbook_missing = options.playbook.is_none() && found.playbooks.is_empty();
        let inventory_missing = options.inventory.is_none() && found.inventories.is_empty();
        if playbook_missing || inventory_missing {
            return Ok(RunOutcome::NothingToRun(found));
        }
        found
    };

    let playbook = resources::resolve(
        &paths.project_dir,
        options.playbook.as_deref(),
        &discovered.playbooks,
        "Playbook",
    )?;
    let inventory = resources::resolve(
        &paths.inventory_dir,
        options.inventory.as_deref(),
        &discovered.inventories,
        "Inventory",
    )?;

    let extravars = merge_extravars(&config.extravars, &options.extravars)?;
    let ident = options.ident.unwrap_or_else(new_run_ident);

    let overlay = if options.overlay_hosts.is_empty() {
        None
    } else {
        let overlay_path = ServicePaths::overlay_inventory(&inventory, &ident);
        let mut document = ctx.inventories().load(&inventory)?;
        for entry in &options.overlay_hosts {
            let (host, group) = parse_overlay_entry(entry, &config.inventory.group)?;
            document.add_host_to_group(&group, &host)?;
        }
        ctx.inventories().save(&document, &overlay_path)?;
        log::info!("Overlay inventory written to {}", overlay_path.display());
        Some(overlay_path)
    };

    let request = RunRequest {
        private_data_dir: paths.base_dir.clone(),
        playbook: playbook.clone(),
        inventory: overlay.clone().unwrap_or_else(|| inventory.clone()),
        extravars,
        artifact_dir: paths.artifact_dir.clone(),
        limit: options.limit.or_else(|| config.runner.limit.clone()),
        ident,
    };

    log::info!("Executing {} with {}", playbook.display(), request.inventory.display());
    let result = ctx.runner().run(&request);

    if let Some(overlay_path) = &overlay {
        if let Err(err) = ctx.inventories().remove(overlay_path) {
            log::warn!("Could not remove overlay inventory {}: {}", overlay_path.display(), err);
        }
    }

    Ok(RunOutcome::Completed { playbook, inventory, result: result? })
}

/// Split `HOST@GROUP`; a bare `HOST` goes to `default_group`.
pub fn parse_overlay_entry(raw: &str, default_group: &str) -> Result<(HostName, String), AppError> {
    let (host, group) = match raw.split_once('@') {
        Some((host, group)) if !group.trim().is_empty() => (host, group.trim()),
        Some(_) => return Err(AppError::config_error(format!("Empty group in overlay '{}'", raw))),
        None => (raw, default_group),
    };
    Ok((HostName::new(host)?, group.to_string()))
}
