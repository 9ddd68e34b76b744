//! playrun: Edit Ansible inventories and run playbooks through ansible-runner.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AddHostOutcome, AddHostRequest, RunOptions, RunOutcome, add_host_at, inspect_inventory_at,
    resources, resources_at, run, run_at,
};
pub use domain::{
    AppError, HostChange, HostName, HostVars, InventoryDocument, Resources, RunResult, RunStats,
    RunStatus,
};
pub use ports::{InventoryAction, InventoryView};
