use std::path::Path;

use serde_json::Value;

use crate::domain::{AppError, HostName};

/// What to ask the inventory tool about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryAction {
    /// Full group/host/vars structure.
    List,
    /// Text tree of groups and hosts.
    Graph,
    /// Variables of one host.
    Host(HostName),
}

/// Inventory tool output.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryView {
    Json(Value),
    Text(String),
}

/// Resolves an inventory the way the automation framework sees it.
pub trait InventoryInspector {
    fn inspect(
        &self,
        inventory: &Path,
        action: &InventoryAction,
    ) -> Result<InventoryView, AppError>;
}
