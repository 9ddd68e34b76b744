//! Inventory host editing.

use std::path::PathBuf;

use crate::domain::{AppError, HostChange, HostName, HostVars};
use crate::ports::InventoryStore;

#[derive(Debug, Clone)]
pub struct AddHostOptions {
    /// Inventory to read.
    pub source: PathBuf,
    /// Where to write the result; defaults to `source`.
    pub destination: Option<PathBuf>,
    pub group: String,
    pub host: String,
    pub vars: HostVars,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddHostOutcome {
    pub host: HostName,
    pub group: String,
    pub change: HostChange,
    pub destination: PathBuf,
}

/// Set `all.children.<group>.hosts.<host>` and write the whole inventory back out.
pub fn add(store: &impl InventoryStore, options: AddHostOptions) -> Result<AddHostOutcome, AppError> {
    let host = HostName::new(&options.host)?;
    let destination = options.destination.unwrap_or_else(|| options.source.clone());

    let mut document = store.load(&options.source)?;
    let change = document.set_host(&options.group, &host, options.vars)?;
    store.save(&document, &destination)?;

    log::info!(
        "{} host '{}' in group '{}' -> {}",
        if change == HostChange::Added { "Added" } else { "Replaced" },
        host,
        options.group,
        destination.display()
    );
    Ok(AddHostOutcome { host, group: options.group, change, destination })
}
