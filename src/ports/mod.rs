mod inventory_inspector;
mod inventory_store;
mod playbook_runner;

pub use inventory_inspector::{InventoryAction, InventoryInspector, InventoryView};
pub use inventory_store::InventoryStore;
pub use playbook_runner::PlaybookRunner;
