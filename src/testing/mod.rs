mod fake_inventory_inspector;
mod fake_runner;
mod memory_inventory_store;

pub use fake_inventory_inspector::FakeInventoryInspector;
pub use fake_runner::FakeRunner;
pub use memory_inventory_store::MemoryInventoryStore;
