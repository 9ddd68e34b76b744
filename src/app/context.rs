use crate::domain::{RunConfig, ServicePaths};
use crate::ports::{InventoryInspector, InventoryStore, PlaybookRunner};

/// Application context holding configuration and dependencies for command execution.
pub struct AppContext<S: InventoryStore, R: PlaybookRunner, I: InventoryInspector> {
    paths: ServicePaths,
    config: RunConfig,
    inventories: S,
    runner: R,
    inspector: I,
}

impl<S: InventoryStore, R: PlaybookRunner, I: InventoryInspector> AppContext<S, R, I> {
    /// Create a new application context.
    pub fn new(
        paths: ServicePaths,
        config: RunConfig,
        inventories: S,
        runner: R,
        inspector: I,
    ) -> Self {
        Self { paths, config, inventories, runner, inspector }
    }

    /// Resolved directory layout.
    pub fn paths(&self) -> &ServicePaths {
        &self.paths
    }

    /// Loaded `playrun.toml` (or defaults).
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Get a reference to the inventory store.
    pub fn inventories(&self) -> &S {
        &self.inventories
    }

    /// Get a reference to the playbook runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the inventory inspector.
    pub fn inspector(&self) -> &I {
        &self.inspector
    }
}
