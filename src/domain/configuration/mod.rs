pub mod loader;
pub mod run_config;

pub use loader::{CONFIG_FILE, ServicePaths, load_config, parse_config_content};
pub use run_config::{InventoryConfig, PathsConfig, RunConfig, RunnerConfig};
