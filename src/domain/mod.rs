pub mod configuration;
pub mod error;
pub mod host;
pub mod inventory;
pub mod resources;
pub mod run_request;
pub mod run_result;

pub use configuration::{RunConfig, ServicePaths};
pub use error::AppError;
pub use host::{HostName, HostVars};
pub use inventory::{DEFAULT_GROUP, HostChange, InventoryDocument};
pub use resources::Resources;
pub use run_request::{ExtraVars, RunRequest};
pub use run_result::{RunResult, RunStats, RunStatus};
