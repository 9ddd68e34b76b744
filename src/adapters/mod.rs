pub mod ansible_inventory_command;
pub mod ansible_runner_command;
pub mod inventory_filesystem;
pub mod runner_artifacts;

pub use ansible_inventory_command::AnsibleInventoryCommand;
pub use ansible_runner_command::AnsibleRunnerCommand;
pub use inventory_filesystem::FilesystemInventoryStore;
pub use runner_artifacts::RunArtifacts;
