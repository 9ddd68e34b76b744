use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{InventoryAction, InventoryInspector, InventoryView};

/// Inspects inventories through the `ansible-inventory` command line.
#[derive(Debug, Clone)]
pub struct AnsibleInventoryCommand {
    binary: String,
}

impl AnsibleInventoryCommand {
    pub fn new(binary: impl Into<String>) -> Self {
        Self { binary: binary.into() }
    }

    pub fn command_args(inventory: &Path, action: &InventoryAction) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--inventory".into(), inventory.as_os_str().to_owned()];
        match action {
            InventoryAction::List => args.push("--list".into()),
            InventoryAction::Graph => args.push("--graph".into()),
            InventoryAction::Host(host) => {
                args.push("--host".into());
                args.push(host.as_str().into());
            }
        }
        args
    }
}

impl Default for AnsibleInventoryCommand {
    fn default() -> Self {
        Self::new("ansible-inventory")
    }
}

impl InventoryInspector for AnsibleInventoryCommand {
    fn inspect(
        &self,
        inventory: &Path,
        action: &InventoryAction,
    ) -> Result<InventoryView, AppError> {
        let args = Self::command_args(inventory, action);
        log::debug!("Spawning {} with {:?}", self.binary, args);

        let output = Command::new(&self.binary).args(&args).output().map_err(|e| {
            AppError::RunnerLaunch { tool: self.binary.clone(), details: e.to_string() }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::RunnerFailed {
                tool: self.binary.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        match action {
            InventoryAction::Graph => Ok(InventoryView::Text(stdout)),
            InventoryAction::List | InventoryAction::Host(_) => serde_json::from_str(&stdout)
                .map(InventoryView::Json)
                .map_err(|err| AppError::ParseError {
                    what: format!("{} output", self.binary),
                    details: err.to_string(),
                }),
        }
    }
}
