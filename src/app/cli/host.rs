//! Host command implementation.

use std::path::PathBuf;

use crate::app::api::AddHostRequest;
use crate::domain::{AppError, HostChange};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum HostCommands {
    /// Add or replace a host under all.children.<group>.hosts
    #[clap(visible_alias = "a")]
    Add {
        /// Host name (inventory key)
        host: String,
        /// Group under all.children (defaults to inventory.group from playrun.toml)
        #[arg(short, long)]
        group: Option<String>,
        /// Host variable, repeatable (e.g. --set ansible_host=127.0.0.1)
        #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
        vars: Vec<String>,
        /// Inventory file name in the inventory directory (defaults to the first found)
        #[arg(short, long)]
        inventory: Option<String>,
        /// Write the result here instead of back to the inventory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run_host(base_dir: PathBuf, command: HostCommands) -> Result<(), AppError> {
    match command {
        HostCommands::Add { host, group, vars, inventory, output } => {
            let request = AddHostRequest { host, group, vars, inventory, output };
            let outcome = crate::app::api::add_host_at(base_dir, request)?;

            let verb = match outcome.change {
                HostChange::Added => "Added",
                HostChange::Replaced => "Updated",
            };
            println!(
                "✅ {} host '{}' in group '{}' ({})",
                verb,
                outcome.host,
                outcome.group,
                outcome.destination.display()
            );
            Ok(())
        }
    }
}
