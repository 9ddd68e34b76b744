use std::path::PathBuf;

use crate::domain::{AppError, HostName};
use crate::ports::{InventoryAction, InventoryView};
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct InventoryTarget {
    /// Inventory file name in the inventory directory (defaults to the first found)
    #[arg(short, long)]
    inventory: Option<String>,
}

#[derive(Subcommand)]
pub enum InventoryCommands {
    /// Print the resolved inventory as JSON
    List(InventoryTarget),
    /// Print the group/host tree
    Graph(InventoryTarget),
    /// Print the variables of one host as JSON
    Host {
        host: String,
        #[command(flatten)]
        target: InventoryTarget,
    },
}

pub fn run_inventory(base_dir: PathBuf, command: InventoryCommands) -> Result<(), AppError> {
    let (action, target) = match command {
        InventoryCommands::List(target) => (InventoryAction::List, target),
        InventoryCommands::Graph(target) => (InventoryAction::Graph, target),
        InventoryCommands::Host { host, target } => {
            (InventoryAction::Host(HostName::new(&host)?), target)
        }
    };

    let view =
        crate::app::api::inspect_inventory_at(base_dir, target.inventory.as_deref(), &action)?;
    match view {
        InventoryView::Json(value) => {
            let rendered = serde_json::to_string_pretty(&value).map_err(|err| {
                AppError::ParseError { what: "inventory".to_string(), details: err.to_string() }
            })?;
            println!("{}", rendered);
        }
        InventoryView::Text(text) => print!("{}", text),
    }
    Ok(())
}
