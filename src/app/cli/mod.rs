//! CLI Adapter.

mod host;
mod inventory;
mod run;

use std::path::PathBuf;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "playrun")]
#[command(version)]
#[command(
    about = "Edit Ansible inventories and run playbooks through ansible-runner",
    long_about = None
)]
struct Cli {
    /// Runner private data directory (contains project/, inventory/, artifact/)
    #[arg(short = 'C', long, global = true)]
    base_dir: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available playbooks and inventories
    #[clap(visible_alias = "ls")]
    Resources {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit inventory hosts
    Host {
        #[command(subcommand)]
        command: host::HostCommands,
    },
    /// Run a playbook through ansible-runner
    #[clap(visible_alias = "r")]
    Run(run::RunArgs),
    /// Inspect an inventory with ansible-inventory
    #[clap(visible_alias = "inv")]
    Inventory {
        #[command(subcommand)]
        command: inventory::InventoryCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let base_dir = match cli.base_dir.map(Ok).unwrap_or_else(std::env::current_dir) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result: Result<i32, AppError> = match cli.command {
        Commands::Resources { json } => run_resources(base_dir, json).map(|_| 0),
        Commands::Host { command } => host::run_host(base_dir, command).map(|_| 0),
        Commands::Run(args) => run::run_playbook(base_dir, args),
        Commands::Inventory { command } => {
            inventory::run_inventory(base_dir, command).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if quiet { log::LevelFilter::Error } else { level })
        .format_timestamp(None)
        .init();
}

fn run_resources(base_dir: PathBuf, json: bool) -> Result<(), AppError> {
    let resources = crate::app::api::resources_at(base_dir)?.sorted();

    if json {
        let rendered = serde_json::to_string_pretty(&resources).map_err(|err| {
            AppError::ParseError { what: "resources".to_string(), details: err.to_string() }
        })?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("Playbooks:");
    if resources.playbooks.is_empty() {
        println!("  (none)");
    }
    for name in &resources.playbooks {
        println!("  • {}", name);
    }
    println!("Inventories:");
    if resources.inventories.is_empty() {
        println!("  (none)");
    }
    for name in &resources.inventories {
        println!("  • {}", name);
    }
    Ok(())
}
