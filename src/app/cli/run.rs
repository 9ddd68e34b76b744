//! Run command implementation.

use std::path::{Path, PathBuf};

use crate::app::api::{RunOptions, RunOutcome};
use crate::domain::{AppError, RunResult};
use clap::Args;

#[derive(Args)]
pub struct RunArgs {
    /// Playbook file name in the project directory (defaults to the first found)
    #[arg(short, long)]
    playbook: Option<String>,
    /// Inventory file name in the inventory directory (defaults to the first found)
    #[arg(short, long)]
    inventory: Option<String>,
    /// Extra variable, repeatable (e.g. -e custom_var=edge_node_B)
    #[arg(short = 'e', long = "extra-var", value_name = "KEY=VALUE")]
    extravars: Vec<String>,
    /// Host pattern to limit the run to
    #[arg(short, long)]
    limit: Option<String>,
    /// Add HOST or HOST@GROUP for this run only. The scratch inventory sits next to the
    /// base one, so group_vars/ and host_vars/ still apply, and is removed afterwards.
    #[arg(long = "overlay-host", value_name = "HOST[@GROUP]")]
    overlay_hosts: Vec<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Returns the process exit code: 0 on a successful run, otherwise the runner's rc.
pub fn run_playbook(base_dir: PathBuf, args: RunArgs) -> Result<i32, AppError> {
    let options = RunOptions {
        playbook: args.playbook,
        inventory: args.inventory,
        extravars: args.extravars,
        limit: args.limit,
        overlay_hosts: args.overlay_hosts,
        ident: None,
    };

    match crate::app::api::run_at(base_dir, options)? {
        RunOutcome::NothingToRun(_) => {
            println!("No playbooks or inventories found.");
            Ok(0)
        }
        RunOutcome::Completed { playbook, inventory, result } => {
            if args.json {
                let rendered = serde_json::to_string_pretty(&result).map_err(|err| {
                    AppError::ParseError { what: "run result".to_string(), details: err.to_string() }
                })?;
                println!("{}", rendered);
            } else {
                print_result(&playbook, &inventory, &result);
            }
            Ok(exit_code(&result))
        }
    }
}

fn print_result(playbook: &Path, inventory: &Path, result: &RunResult) {
    println!("Executed playbook: {} with inventory: {}", file_label(playbook), file_label(inventory));
    println!("Status: {}, RC: {}", result.status, result.rc);

    if let Some(stats) = &result.stats {
        println!("Stats:");
        for host in stats.hosts() {
            let t = stats.tally(host);
            println!(
                "  {}  ok={} changed={} unreachable={} failed={} skipped={} rescued={} ignored={}",
                host, t.ok, t.changed, t.unreachable, t.failed, t.skipped, t.rescued, t.ignored
            );
        }
    }

    if let Some(stdout) = &result.stdout {
        println!("\n--- Stdout ---");
        println!("{}", stdout.trim_end());
    }
}

fn file_label(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_else(|| {
        path.display().to_string()
    })
}

fn exit_code(result: &RunResult) -> i32 {
    if result.is_success() { 0 } else { result.rc.clamp(1, 255) }
}
