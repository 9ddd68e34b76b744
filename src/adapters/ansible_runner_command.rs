use std::ffi::OsString;
use std::fs;
use std::process::Command;

use crate::adapters::runner_artifacts::RunArtifacts;
use crate::domain::{AppError, RunRequest, RunResult};
use crate::ports::PlaybookRunner;

/// Runs playbooks through the `ansible-runner` command line.
#[derive(Debug, Clone)]
pub struct AnsibleRunnerCommand {
    binary: String,
}

impl AnsibleRunnerCommand {
    pub fn new(binary: impl Into<String>) -> Self {
        Self { binary: binary.into() }
    }

    /// Arguments passed after the binary name.
    pub fn command_args(request: &RunRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "run".into(),
            request.private_data_dir.clone().into(),
            "-p".into(),
            request.playbook.clone().into(),
            "--inventory".into(),
            request.inventory.clone().into(),
            "--artifact-dir".into(),
            request.artifact_dir.clone().into(),
            "--ident".into(),
            request.ident.clone().into(),
        ];
        if let Some(limit) = &request.limit {
            args.push("--limit".into());
            args.push(limit.into());
        }
        if !request.extravars.is_empty() {
            let mut cmdline = OsString::from("-e @");
            cmdline.push(request.extravars_file());
            args.push("--cmdline".into());
            args.push(cmdline);
        }
        args
    }

    /// Write this run's extra variables to their own file; `env/extravars` is never touched.
    fn write_extravars(&self, request: &RunRequest) -> Result<(), AppError> {
        if request.extravars.is_empty() {
            return Ok(());
        }
        let path = request.extravars_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            serde_yaml::to_string(&request.extravars).map_err(|err| AppError::ParseError {
                what: "extravars".to_string(),
                details: err.to_string(),
            })?;
        fs::write(&path, content)?;
        log::debug!("Wrote extra variables to {}", path.display());
        Ok(())
    }
}

impl Default for AnsibleRunnerCommand {
    fn default() -> Self {
        Self::new("ansible-runner")
    }
}

impl PlaybookRunner for AnsibleRunnerCommand {
    fn run(&self, request: &RunRequest) -> Result<RunResult, AppError> {
        self.write_extravars(request)?;

        let args = Self::command_args(request);
        log::debug!(
            "Spawning {} {}",
            self.binary,
            args.iter().map(|a| a.to_string_lossy()).collect::<Vec<_>>().join(" ")
        );

        let output = Command::new(&self.binary).args(&args).output().map_err(|e| {
            AppError::RunnerLaunch { tool: self.binary.clone(), details: e.to_string() }
        })?;

        let exit_code = output.status.code().unwrap_or(-1);
        let captured = String::from_utf8_lossy(&output.stdout).to_string();
        let artifacts = RunArtifacts::new(request.run_artifact_dir());

        if !artifacts.exists() {
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                return Err(AppError::RunnerFailed {
                    tool: self.binary.clone(),
                    code: exit_code,
                    stderr: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
                });
            }
            log::warn!("{} left no artifacts at {}", self.binary, artifacts.dir().display());
        }

        let result = artifacts.collect(exit_code, Some(captured))?;
        log::info!("Run {} finished: status={} rc={}", request.ident, result.status, result.rc);
        Ok(result)
    }
}
