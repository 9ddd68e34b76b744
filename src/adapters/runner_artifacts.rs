//! Reader for the per-run artifact directory written by ansible-runner.
//!
//! Layout under `<artifact_dir>/<ident>/`:
//! - `status`: final status word
//! - `rc`: integer return code
//! - `stdout`: full playbook output
//! - `job_events/<counter>-<uuid>.json`: one JSON object per event

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, RunResult, RunStats, RunStatus};

const STATS_EVENT: &str = "playbook_on_stats";

#[derive(Debug, Deserialize)]
struct JobEvent {
    #[serde(default)]
    event: String,
    #[serde(default)]
    counter: u64,
    #[serde(default)]
    event_data: Option<serde_json::Value>,
}

/// One run's artifact directory.
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    dir: PathBuf,
}

impl RunArtifacts {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn status(&self) -> Result<Option<RunStatus>, AppError> {
        Ok(read_optional(&self.dir.join("status"))?.map(|raw| RunStatus::parse(&raw)))
    }

    pub fn rc(&self) -> Result<Option<i32>, AppError> {
        let path = self.dir.join("rc");
        match read_optional(&path)? {
            Some(raw) => raw.trim().parse::<i32>().map(Some).map_err(|err| AppError::ParseError {
                what: path.display().to_string(),
                details: err.to_string(),
            }),
            None => Ok(None),
        }
    }

    pub fn stdout(&self) -> Result<Option<String>, AppError> {
        read_optional(&self.dir.join("stdout"))
    }

    /// Statistics from the last `playbook_on_stats` event, if the run got that far.
    pub fn stats(&self) -> Result<Option<RunStats>, AppError> {
        let events_dir = self.dir.join("job_events");
        let entries = match fs::read_dir(&events_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let mut latest: Option<JobEvent> = None;
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            let event: JobEvent = match serde_json::from_str(&content) {
                Ok(event) => event,
                Err(err) => {
                    log::warn!("Skipping unreadable job event {}: {}", path.display(), err);
                    continue;
                }
            };
            if event.event != STATS_EVENT {
                continue;
            }
            if latest.as_ref().is_none_or(|current| event.counter > current.counter) {
                latest = Some(event);
            }
        }

        let Some(event_data) = latest.and_then(|event| event.event_data) else {
            return Ok(None);
        };
        serde_json::from_value(event_data).map(Some).map_err(|err| AppError::ParseError {
            what: format!("{} event in {}", STATS_EVENT, events_dir.display()),
            details: err.to_string(),
        })
    }

    /// Assemble a result, preferring artifacts over what the process reported directly.
    pub fn collect(
        &self,
        exit_code: i32,
        captured_stdout: Option<String>,
    ) -> Result<RunResult, AppError> {
        let rc = match self.rc()? {
            Some(rc) => rc,
            None => {
                log::warn!("No rc artifact in {}, using exit code {}", self.dir.display(), exit_code);
                exit_code
            }
        };
        let status = self.status()?.unwrap_or_else(|| RunStatus::from_exit_code(rc));
        let stdout = self.stdout()?.or(captured_stdout);
        let stats = self.stats()?;

        Ok(RunResult { status, rc, stdout, stats })
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}
