//! Outcome of one runner invocation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize, Serializer};

/// Final state the runner reported for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Successful,
    Failed,
    Timeout,
    Canceled,
    Error,
    Unknown(String),
}

impl RunStatus {
    /// Parse the contents of the runner's `status` artifact.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "successful" => RunStatus::Successful,
            "failed" => RunStatus::Failed,
            "timeout" => RunStatus::Timeout,
            "canceled" => RunStatus::Canceled,
            "error" => RunStatus::Error,
            other => RunStatus::Unknown(other.to_string()),
        }
    }

    /// Status implied by an exit code when the runner left no `status` file.
    pub fn from_exit_code(rc: i32) -> Self {
        if rc == 0 { RunStatus::Successful } else { RunStatus::Failed }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RunStatus::Successful => "successful",
            RunStatus::Failed => "failed",
            RunStatus::Timeout => "timeout",
            RunStatus::Canceled => "canceled",
            RunStatus::Error => "error",
            RunStatus::Unknown(raw) => raw,
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RunStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Per-host counters from the runner's `playbook_on_stats` event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    #[serde(default)]
    pub ok: BTreeMap<String, u64>,
    #[serde(default)]
    pub changed: BTreeMap<String, u64>,
    /// Unreachable hosts.
    #[serde(default)]
    pub dark: BTreeMap<String, u64>,
    #[serde(default)]
    pub failures: BTreeMap<String, u64>,
    #[serde(default)]
    pub skipped: BTreeMap<String, u64>,
    #[serde(default)]
    pub rescued: BTreeMap<String, u64>,
    #[serde(default)]
    pub ignored: BTreeMap<String, u64>,
    #[serde(default)]
    pub processed: BTreeMap<String, u64>,
}

/// Counters for one host, flattened for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostTally {
    pub ok: u64,
    pub changed: u64,
    pub unreachable: u64,
    pub failed: u64,
    pub skipped: u64,
    pub rescued: u64,
    pub ignored: u64,
}

impl RunStats {
    /// Every host mentioned by any counter, sorted.
    pub fn hosts(&self) -> BTreeSet<&str> {
        [
            &self.ok,
            &self.changed,
            &self.dark,
            &self.failures,
            &self.skipped,
            &self.rescued,
            &self.ignored,
            &self.processed,
        ]
        .into_iter()
        .flat_map(|counter| counter.keys().map(String::as_str))
        .collect()
    }

    pub fn tally(&self, host: &str) -> HostTally {
        let count = |counter: &BTreeMap<String, u64>| counter.get(host).copied().unwrap_or(0);
        HostTally {
            ok: count(&self.ok),
            changed: count(&self.changed),
            unreachable: count(&self.dark),
            failed: count(&self.failures),
            skipped: count(&self.skipped),
            rescued: count(&self.rescued),
            ignored: count(&self.ignored),
        }
    }

    /// True when no host failed or was unreachable.
    pub fn is_clean(&self) -> bool {
        self.failures.values().all(|n| *n == 0) && self.dark.values().all(|n| *n == 0)
    }
}

/// What a playbook run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub status: RunStatus,
    pub rc: i32,
    pub stdout: Option<String>,
    pub stats: Option<RunStats>,
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Successful && self.rc == 0
    }
}
