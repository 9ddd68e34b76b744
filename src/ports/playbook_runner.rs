use crate::domain::{AppError, RunRequest, RunResult};

/// Executes a playbook against an inventory.
///
/// Implementations block until the run finishes. A playbook that ran and failed is an
/// `Ok` result with a non-successful status; `Err` means no result could be obtained.
pub trait PlaybookRunner {
    fn run(&self, request: &RunRequest) -> Result<RunResult, AppError>;
}
