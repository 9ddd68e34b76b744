use std::sync::Mutex;

use crate::domain::{AppError, RunRequest, RunResult, RunStatus};
use crate::ports::PlaybookRunner;

/// Records requests and replies with a canned result.
pub struct FakeRunner {
    pub requests: Mutex<Vec<RunRequest>>,
    pub result: Mutex<RunResult>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            result: Mutex::new(RunResult {
                status: RunStatus::Successful,
                rc: 0,
                stdout: Some("PLAY RECAP\n".into()),
                stats: None,
            }),
        }
    }

    pub fn set_result(&self, result: RunResult) {
        *self.result.lock().unwrap() = result;
    }

    pub fn calls(&self) -> Vec<RunRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl PlaybookRunner for FakeRunner {
    fn run(&self, request: &RunRequest) -> Result<RunResult, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.result.lock().unwrap().clone())
    }
}
