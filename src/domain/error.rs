use std::io;

use thiserror::Error;

/// Library-wide error type for playrun operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// `playrun.toml` could not be parsed.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configured resource directory does not exist.
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// Inventory file is not valid YAML.
    #[error("Malformed inventory {path}: {details}")]
    InventoryParse { path: String, details: String },

    /// A segment of the `all.children.<group>.hosts` path is absent.
    #[error("Inventory {path} has no '{segment}' entry")]
    InventoryPathMissing { path: String, segment: String },

    /// A segment of the inventory path exists but is not a mapping.
    #[error("Inventory {path}: '{segment}' must be a mapping")]
    InventoryShape { path: String, segment: String },

    /// Hostname is not usable as an inventory key.
    #[error("Invalid host name '{0}': must be non-empty without whitespace or ':'")]
    InvalidHostName(String),

    /// A `key=value` argument could not be split.
    #[error("Invalid assignment '{0}': expected key=value")]
    InvalidAssignment(String),

    /// Named playbook or inventory does not exist.
    #[error("{kind} '{name}' not found in {dir}")]
    ResourceNotFound { kind: String, name: String, dir: String },

    /// External tool could not be started.
    #[error("Failed to launch {tool}: {details}")]
    RunnerLaunch { tool: String, details: String },

    /// External tool exited unsuccessfully without producing a result.
    #[error("{tool} exited with code {code}: {stderr}")]
    RunnerFailed { tool: String, code: i32, stderr: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::ConfigParse(_)
            | AppError::InventoryParse { .. }
            | AppError::InventoryShape { .. }
            | AppError::InvalidHostName(_)
            | AppError::InvalidAssignment(_)
            | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
            AppError::DirectoryNotFound { .. }
            | AppError::InventoryPathMissing { .. }
            | AppError::ResourceNotFound { .. } => io::ErrorKind::NotFound,
            AppError::RunnerLaunch { .. } | AppError::RunnerFailed { .. } => io::ErrorKind::Other,
        }
    }
}
