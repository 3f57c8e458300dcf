//! Error types and exit codes for wayfind
//!
//! Exit codes:
//! - 0: Success (including queries where no path exists)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, missing or malformed graph file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the wayfind CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or unusable graph file (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfind operations
#[derive(Error, Debug)]
pub enum WayfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("graph file not found: {path:?}")]
    GraphFileNotFound { path: PathBuf },

    #[error("invalid graph file (line {line}): {reason}")]
    InvalidGraphFile { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result alias used throughout wayfind
pub type Result<T> = std::result::Result<T, WayfindError>;

impl WayfindError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UnknownFormat(_)
            | WayfindError::UsageError(_)
            | WayfindError::GraphFileNotFound { .. }
            | WayfindError::InvalidGraphFile { .. } => ExitCode::Usage,

            WayfindError::Io(_) | WayfindError::Json(_) | WayfindError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UnknownFormat(_) => "unknown_format",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::GraphFileNotFound { .. } => "graph_file_not_found",
            WayfindError::InvalidGraphFile { .. } => "invalid_graph_file",
            WayfindError::Io(_) => "io_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}
