// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use std::time::Duration;

/// Venvlint error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments.
    /// Reserved: clap rejects malformed flags before venvlint sees them.
    #[error("argument error: {0}")]
    Argument(String),

    /// Project directory to lint does not exist
    #[error("project directory not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// Environment is missing and `environment.required` is set
    #[error("environment not found: {}", .0.display())]
    EnvironmentNotFound(PathBuf),

    /// Lint tool could not be resolved on the activated PATH
    #[error("lint tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// Lint tool could not be started or waited on
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Lint tool ran past its time limit and was killed
    #[error("{tool} timed out after {timeout:?}")]
    Timeout { tool: String, timeout: Duration },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using venvlint Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Lint tool exited cleanly
    Success = 0,
    /// Lint tool reported findings
    LintFailed = 1,
    /// Configuration, argument, or environment error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. }
            | Error::Argument(_)
            | Error::ProjectNotFound(_)
            | Error::EnvironmentNotFound(_)
            | Error::ToolNotFound { .. } => ExitCode::ConfigError,
            Error::Spawn { .. } | Error::Timeout { .. } | Error::Internal(_) => {
                ExitCode::InternalError
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
