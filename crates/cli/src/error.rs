// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Search completed (with or without matches).
    Success = 0,
    /// A dump could not be acquired or read.
    Failure = 1,
    /// Invalid configuration or pattern.
    ConfigError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors raised while configuring a search or acquiring a dump.
///
/// Parsing, selection and rendering are total and never produce these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}{}", format_stderr(.stderr))]
    DumpFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("no process found matching {name:?}")]
    NoProcess { name: String },
}

impl Error {
    /// Exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::InvalidPattern { .. } | Error::Config { .. } => ExitCode::ConfigError,
            Error::Io { .. }
            | Error::Spawn { .. }
            | Error::DumpFailed { .. }
            | Error::NoProcess { .. } => ExitCode::Failure,
        }
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
