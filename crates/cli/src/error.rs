// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All cases passed, or the input matched.
    Success = 0,
    /// At least one case failed, or the input did not match.
    Failed = 1,
    /// Configuration or pattern error at startup.
    ConfigError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors raised while loading the hook configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: no hooks registered for event `{event}`", path.display())]
    MissingEvent { path: PathBuf, event: String },

    #[error("{}: hook list for event `{event}` is empty", path.display())]
    EmptyEvent { path: PathBuf, event: String },

    #[error("{}: first hook for event `{event}` has no `matcher`", path.display())]
    MissingMatcher { path: PathBuf, event: String },

    #[error("no hooks/hooks.json found from {} (use --config)", start.display())]
    NotFound { start: PathBuf },
}

/// Errors raised while compiling a matcher pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid matcher pattern")]
    Invalid(#[from] regex::Error),

    #[error("matcher pattern is empty")]
    Empty,
}

/// Any startup error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type Result<T> = std::result::Result<T, Error>;
