// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the relnotes CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no release-notes config found from {start}\n  hint: create release-notes.toml or pass --config <path>")]
    ConfigNotFound { start: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid date '{0}'\n  hint: use YYYY-MM-DD, e.g. 2025-06-01")]
    InvalidDate(String),

    #[error("no output formats enabled\n  hint: enable output.markdown or output.word, or pass --format")]
    NoFormatsEnabled,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] rn_core::Error),
}

/// A specialized Result type for relnotes operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
