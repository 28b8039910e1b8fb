// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rn-core operations.

use thiserror::Error;

/// All possible errors that can occur while composing release notes.
///
/// Configuration variants are raised before any issue is processed.
/// [`Error::MissingGlobalVersion`] is raised when a title or filename needs
/// `{global_version}` and no fix-version string matched a global pattern.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("microservice pattern '{pattern}' has no named group '{group}'\n  hint: use (?P<prefix>...) and (?P<version>...)")]
    MissingCaptureGroup {
        pattern: String,
        group: &'static str,
    },

    #[error("no global version patterns configured\n  hint: set version_parsing.global_patterns")]
    NoGlobalPatterns,

    #[error("section {section}: '{key}' is required")]
    MissingSectionKey { section: String, key: &'static str },

    #[error("duplicate section id: '{0}'")]
    DuplicateSection(String),

    #[error("invalid date format '{0}'\n  hint: use strftime specifiers valid for a calendar date, e.g. %d.%m.%Y")]
    InvalidDateFormat(String),

    #[error("global version not found in any fix-version\n  hint: check version_parsing.global_patterns or set release_notes.fallback_global_version")]
    MissingGlobalVersion,

    #[error("config error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for errors caused by the configuration itself.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidPattern { .. }
                | Error::MissingCaptureGroup { .. }
                | Error::NoGlobalPatterns
                | Error::MissingSectionKey { .. }
                | Error::DuplicateSection(_)
                | Error::InvalidDateFormat(_)
                | Error::Config(_)
        )
    }
}

/// A specialized Result type for rn-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
