// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery and loading.
//!
//! The config lives in `release-notes.toml` (or `release-notes.json`) and is
//! looked up from the current directory upward unless `--config` names a file.
//! Parsing goes straight into [`rn_core::Config`]; validation happens here so
//! that every command fails on a bad config before reading any issues.

use rn_core::Config;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Candidate file names, in lookup order within each directory.
pub const CONFIG_FILE_NAMES: &[&str] = &["release-notes.toml", "release-notes.json"];

/// A validated config together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: Config,
}

/// Walks from `start` up to the filesystem root looking for a config file.
pub fn find_config(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }
    Err(Error::ConfigNotFound {
        start: start.display().to_string(),
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Parses a config file (JSON by extension, TOML otherwise) and validates it.
///
/// A relative Word `template_path` is resolved against the config's directory.
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
    let mut config: Config = if is_json(path) {
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?
    } else {
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?
    };

    if let (Some(template), Some(base)) = (&config.output.word.template_path, path.parent()) {
        let template = Path::new(template);
        if template.is_relative() && !base.as_os_str().is_empty() {
            config.output.word.template_path = Some(base.join(template).display().to_string());
        }
    }

    config.validate()?;
    Ok(config)
}

/// Loads the explicit config, or the first one found from the current directory.
pub fn resolve(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => find_config(&std::env::current_dir()?)?,
    };
    tracing::debug!(path = %path.display(), "loading config");
    let config = load(&path)?;
    Ok(LoadedConfig { path, config })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
