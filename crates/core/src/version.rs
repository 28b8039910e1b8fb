// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Version extraction from raw fix-version strings.
//!
//! Two independent extractions run over the same strings:
//! - the run's single global version, from an ordered list of patterns
//! - per-string microservice versions, from one pattern with named
//!   `prefix` and `version` groups
//!
//! Patterns match anchored at the start of the string. Strings matching
//! nothing are ignored.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::VersionParsingConfig;
use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::microservice::MicroserviceResolver;

/// A (prefix, version) pair tied to one microservice.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MicroserviceVersion {
    /// Canonical name, or the raw prefix when unmapped.
    pub name: String,
    pub prefix: String,
    pub version: String,
}

/// What one fix-version string yielded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedVersion {
    Global(String),
    Microservice(MicroserviceVersion),
}

/// Compiled version patterns plus the prefix resolver.
#[derive(Debug, Clone)]
pub struct VersionParser {
    global: Vec<Regex>,
    microservice: Regex,
    resolver: MicroserviceResolver,
}

fn compile_anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})", pattern)).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

impl VersionParser {
    /// Compiles all patterns, failing on the first unusable one.
    pub fn new(config: &VersionParsingConfig) -> Result<Self> {
        if config.global_patterns.is_empty() {
            return Err(Error::NoGlobalPatterns);
        }

        let mut global = Vec::with_capacity(config.global_patterns.len());
        for pattern in &config.global_patterns {
            let re = compile_anchored(pattern)?;
            if re.captures_len() < 2 {
                return Err(Error::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: "no capture group for the version".to_string(),
                });
            }
            global.push(re);
        }

        let microservice = compile_anchored(&config.microservice_pattern)?;
        for group in ["prefix", "version"] {
            if !microservice.capture_names().flatten().any(|n| n == group) {
                return Err(Error::MissingCaptureGroup {
                    pattern: config.microservice_pattern.clone(),
                    group,
                });
            }
        }

        Ok(VersionParser {
            global,
            microservice,
            resolver: MicroserviceResolver::new(config.microservice_mapping.clone()),
        })
    }

    pub fn resolver(&self) -> &MicroserviceResolver {
        &self.resolver
    }

    /// Determines the run's global version.
    ///
    /// Patterns are tried in configured order over the whole set; the first
    /// pattern matching any string wins. When it yields several distinct
    /// values, the first in input order is taken.
    pub fn global_version<'a, I>(&self, fix_versions: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let strings: Vec<&str> = fix_versions.into_iter().collect();

        for re in &self.global {
            let mut candidates: Vec<String> = Vec::new();
            for raw in &strings {
                let Some(value) = re
                    .captures(raw.trim())
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().trim().to_string())
                else {
                    continue;
                };
                if !value.is_empty() && !candidates.contains(&value) {
                    candidates.push(value);
                }
            }

            if let Some(first) = candidates.first() {
                if candidates.len() > 1 {
                    warn!(
                        pattern = re.as_str(),
                        candidates = ?candidates,
                        "several global versions matched, using '{}'",
                        first
                    );
                }
                return Some(first.clone());
            }
        }

        None
    }

    /// Global version from every fix-version of every issue.
    pub fn global_version_of(&self, issues: &[Issue]) -> Option<String> {
        self.global_version(
            issues
                .iter()
                .flat_map(|issue| issue.fix_versions.iter().map(String::as_str)),
        )
    }

    /// Parses one string against the microservice pattern.
    pub fn microservice_version(&self, raw: &str) -> Option<MicroserviceVersion> {
        let caps = self.microservice.captures(raw.trim())?;
        let prefix = caps.name("prefix")?.as_str().trim();
        let version = caps.name("version")?.as_str().trim();
        if prefix.is_empty() || version.is_empty() {
            return None;
        }
        Some(MicroserviceVersion {
            name: self.resolver.resolve(prefix),
            prefix: prefix.to_string(),
            version: version.to_string(),
        })
    }

    /// Every microservice version carried by one issue, in fix-version order.
    pub fn microservice_versions(&self, issue: &Issue) -> Vec<MicroserviceVersion> {
        let versions: Vec<MicroserviceVersion> = issue
            .fix_versions
            .iter()
            .filter_map(|raw| self.microservice_version(raw))
            .collect();
        debug!(key = %issue.key, count = versions.len(), "microservice versions");
        versions
    }

    /// Everything one string yields; both extractions may fire.
    pub fn parse(&self, raw: &str) -> Vec<ParsedVersion> {
        let mut parsed = Vec::new();
        if let Some(global) = self.global_version([raw]) {
            parsed.push(ParsedVersion::Global(global));
        }
        if let Some(ms) = self.microservice_version(raw) {
            parsed.push(ParsedVersion::Microservice(ms));
        }
        parsed
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
