// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Section membership.
//!
//! An issue belongs to a section when its value for the section's source
//! field is present and non-blank. Sections are decided independently of
//! each other. Excluded issue types never belong anywhere.

use tracing::debug;

use crate::config::SectionConfig;
use crate::issue::Issue;
use crate::version::{MicroserviceVersion, VersionParser};

/// An issue with the sections it qualifies for and its microservice versions.
#[derive(Debug, Clone)]
pub struct ClassifiedIssue<'a> {
    pub issue: &'a Issue,
    /// Ids of qualifying sections, in configuration order.
    pub sections: Vec<String>,
    pub microservices: Vec<MicroserviceVersion>,
}

impl ClassifiedIssue<'_> {
    pub fn in_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    /// Distinct canonical microservice names, sorted.
    pub fn microservice_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.microservices.iter().map(|v| v.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Decides section membership against a deny-list of issue types.
#[derive(Debug, Clone, Default)]
pub struct SectionClassifier {
    excluded_types: Vec<String>,
}

impl SectionClassifier {
    /// Issue types are compared case-insensitively.
    pub fn new(excluded_types: &[String]) -> Self {
        SectionClassifier {
            excluded_types: excluded_types
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_excluded(&self, issue: &Issue) -> bool {
        let issue_type = issue.issue_type.trim().to_lowercase();
        self.excluded_types.contains(&issue_type)
    }

    /// True if the issue's source field for `section` is non-blank.
    pub fn qualifies(&self, issue: &Issue, section: &SectionConfig) -> bool {
        !self.is_excluded(issue) && issue.field(&section.source_field).is_some()
    }

    /// Classifies every non-excluded issue, preserving input order.
    pub fn classify<'a>(
        &self,
        issues: &'a [Issue],
        sections: &[SectionConfig],
        parser: &VersionParser,
    ) -> Vec<ClassifiedIssue<'a>> {
        issues
            .iter()
            .filter(|issue| {
                let excluded = self.is_excluded(issue);
                if excluded {
                    debug!(key = %issue.key, issue_type = %issue.issue_type, "excluded by type");
                }
                !excluded
            })
            .map(|issue| {
                let sections: Vec<String> = sections
                    .iter()
                    .filter(|section| self.qualifies(issue, section))
                    .map(|section| section.id.clone())
                    .collect();
                debug!(key = %issue.key, sections = ?sections, "classified");
                ClassifiedIssue {
                    issue,
                    sections,
                    microservices: parser.microservice_versions(issue),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
