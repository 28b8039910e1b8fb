// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordering and nesting of a section's issues.
//!
//! Groups hold indices into the classified issue list, so an issue that
//! belongs to several microservices appears in several groups without being
//! copied.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::ClassifiedIssue;
use crate::config::SectionConfig;

/// What a group is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum GroupKey {
    /// The single group of a section with grouping disabled.
    Ungrouped,
    Microservice(String),
    /// Issues without any resolvable microservice.
    Unspecified,
    IssueType(String),
}

impl GroupKey {
    pub fn as_str(&self) -> &str {
        match self {
            GroupKey::Ungrouped => "ungrouped",
            GroupKey::Microservice(name) | GroupKey::IssueType(name) => name,
            GroupKey::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One group: either leaf members or type subgroups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: GroupKey,
    /// Indices into the classified list, ordered by issue key.
    pub members: Vec<usize>,
    pub subgroups: Vec<Group>,
}

impl Group {
    fn leaf(key: GroupKey, members: Vec<usize>) -> Self {
        Group {
            key,
            members,
            subgroups: Vec::new(),
        }
    }
}

/// Builds the group hierarchy for one section.
#[derive(Debug, Clone)]
pub struct GroupingEngine {
    unknown_issue_type: String,
}

impl GroupingEngine {
    /// `unknown_issue_type` titles the type group of issues with a blank type.
    pub fn new(unknown_issue_type: impl Into<String>) -> Self {
        GroupingEngine {
            unknown_issue_type: unknown_issue_type.into(),
        }
    }

    /// Groups `members` (indices into `classified`) per the section's flags.
    ///
    /// Grouping disabled always yields exactly one group. Otherwise
    /// microservice groups come alphabetically with `Unspecified` last, and
    /// each optionally splits into alphabetical issue-type subgroups.
    pub fn group(
        &self,
        classified: &[ClassifiedIssue<'_>],
        members: &[usize],
        section: &SectionConfig,
    ) -> Vec<Group> {
        if section.disable_grouping {
            return vec![Group::leaf(
                GroupKey::Ungrouped,
                sorted_by_key(classified, members.to_vec()),
            )];
        }

        let mut by_service: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        let mut unspecified = Vec::new();
        for &index in members {
            let Some(entry) = classified.get(index) else {
                continue;
            };
            let names = entry.microservice_names();
            if names.is_empty() {
                unspecified.push(index);
            }
            for name in names {
                by_service.entry(name).or_default().push(index);
            }
        }

        let mut groups: Vec<(GroupKey, Vec<usize>)> = by_service
            .into_iter()
            .map(|(name, idx)| (GroupKey::Microservice(name.to_string()), idx))
            .collect();
        if !unspecified.is_empty() {
            groups.push((GroupKey::Unspecified, unspecified));
        }

        groups
            .into_iter()
            .map(|(key, idx)| {
                if section.groups_by_type() {
                    Group {
                        key,
                        members: Vec::new(),
                        subgroups: self.by_issue_type(classified, idx),
                    }
                } else {
                    Group::leaf(key, sorted_by_key(classified, idx))
                }
            })
            .collect()
    }

    fn by_issue_type(&self, classified: &[ClassifiedIssue<'_>], members: Vec<usize>) -> Vec<Group> {
        let mut by_type: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for index in members {
            let issue_type = classified
                .get(index)
                .map(|c| c.issue.issue_type.trim())
                .filter(|t| !t.is_empty())
                .unwrap_or(self.unknown_issue_type.as_str());
            by_type.entry(issue_type.to_string()).or_default().push(index);
        }
        by_type
            .into_iter()
            .map(|(name, idx)| {
                Group::leaf(GroupKey::IssueType(name), sorted_by_key(classified, idx))
            })
            .collect()
    }
}

fn sorted_by_key(classified: &[ClassifiedIssue<'_>], mut members: Vec<usize>) -> Vec<usize> {
    members.sort_by(|&a, &b| {
        let ka = classified.get(a).map(|c| c.issue.key.as_str());
        let kb = classified.get(b).map(|c| c.issue.key.as_str());
        ka.cmp(&kb)
    });
    members
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod tests;
