// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue records consumed by the composition engine.
//!
//! Issues are produced by the retrieval layer and are read-only here. Field
//! lookup goes through [`Issue::field`], an explicit mapping from field names
//! to accessors rather than a generic property bag.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Timestamp format used when `created`/`updated` are substituted into templates.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Direction of a link as seen from the issue that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkDirection {
    /// The other issue points at this one.
    Inward,
    /// This issue points at the other one.
    Outward,
}

impl LinkDirection {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkDirection::Inward => "inward",
            LinkDirection::Outward => "outward",
        }
    }
}

impl fmt::Display for LinkDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A link from one issue to another tracker issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLink {
    /// Key of the linked issue (e.g., "CCSSUP-1").
    pub key: String,
    /// Which side of the link this issue is on.
    pub direction: LinkDirection,
    /// Relation phrase for this direction (e.g., "relates to", "is blocked by").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
}

impl IssueLink {
    /// Creates an outward link with no relation phrase.
    pub fn new(key: impl Into<String>) -> Self {
        IssueLink {
            key: key.into(),
            direction: LinkDirection::Outward,
            relation: None,
        }
    }

    /// Sets the direction (builder pattern).
    pub fn with_direction(mut self, direction: LinkDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the relation phrase (builder pattern).
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    /// Returns true if the linked key belongs to the given project prefix.
    ///
    /// Matching is case-insensitive on the prefix: `ccssup` matches `CCSSUP-1`.
    pub fn in_project(&self, prefix: &str) -> bool {
        let prefix = prefix.trim();
        !prefix.is_empty()
            && self
                .key
                .strip_prefix(&prefix.to_uppercase())
                .is_some_and(|rest| rest.starts_with('-'))
    }
}

/// A tracker issue as handed over by the retrieval layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique key within a run (e.g., "PHB-123").
    pub key: String,
    /// One-line summary.
    #[serde(default)]
    pub summary: String,
    /// Issue type name as reported by the tracker (e.g., "Bug", "Story").
    #[serde(default)]
    pub issue_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub components: Vec<String>,
    /// Raw fix-version names, source of global and microservice versions.
    #[serde(default)]
    pub fix_versions: Vec<String>,
    #[serde(default)]
    pub links: Vec<IssueLink>,
    /// Custom field id → raw tracker value.
    #[serde(default)]
    pub custom_fields: BTreeMap<String, Value>,
}

impl Issue {
    /// Creates an issue with only key, type and summary set.
    pub fn new(
        key: impl Into<String>,
        issue_type: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Issue {
            key: key.into(),
            summary: summary.into(),
            issue_type: issue_type.into(),
            priority: None,
            status: None,
            resolution: None,
            assignee: None,
            reporter: None,
            created_at: None,
            updated_at: None,
            labels: Vec::new(),
            components: Vec::new(),
            fix_versions: Vec::new(),
            links: Vec::new(),
            custom_fields: BTreeMap::new(),
        }
    }

    /// Adds a fix-version string (builder pattern).
    pub fn with_fix_version(mut self, version: impl Into<String>) -> Self {
        self.fix_versions.push(version.into());
        self
    }

    /// Adds an issue link (builder pattern).
    pub fn with_link(mut self, link: IssueLink) -> Self {
        self.links.push(link);
        self
    }

    /// Sets a custom field value (builder pattern).
    pub fn with_custom_field(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.custom_fields.insert(id.into(), value.into());
        self
    }

    /// Looks up the display value of a field by name.
    ///
    /// Standard fields are matched first (both the tracker id and the
    /// `*_name` alias are accepted), then the custom field map. Returns
    /// `None` when the field is absent or renders to nothing.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "key" => non_empty(&self.key),
            "summary" => non_empty(&self.summary),
            "issuetype" | "issuetype_name" | "issue_type" => non_empty(&self.issue_type),
            "priority" | "priority_name" => self.priority.as_deref().and_then(non_empty),
            "status" | "status_name" => self.status.as_deref().and_then(non_empty),
            "resolution" | "resolution_name" => self.resolution.as_deref().and_then(non_empty),
            "assignee" | "assignee_name" => self.assignee.as_deref().and_then(non_empty),
            "reporter" | "reporter_name" => self.reporter.as_deref().and_then(non_empty),
            "created" => self
                .created_at
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            "updated" => self
                .updated_at
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            "labels" => join_non_empty(&self.labels),
            "components" => join_non_empty(&self.components),
            // Rendered through dedicated placeholders instead.
            "fixVersions" | "issuelinks" => None,
            _ => self.custom_fields.get(name).and_then(render_value),
        }
    }

    /// Returns true if `name` is a standard field accessor.
    pub fn is_standard_field(name: &str) -> bool {
        STANDARD_FIELDS.contains(&name)
    }
}

/// Field names served by [`Issue::field`] without consulting custom fields.
pub const STANDARD_FIELDS: &[&str] = &[
    "key",
    "summary",
    "issuetype",
    "issuetype_name",
    "issue_type",
    "priority",
    "priority_name",
    "status",
    "status_name",
    "resolution",
    "resolution_name",
    "assignee",
    "assignee_name",
    "reporter",
    "reporter_name",
    "created",
    "updated",
    "labels",
    "components",
    "fixVersions",
    "issuelinks",
];

/// Renders a raw tracker value as display text.
///
/// Objects yield their `value` (select lists) or `name` (users, versions);
/// lists are comma-joined. Empty results are `None`.
pub fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => non_empty(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("value")
            .or_else(|| map.get("name"))
            .or_else(|| map.get("displayName"))
            .and_then(render_value),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(render_value).collect();
            join_non_empty(&parts)
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn join_non_empty(items: &[String]) -> Option<String> {
    let parts: Vec<&str> = items
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !s.trim().is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
