// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading issues exported from the tracker.
//!
//! Accepts a Jira REST search response (`{"issues": [...]}`) or a bare array
//! of Jira issues. Standard Jira fields map onto [`Issue`] members; every
//! other non-null field is kept verbatim as a custom field.

use chrono::{DateTime, Utc};
use rn_core::{Issue, IssueLink, LinkDirection};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};

const JIRA_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Jira field ids consumed by dedicated [`Issue`] members.
const MAPPED_FIELDS: &[&str] = &[
    "summary",
    "issuetype",
    "priority",
    "status",
    "resolution",
    "assignee",
    "reporter",
    "created",
    "updated",
    "labels",
    "components",
    "fixVersions",
    "issuelinks",
];

/// Reads and converts every issue in the file at `path`.
pub fn read_issues(path: &Path) -> Result<Vec<Issue>> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::InvalidInput(format!("failed to read {}: {}", path.display(), e))
    })?;
    let issues = parse_issues(&content)?;
    debug!(count = issues.len(), path = %path.display(), "read issues");
    Ok(issues)
}

/// Converts a Jira search response or issue array.
pub fn parse_issues(content: &str) -> Result<Vec<Issue>> {
    let root: Value = serde_json::from_str(content)?;
    let raw = match &root {
        Value::Array(items) => items,
        Value::Object(obj) => match obj.get("issues") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(Error::InvalidInput(
                    "expected an 'issues' array or a JSON array of issues".to_string(),
                ))
            }
        },
        _ => {
            return Err(Error::InvalidInput(
                "expected an 'issues' array or a JSON array of issues".to_string(),
            ))
        }
    };

    let mut issues = Vec::with_capacity(raw.len());
    for (index, item) in raw.iter().enumerate() {
        match convert_issue(item) {
            Some(issue) => issues.push(issue),
            None => warn!(index, "skipping issue without a key"),
        }
    }
    Ok(issues)
}

/// Converts one Jira issue; `None` when it has no usable key.
pub fn convert_issue(raw: &Value) -> Option<Issue> {
    let key = raw
        .get("key")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|k| !k.is_empty())?;
    let empty = Map::new();
    let fields = raw.get("fields").and_then(Value::as_object).unwrap_or(&empty);

    let issue_type = named(fields.get("issuetype")).unwrap_or_default();
    let summary = fields
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let mut issue = Issue::new(key, issue_type, summary);

    issue.priority = named(fields.get("priority"));
    issue.status = named(fields.get("status"));
    issue.resolution = named(fields.get("resolution"));
    issue.assignee = user(fields.get("assignee"));
    issue.reporter = user(fields.get("reporter"));
    issue.created_at = timestamp(key, "created", fields.get("created"));
    issue.updated_at = timestamp(key, "updated", fields.get("updated"));
    issue.labels = strings(fields.get("labels"));
    issue.components = names(fields.get("components"));
    issue.fix_versions = names(fields.get("fixVersions"));
    issue.links = links(fields.get("issuelinks"));

    for (id, value) in fields {
        if value.is_null() || MAPPED_FIELDS.contains(&id.as_str()) {
            continue;
        }
        issue.custom_fields.insert(id.clone(), value.clone());
    }
    Some(issue)
}

fn named(value: Option<&Value>) -> Option<String> {
    value
        .and_then(|v| v.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn user(value: Option<&Value>) -> Option<String> {
    let value = value?;
    value
        .get("displayName")
        .or_else(|| value.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn names(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|v| named(Some(v))).collect())
        .unwrap_or_default()
}

fn timestamp(key: &str, field: &str, value: Option<&Value>) -> Option<DateTime<Utc>> {
    let raw = value?.as_str()?;
    let parsed = DateTime::parse_from_str(raw, JIRA_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw));
    match parsed {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            warn!(issue = key, field, value = raw, error = %e, "unparseable timestamp");
            None
        }
    }
}

fn links(value: Option<&Value>) -> Vec<IssueLink> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for item in items {
        let kind = item.get("type");
        for (side, direction) in [
            ("outwardIssue", LinkDirection::Outward),
            ("inwardIssue", LinkDirection::Inward),
        ] {
            let Some(target) = item
                .get(side)
                .and_then(|issue| issue.get("key"))
                .and_then(Value::as_str)
            else {
                continue;
            };
            let mut link = IssueLink::new(target).with_direction(direction);
            let relation = kind
                .and_then(|k| k.get(direction.as_str()))
                .and_then(Value::as_str)
                .filter(|r| !r.trim().is_empty());
            if let Some(relation) = relation {
                link = link.with_relation(relation);
            }
            out.push(link);
        }
    }
    out
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
