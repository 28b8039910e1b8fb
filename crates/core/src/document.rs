// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Format-independent release-notes document.
//!
//! This is the only thing renderers see. Every template is already
//! resolved and every ordering decided.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::grouping::GroupKey;

/// A fully composed release-notes document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DocumentModel {
    pub title: String,
    /// `None` when no pattern matched and no fallback was configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_version: Option<String>,
    /// Date the document was composed for.
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microservices_table: Option<MicroservicesTable>,
    pub sections: Vec<DocumentSection>,
}

impl DocumentModel {
    /// Total issue blocks across all sections.
    pub fn block_count(&self) -> usize {
        self.sections.iter().map(DocumentSection::block_count).sum()
    }
}

/// Unique (microservice, version) rows, sorted by name then version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MicroservicesTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TableRow {
    pub name: String,
    pub version: String,
    pub prefix: String,
    /// One rendered cell per configured column.
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DocumentSection {
    pub id: String,
    pub title: String,
    pub groups: Vec<DocumentGroup>,
}

impl DocumentSection {
    pub fn block_count(&self) -> usize {
        self.groups.iter().map(DocumentGroup::block_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.block_count() == 0
    }
}

/// A group of blocks; nests one level when split by issue type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DocumentGroup {
    pub key: GroupKey,
    /// Display heading; empty for the ungrouped group.
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<RenderedIssueBlock>,
    #[serde(default)]
    pub subgroups: Vec<DocumentGroup>,
}

impl DocumentGroup {
    pub fn block_count(&self) -> usize {
        self.blocks.len()
            + self
                .subgroups
                .iter()
                .map(DocumentGroup::block_count)
                .sum::<usize>()
    }

    /// True for the single group of a section with grouping disabled.
    pub fn is_ungrouped(&self) -> bool {
        self.key == GroupKey::Ungrouped
    }
}

/// One issue resolved against one section's templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RenderedIssueBlock {
    pub key: String,
    /// Resolved header template, trimmed, blank lines dropped.
    pub header: Vec<String>,
    /// Resolved body template, trimmed, blank lines dropped.
    pub content: Vec<String>,
}

impl RenderedIssueBlock {
    /// Header lines followed by content lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.header
            .iter()
            .chain(self.content.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
