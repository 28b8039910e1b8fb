// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-issue template resolution.
//!
//! Placeholder names map to resolvers through a fixed table:
//! - derived values (`content`, `formatted_issuelinks`, `client_name`,
//!   `formatted_client_info`, `linked_microservices_names`, `fixVersions`,
//!   `issuelinks`)
//! - issue fields via [`Issue::field`], for standard fields, configured
//!   `requested_fields` and fields the issue carries
//!
//! A requested field that is absent resolves to "". Any other name is left
//! as literal text and reported back to the caller.

use std::collections::BTreeSet;

use crate::classify::ClassifiedIssue;
use crate::config::{Config, ReleaseNotesConfig, SectionConfig};
use crate::document::RenderedIssueBlock;
use crate::issue::Issue;
use crate::template;

/// Names resolved from derived values rather than issue fields.
pub const DERIVED_PLACEHOLDERS: &[&str] = &[
    "content",
    "formatted_issuelinks",
    "client_name",
    "formatted_client_info",
    "linked_microservices_names",
    "fixVersions",
    "issuelinks",
];

/// Resolves section templates against classified issues.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderResolver<'c> {
    notes: &'c ReleaseNotesConfig,
    requested_fields: &'c [String],
}

impl<'c> PlaceholderResolver<'c> {
    pub fn new(config: &'c Config) -> Self {
        PlaceholderResolver {
            notes: &config.release_notes,
            requested_fields: &config.requested_fields,
        }
    }

    /// Allow-listed link texts, sorted. An empty allow-list keeps every link.
    pub fn filtered_links(&self, issue: &Issue) -> Vec<String> {
        let prefixes = &self.notes.issuelinks_prefixes;
        let mut texts: Vec<String> = issue
            .links
            .iter()
            .filter(|link| prefixes.is_empty() || prefixes.iter().any(|p| link.in_project(p)))
            .map(|link| match link.relation.as_deref().map(str::trim) {
                Some(relation) if !relation.is_empty() => {
                    format!("{} {}", capitalize(relation), link.key)
                }
                _ => link.key.clone(),
            })
            .collect();
        texts.sort();
        texts
    }

    /// Label plus the filtered links, or "" when none survive.
    pub fn formatted_issuelinks(&self, issue: &Issue) -> String {
        let links = self.filtered_links(issue);
        if links.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.notes.links_label, links.join("; "))
        }
    }

    /// Client display name parsed from the configured client field.
    ///
    /// `"Acme Corp - #123 - extra"` yields `"Acme Corp"`.
    pub fn client_name(&self, issue: &Issue) -> Option<String> {
        let field = self.notes.client_field.as_deref()?;
        let raw = issue.field(field)?;
        let name_part = raw.split(" - ").next().unwrap_or_default();
        let name = name_part.split('#').next().unwrap_or_default().trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    /// Client label plus name, only when a client name exists and at least
    /// one link survived the allow-list.
    pub fn formatted_client_info(&self, issue: &Issue) -> String {
        match self.client_name(issue) {
            Some(name) if !self.filtered_links(issue).is_empty() => {
                format!("{}{}", self.notes.client_label, name)
            }
            _ => String::new(),
        }
    }

    /// Resolves one placeholder name, or `None` to keep it literal.
    pub fn resolve(
        &self,
        name: &str,
        item: &ClassifiedIssue<'_>,
        section: &SectionConfig,
    ) -> Option<String> {
        let issue = item.issue;
        let value = match name {
            "content" => issue.field(&section.source_field).unwrap_or_default(),
            "formatted_issuelinks" => self.formatted_issuelinks(issue),
            "client_name" => self.client_name(issue).unwrap_or_default(),
            "formatted_client_info" => self.formatted_client_info(issue),
            "linked_microservices_names" => item.microservice_names().join(", "),
            "fixVersions" => issue.fix_versions.join(", "),
            "issuelinks" => issue
                .links
                .iter()
                .map(|link| link.key.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            _ if self.is_requested(name, issue) => issue.field(name).unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    fn is_requested(&self, name: &str, issue: &Issue) -> bool {
        Issue::is_standard_field(name)
            || self.requested_fields.iter().any(|f| f == name)
            || issue.custom_fields.contains_key(name)
    }

    /// Resolves a template into trimmed, non-blank lines.
    ///
    /// Names left literal are added to `unresolved`.
    pub fn render_lines(
        &self,
        template_str: &str,
        item: &ClassifiedIssue<'_>,
        section: &SectionConfig,
        unresolved: &mut BTreeSet<String>,
    ) -> Vec<String> {
        let out = template::substitute(template_str, |name| self.resolve(name, item, section));
        unresolved.extend(out.unresolved);
        out.text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Renders one issue for one section.
    pub fn render_block(
        &self,
        item: &ClassifiedIssue<'_>,
        section: &SectionConfig,
        unresolved: &mut BTreeSet<String>,
    ) -> RenderedIssueBlock {
        RenderedIssueBlock {
            key: item.issue.key.clone(),
            header: self.render_lines(&section.header_template, item, section, unresolved),
            content: self.render_lines(&section.body_template, item, section, unresolved),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "placeholder_tests.rs"]
mod tests;
