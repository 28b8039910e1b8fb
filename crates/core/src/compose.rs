// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document assembly.
//!
//! [`DocumentComposer`] runs the whole pipeline for one release:
//! version extraction, classification, grouping, template resolution.
//! It either returns a complete [`DocumentModel`] or an error; nothing
//! partial reaches renderers.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::classify::{ClassifiedIssue, SectionClassifier};
use crate::config::{format_date, Config, SectionConfig};
use crate::document::{DocumentGroup, DocumentModel, DocumentSection, MicroservicesTable, TableRow};
use crate::error::{Error, Result};
use crate::grouping::{Group, GroupKey, GroupingEngine};
use crate::issue::Issue;
use crate::placeholder::PlaceholderResolver;
use crate::template;
use crate::version::VersionParser;

/// Date format behind `{current_date_filename}`.
pub const FILENAME_DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds [`DocumentModel`]s from issue sets under one configuration.
#[derive(Debug)]
pub struct DocumentComposer<'c> {
    config: &'c Config,
    parser: VersionParser,
    classifier: SectionClassifier,
    grouping: GroupingEngine,
}

impl<'c> DocumentComposer<'c> {
    /// Validates the configuration and compiles its patterns.
    pub fn new(config: &'c Config) -> Result<Self> {
        config.validate()?;
        let notes = &config.release_notes;
        Ok(DocumentComposer {
            config,
            parser: VersionParser::new(&config.version_parsing)?,
            classifier: SectionClassifier::new(&notes.excluded_issue_types),
            grouping: GroupingEngine::new(notes.unknown_issue_type.clone()),
        })
    }

    /// Global version from all issues, else the configured fallback.
    pub fn global_version(&self, issues: &[Issue]) -> Option<String> {
        match self.parser.global_version_of(issues) {
            Some(version) => Some(version),
            None => {
                let fallback = self.config.release_notes.fallback_global_version.clone();
                if let Some(f) = &fallback {
                    warn!(fallback = %f, "no global version matched, using fallback");
                }
                fallback
            }
        }
    }

    /// Composes the document for `issues` as of `date`.
    pub fn compose(&self, issues: &[Issue], date: NaiveDate) -> Result<DocumentModel> {
        let notes = &self.config.release_notes;
        let global_version = self.global_version(issues);
        let current_date = format_date(date, &notes.date_format)?;

        let mut unresolved = BTreeSet::new();
        let title = render_title(
            &notes.title_template,
            global_version.as_deref(),
            &current_date,
            &mut unresolved,
        )?;

        let classified = self
            .classifier
            .classify(issues, &notes.sections, &self.parser);
        info!(
            issues = issues.len(),
            classified = classified.len(),
            global_version = global_version.as_deref().unwrap_or("-"),
            "composing release notes"
        );

        self.warn_unknown_prefixes(&classified);

        let microservices_table = if notes.microservices_table.enabled {
            self.build_table(&classified, &mut unresolved)
        } else {
            None
        };

        let resolver = PlaceholderResolver::new(self.config);
        let mut sections = Vec::with_capacity(notes.sections.len());
        for section in &notes.sections {
            let members: Vec<usize> = classified
                .iter()
                .enumerate()
                .filter(|(_, c)| c.in_section(&section.id))
                .map(|(i, _)| i)
                .collect();
            if members.is_empty() && !notes.emit_empty_sections {
                debug!(section = %section.id, "skipping empty section");
                continue;
            }

            let groups = self.grouping.group(&classified, &members, section);
            let groups = groups
                .iter()
                .map(|g| self.render_group(g, &classified, section, &resolver, &mut unresolved))
                .collect();
            debug!(section = %section.id, issues = members.len(), "section composed");
            sections.push(DocumentSection {
                id: section.id.clone(),
                title: section.display_title(),
                groups,
            });
        }

        if !unresolved.is_empty() {
            warn!(placeholders = ?unresolved, "unresolved placeholders left as literal text");
        }

        Ok(DocumentModel {
            title,
            global_version,
            date,
            microservices_table,
            sections,
        })
    }

    fn warn_unknown_prefixes(&self, classified: &[ClassifiedIssue<'_>]) {
        let resolver = self.parser.resolver();
        let unknown: BTreeSet<&str> = classified
            .iter()
            .flat_map(|c| c.microservices.iter())
            .map(|v| v.prefix.as_str())
            .filter(|prefix| !resolver.is_known(prefix))
            .collect();
        for prefix in unknown {
            warn!(prefix, "unknown microservice prefix, using it as the name");
        }
    }

    fn build_table(
        &self,
        classified: &[ClassifiedIssue<'_>],
        unresolved: &mut BTreeSet<String>,
    ) -> Option<MicroservicesTable> {
        let table = &self.config.release_notes.microservices_table;

        let mut unique: BTreeMap<(&str, &str), &str> = BTreeMap::new();
        for v in classified.iter().flat_map(|c| c.microservices.iter()) {
            unique
                .entry((v.name.as_str(), v.version.as_str()))
                .and_modify(|prefix| {
                    if v.prefix.as_str() < *prefix {
                        *prefix = v.prefix.as_str();
                    }
                })
                .or_insert(v.prefix.as_str());
        }
        if unique.is_empty() {
            debug!("no microservice versions, table omitted");
            return None;
        }

        let rows = unique
            .into_iter()
            .map(|((name, version), prefix)| {
                let cells = table
                    .columns
                    .iter()
                    .map(|column| {
                        let out = template::substitute(&column.value, |field| match field {
                            "name" => Some(name.to_string()),
                            "version" => Some(version.to_string()),
                            "prefix" => Some(prefix.to_string()),
                            _ => None,
                        });
                        unresolved.extend(out.unresolved);
                        out.text
                    })
                    .collect();
                TableRow {
                    name: name.to_string(),
                    version: version.to_string(),
                    prefix: prefix.to_string(),
                    cells,
                }
            })
            .collect();

        Some(MicroservicesTable {
            title: table.title.clone(),
            headers: table.columns.iter().map(|c| c.header.clone()).collect(),
            rows,
        })
    }

    fn render_group(
        &self,
        group: &Group,
        classified: &[ClassifiedIssue<'_>],
        section: &SectionConfig,
        resolver: &PlaceholderResolver<'_>,
        unresolved: &mut BTreeSet<String>,
    ) -> DocumentGroup {
        let title = match &group.key {
            GroupKey::Ungrouped => String::new(),
            GroupKey::Unspecified => self.config.release_notes.unspecified_group_title.clone(),
            GroupKey::Microservice(name) | GroupKey::IssueType(name) => name.clone(),
        };
        let blocks = group
            .members
            .iter()
            .filter_map(|&i| classified.get(i))
            .map(|item| resolver.render_block(item, section, unresolved))
            .collect();
        let subgroups = group
            .subgroups
            .iter()
            .map(|sub| self.render_group(sub, classified, section, resolver, unresolved))
            .collect();
        DocumentGroup {
            key: group.key.clone(),
            title,
            blocks,
            subgroups,
        }
    }
}

/// Replaces every character outside `[A-Za-z0-9_.-]` with `_`.
pub fn sanitize_filename_part(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Renders an output filename for a composed document.
///
/// Supports `{global_version}` (sanitized), `{current_date_filename}` and
/// `{current_date}` (also sanitized).
pub fn render_filename(
    filename_template: &str,
    doc: &DocumentModel,
    date_format: &str,
) -> Result<String> {
    if template::references(filename_template, "global_version") && doc.global_version.is_none() {
        return Err(Error::MissingGlobalVersion);
    }
    let filename_date = format_date(doc.date, FILENAME_DATE_FORMAT)?;
    let current_date = format_date(doc.date, date_format)?;

    let out = template::substitute(filename_template, |name| match name {
        "global_version" => doc.global_version.as_deref().map(sanitize_filename_part),
        "current_date_filename" => Some(filename_date.clone()),
        "current_date" => Some(sanitize_filename_part(&current_date)),
        _ => None,
    });
    if !out.unresolved.is_empty() {
        warn!(
            template = filename_template,
            placeholders = ?out.unresolved,
            "unresolved filename placeholders"
        );
    }
    Ok(out.text)
}

/// Substitutes `{global_version}` and `{current_date}` into a title.
fn render_title(
    title_template: &str,
    global_version: Option<&str>,
    current_date: &str,
    unresolved: &mut BTreeSet<String>,
) -> Result<String> {
    if template::references(title_template, "global_version") && global_version.is_none() {
        return Err(Error::MissingGlobalVersion);
    }
    let out = template::substitute(title_template, |name| match name {
        "global_version" => global_version.map(str::to_string),
        "current_date" => Some(current_date.to_string()),
        _ => None,
    });
    unresolved.extend(out.unresolved);
    Ok(out.text)
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
