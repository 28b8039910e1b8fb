// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Release-notes configuration.
//!
//! The configuration is static for a run. It is deserialized by the caller
//! (TOML or JSON) and checked with [`Config::validate`] before any issue is
//! processed:
//! - `version_parsing`: global/microservice patterns and the prefix map
//! - `release_notes`: title, sections, link filtering, the microservices table
//! - `output`: renderer settings for Markdown and the Word layout

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::version::VersionParser;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Config {
    /// Extra field ids that templates may reference; absent values render empty.
    #[serde(default)]
    pub requested_fields: Vec<String>,
    pub version_parsing: VersionParsingConfig,
    pub release_notes: ReleaseNotesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Patterns used to pull versions out of fix-version strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct VersionParsingConfig {
    /// Tried in order; the first capture group is the global version.
    #[serde(default)]
    pub global_patterns: Vec<String>,
    /// Must define named groups `prefix` and `version`.
    pub microservice_pattern: String,
    /// Prefix → canonical microservice name.
    #[serde(default)]
    pub microservice_mapping: BTreeMap<String, String>,
}

/// Document content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ReleaseNotesConfig {
    #[serde(default = "default_title_template")]
    pub title_template: String,
    /// strftime format for `{current_date}`.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Used in place of a missing global version instead of failing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_global_version: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
    /// Project prefixes whose links survive `{formatted_issuelinks}`; empty keeps all.
    #[serde(default)]
    pub issuelinks_prefixes: Vec<String>,
    /// Issue types left out of every section (e.g., "Sub-task").
    #[serde(default)]
    pub excluded_issue_types: Vec<String>,
    /// Custom field holding the client, for `{client_name}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_field: Option<String>,
    #[serde(default = "default_true")]
    pub emit_empty_sections: bool,
    #[serde(default = "default_unspecified_group_title")]
    pub unspecified_group_title: String,
    /// Type group title for issues whose type is blank.
    #[serde(default = "default_unknown_issue_type")]
    pub unknown_issue_type: String,
    #[serde(default = "default_links_label")]
    pub links_label: String,
    #[serde(default = "default_client_label")]
    pub client_label: String,
    #[serde(default)]
    pub microservices_table: MicroservicesTableConfig,
}

/// One titled division of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SectionConfig {
    #[serde(default)]
    pub id: String,
    /// Defaults to the id with underscores turned into spaces, words capitalized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Issues qualify when this field is non-empty.
    #[serde(default)]
    pub source_field: String,
    #[serde(default)]
    pub disable_grouping: bool,
    #[serde(default)]
    pub group_by_issue_type: bool,
    #[serde(default = "default_header_template")]
    pub header_template: String,
    #[serde(default = "default_body_template")]
    pub body_template: String,
}

impl SectionConfig {
    /// Creates a section with default title and templates.
    pub fn new(id: impl Into<String>, source_field: impl Into<String>) -> Self {
        SectionConfig {
            id: id.into(),
            title: None,
            source_field: source_field.into(),
            disable_grouping: false,
            group_by_issue_type: false,
            header_template: default_header_template(),
            body_template: default_body_template(),
        }
    }

    /// Display title, derived from the id when not configured.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) if !title.trim().is_empty() => title.clone(),
            _ => title_from_id(&self.id),
        }
    }

    /// Whether issue-type subgroups apply (never for flat sections).
    pub fn groups_by_type(&self) -> bool {
        !self.disable_grouping && self.group_by_issue_type
    }
}

/// Summary table of microservice versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MicroservicesTableConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_columns")]
    pub columns: Vec<TableColumn>,
}

impl Default for MicroservicesTableConfig {
    fn default() -> Self {
        MicroservicesTableConfig {
            enabled: false,
            title: None,
            columns: default_columns(),
        }
    }
}

/// A table column: header text and a cell template over `{name}`, `{version}`, `{prefix}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TableColumn {
    pub header: String,
    pub value: String,
}

/// Renderer settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct OutputConfig {
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub word: WordConfig,
}

/// Markdown heading levels and list marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MarkdownConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_markdown_filename")]
    pub filename_template: String,
    #[serde(default = "default_level_1")]
    pub main_title_level: usize,
    #[serde(default = "default_level_2")]
    pub table_title_level: usize,
    #[serde(default = "default_level_2")]
    pub section_title_level: usize,
    #[serde(default = "default_level_3")]
    pub microservice_group_level: usize,
    #[serde(default = "default_level_4")]
    pub issue_type_group_level: usize,
    #[serde(default = "default_list_marker")]
    pub list_marker: String,
    /// Rendered as a list item for sections without issues.
    #[serde(default = "default_empty_section_text")]
    pub empty_section_text: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        MarkdownConfig {
            enabled: true,
            filename_template: default_markdown_filename(),
            main_title_level: 1,
            table_title_level: 2,
            section_title_level: 2,
            microservice_group_level: 3,
            issue_type_group_level: 4,
            list_marker: default_list_marker(),
            empty_section_text: default_empty_section_text(),
        }
    }
}

/// Word layout settings: named paragraph and table styles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WordConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_word_filename")]
    pub filename_template: String,
    /// Base .docx the external writer should start from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<String>,
    #[serde(default)]
    pub styles: WordStyles,
    #[serde(default = "default_empty_section_text")]
    pub empty_section_text: String,
}

impl Default for WordConfig {
    fn default() -> Self {
        WordConfig {
            enabled: false,
            filename_template: default_word_filename(),
            template_path: None,
            styles: WordStyles::default(),
            empty_section_text: default_empty_section_text(),
        }
    }
}

/// Style names applied by the Word layout renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct WordStyles {
    pub main_title: String,
    pub table_title: String,
    pub section_title: String,
    pub microservice_group: String,
    pub issue_type_group: String,
    pub list_bullet_first_line: String,
    pub list_bullet_multiline_indent: String,
    pub table_style: String,
}

/// Word's base paragraph style; continuation lines in it get a manual indent.
pub const WORD_NORMAL_STYLE: &str = "Normal";

impl Default for WordStyles {
    fn default() -> Self {
        WordStyles {
            main_title: "Heading 1".to_string(),
            table_title: "Heading 2".to_string(),
            section_title: "Heading 2".to_string(),
            microservice_group: "Heading 3".to_string(),
            issue_type_group: "Heading 4".to_string(),
            list_bullet_first_line: "List Bullet".to_string(),
            list_bullet_multiline_indent: WORD_NORMAL_STYLE.to_string(),
            table_style: "TableGrid".to_string(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_title_template() -> String {
    "Release Notes - {global_version} - {current_date}".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_unspecified_group_title() -> String {
    "unspecified".to_string()
}

fn default_unknown_issue_type() -> String {
    "Unknown".to_string()
}

fn default_links_label() -> String {
    "Связанные задачи: ".to_string()
}

fn default_client_label() -> String {
    "Клиент: ".to_string()
}

fn default_header_template() -> String {
    "{key}: {summary}".to_string()
}

fn default_body_template() -> String {
    "{content}".to_string()
}

fn default_columns() -> Vec<TableColumn> {
    vec![
        TableColumn {
            header: "Microservice".to_string(),
            value: "{name}".to_string(),
        },
        TableColumn {
            header: "Version".to_string(),
            value: "{version}".to_string(),
        },
    ]
}

fn default_markdown_filename() -> String {
    "ReleaseNotes_{global_version}_{current_date_filename}.md".to_string()
}

fn default_word_filename() -> String {
    "ReleaseNotes_{global_version}_{current_date_filename}.docx.json".to_string()
}

fn default_level_1() -> usize {
    1
}

fn default_level_2() -> usize {
    2
}

fn default_level_3() -> usize {
    3
}

fn default_level_4() -> usize {
    4
}

fn default_list_marker() -> String {
    "-".to_string()
}

fn default_empty_section_text() -> String {
    "*Нет задач для отображения в этой секции.*".to_string()
}

/// Turns `new_features` into `New Features`.
fn title_from_id(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a date, reporting unusable strftime strings instead of panicking.
pub fn format_date(date: NaiveDate, format: &str) -> Result<String> {
    use std::fmt::Write;

    let mut out = String::new();
    write!(out, "{}", date.format(format))
        .map_err(|_| Error::InvalidDateFormat(format.to_string()))?;
    Ok(out)
}

impl Config {
    /// Checks the configuration, returning the first fatal problem.
    ///
    /// Compiles every pattern, checks required section keys and the date
    /// format. Nothing here looks at issues.
    pub fn validate(&self) -> Result<()> {
        VersionParser::new(&self.version_parsing)?;

        let probe = NaiveDate::from_ymd_opt(2000, 1, 31)
            .ok_or_else(|| Error::Config("invalid probe date".to_string()))?;
        format_date(probe, &self.release_notes.date_format)?;

        let mut seen = HashSet::new();
        for (index, section) in self.release_notes.sections.iter().enumerate() {
            let label = if section.id.trim().is_empty() {
                format!("#{}", index + 1)
            } else {
                section.id.clone()
            };
            if section.id.trim().is_empty() {
                return Err(Error::MissingSectionKey {
                    section: label,
                    key: "id",
                });
            }
            if section.source_field.trim().is_empty() {
                return Err(Error::MissingSectionKey {
                    section: label,
                    key: "source_field",
                });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(Error::DuplicateSection(section.id.clone()));
            }
        }

        let markdown = &self.output.markdown;
        for level in [
            markdown.main_title_level,
            markdown.table_title_level,
            markdown.section_title_level,
            markdown.microservice_group_level,
            markdown.issue_type_group_level,
        ] {
            if !(1..=6).contains(&level) {
                return Err(Error::Config(format!(
                    "markdown heading level {} out of range 1-6",
                    level
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
