// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word document layout.
//!
//! Produces the ordered, styled paragraphs and tables a .docx writer
//! should emit. Writing the binary file itself happens outside this crate.

use serde::{Deserialize, Serialize};

use super::Render;
use crate::config::{WordConfig, WORD_NORMAL_STYLE};
use crate::document::{DocumentGroup, DocumentModel, RenderedIssueBlock};

/// One styled element of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WordBlock {
    Paragraph {
        style: String,
        text: String,
        /// Continuation line in the plain paragraph style; needs a manual left indent.
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        indent: bool,
    },
    Table {
        style: String,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Empty paragraph used as vertical space.
    Spacer,
}

/// Styled layout plus the optional base template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WordLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<String>,
    pub blocks: Vec<WordBlock>,
}

#[derive(Debug, Clone, Copy)]
pub struct WordRenderer<'c> {
    config: &'c WordConfig,
}

impl<'c> WordRenderer<'c> {
    pub fn new(config: &'c WordConfig) -> Self {
        WordRenderer { config }
    }

    fn paragraph(style: &str, text: &str) -> WordBlock {
        WordBlock::Paragraph {
            style: style.to_string(),
            text: text.to_string(),
            indent: false,
        }
    }

    fn heading(blocks: &mut Vec<WordBlock>, style: &str, text: &str) {
        if !text.trim().is_empty() {
            blocks.push(Self::paragraph(style, text));
        }
    }

    fn issue(&self, blocks: &mut Vec<WordBlock>, block: &RenderedIssueBlock) {
        let styles = &self.config.styles;
        let continuation = &styles.list_bullet_multiline_indent;
        for (i, line) in block.lines().enumerate() {
            if i == 0 {
                blocks.push(Self::paragraph(&styles.list_bullet_first_line, line));
            } else {
                blocks.push(WordBlock::Paragraph {
                    style: continuation.clone(),
                    text: line.to_string(),
                    indent: continuation == WORD_NORMAL_STYLE,
                });
            }
        }
    }

    fn group(&self, blocks: &mut Vec<WordBlock>, group: &DocumentGroup, style: &str) {
        if group.block_count() == 0 {
            return;
        }
        if !group.is_ungrouped() {
            Self::heading(blocks, style, &group.title);
        }
        for block in &group.blocks {
            self.issue(blocks, block);
        }
        for sub in &group.subgroups {
            self.group(blocks, sub, &self.config.styles.issue_type_group);
        }
    }
}

impl Render for WordRenderer<'_> {
    type Output = WordLayout;

    fn render(&self, doc: &DocumentModel) -> WordLayout {
        let styles = &self.config.styles;
        let mut blocks = Vec::new();

        Self::heading(&mut blocks, &styles.main_title, &doc.title);
        blocks.push(WordBlock::Spacer);

        if let Some(table) = &doc.microservices_table {
            if let Some(title) = &table.title {
                Self::heading(&mut blocks, &styles.table_title, title);
            }
            if table.headers.iter().any(|h| !h.trim().is_empty()) && !table.rows.is_empty() {
                blocks.push(WordBlock::Table {
                    style: styles.table_style.clone(),
                    header: table.headers.clone(),
                    rows: table.rows.iter().map(|r| r.cells.clone()).collect(),
                });
                blocks.push(WordBlock::Spacer);
            }
        }

        for section in &doc.sections {
            Self::heading(&mut blocks, &styles.section_title, &section.title);
            if section.is_empty() {
                blocks.push(Self::paragraph(
                    &styles.list_bullet_first_line,
                    &self.config.empty_section_text,
                ));
                continue;
            }
            for group in &section.groups {
                self.group(&mut blocks, group, &styles.microservice_group);
            }
        }

        WordLayout {
            template_path: self.config.template_path.clone(),
            blocks,
        }
    }
}

#[cfg(test)]
#[path = "word_tests.rs"]
mod tests;
