// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown output.

use super::Render;
use crate::config::MarkdownConfig;
use crate::document::{DocumentGroup, DocumentModel, MicroservicesTable, RenderedIssueBlock};

/// Renders the model as Markdown with configured heading levels.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer<'c> {
    config: &'c MarkdownConfig,
}

impl<'c> MarkdownRenderer<'c> {
    pub fn new(config: &'c MarkdownConfig) -> Self {
        MarkdownRenderer { config }
    }

    fn heading(&self, out: &mut String, level: usize, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        out.push_str(&format!("{} {}\n\n", "#".repeat(level.clamp(1, 6)), text));
    }

    fn table(&self, out: &mut String, table: &MicroservicesTable) {
        if let Some(title) = &table.title {
            self.heading(out, self.config.table_title_level, title);
        }
        if table.headers.iter().all(|h| h.trim().is_empty()) || table.rows.is_empty() {
            return;
        }
        out.push_str(&format!("| {} |\n", table_row(&table.headers)));
        out.push_str(&format!("|{}|\n", vec!["---"; table.headers.len()].join("|")));
        for row in &table.rows {
            out.push_str(&format!("| {} |\n", table_row(&row.cells)));
        }
        out.push('\n');
    }

    fn block(&self, out: &mut String, block: &RenderedIssueBlock) {
        let mut lines = block.lines();
        if let Some(first) = lines.next() {
            out.push_str(&format!("{} {}\n", self.config.list_marker, first));
        }
        for line in lines {
            out.push_str(&format!("  {}\n", line));
        }
    }

    fn group(&self, out: &mut String, group: &DocumentGroup, level: usize) {
        if group.block_count() == 0 {
            return;
        }
        if !group.is_ungrouped() {
            self.heading(out, level, &group.title);
        }
        if !group.blocks.is_empty() {
            for block in &group.blocks {
                self.block(out, block);
            }
            out.push('\n');
        }
        for sub in &group.subgroups {
            self.group(out, sub, self.config.issue_type_group_level);
        }
    }
}

/// Joins cells with `|` escaped so cell text cannot split a column.
fn table_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| cell.replace('|', "\\|"))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl Render for MarkdownRenderer<'_> {
    type Output = String;

    fn render(&self, doc: &DocumentModel) -> String {
        let mut out = String::new();
        self.heading(&mut out, self.config.main_title_level, &doc.title);

        if let Some(table) = &doc.microservices_table {
            self.table(&mut out, table);
        }

        for section in &doc.sections {
            self.heading(&mut out, self.config.section_title_level, &section.title);
            if section.is_empty() {
                out.push_str(&format!(
                    "{} {}\n\n",
                    self.config.list_marker, self.config.empty_section_text
                ));
                continue;
            }
            for group in &section.groups {
                self.group(&mut out, group, self.config.microservice_group_level);
            }
        }

        out
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
