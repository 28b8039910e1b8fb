// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generate command: issues file in, release-notes documents out.

use chrono::NaiveDate;
use rn_core::{Config, DocumentComposer, DocumentModel, MarkdownRenderer, Render};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::FormatSelection;
use crate::config;
use crate::error::{Error, Result};
use crate::input;
use crate::output;

/// Options collected from the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub date: Option<String>,
    pub format: FormatSelection,
    pub stdout: bool,
}

/// Parses `--date`; today in local time when absent.
pub fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(s.to_string())),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Reads issues from `input` and composes the document.
pub fn compose(config: &Config, input: &Path, date: NaiveDate) -> Result<DocumentModel> {
    // Build the engine first so config problems surface before reading issues.
    let composer = DocumentComposer::new(config)?;
    let issues = input::read_issues(input)?;
    info!(count = issues.len(), "composing release notes");
    let doc = composer.compose(&issues, date)?;
    info!(
        global_version = doc.global_version.as_deref().unwrap_or("-"),
        blocks = doc.block_count(),
        "composed document"
    );
    Ok(doc)
}

/// Run the generate command.
pub fn run(opts: GenerateOptions) -> Result<()> {
    let date = parse_date(opts.date.as_deref())?;
    let loaded = config::resolve(opts.config.as_deref())?;
    let doc = compose(&loaded.config, &opts.input, date)?;

    if opts.stdout {
        print!("{}", MarkdownRenderer::new(&loaded.config.output.markdown).render(&doc));
        return Ok(());
    }

    let formats = output::selected_formats(opts.format, &loaded.config.output)?;
    let written = output::write_documents(&doc, &loaded.config, &formats, &opts.output_dir)?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
