// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Writing rendered documents to disk.

use rn_core::config::OutputConfig;
use rn_core::{render_filename, Config, DocumentModel, MarkdownRenderer, Render, WordRenderer};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::FormatSelection;
use crate::error::{Error, Result};

/// A concrete output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    /// JSON layout consumed by the external .docx writer.
    Word,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Word => write!(f, "word"),
        }
    }
}

/// Formats to write: an explicit selection wins over the config's `enabled` flags.
pub fn selected_formats(
    selection: FormatSelection,
    output: &OutputConfig,
) -> Result<Vec<OutputFormat>> {
    let formats = match selection {
        FormatSelection::Markdown => vec![OutputFormat::Markdown],
        FormatSelection::Word => vec![OutputFormat::Word],
        FormatSelection::All => {
            let mut formats = Vec::new();
            if output.markdown.enabled {
                formats.push(OutputFormat::Markdown);
            }
            if output.word.enabled {
                formats.push(OutputFormat::Word);
            }
            formats
        }
    };
    if formats.is_empty() {
        return Err(Error::NoFormatsEnabled);
    }
    Ok(formats)
}

/// Renders the document in one format, returning the file name and contents.
pub fn render(
    format: OutputFormat,
    doc: &DocumentModel,
    config: &Config,
) -> Result<(String, String)> {
    let date_format = &config.release_notes.date_format;
    match format {
        OutputFormat::Markdown => {
            let markdown = &config.output.markdown;
            let name = render_filename(&markdown.filename_template, doc, date_format)?;
            Ok((name, MarkdownRenderer::new(markdown).render(doc)))
        }
        OutputFormat::Word => {
            let word = &config.output.word;
            let name = render_filename(&word.filename_template, doc, date_format)?;
            let layout = WordRenderer::new(word).render(doc);
            let mut json = serde_json::to_string_pretty(&layout)?;
            json.push('\n');
            Ok((name, json))
        }
    }
}

/// Writes every requested format into `dir`, creating it when missing.
pub fn write_documents(
    doc: &DocumentModel,
    config: &Config,
    formats: &[OutputFormat],
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    // Render everything first so a filename error leaves no partial output.
    let rendered = formats
        .iter()
        .map(|format| render(*format, doc, config).map(|r| (*format, r)))
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(rendered.len());
    for (format, (name, contents)) in rendered {
        let path = dir.join(name);
        fs::write(&path, contents)?;
        info!(%format, path = %path.display(), "wrote release notes");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
