// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const QUICKSTART_HELP: &str = "\
Get started:
  relnotes check                           Validate release-notes.toml
  relnotes generate issues.json            Write enabled formats to .
  relnotes generate issues.json --stdout   Print Markdown instead";

/// Which document formats `generate` writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatSelection {
    Markdown,
    Word,
    /// Every format enabled in the config
    #[default]
    All,
}

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(about = "Compose release notes from tracker issues")]
#[command(
    long_about = "Compose release notes from tracker issues.\n\n\
    Issues are classified into configured sections, grouped by microservice \
    and issue type, and rendered as Markdown or a Word layout."
)]
#[command(version)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Config file selection shared by commands that load a config.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// Path to the config file (default: search for release-notes.toml upward)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate release notes from an exported issue list
    #[command(
        arg_required_else_help = true,
        after_help = "\
Examples:
  relnotes generate issues.json                      Use release-notes.toml
  relnotes generate issues.json -o out --date 2025-06-01
  relnotes generate issues.json --format word -c rn.json"
    )]
    Generate {
        /// Jira search response or array of issues (JSON)
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Directory to write documents into
        #[arg(short = 'o', long, default_value = ".")]
        output_dir: PathBuf,

        /// Release date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Formats to write
        #[arg(short = 'f', long, value_enum, default_value_t = FormatSelection::All)]
        format: FormatSelection,

        /// Print Markdown to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },

    /// Validate the config and print a summary
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Output JSON Schema for config and output formats
    #[command(
        subcommand,
        after_help = "\
Available schemas: document, config, word-layout"
    )]
    Schema(SchemaCommand),
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum SchemaCommand {
    /// Output JSON Schema for the composed document model
    Document,
    /// Output JSON Schema for the config file
    Config,
    /// Output JSON Schema for the Word layout file
    WordLayout,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
