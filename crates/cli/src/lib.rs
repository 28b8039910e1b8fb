// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rnrs - the command layer of the `relnotes` release-notes generator.
//!
//! This crate wires the pure composition engine in [`rn_core`] to the
//! outside world: config discovery, reading exported issues, log setup,
//! and writing the rendered documents.
//!
//! # Main Components
//!
//! - [`config`] - Finds and loads `release-notes.toml` / `.json`
//! - [`input`] - Converts a Jira search export into [`rn_core::Issue`]s
//! - [`output`] - Renders and writes Markdown and Word layout files
//! - [`Error`] - Error types for all operations

mod cli;
mod commands;

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command, ConfigArgs, FormatSelection, SchemaCommand};
pub use error::{Error, Result};

use commands::generate::GenerateOptions;

/// Dispatches a parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            input,
            config,
            output_dir,
            date,
            format,
            stdout,
        } => commands::generate::run(GenerateOptions {
            input,
            config: config.config,
            output_dir,
            date,
            format,
            stdout,
        }),
        Command::Check { config } => commands::check::run(config.config.as_deref()),
        Command::Schema(cmd) => commands::schema::run(cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
