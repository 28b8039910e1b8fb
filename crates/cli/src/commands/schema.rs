// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema for the config file and the documents `generate` writes.

use crate::cli::SchemaCommand;
use crate::error::Result;
use rn_core::{Config, DocumentModel, WordLayout};
use schemars::schema_for;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let schema = match cmd {
        SchemaCommand::Document => schema_for!(DocumentModel),
        SchemaCommand::Config => schema_for!(Config),
        SchemaCommand::WordLayout => schema_for!(WordLayout),
    };

    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
