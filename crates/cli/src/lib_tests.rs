// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Tests for the public `run()` dispatcher.

use crate::{run, Command, ConfigArgs, Error, FormatSelection, SchemaCommand};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn schema_commands_succeed() {
    run(Command::Schema(SchemaCommand::Config)).unwrap();
}

#[test]
fn check_with_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    let err = run(Command::Check {
        config: ConfigArgs {
            config: Some(temp.path().join("absent.toml")),
        },
    })
    .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn generate_rejects_bad_date_before_loading_config() {
    let err = run(Command::Generate {
        input: PathBuf::from("issues.json"),
        config: ConfigArgs {
            config: Some(PathBuf::from("/nonexistent/release-notes.toml")),
        },
        output_dir: PathBuf::from("."),
        date: Some("tomorrow".to_string()),
        format: FormatSelection::All,
        stdout: true,
    })
    .unwrap_err();
    assert!(matches!(err, Error::InvalidDate(_)));
}
