// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use rn_core::{Config, DocumentModel, WordLayout};

#[test]
fn schema_document_produces_valid_json() {
    let schema = schemars::schema_for!(DocumentModel);
    let json = serde_json::to_string_pretty(&schema).unwrap();

    assert!(json.contains("\"$schema\""));
    assert!(json.contains("\"DocumentModel\""));
    assert!(json.contains("\"sections\""));
}

#[test]
fn schema_document_includes_nested_types() {
    let schema = schemars::schema_for!(DocumentModel);
    let json = serde_json::to_string(&schema).unwrap();

    assert!(json.contains("\"DocumentSection\""));
    assert!(json.contains("\"DocumentGroup\""));
    assert!(json.contains("\"RenderedIssueBlock\""));
    assert!(json.contains("\"GroupKey\""));
}

#[test]
fn schema_config_requires_version_parsing() {
    let schema = schemars::schema_for!(Config);
    let value = serde_json::to_value(&schema).unwrap();

    let required = value["required"].as_array().unwrap();
    assert!(required.iter().any(|r| r == "version_parsing"));
    assert!(required.iter().any(|r| r == "release_notes"));
    assert!(!required.iter().any(|r| r == "output"));
}

#[test]
fn schema_word_layout_describes_blocks() {
    let schema = schemars::schema_for!(WordLayout);
    let json = serde_json::to_string(&schema).unwrap();

    assert!(json.contains("\"WordBlock\""));
    assert!(json.contains("\"paragraph\""));
    assert!(json.contains("\"spacer\""));
}

#[test]
fn run_prints_every_schema() {
    use crate::cli::SchemaCommand;
    for cmd in [
        SchemaCommand::Document,
        SchemaCommand::Config,
        SchemaCommand::WordLayout,
    ] {
        super::run(cmd).unwrap();
    }
}
