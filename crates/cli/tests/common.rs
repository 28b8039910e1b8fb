// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const CONFIG: &str = r#"
[version_parsing]
global_patterns = ['^(\d+\.\d+\.\d+) \(global\)$']
microservice_pattern = '^(?P<prefix>[A-Z]+)(?P<version>\d+(?:\.\d+)*)$'

[version_parsing.microservice_mapping]
FR = "front"
IN = "integration"

[release_notes]
title_template = "Release {global_version}"
excluded_issue_types = ["Sub-task"]

[[release_notes.sections]]
id = "features"
source_field = "customfield_10100"
"#;

pub const ISSUES: &str = r#"{
  "total": 3,
  "issues": [
    {"key": "PHB-2", "fields": {
      "summary": "Export",
      "issuetype": {"name": "Story"},
      "fixVersions": [{"name": "IN1.0"}, {"name": "FR2.0"}],
      "customfield_10100": "CSV export"
    }},
    {"key": "PHB-1", "fields": {
      "summary": "Login",
      "issuetype": {"name": "Bug"},
      "fixVersions": [{"name": "1.2.3 (global)"}, {"name": "FR2.0"}],
      "customfield_10100": "Login fixed"
    }},
    {"key": "PHB-3", "fields": {
      "summary": "Hidden",
      "issuetype": {"name": "Sub-task"},
      "fixVersions": [{"name": "FR2.0"}],
      "customfield_10100": "never shown"
    }}
  ]
}"#;

pub const EXPECTED_MARKDOWN: &str = "\
# Release 1.2.3

## Features

### front

- PHB-1: Login
  Login fixed
- PHB-2: Export
  CSV export

### integration

- PHB-2: Export
  CSV export

";

pub fn relnotes() -> Command {
    cargo_bin_cmd!("relnotes")
}

/// Temp directory holding `release-notes.toml` and `issues.json`.
pub fn project() -> TempDir {
    project_with(CONFIG, ISSUES)
}

pub fn project_with(config: &str, issues: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("release-notes.toml"), config).unwrap();
    fs::write(temp.path().join("issues.json"), issues).unwrap();
    temp
}

pub fn read(temp: &TempDir, relative: &str) -> String {
    fs::read_to_string(temp.path().join(relative)).unwrap()
}

pub fn path(temp: &TempDir, relative: &str) -> PathBuf {
    temp.path().join(relative)
}
