// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

const CONFIG: &str = r#"
requested_fields = ["customfield_10100"]

[version_parsing]
global_patterns = ['^(\d+\.\d+\.\d+)$', '^v(\d+)$']
microservice_pattern = '^(?P<prefix>[A-Z]+)(?P<version>\d+)$'
microservice_mapping = { FR = "phobos-front" }

[release_notes]
excluded_issue_types = ["Sub-task"]

[[release_notes.sections]]
id = "new_features"
source_field = "customfield_10100"
group_by_issue_type = true
body_template = "{content}\n{customfield_555}\n{formatted_issuelinks}"

[[release_notes.sections]]
id = "notes"
title = "Notes"
source_field = "customfield_20000"
disable_grouping = true
"#;

fn loaded() -> LoadedConfig {
    LoadedConfig {
        path: PathBuf::from("/work/release-notes.toml"),
        config: toml::from_str(CONFIG).unwrap(),
    }
}

#[test]
fn unlisted_placeholders_skip_known_names() {
    let loaded = loaded();
    let section = &loaded.config.release_notes.sections[0];
    let names: Vec<_> = unlisted_placeholders(&loaded.config, section)
        .into_iter()
        .collect();
    assert_eq!(names, vec!["customfield_555"]);
}

#[test]
fn summary_lists_sections_and_outputs() {
    let text = summary(&loaded());
    similar_asserts::assert_eq!(
        text,
        "\
Config: /work/release-notes.toml
Global patterns: 2
Microservice prefixes mapped: 1
Excluded types: Sub-task
Sections (2):
  new_features \"New Features\" from customfield_10100 (by microservice, then issue type)
    note: customfield_555 resolve only if present on the issue
  notes \"Notes\" from customfield_20000 (ungrouped)
Outputs: markdown
"
    );
}

#[test]
fn summary_reports_no_outputs() {
    let mut loaded = loaded();
    loaded.config.output.markdown.enabled = false;
    assert!(summary(&loaded).ends_with("Outputs: none enabled\n"));
}
