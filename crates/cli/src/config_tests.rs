// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

const MINIMAL_TOML: &str = r#"
[version_parsing]
global_patterns = ['^(\d+\.\d+\.\d+)$']
microservice_pattern = '^(?P<prefix>[A-Z]+)(?P<version>\d+(?:\.\d+)*)$'

[release_notes]
[[release_notes.sections]]
id = "features"
source_field = "customfield_10100"
"#;

const MINIMAL_JSON: &str = r#"{
  "version_parsing": {
    "global_patterns": ["^(\\d+\\.\\d+\\.\\d+)$"],
    "microservice_pattern": "^(?P<prefix>[A-Z]+)(?P<version>\\d+)$"
  },
  "release_notes": {
    "sections": [{"id": "fixes", "source_field": "customfield_1"}]
  }
}"#;

#[test]
fn loads_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release-notes.toml");
    fs::write(&path, MINIMAL_TOML).unwrap();

    let config = load(&path).unwrap();
    assert_eq!(config.release_notes.sections[0].id, "features");
    assert!(config.output.markdown.enabled);
}

#[test]
fn loads_json_by_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rn.JSON");
    fs::write(&path, MINIMAL_JSON).unwrap();

    let config = load(&path).unwrap();
    assert_eq!(config.release_notes.sections[0].id, "fixes");
}

#[test]
fn parse_failure_names_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[version_parsing\n").unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn missing_file_is_config_error() {
    let temp = TempDir::new().unwrap();
    let err = load(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn invalid_pattern_is_reported_as_core_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release-notes.toml");
    fs::write(&path, MINIMAL_TOML.replace(r"^(\d+\.\d+\.\d+)$", "^(unclosed")).unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, Error::Core(_)));
}

#[test]
fn relative_template_path_resolves_against_config_dir() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release-notes.toml");
    let content = format!(
        "{}\n[output.word]\nenabled = true\ntemplate_path = \"templates/rn.docx\"\n",
        MINIMAL_TOML
    );
    fs::write(&path, content).unwrap();

    let config = load(&path).unwrap();
    let expected = temp.path().join("templates/rn.docx").display().to_string();
    assert_eq!(config.output.word.template_path, Some(expected));
}

#[test]
fn find_config_walks_up() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a/b/c");
    fs::create_dir_all(&nested).unwrap();
    fs::write(temp.path().join("a/release-notes.json"), MINIMAL_JSON).unwrap();

    let found = find_config(&nested).unwrap();
    assert_eq!(found, temp.path().join("a/release-notes.json"));
}

#[test]
fn find_config_prefers_toml_in_same_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("release-notes.json"), MINIMAL_JSON).unwrap();
    fs::write(temp.path().join("release-notes.toml"), MINIMAL_TOML).unwrap();

    let found = find_config(temp.path()).unwrap();
    assert_eq!(found, temp.path().join("release-notes.toml"));
}

#[test]
fn resolve_uses_explicit_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, MINIMAL_TOML).unwrap();

    let loaded = resolve(Some(&path)).unwrap();
    assert_eq!(loaded.path, path);
    assert_eq!(loaded.config.release_notes.sections.len(), 1);
}
