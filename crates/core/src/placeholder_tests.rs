// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::IssueLink;
use crate::version::MicroserviceVersion;
use serde_json::json;
use yare::parameterized;

const CONFIG: &str = r#"
requested_fields = ["customfield_777"]

[version_parsing]
global_patterns = ['(\d+)']
microservice_pattern = '(?P<prefix>[A-Z]+)(?P<version>\d+)'

[release_notes]
issuelinks_prefixes = ["CCSSUP"]
client_field = "customfield_12902"

[[release_notes.sections]]
id = "features"
source_field = "customfield_10100"
body_template = "{content}\n{formatted_issuelinks}\n{formatted_client_info}"
"#;

fn config() -> Config {
    toml::from_str(CONFIG).unwrap()
}

fn item(issue: &Issue) -> ClassifiedIssue<'_> {
    ClassifiedIssue {
        issue,
        sections: vec!["features".to_string()],
        microservices: Vec::new(),
    }
}

fn linked_issue(links: &[&str]) -> Issue {
    let mut issue = Issue::new("PHB-1", "Story", "Export")
        .with_custom_field("customfield_10100", "Added CSV export");
    for key in links {
        issue = issue.with_link(IssueLink::new(*key));
    }
    issue
}

#[test]
fn links_filtered_by_prefix() {
    let config = config();
    let resolver = PlaceholderResolver::new(&config);
    let issue = linked_issue(&["CCSSUP-1", "OTHER-2"]);
    assert_eq!(
        resolver.formatted_issuelinks(&issue),
        "Связанные задачи: CCSSUP-1"
    );
}

#[test]
fn links_unfiltered_when_allow_list_empty() {
    let mut config = config();
    config.release_notes.issuelinks_prefixes.clear();
    let resolver = PlaceholderResolver::new(&config);
    let issue = linked_issue(&["OTHER-2", "CCSSUP-1"]);
    assert_eq!(
        resolver.formatted_issuelinks(&issue),
        "Связанные задачи: CCSSUP-1; OTHER-2"
    );
}

#[test]
fn links_empty_after_filter_drop_label() {
    let config = config();
    let resolver = PlaceholderResolver::new(&config);
    assert_eq!(resolver.formatted_issuelinks(&linked_issue(&["OTHER-2"])), "");
    assert_eq!(resolver.formatted_issuelinks(&linked_issue(&[])), "");
}

#[test]
fn links_carry_capitalized_relation_and_sort() {
    let config = config();
    let resolver = PlaceholderResolver::new(&config);
    let issue = Issue::new("PHB-1", "Bug", "S")
        .with_link(IssueLink::new("CCSSUP-9").with_relation("relates to"))
        .with_link(IssueLink::new("CCSSUP-2").with_relation("is blocked by"))
        .with_link(IssueLink::new("CCSSUP-5"));
    assert_eq!(
        resolver.filtered_links(&issue),
        vec!["CCSSUP-5", "Is blocked by CCSSUP-2", "Relates to CCSSUP-9"]
    );
}

#[parameterized(
    full_format = { json!({"value": "Acme Corp - #123 - extra"}), Some("Acme Corp") },
    hash_only = { json!("Globex#77"), Some("Globex") },
    plain = { json!("  Initech  "), Some("Initech") },
    blank_name = { json!(" - #1"), None },
    empty = { json!(""), None },
)]
fn client_name_parsing(value: serde_json::Value, expected: Option<&str>) {
    let config = config();
    let resolver = PlaceholderResolver::new(&config);
    let issue = Issue::new("PHB-1", "Bug", "S").with_custom_field("customfield_12902", value);
    assert_eq!(resolver.client_name(&issue).as_deref(), expected);
}

#[test]
fn client_name_requires_configured_field() {
    let mut config = config();
    config.release_notes.client_field = None;
    let resolver = PlaceholderResolver::new(&config);
    let issue = Issue::new("PHB-1", "Bug", "S").with_custom_field("customfield_12902", "Acme");
    assert_eq!(resolver.client_name(&issue), None);
}

#[parameterized(
    client_and_link = { Some("Acme"), &["CCSSUP-1"], "Клиент: Acme" },
    client_without_allowed_link = { Some("Acme"), &["OTHER-2"], "" },
    client_without_links = { Some("Acme"), &[], "" },
    link_without_client = { None, &["CCSSUP-1"], "" },
)]
fn client_info_needs_client_and_link(client: Option<&str>, links: &[&str], expected: &str) {
    let config = config();
    let resolver = PlaceholderResolver::new(&config);
    let mut issue = linked_issue(links);
    if let Some(name) = client {
        issue = issue.with_custom_field("customfield_12902", name);
    }
    assert_eq!(resolver.formatted_client_info(&issue), expected);
    if !expected.is_empty() {
        assert!(!resolver.formatted_issuelinks(&issue).is_empty());
    }
}

#[test]
fn body_drops_lines_for_empty_placeholders() {
    let config = config();
    let resolver = PlaceholderResolver::new(&config);
    let section = &config.release_notes.sections[0];
    let issue = linked_issue(&["OTHER-2"]).with_custom_field("customfield_12902", "Acme");

    let mut unresolved = BTreeSet::new();
    let block = resolver.render_block(&item(&issue), section, &mut unresolved);
    assert_eq!(block.key, "PHB-1");
    assert_eq!(block.header, vec!["PHB-1: Export"]);
    assert_eq!(block.content, vec!["Added CSV export"]);
    assert!(unresolved.is_empty());
}

#[test]
fn body_with_links_and_client() {
    let config = config();
    let resolver = PlaceholderResolver::new(&config);
    let section = &config.release_notes.sections[0];
    let issue = linked_issue(&["CCSSUP-1", "OTHER-2"])
        .with_custom_field("customfield_12902", json!({"value": "Acme - #5"}));

    let mut unresolved = BTreeSet::new();
    let block = resolver.render_block(&item(&issue), section, &mut unresolved);
    assert_eq!(
        block.content,
        vec![
            "Added CSV export",
            "Связанные задачи: CCSSUP-1",
            "Клиент: Acme",
        ]
    );
}

#[parameterized(
    key = { "key", Some("PHB-1") },
    content = { "content", Some("Added CSV export") },
    standard_absent = { "priority", Some("") },
    requested_absent = { "customfield_777", Some("") },
    carried_custom = { "customfield_10100", Some("Added CSV export") },
    fix_versions = { "fixVersions", Some("IN1, FR2") },
    raw_links = { "issuelinks", Some("CCSSUP-1, OTHER-2") },
    microservices = { "linked_microservices_names", Some("phobos-front, phobos-integration") },
    unknown = { "nonsense", None },
    unrequested_custom = { "customfield_1", None },
)]
fn resolve_names(name: &str, expected: Option<&str>) {
    let config = config();
    let resolver = PlaceholderResolver::new(&config);
    let section = &config.release_notes.sections[0];
    let issue = linked_issue(&["CCSSUP-1", "OTHER-2"])
        .with_fix_version("IN1")
        .with_fix_version("FR2");
    let classified = ClassifiedIssue {
        issue: &issue,
        sections: vec!["features".to_string()],
        microservices: vec![
            MicroserviceVersion {
                name: "phobos-integration".to_string(),
                prefix: "IN".to_string(),
                version: "1".to_string(),
            },
            MicroserviceVersion {
                name: "phobos-front".to_string(),
                prefix: "FR".to_string(),
                version: "2".to_string(),
            },
        ],
    };
    assert_eq!(resolver.resolve(name, &classified, section).as_deref(), expected);
}

#[test]
fn unknown_placeholders_stay_literal_and_are_reported() {
    let config = config();
    let resolver = PlaceholderResolver::new(&config);
    let mut section = config.release_notes.sections[0].clone();
    section.header_template = "{key} {sumary}".to_string();
    let issue = linked_issue(&[]);

    let mut unresolved = BTreeSet::new();
    let block = resolver.render_block(&item(&issue), &section, &mut unresolved);
    assert_eq!(block.header, vec!["PHB-1 {sumary}"]);
    assert_eq!(unresolved.into_iter().collect::<Vec<_>>(), vec!["sumary"]);
}
