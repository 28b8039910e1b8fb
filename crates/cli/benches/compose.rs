// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for composing and rendering release notes over synthetic issues.

#![allow(clippy::panic)]

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rn_core::{Config, DocumentComposer, Issue, IssueLink, MarkdownRenderer, Render};

const CONFIG: &str = r#"
[version_parsing]
global_patterns = ['^(\d+\.\d+\.\d+) \(global\)$']
microservice_pattern = '^(?P<prefix>[A-Z]+)(?P<version>\d+(?:\.\d+)*)$'
microservice_mapping = { FR = "phobos-front", IN = "phobos-integration", BE = "phobos-backend" }

[release_notes]
issuelinks_prefixes = ["CCSSUP"]
client_field = "customfield_12902"
excluded_issue_types = ["Sub-task"]

[release_notes.microservices_table]
enabled = true

[[release_notes.sections]]
id = "features"
source_field = "customfield_10100"
group_by_issue_type = true
body_template = "{content}\n{formatted_issuelinks}\n{formatted_client_info}"

[[release_notes.sections]]
id = "notes"
source_field = "customfield_10200"
disable_grouping = true
"#;

const PREFIXES: &[&str] = &["FR", "IN", "BE", "QA"];
const TYPES: &[&str] = &["Bug", "Story", "Task", "Sub-task"];

fn synthetic_issues(count: usize) -> Vec<Issue> {
    (0..count)
        .map(|i| {
            let mut issue = Issue::new(
                format!("PHB-{}", i),
                TYPES[i % TYPES.len()],
                format!("Change {}", i),
            )
            .with_fix_version("1.2.3 (global)")
            .with_fix_version(format!("{}{}.{}", PREFIXES[i % PREFIXES.len()], i % 5, i % 3))
            .with_custom_field("customfield_10100", format!("Feature text {}", i))
            .with_custom_field("customfield_12902", "Acme - Retail #4")
            .with_link(IssueLink::new(format!("CCSSUP-{}", i)).with_relation("relates to"));
            if i % 4 == 0 {
                issue = issue.with_custom_field("customfield_10200", "Known limitation");
            }
            issue
        })
        .collect()
}

fn compose(c: &mut Criterion) {
    let config: Config = match toml::from_str(CONFIG) {
        Ok(config) => config,
        Err(e) => panic!("bench config: {}", e),
    };
    let composer = match DocumentComposer::new(&config) {
        Ok(composer) => composer,
        Err(e) => panic!("bench composer: {}", e),
    };
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
    let mut group = c.benchmark_group("compose");

    for count in [10usize, 100, 1000] {
        let issues = synthetic_issues(count);
        group.bench_with_input(BenchmarkId::new("document", count), &issues, |b, issues| {
            b.iter(|| composer.compose(issues, date))
        });

        if let Ok(doc) = composer.compose(&issues, date) {
            let renderer = MarkdownRenderer::new(&config.output.markdown);
            group.bench_with_input(BenchmarkId::new("markdown", count), &doc, |b, doc| {
                b.iter(|| renderer.render(doc))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, compose);
criterion_main!(benches);
