// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command: validate a config and summarize what it will do.

use rn_core::issue::STANDARD_FIELDS;
use rn_core::placeholder::DERIVED_PLACEHOLDERS;
use rn_core::{template, Config, SectionConfig};
use std::collections::BTreeSet;
use std::path::Path;

use crate::config::{self, LoadedConfig};
use crate::error::Result;

/// Placeholders in section templates that resolve only when issues carry a
/// custom field of that name.
pub fn unlisted_placeholders(config: &Config, section: &SectionConfig) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for tpl in [&section.header_template, &section.body_template] {
        names.extend(template::substitute(tpl, |_| None).unresolved);
    }
    names.retain(|name| {
        !STANDARD_FIELDS.contains(&name.as_str())
            && !DERIVED_PLACEHOLDERS.contains(&name.as_str())
            && !config.requested_fields.contains(name)
    });
    names
}

fn grouping(section: &SectionConfig) -> &'static str {
    if section.disable_grouping {
        "ungrouped"
    } else if section.groups_by_type() {
        "by microservice, then issue type"
    } else {
        "by microservice"
    }
}

/// Human-readable summary of a validated config.
pub fn summary(loaded: &LoadedConfig) -> String {
    let config = &loaded.config;
    let parsing = &config.version_parsing;
    let notes = &config.release_notes;
    let mut out = String::new();

    out.push_str(&format!("Config: {}\n", loaded.path.display()));
    out.push_str(&format!(
        "Global patterns: {}\n",
        parsing.global_patterns.len()
    ));
    out.push_str(&format!(
        "Microservice prefixes mapped: {}\n",
        parsing.microservice_mapping.len()
    ));
    if !notes.excluded_issue_types.is_empty() {
        out.push_str(&format!(
            "Excluded types: {}\n",
            notes.excluded_issue_types.join(", ")
        ));
    }

    out.push_str(&format!("Sections ({}):\n", notes.sections.len()));
    for section in &notes.sections {
        out.push_str(&format!(
            "  {} \"{}\" from {} ({})\n",
            section.id,
            section.display_title(),
            section.source_field,
            grouping(section)
        ));
        let unlisted = unlisted_placeholders(config, section);
        if !unlisted.is_empty() {
            let names: Vec<_> = unlisted.into_iter().collect();
            out.push_str(&format!(
                "    note: {} resolve only if present on the issue\n",
                names.join(", ")
            ));
        }
    }

    let mut outputs = Vec::new();
    if config.output.markdown.enabled {
        outputs.push("markdown");
    }
    if config.output.word.enabled {
        outputs.push("word");
    }
    if outputs.is_empty() {
        out.push_str("Outputs: none enabled\n");
    } else {
        out.push_str(&format!("Outputs: {}\n", outputs.join(", ")));
    }
    out
}

/// Run the check command.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let loaded = config::resolve(config_path)?;
    print!("{}", summary(&loaded));
    println!("Config OK");
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
