// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `{name}` substitution shared by titles, filenames, table cells and
//! issue templates.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"\{([\w.-]+)\}") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Result of substituting a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    pub text: String,
    /// Placeholder names the resolver declined, left as literal text.
    pub unresolved: Vec<String>,
}

/// Replaces every `{name}` for which `resolve` returns a value.
///
/// Names the resolver returns `None` for are kept verbatim, braces included.
pub fn substitute<F>(template: &str, mut resolve: F) -> Substituted
where
    F: FnMut(&str) -> Option<String>,
{
    let mut unresolved = Vec::new();
    let text = PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            match resolve(name) {
                Some(value) => value,
                None => {
                    if !unresolved.iter().any(|n| n == name) {
                        unresolved.push(name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        })
        .into_owned();
    Substituted { text, unresolved }
}

/// Returns true if `template` contains `{name}`.
pub fn references(template: &str, name: &str) -> bool {
    PLACEHOLDER_RE
        .captures_iter(template)
        .any(|caps| &caps[1] == name)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
