// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix → canonical microservice name lookup.

use std::collections::BTreeMap;

/// Static prefix map. Unknown prefixes resolve to themselves.
#[derive(Debug, Clone, Default)]
pub struct MicroserviceResolver {
    mapping: BTreeMap<String, String>,
}

impl MicroserviceResolver {
    pub fn new(mapping: BTreeMap<String, String>) -> Self {
        MicroserviceResolver { mapping }
    }

    /// Canonical name for `prefix`, or the prefix itself when unmapped.
    pub fn resolve(&self, prefix: &str) -> String {
        match self.mapping.get(prefix) {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => prefix.to_string(),
        }
    }

    pub fn is_known(&self, prefix: &str) -> bool {
        self.mapping
            .get(prefix)
            .is_some_and(|name| !name.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "microservice_tests.rs"]
mod tests;
