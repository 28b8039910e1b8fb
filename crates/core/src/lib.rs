// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rn-core: release-notes composition engine
//!
//! This crate turns a set of tracker issues into a format-independent
//! release-notes document and renders it. It performs no I/O: issues,
//! configuration and the current date are handed in by the caller.

pub mod classify;
pub mod compose;
pub mod config;
pub mod document;
pub mod error;
pub mod grouping;
pub mod issue;
pub mod microservice;
pub mod placeholder;
pub mod render;
pub mod template;
pub mod version;

pub use classify::{ClassifiedIssue, SectionClassifier};
pub use compose::{render_filename, DocumentComposer};
pub use config::{Config, SectionConfig};
pub use document::{DocumentModel, RenderedIssueBlock};
pub use error::{Error, Result};
pub use grouping::{GroupKey, GroupingEngine};
pub use issue::{Issue, IssueLink, LinkDirection};
pub use microservice::MicroserviceResolver;
pub use placeholder::PlaceholderResolver;
pub use render::{MarkdownRenderer, Render, WordLayout, WordRenderer};
pub use version::{MicroserviceVersion, ParsedVersion, VersionParser};
