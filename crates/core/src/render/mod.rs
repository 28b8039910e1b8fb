// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Renderers turning a [`DocumentModel`] into concrete output.

pub mod markdown;
pub mod word;

pub use markdown::MarkdownRenderer;
pub use word::{WordBlock, WordLayout, WordRenderer};

use crate::document::DocumentModel;

/// A renderer over the document model.
pub trait Render {
    type Output;

    fn render(&self, doc: &DocumentModel) -> Self::Output;
}
