// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Hover Information Provider
//!
//! Extracts the dotted word under the cursor and asks the registry's
//! [`DocProvider`] for documentation. The line text decides which
//! dictionary applies (Love2D API vs. keyword); matching is exact, so a
//! bare `print` never resolves to `love.graphics.print`.
//!
//! A miss returns `None` — "no documentation available" is a normal
//! outcome, never an error.

use crate::document::Document;
use grillcheese_registry::DocProvider;
use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

/// Hover engine for GrillCheese Script
pub struct HoverEngine {
    /// Documentation dictionaries and lookup rule
    docs: DocProvider,
}

impl HoverEngine {
    /// Create a new hover engine
    pub fn new() -> Self {
        Self {
            docs: DocProvider::new(),
        }
    }

    /// Get hover information for a position in a document
    ///
    /// # Returns
    ///
    /// Markdown hover content, or None when the cursor is not on a word
    /// or the word has no documentation.
    pub fn hover(&self, document: &Document, position: Position) -> Option<Hover> {
        let word = document.word_at(position)?;
        let line = document.get_line(position.line as usize)?;

        let markup = self.docs.lookup(&word, &line)?;

        Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: markup.to_string(),
            }),
            range: None,
        })
    }
}

impl Default for HoverEngine {
    fn default() -> Self {
        Self::new()
    }
}
