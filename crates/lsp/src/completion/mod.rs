// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion engine
//!
//! Completion for GrillCheese Script is table-driven: the line prefix at
//! the cursor selects one of four fixed snippet tables, and the whole
//! table is returned. No prefix filtering happens server-side — narrowing
//! against what the user already typed is delegated to the client's own
//! matching.
//!
//! The pipeline per request:
//!
//! 1. take the current line's text up to the cursor (line prefix)
//! 2. classify the prefix ([`context::detect_completion_context`])
//! 3. fetch the table for that category from the [`SnippetRegistry`]
//! 4. render entries into `CompletionItem`s ([`render::SnippetRenderer`])
//!
//! Every step is a pure function of the request inputs and the constant
//! tables, so identical requests produce identical item lists.

pub mod context;
pub mod render;

use crate::document::Document;
use grillcheese_registry::SnippetRegistry;
use std::sync::Arc;
use tower_lsp::lsp_types::{CompletionItem, Position};

pub use context::detect_completion_context;
pub use render::SnippetRenderer;

/// Completion engine for GrillCheese Script
pub struct CompletionEngine {
    /// Static snippet tables
    registry: Arc<SnippetRegistry>,
}

impl CompletionEngine {
    /// Create an engine over a shared snippet registry
    pub fn new(registry: Arc<SnippetRegistry>) -> Self {
        Self { registry }
    }

    /// Compute completion items for a position in a document
    ///
    /// Returns the full snippet table for the detected context. A
    /// position outside the document yields an empty list — that is a
    /// normal "no result", not an error.
    pub fn complete(&self, document: &Document, position: Position) -> Vec<CompletionItem> {
        let Some(prefix) = document.line_prefix(position) else {
            return Vec::new();
        };

        let category = detect_completion_context(&prefix);
        SnippetRenderer::render(category, self.registry.entries(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::lsp_types::Url;

    fn doc(content: &str) -> Document {
        Document::new(
            Url::parse("file:///game.gcs").unwrap(),
            content.to_string(),
            1,
            "grillcheese".to_string(),
        )
    }

    fn engine() -> CompletionEngine {
        CompletionEngine::new(Arc::new(SnippetRegistry::new()))
    }

    #[test]
    fn test_complete_love_namespace() {
        let items = engine().complete(&doc("x = love."), Position::new(0, 9));

        assert_eq!(items.len(), 26);
        assert!(items.iter().any(|i| i.label == "love.graphics.print"));
    }

    #[test]
    fn test_complete_out_of_range_position_is_empty() {
        let items = engine().complete(&doc("int x = 5"), Position::new(10, 0));
        assert!(items.is_empty());
    }

    #[test]
    fn test_complete_only_considers_text_before_cursor() {
        // The bracket sits after the cursor, so the prefix is general.
        let document = doc("x = arr[0]");
        let items = engine().complete(&document, Position::new(0, 4));

        assert!(items.iter().any(|i| i.label == "fn"));
        assert_eq!(items.len(), 22);
    }

    #[test]
    fn test_complete_is_deterministic() {
        let document = doc("import ");
        let engine = engine();

        let first = engine.complete(&document, Position::new(0, 7));
        let second = engine.complete(&document, Position::new(0, 7));

        assert_eq!(first.len(), 9);
        assert_eq!(
            first.iter().map(|i| i.label.clone()).collect::<Vec<_>>(),
            second.iter().map(|i| i.label.clone()).collect::<Vec<_>>()
        );
    }
}
