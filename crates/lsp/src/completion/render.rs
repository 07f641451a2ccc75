// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion rendering
//!
//! This module converts registry snippet entries into LSP
//! `CompletionItem` representations. All templates are inserted in
//! snippet format so the client drives tab stops and enumerated-choice
//! placeholders.

use grillcheese_registry::{SnippetCategory, SnippetEntry};
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, Documentation, InsertTextFormat, MarkupContent, MarkupKind,
};

/// Completion renderer
///
/// Converts snippet entries to LSP CompletionItem representations.
pub struct SnippetRenderer;

impl SnippetRenderer {
    /// Render a full snippet table
    ///
    /// Entry order is preserved; the output for a given table is the same
    /// on every call.
    pub fn render(category: SnippetCategory, entries: &[SnippetEntry]) -> Vec<CompletionItem> {
        entries
            .iter()
            .map(|entry| Self::item(category, entry))
            .collect()
    }

    /// Render a single snippet entry
    fn item(category: SnippetCategory, entry: &SnippetEntry) -> CompletionItem {
        CompletionItem {
            label: entry.name.clone(),
            kind: Some(Self::item_kind(category)),
            detail: Some(entry.detail.clone()),
            documentation: Self::documentation(category, entry),
            insert_text: Some(entry.insert_text.clone()),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            ..Default::default()
        }
    }

    /// Map a snippet category to the item kind shown by the client
    fn item_kind(category: SnippetCategory) -> CompletionItemKind {
        match category {
            SnippetCategory::Love2dApi => CompletionItemKind::FUNCTION,
            SnippetCategory::CollectionIndex | SnippetCategory::Modules => {
                CompletionItemKind::SNIPPET
            }
            SnippetCategory::General => CompletionItemKind::KEYWORD,
        }
    }

    /// Markdown documentation for framework API items
    ///
    /// Other tables carry their description in `detail` only.
    fn documentation(category: SnippetCategory, entry: &SnippetEntry) -> Option<Documentation> {
        if category != SnippetCategory::Love2dApi {
            return None;
        }

        Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: format!("**{}**\n\n{}", entry.name, entry.detail),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_preserves_order_and_size() {
        let entries = vec![
            SnippetEntry::new("love.event.quit", "love.event.quit()").with_detail("Quit"),
            SnippetEntry::new("love.event.push", "love.event.push(${1:event})").with_detail("Push"),
        ];

        let items = SnippetRenderer::render(SnippetCategory::Love2dApi, &entries);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "love.event.quit");
        assert_eq!(items[1].label, "love.event.push");
    }

    #[test]
    fn test_all_items_are_snippet_format() {
        let entries = vec![SnippetEntry::new("if", "if (${1:condition}) {}").with_detail("If")];

        let items = SnippetRenderer::render(SnippetCategory::General, &entries);
        assert_eq!(items[0].insert_text_format, Some(InsertTextFormat::SNIPPET));
        assert_eq!(items[0].insert_text.as_deref(), Some("if (${1:condition}) {}"));
    }

    #[test]
    fn test_item_kinds_by_category() {
        let entry = SnippetEntry::new("x", "x");

        let api = SnippetRenderer::render(SnippetCategory::Love2dApi, &[entry.clone()]);
        assert_eq!(api[0].kind, Some(CompletionItemKind::FUNCTION));

        let idx = SnippetRenderer::render(SnippetCategory::CollectionIndex, &[entry.clone()]);
        assert_eq!(idx[0].kind, Some(CompletionItemKind::SNIPPET));

        let general = SnippetRenderer::render(SnippetCategory::General, &[entry]);
        assert_eq!(general[0].kind, Some(CompletionItemKind::KEYWORD));
    }

    #[test]
    fn test_api_items_carry_markdown_documentation() {
        let entry =
            SnippetEntry::new("love.timer.getFPS", "love.timer.getFPS()").with_detail("Get FPS");

        let items = SnippetRenderer::render(SnippetCategory::Love2dApi, &[entry]);
        match &items[0].documentation {
            Some(Documentation::MarkupContent(markup)) => {
                assert!(markup.value.contains("love.timer.getFPS"));
            }
            other => panic!("expected markdown documentation, got {other:?}"),
        }
    }
}
