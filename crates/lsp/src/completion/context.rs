// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion context detection
//!
//! Decides which snippet table applies to a completion request by
//! inspecting the text of the current line up to the cursor.
//!
//! Detection is substring containment over the raw prefix, not
//! tokenization. That keeps it total and allocation-free, at the cost of
//! known false positives (`"love."` inside a string literal still counts
//! as framework context). The behavior is intentional; do not "fix" it
//! by tokenizing.

use grillcheese_registry::{LOVE_NAMESPACE, SnippetCategory};

/// Detect the completion context for a line prefix
///
/// First matching rule wins, in this fixed priority order:
///
/// 1. prefix contains `love.` → [`SnippetCategory::Love2dApi`]
/// 2. prefix contains `[` → [`SnippetCategory::CollectionIndex`]
/// 3. prefix contains `import` or `export` → [`SnippetCategory::Modules`]
/// 4. otherwise → [`SnippetCategory::General`]
pub fn detect_completion_context(line_prefix: &str) -> SnippetCategory {
    if line_prefix.contains(LOVE_NAMESPACE) {
        SnippetCategory::Love2dApi
    } else if line_prefix.contains('[') {
        SnippetCategory::CollectionIndex
    } else if line_prefix.contains("import") || line_prefix.contains("export") {
        SnippetCategory::Modules
    } else {
        SnippetCategory::General
    }
}
