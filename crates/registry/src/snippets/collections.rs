// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Collection index-access snippet definitions

use crate::SnippetEntry;

/// Get all collection access snippets
///
/// Triggered after an opening `[`; the snippet completes the index and
/// the closing bracket.
pub fn all_snippets() -> Vec<SnippetEntry> {
    vec![
        SnippetEntry::new("Array access", "${1:index}]")
            .with_detail("Access array element (0-indexed)"),
    ]
}
