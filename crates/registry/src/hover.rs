// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Hover Documentation Provider
//!
//! Implements the documentation lookup rule over the two dictionaries in
//! [`crate::docs`]:
//!
//! - if the line containing the cursor mentions the Love2D namespace
//!   (`love.`), the hovered token is looked up in the Love2D table;
//! - otherwise it is looked up in the keyword table.
//!
//! Lookup is exact-match only. A miss is a normal outcome, not an error.
//!
//! ## Examples
//!
//! ```rust
//! use grillcheese_registry::DocProvider;
//!
//! let provider = DocProvider::new();
//! let doc = provider.lookup("love.graphics.print", "love.graphics.print(\"hi\", 0, 0)");
//! assert!(doc.is_some());
//!
//! // No partial-name resolution across namespace boundaries.
//! assert!(provider.lookup("print", "love.graphics.print(\"hi\", 0, 0)").is_none());
//! ```

use crate::docs::{keyword_docs, love2d_docs};
use crate::LOVE_NAMESPACE;
use std::collections::HashMap;

/// Documentation provider for GrillCheese Script hover requests
#[derive(Debug, Clone)]
pub struct DocProvider {
    love2d: HashMap<&'static str, &'static str>,
    keywords: HashMap<&'static str, &'static str>,
}

impl DocProvider {
    /// Create a new provider with both dictionaries loaded
    pub fn new() -> Self {
        Self {
            love2d: love2d_docs().iter().map(|d| (d.key, d.markup)).collect(),
            keywords: keyword_docs().iter().map(|d| (d.key, d.markup)).collect(),
        }
    }

    /// Look up documentation for a token given its surrounding line
    ///
    /// The line text decides which dictionary applies; the token itself is
    /// matched exactly against that dictionary's keys.
    pub fn lookup(&self, token: &str, line_text: &str) -> Option<&'static str> {
        if line_text.contains(LOVE_NAMESPACE) {
            self.love2d_doc(token)
        } else {
            self.keyword_doc(token)
        }
    }

    /// Look up a Love2D API name directly
    pub fn love2d_doc(&self, name: &str) -> Option<&'static str> {
        self.love2d.get(name).copied()
    }

    /// Look up a keyword directly
    pub fn keyword_doc(&self, name: &str) -> Option<&'static str> {
        self.keywords.get(name).copied()
    }
}

impl Default for DocProvider {
    fn default() -> Self {
        Self::new()
    }
}
