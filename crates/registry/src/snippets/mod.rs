// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Snippet tables for completion
//!
//! One fixed table per completion context. Tables are built once in
//! [`SnippetRegistry::new`] and never mutated; the same category always
//! yields the same entry sequence.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod collections;
pub mod general;
pub mod love2d;
pub mod modules;

/// The four mutually exclusive completion contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnippetCategory {
    /// Calls into the Love2D framework API (`love.` namespace)
    Love2dApi,
    /// Collection index access (inside `[`)
    CollectionIndex,
    /// Module import/export statements
    Modules,
    /// Keywords, declarations and lifecycle callback skeletons
    General,
}

/// A single completion suggestion.
///
/// `insert_text` uses LSP snippet syntax: `${1:placeholder}` tab stops and
/// `${1|fill,line|}` enumerated choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetEntry {
    /// Display label, unique within its table
    pub name: String,
    /// Short human-readable description
    pub detail: String,
    /// Insertable snippet template
    pub insert_text: String,
}

impl SnippetEntry {
    /// Create a new snippet entry with builder pattern
    pub fn new(name: impl Into<String>, insert_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: String::new(),
            insert_text: insert_text.into(),
        }
    }

    /// Builder method: set the description shown next to the label
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

/// Snippet registry for GrillCheese Script completion
///
/// Stores and provides lookup for the fixed suggestion tables, organized
/// by completion context.
#[derive(Debug, Clone)]
pub struct SnippetRegistry {
    snippets: HashMap<SnippetCategory, Vec<SnippetEntry>>,
}

impl SnippetRegistry {
    /// Create a new registry with all builtin tables loaded
    pub fn new() -> Self {
        let mut registry = Self {
            snippets: HashMap::new(),
        };

        registry
            .snippets
            .insert(SnippetCategory::Love2dApi, love2d::all_snippets());
        registry
            .snippets
            .insert(SnippetCategory::CollectionIndex, collections::all_snippets());
        registry
            .snippets
            .insert(SnippetCategory::Modules, modules::all_snippets());
        registry
            .snippets
            .insert(SnippetCategory::General, general::all_snippets());

        registry
    }

    /// Get the full table for a completion context
    ///
    /// The result is deterministic: the same category returns the same
    /// sequence on every call. No filtering against typed text happens
    /// here — narrowing is the client's job.
    pub fn entries(&self, category: SnippetCategory) -> &[SnippetEntry] {
        self.snippets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lookup a single entry by exact name
    pub fn get(&self, category: SnippetCategory, name: &str) -> Option<&SnippetEntry> {
        self.snippets
            .get(&category)?
            .iter()
            .find(|s| s.name == name)
    }

    /// Check whether an entry exists in a table
    pub fn has(&self, category: SnippetCategory, name: &str) -> bool {
        self.get(category, name).is_some()
    }
}

impl Default for SnippetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
