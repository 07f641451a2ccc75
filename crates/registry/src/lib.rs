// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # GrillCheese Script Registry
//!
//! This crate provides the static reference data backing editor
//! intelligence for GrillCheese Script:
//!
//! - Snippet tables for completion, one per completion context
//! - Documentation dictionaries for the Love2D API surface and for
//!   GrillCheese keywords
//! - A [`DocProvider`] implementing the hover lookup rule over those
//!   dictionaries
//!
//! All data is immutable after construction. The tables carry no editor
//! types — rendering into LSP structures happens in the `grillcheese-lsp`
//! crate — so this crate is usable and testable without a live host.
//!
//! ## Usage
//!
//! ```rust
//! use grillcheese_registry::{SnippetCategory, SnippetRegistry};
//!
//! let registry = SnippetRegistry::new();
//! let api = registry.entries(SnippetCategory::Love2dApi);
//! assert!(api.iter().any(|s| s.name == "love.graphics.print"));
//! ```

pub mod docs;
pub mod hover;
pub mod snippets;

// Re-exports for convenience
pub use docs::DocEntry;
pub use hover::DocProvider;
pub use snippets::{SnippetCategory, SnippetEntry, SnippetRegistry};

/// The dotted prefix identifying calls into the Love2D framework API.
///
/// Containment of this substring — not tokenization — is what routes a
/// line to the framework-API tables. The false positives that implies
/// (e.g. `"love."` inside a string literal) are accepted behavior.
pub const LOVE_NAMESPACE: &str = "love.";
