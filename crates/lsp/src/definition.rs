// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Go-to-Definition for GrillCheese Script
//!
//! Definitions are found by scanning the raw document text with
//! declaration-shaped regular expressions — there is no parser and no
//! symbol table. Two independent sub-scans run per request:
//!
//! 1. **variable-like**: a type keyword (`string[]`, `bool`, `int`,
//!    `float`, `array`) followed by the identifier and `=`, plus the
//!    identifier-agnostic bare collection literal `array = [`;
//! 2. **function-like**: `fn` followed by the identifier and `(`.
//!
//! Results are concatenated variable-like first, then function-like; all
//! matches are returned, left to right, with no dedup and no cap.
//!
//! The bare `array = [` pattern matches regardless of which identifier
//! was asked for, so scanning for `x` in a document containing
//! `array = [1, 2]` still reports that site. That overbreadth is
//! long-standing observed behavior and is kept as-is.

use crate::document::Document;
use regex::Regex;
use tower_lsp::lsp_types::{Location, Position, Range, Url};

/// Go-to-definition error types
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// A declaration pattern failed to compile
    #[error("Invalid declaration pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Definition scanner - finds declaration sites in raw text
pub struct DefinitionScanner;

impl DefinitionScanner {
    /// Find byte offsets of declaration-like matches for an identifier
    ///
    /// # Arguments
    ///
    /// * `text` - Full document text
    /// * `identifier` - The exact identifier to look for
    ///
    /// # Returns
    ///
    /// Byte offsets of every match, variable-like scans first. An empty
    /// vector means no declaration was found — not an error.
    pub fn find_definitions(text: &str, identifier: &str) -> Result<Vec<usize>, DefinitionError> {
        let ident = regex::escape(identifier);
        let mut offsets = Vec::new();

        // Variable declarations: type keyword, identifier, `=`
        let variable =
            Regex::new(&format!(r"\b(?:string\[\]|bool|int|float|array)\s+{ident}\s*="))?;
        offsets.extend(variable.find_iter(text).map(|m| m.start()));

        // Bare collection literals, independent of the identifier
        let collection = Regex::new(r"\barray\s*=\s*\[")?;
        offsets.extend(collection.find_iter(text).map(|m| m.start()));

        // Function declarations: `fn`, identifier, `(`
        let function = Regex::new(&format!(r"\bfn\s+{ident}\s*\("))?;
        offsets.extend(function.find_iter(text).map(|m| m.start()));

        Ok(offsets)
    }

    /// Find definition locations for an identifier in a document
    ///
    /// Byte offsets from [`Self::find_definitions`] are translated into
    /// positions through the document model.
    pub fn find_locations(
        document: &Document,
        identifier: &str,
    ) -> Result<Vec<Location>, DefinitionError> {
        let text = document.get_content();
        let offsets = Self::find_definitions(&text, identifier)?;

        Ok(offsets
            .into_iter()
            .map(|offset| {
                let position = document.position_at(offset);
                location_at(document.uri().clone(), position)
            })
            .collect())
    }
}

/// Build a zero-width location at a position
fn location_at(uri: Url, position: Position) -> Location {
    Location {
        uri,
        range: Range {
            start: position,
            end: position,
        },
    }
}
