// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Document Management
//!
//! This module provides document management for the LSP server.
//!
//! ## Overview
//!
//! The document manager handles:
//! - Multiple open documents
//! - Document synchronization (open, change, close)
//! - Text content management using Ropey for efficient edits
//! - Document metadata (language ID, version, URI)
//!
//! It also provides the position helpers the feature engines rely on:
//! line-prefix extraction for the completion classifier, dotted-word
//! extraction for hover, and byte-offset-to-position conversion for the
//! definition scanner.

use ropey::Rope;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::lsp_types::{
    Position, TextDocumentContentChangeEvent, Url, VersionedTextDocumentIdentifier,
};

/// Document metadata
///
/// Contains information about an open document.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    /// Document URI
    pub uri: Url,

    /// Language identifier (e.g., "grillcheese")
    pub language_id: String,

    /// Document version, incremented on each change
    pub version: i32,

    /// Line count
    pub line_count: usize,
}

impl DocumentMetadata {
    /// Create new document metadata
    pub fn new(uri: Url, language_id: String, version: i32, line_count: usize) -> Self {
        Self {
            uri,
            language_id,
            version,
            line_count,
        }
    }
}

/// A document managed by the LSP server
///
/// Contains the document's content and metadata.
/// Uses Ropey for efficient text manipulation.
#[derive(Debug, Clone)]
pub struct Document {
    /// Document metadata
    metadata: DocumentMetadata,

    /// Document content as a rope for efficient editing
    content: Rope,
}

impl Document {
    /// Create a new document
    pub fn new(uri: Url, content: String, version: i32, language_id: String) -> Self {
        let rope = Rope::from_str(&content);
        let line_count = rope.len_lines();

        let metadata = DocumentMetadata::new(uri, language_id, version, line_count);

        Self {
            metadata,
            content: rope,
        }
    }

    /// Get the document URI
    pub fn uri(&self) -> &Url {
        &self.metadata.uri
    }

    /// Get the document language ID
    pub fn language_id(&self) -> &str {
        &self.metadata.language_id
    }

    /// Get the document version
    pub fn version(&self) -> i32 {
        self.metadata.version
    }

    /// Get the line count
    pub fn line_count(&self) -> usize {
        self.metadata.line_count
    }

    /// Get the full document content as a string
    pub fn get_content(&self) -> String {
        self.content.to_string()
    }

    /// Get a line of text
    ///
    /// # Arguments
    ///
    /// - `line`: The line number (0-indexed)
    ///
    /// # Returns
    ///
    /// The line content without the line ending
    pub fn get_line(&self, line: usize) -> Option<String> {
        if line >= self.line_count() {
            return None;
        }

        // ropey's line() includes the line ending, so we need to strip it
        let line_with_ending = self.content.line(line).to_string();
        Some(line_with_ending.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Get the text of a line from column 0 up to the given position
    ///
    /// The completion classifier operates on this prefix. A position past
    /// the end of the line is clamped to the line length.
    pub fn line_prefix(&self, position: Position) -> Option<String> {
        let line = self.get_line(position.line as usize)?;
        let upto = (position.character as usize).min(line.chars().count());
        Some(line.chars().take(upto).collect())
    }

    /// Get the dotted word at a position
    ///
    /// A word is a maximal run of identifier characters plus `.`, so
    /// hovering anywhere inside `love.graphics.print` yields the full
    /// dotted name. Leading/trailing dots are trimmed; an empty run is
    /// `None`.
    pub fn word_at(&self, position: Position) -> Option<String> {
        let line = self.get_line(position.line as usize)?;
        let chars: Vec<char> = line.chars().collect();
        let cursor = (position.character as usize).min(chars.len());

        let is_word_char = |c: char| c.is_alphanumeric() || c == '_' || c == '.';

        let mut start = cursor;
        while start > 0 && is_word_char(chars[start - 1]) {
            start -= 1;
        }
        let mut end = cursor;
        while end < chars.len() && is_word_char(chars[end]) {
            end += 1;
        }

        let word: String = chars[start..end].iter().collect();
        let word = word.trim_matches('.').to_string();
        if word.is_empty() { None } else { Some(word) }
    }

    /// Get the character offset for a line and column
    ///
    /// # Arguments
    ///
    /// - `line`: Line number (0-indexed)
    /// - `col`: Column number (0-indexed)
    ///
    /// # Returns
    ///
    /// The character offset, or None if the position is invalid
    pub fn offset(&self, line: usize, col: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }

        let line_start = self.content.line_to_char(line);
        let line_end = self.content.line_to_char(line + 1);

        let offset = line_start + col;
        if offset > line_end {
            return None;
        }

        Some(offset)
    }

    /// Convert a byte offset into a line/column position
    ///
    /// Offsets past the end of the document are clamped to the last
    /// position. Used to translate definition-scan matches into LSP
    /// positions.
    pub fn position_at(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.content.len_bytes());
        let char_idx = self.content.byte_to_char(byte_offset);
        let line = self.content.char_to_line(char_idx);
        let col = char_idx - self.content.line_to_char(line);

        Position::new(line as u32, col as u32)
    }

    /// Apply content changes to the document
    ///
    /// Handles both full-document replacement and incremental range
    /// edits, so the store works with either synchronization mode the
    /// client negotiates.
    ///
    /// # Arguments
    ///
    /// - `changes`: List of content changes
    /// - `new_version`: New document version
    pub fn apply_changes(
        &mut self,
        changes: &[TextDocumentContentChangeEvent],
        new_version: i32,
    ) -> Result<(), DocumentError> {
        for change in changes {
            match &change.range {
                Some(range) => {
                    // Incremental change
                    let start_line = range.start.line as usize;
                    let start_col = range.start.character as usize;
                    let end_line = range.end.line as usize;
                    let end_col = range.end.character as usize;

                    // Validate range
                    if start_line >= self.line_count() || end_line >= self.line_count() {
                        return Err(DocumentError::InvalidRange {
                            start: (start_line, start_col),
                            end: (end_line, end_col),
                        });
                    }

                    let start_char = self.content.line_to_char(start_line) + start_col;
                    let end_char = self.content.line_to_char(end_line) + end_col;

                    // Validate character offsets
                    if start_char > end_char || end_char > self.content.len_chars() {
                        return Err(DocumentError::InvalidRange {
                            start: (start_line, start_col),
                            end: (end_line, end_col),
                        });
                    }

                    // Apply the change
                    self.content.remove(start_char..end_char);
                    self.content.insert(start_char, &change.text);
                }
                None => {
                    // Full document change
                    self.content = Rope::from_str(&change.text);
                }
            }
        }

        // Update metadata
        self.metadata.version = new_version;
        self.metadata.line_count = self.content.len_lines();

        Ok(())
    }

    /// Get document metadata
    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}

/// Document store for managing multiple documents
///
/// Thread-safe store for all open documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    /// Map of document URI to document
    documents: Arc<RwLock<HashMap<Url, Document>>>,
}

impl DocumentStore {
    /// Create a new document store
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a document
    ///
    /// # Arguments
    ///
    /// - `uri`: Document URI
    /// - `content`: Initial document content
    /// - `version`: Document version
    /// - `language_id`: Language identifier
    pub async fn open_document(
        &self,
        uri: Url,
        content: String,
        version: i32,
        language_id: String,
    ) -> Result<(), DocumentError> {
        let mut docs = self.documents.write().await;

        let document = Document::new(uri.clone(), content, version, language_id);

        docs.insert(uri, document);

        Ok(())
    }

    /// Close a document
    ///
    /// # Returns
    ///
    /// true if the document was closed, false if it didn't exist
    pub async fn close_document(&self, uri: &Url) -> bool {
        let mut docs = self.documents.write().await;
        docs.remove(uri).is_some()
    }

    /// Update a document
    ///
    /// # Arguments
    ///
    /// - `identifier`: Document identifier with version
    /// - `changes`: Content changes
    pub async fn update_document(
        &self,
        identifier: &VersionedTextDocumentIdentifier,
        changes: &[TextDocumentContentChangeEvent],
    ) -> Result<(), DocumentError> {
        let mut docs = self.documents.write().await;

        let document = docs
            .get_mut(&identifier.uri)
            .ok_or_else(|| DocumentError::DocumentNotFound(identifier.uri.clone()))?;

        document.apply_changes(changes, identifier.version)?;

        Ok(())
    }

    /// Get a document by URI
    pub async fn get_document(&self, uri: &Url) -> Option<Document> {
        let docs = self.documents.read().await;
        docs.get(uri).cloned()
    }

    /// Check if a document exists
    pub async fn has_document(&self, uri: &Url) -> bool {
        let docs = self.documents.read().await;
        docs.contains_key(uri)
    }

    /// Get all document URIs
    pub async fn list_uris(&self) -> Vec<Url> {
        let docs = self.documents.read().await;
        docs.keys().cloned().collect()
    }

    /// Get the number of open documents
    pub async fn document_count(&self) -> usize {
        let docs = self.documents.read().await;
        docs.len()
    }
}

/// Document-related errors
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Document not found
    #[error("Document not found: {0}")]
    DocumentNotFound(Url),

    /// Invalid range for text operation
    #[error("Invalid range: start={start:?}, end={end:?}")]
    InvalidRange {
        start: (usize, usize),
        end: (usize, usize),
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::lsp_types;

    fn create_test_uri() -> Url {
        Url::parse("file:///game.gcs").unwrap()
    }

    fn doc(content: &str) -> Document {
        Document::new(
            create_test_uri(),
            content.to_string(),
            1,
            "grillcheese".to_string(),
        )
    }

    #[test]
    fn test_document_new() {
        let uri = create_test_uri();
        let document = Document::new(
            uri.clone(),
            "int x = 5".to_string(),
            1,
            "grillcheese".to_string(),
        );

        assert_eq!(document.uri(), &uri);
        assert_eq!(document.language_id(), "grillcheese");
        assert_eq!(document.version(), 1);
        assert_eq!(document.get_content(), "int x = 5");
    }

    #[test]
    fn test_document_get_line() {
        let document = doc("int x = 5\nfn update() {\n}");

        assert_eq!(document.get_line(0), Some("int x = 5".to_string()));
        assert_eq!(document.get_line(1), Some("fn update() {".to_string()));
        assert_eq!(document.get_line(2), Some("}".to_string()));
        assert_eq!(document.get_line(3), None);
    }

    #[test]
    fn test_document_line_prefix() {
        let document = doc("x = love.graphics.print");

        assert_eq!(
            document.line_prefix(Position::new(0, 9)),
            Some("x = love.".to_string())
        );
        assert_eq!(document.line_prefix(Position::new(0, 0)), Some(String::new()));
        // Past end of line clamps
        assert_eq!(
            document.line_prefix(Position::new(0, 999)),
            Some("x = love.graphics.print".to_string())
        );
        assert_eq!(document.line_prefix(Position::new(7, 0)), None);
    }

    #[test]
    fn test_document_word_at_dotted() {
        let document = doc("love.graphics.print(\"hi\", 0, 0)");

        // Anywhere inside the dotted name yields the whole name
        assert_eq!(
            document.word_at(Position::new(0, 7)),
            Some("love.graphics.print".to_string())
        );
        assert_eq!(
            document.word_at(Position::new(0, 0)),
            Some("love.graphics.print".to_string())
        );
    }

    #[test]
    fn test_document_word_at_plain() {
        let document = doc("int count = 42");

        assert_eq!(document.word_at(Position::new(0, 1)), Some("int".to_string()));
        assert_eq!(document.word_at(Position::new(0, 5)), Some("count".to_string()));
        // Between words, on whitespace with nothing adjacent
        assert_eq!(document.word_at(Position::new(0, 3)), Some("int".to_string()));
    }

    #[test]
    fn test_document_word_at_none() {
        let document = doc("   ( ) ");

        assert_eq!(document.word_at(Position::new(0, 1)), None);
    }

    #[test]
    fn test_document_offset() {
        let document = doc("int x = 5\nfn x() {}");

        assert_eq!(document.offset(0, 0), Some(0));
        assert_eq!(document.offset(0, 9), Some(9));
        assert_eq!(document.offset(1, 0), Some(10)); // After newline
        assert_eq!(document.offset(5, 0), None);
    }

    #[test]
    fn test_document_position_at() {
        let document = doc("int x = 5\nfn x() {}");

        assert_eq!(document.position_at(0), Position::new(0, 0));
        assert_eq!(document.position_at(10), Position::new(1, 0));
        assert_eq!(document.position_at(13), Position::new(1, 3));
        // Past the end clamps to the final position
        let end = document.position_at(999);
        assert_eq!(end.line, 1);
    }

    #[test]
    fn test_document_apply_changes_full() {
        let mut document = doc("old content");

        let changes = vec![TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "new content".to_string(),
        }];

        document.apply_changes(&changes, 2).unwrap();

        assert_eq!(document.get_content(), "new content");
        assert_eq!(document.version(), 2);
    }

    #[test]
    fn test_document_apply_changes_incremental() {
        let mut document = doc("int x = 5");

        let changes = vec![TextDocumentContentChangeEvent {
            range: Some(lsp_types::Range {
                start: lsp_types::Position {
                    line: 0,
                    character: 8,
                },
                end: lsp_types::Position {
                    line: 0,
                    character: 9,
                },
            }),
            range_length: Some(1),
            text: "42".to_string(),
        }];

        document.apply_changes(&changes, 2).unwrap();

        assert_eq!(document.get_content(), "int x = 42");
        assert_eq!(document.version(), 2);
    }

    #[test]
    fn test_document_apply_changes_invalid_range() {
        let mut document = doc("int x = 5");

        let changes = vec![TextDocumentContentChangeEvent {
            range: Some(lsp_types::Range {
                start: lsp_types::Position {
                    line: 0,
                    character: 0,
                },
                end: lsp_types::Position {
                    line: 10, // Past end
                    character: 0,
                },
            }),
            range_length: Some(1),
            text: "x".to_string(),
        }];

        let result = document.apply_changes(&changes, 2);
        assert!(matches!(result, Err(DocumentError::InvalidRange { .. })));
    }

    #[tokio::test]
    async fn test_document_store_open() {
        let store = DocumentStore::new();
        let uri = create_test_uri();

        store
            .open_document(uri.clone(), "int x = 5".to_string(), 1, "grillcheese".to_string())
            .await
            .unwrap();

        assert!(store.has_document(&uri).await);
        assert_eq!(store.document_count().await, 1);
    }

    #[tokio::test]
    async fn test_document_store_close() {
        let store = DocumentStore::new();
        let uri = create_test_uri();

        store
            .open_document(uri.clone(), "int x = 5".to_string(), 1, "grillcheese".to_string())
            .await
            .unwrap();

        assert!(store.close_document(&uri).await);
        assert!(!store.has_document(&uri).await);
        assert_eq!(store.document_count().await, 0);
    }

    #[tokio::test]
    async fn test_document_store_update() {
        let store = DocumentStore::new();
        let uri = create_test_uri();

        store
            .open_document(uri.clone(), "old".to_string(), 1, "grillcheese".to_string())
            .await
            .unwrap();

        let identifier = VersionedTextDocumentIdentifier {
            uri: uri.clone(),
            version: 2,
        };

        let changes = vec![TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "new".to_string(),
        }];

        store.update_document(&identifier, &changes).await.unwrap();

        let document = store.get_document(&uri).await.unwrap();
        assert_eq!(document.get_content(), "new");
        assert_eq!(document.version(), 2);
    }

    #[tokio::test]
    async fn test_document_store_update_missing() {
        let store = DocumentStore::new();
        let identifier = VersionedTextDocumentIdentifier {
            uri: create_test_uri(),
            version: 2,
        };

        let result = store.update_document(&identifier, &[]).await;
        assert!(matches!(result, Err(DocumentError::DocumentNotFound(_))));
    }

    #[tokio::test]
    async fn test_document_store_list_uris() {
        let store = DocumentStore::new();
        let uri1 = Url::parse("file:///a.gcs").unwrap();
        let uri2 = Url::parse("file:///b.gcs").unwrap();

        store
            .open_document(uri1.clone(), "int a = 1".to_string(), 1, "grillcheese".to_string())
            .await
            .unwrap();

        store
            .open_document(uri2.clone(), "int b = 2".to_string(), 1, "grillcheese".to_string())
            .await
            .unwrap();

        let uris = store.list_uris().await;
        assert_eq!(uris.len(), 2);
        assert!(uris.contains(&uri1));
        assert!(uris.contains(&uri2));
    }
}
