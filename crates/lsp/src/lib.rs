// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # GrillCheese Script - Language Server Protocol
//!
//! This crate provides the LSP server implementation for GrillCheese
//! Script, a small scripting language that transpiles to Lua and targets
//! the Love2D game framework.
//!
//! ## Overview
//!
//! The LSP server provides:
//! - Snippet completion driven by a line-prefix context classifier
//! - Hover documentation for the Love2D API and language keywords
//! - Go-to-definition via declaration-pattern scans over document text
//! - `grillcheese.compileFile` / `grillcheese.runFile` workspace commands
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Client (VS Code, etc.)          │
//! └──────────────┬──────────────────────────┘
//!                │ LSP Protocol
//!                ↓
//! ┌─────────────────────────────────────────┐
//! │         LSP Backend (tower-lsp)         │
//! ├─────────────────────────────────────────┤
//! │  • did_open / did_change / did_close   │
//! │  • completion / hover / definition      │
//! │  • executeCommand (compile / run)       │
//! └──────────────┬──────────────────────────┘
//!                │
//!         ┌──────┴──────┬────────────────┐
//!         ↓             ↓                ↓
//! ┌────────────┐ ┌──────────┐  ┌──────────────┐
//! │  Snippet/  │ │ Document │  │  Toolchain   │
//! │  doc data  │ │   Store  │  │  (injected)  │
//! └────────────┘ └──────────┘  └──────────────┘
//! ```
//!
//! There is deliberately no parser and no symbol table: completion
//! context comes from substring checks on the line prefix, and
//! definitions come from regular-expression scans over the full text.
//! Each request is independent and re-reads the document it targets.
//!
//! ## Modules
//!
//! - [`backend`]: Main LSP server implementation
//! - [`document`]: Document management and storage
//! - [`completion`]: Context classifier and snippet rendering
//! - [`hover`]: Documentation lookup
//! - [`definition`]: Declaration-pattern scanner
//! - [`commands`]: Compile/run command handlers
//! - [`config`]: Server configuration

pub mod backend;
pub mod commands;
pub mod completion;
pub mod config;
pub mod definition;
pub mod document;
pub mod hover;

// Re-exports for convenience
pub use backend::LspBackend;
pub use commands::{
    COMPILE_COMMAND, CommandError, CommandExecutor, CompiledFile, LANGUAGE_ID, RUN_COMMAND,
};
pub use completion::{CompletionEngine, SnippetRenderer, detect_completion_context};
pub use config::{ConfigError, ServerConfig};
pub use definition::{DefinitionError, DefinitionScanner};
pub use document::{Document, DocumentError, DocumentMetadata, DocumentStore};
pub use hover::HoverEngine;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server name
pub const SERVER_NAME: &str = "grillcheese-lsp";
