// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # LSP Backend Implementation
//!
//! This module provides the main LSP server backend using tower-lsp.
//!
//! ## Overview
//!
//! The backend handles:
//! - LSP protocol communication via tower-lsp
//! - Document lifecycle (open, change, close)
//! - Completion, hover and go-to-definition requests
//! - The compile/run workspace commands
//!
//! ## Architecture
//!
//! ```text
//! Client → LSP Backend → Document Store
//!                ↓
//!      Completion / Hover / Definition engines
//!                ↓
//!     Snippet & doc registry (static tables)
//! ```
//!
//! Requests never share state: the registry tables are immutable, and
//! each handler reads only the request's document and position.

use crate::commands::{self, CommandExecutor};
use crate::completion::CompletionEngine;
use crate::config::ServerConfig;
use crate::definition::DefinitionScanner;
use crate::document::{DocumentError, DocumentStore};
use crate::hover::HoverEngine;
use grillcheese_registry::SnippetRegistry;
use grillcheese_toolchain::{NullToolchain, ScriptToolchain};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{error, info, warn};

/// LSP backend implementation
///
/// Main entry point for all LSP protocol operations.
/// Uses tower-lsp framework for protocol handling.
pub struct LspBackend {
    /// LSP client for sending notifications and requests
    client: Client,

    /// Document store for managing open documents
    documents: Arc<DocumentStore>,

    /// Server configuration
    config: Arc<RwLock<ServerConfig>>,

    /// Completion engine over the static snippet tables
    completion: CompletionEngine,

    /// Hover engine over the documentation dictionaries
    hover: HoverEngine,

    /// External compiler/runtime capability
    toolchain: Arc<dyn ScriptToolchain>,
}

impl LspBackend {
    /// Create a new LSP backend with the default (null) toolchain
    pub fn new(client: Client) -> Self {
        Self::with_toolchain(client, Arc::new(NullToolchain::new()))
    }

    /// Create a backend with a specific toolchain implementation
    pub fn with_toolchain(client: Client, toolchain: Arc<dyn ScriptToolchain>) -> Self {
        let registry = Arc::new(SnippetRegistry::new());

        Self {
            client,
            documents: Arc::new(DocumentStore::new()),
            config: Arc::new(RwLock::new(ServerConfig::default())),
            completion: CompletionEngine::new(registry),
            hover: HoverEngine::new(),
            toolchain,
        }
    }

    /// Get the document store
    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    /// Get a snapshot of the server configuration
    pub async fn get_config(&self) -> ServerConfig {
        self.config.read().await.clone()
    }

    /// Build a command executor over the current configuration
    async fn executor(&self) -> CommandExecutor {
        CommandExecutor::new(
            self.documents.clone(),
            self.toolchain.clone(),
            self.get_config().await,
        )
    }

    /// Log a message to the client
    async fn log_message(&self, message: &str, message_type: MessageType) {
        self.client.log_message(message_type, message).await;
    }

    /// Show a message to the user
    async fn show_message(&self, message: &str, message_type: MessageType) {
        self.client.show_message(message_type, message).await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for LspBackend {
    /// Initialize the LSP server
    ///
    /// Called when the client starts the server.
    /// Returns server capabilities and configuration.
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("Initializing LSP server");
        info!("Client info: {:?}", params.client_info);

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Documents are re-scanned wholesale on every request, so
                // full-text sync is all the server needs.
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),

                // Completion, triggered on namespace dots and index brackets
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    trigger_characters: Some(vec![".".to_string(), "[".to_string()]),
                    work_done_progress_options: WorkDoneProgressOptions {
                        work_done_progress: Some(false),
                    },
                    all_commit_characters: None,
                    completion_item: None,
                }),

                // Hover documentation
                hover_provider: Some(HoverProviderCapability::Simple(true)),

                // Go-to-definition
                definition_provider: Some(OneOf::Left(true)),

                // Compile/run commands
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: commands::supported_commands(),
                    work_done_progress_options: WorkDoneProgressOptions {
                        work_done_progress: Some(false),
                    },
                }),

                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: crate::SERVER_NAME.to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    /// Initialized notification
    ///
    /// Called after `initialize` completes successfully.
    async fn initialized(&self, _params: InitializedParams) {
        info!("LSP server initialized successfully");

        self.show_message(
            "GrillCheese Script language server ready!",
            MessageType::INFO,
        )
        .await;
    }

    /// Shutdown the LSP server
    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down LSP server");
        Ok(())
    }

    /// Document opened notification
    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        let uri = doc.uri.clone();
        let language_id = doc.language_id.clone();
        let version = doc.version;

        info!(
            "Document opened: uri={}, language={}, version={}",
            uri, language_id, version
        );

        match self
            .documents
            .open_document(uri.clone(), doc.text, version, language_id)
            .await
        {
            Ok(()) => {
                self.log_message(&format!("Document opened: {}", uri), MessageType::INFO)
                    .await;
            }
            Err(e) => {
                error!("Failed to open document: {}", e);
                self.show_message(
                    &format!("Failed to open document: {}", e),
                    MessageType::ERROR,
                )
                .await;
            }
        }
    }

    /// Document changed notification
    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let identifier = params.text_document;
        let uri = identifier.uri.clone();
        let changes = params.content_changes;

        info!(
            "Document changed: uri={}, version={}, changes={}",
            uri,
            identifier.version,
            changes.len()
        );

        match self.documents.update_document(&identifier, &changes).await {
            Ok(()) => {}
            Err(DocumentError::DocumentNotFound(uri)) => {
                warn!("Document not found for change: {}", uri);
            }
            Err(e) => {
                error!("Failed to update document: {}", e);
                self.show_message(
                    &format!("Failed to update document: {}", e),
                    MessageType::ERROR,
                )
                .await;
            }
        }
    }

    /// Document closed notification
    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        info!("Document closed: uri={}", uri);

        if !self.documents.close_document(&uri).await {
            warn!("Document not found for close: {}", uri);
        }
    }

    /// Completion request
    ///
    /// Returns the full snippet table for the context detected from the
    /// line prefix at the cursor.
    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        info!(
            "Completion requested: uri={}, line={}, col={}",
            uri, position.line, position.character
        );

        let document = match self.documents.get_document(&uri).await {
            Some(doc) => doc,
            None => {
                warn!("Document not found for completion: {}", uri);
                return Ok(None);
            }
        };

        let items = self.completion.complete(&document, position);
        if items.is_empty() {
            Ok(None)
        } else {
            info!("Completion returned {} items", items.len());
            Ok(Some(CompletionResponse::Array(items)))
        }
    }

    /// Hover request
    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        info!(
            "Hover requested: uri={}, line={}, col={}",
            uri, position.line, position.character
        );

        let document = match self.documents.get_document(&uri).await {
            Some(doc) => doc,
            None => {
                warn!("Document not found for hover: {}", uri);
                return Ok(None);
            }
        };

        Ok(self.hover.hover(&document, position))
    }

    /// Definition request
    ///
    /// Scans the document text for declaration-like patterns matching
    /// the identifier under the cursor.
    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        info!("Go to definition requested: uri={}", uri);

        let document = match self.documents.get_document(&uri).await {
            Some(doc) => doc,
            None => {
                warn!("Document not found for definition: {}", uri);
                return Ok(None);
            }
        };

        let Some(identifier) = document.word_at(position) else {
            return Ok(None);
        };

        match DefinitionScanner::find_locations(&document, &identifier) {
            Ok(locations) if locations.is_empty() => Ok(None),
            Ok(locations) => Ok(Some(GotoDefinitionResponse::Array(locations))),
            Err(e) => {
                error!("Definition scan failed: {}", e);
                Ok(None)
            }
        }
    }

    /// Execute a workspace command (compile or run)
    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        info!("Command requested: {}", params.command);

        let executor = self.executor().await;
        match executor.execute(&params.command, &params.arguments).await {
            Ok(message) => {
                self.show_message(&message, MessageType::INFO).await;
            }
            Err(e) if e.is_precondition() => {
                warn!("Command precondition unmet: {}", e);
                self.show_message(&e.to_string(), MessageType::WARNING).await;
            }
            Err(e) => {
                error!("Command failed: {}", e);
                self.show_message(&e.to_string(), MessageType::ERROR).await;
            }
        }

        Ok(None)
    }

    /// Configuration change notification
    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        info!("Configuration changed");

        let Some(config) = ServerConfig::from_lsp_settings(&params.settings) else {
            warn!("Settings payload carried no grillcheese section; keeping current config");
            return;
        };

        if let Err(e) = config.validate() {
            error!("Rejected configuration update: {}", e);
            self.show_message(&format!("Invalid configuration: {}", e), MessageType::ERROR)
                .await;
            return;
        }

        *self.config.write().await = config;
        self.log_message("Configuration updated", MessageType::INFO)
            .await;
    }
}
