// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Workspace Commands
//!
//! The two commands exposed through `workspace/executeCommand`:
//!
//! - `grillcheese.compileFile` — transpile the given document to Lua
//! - `grillcheese.runFile` — compile, then launch the result with Love2D
//!
//! Each command takes a document URI argument, verifies the document is
//! an open GrillCheese Script file, derives the output file name by
//! swapping the source extension for the target extension, and reports
//! the outcome through a user-visible notification. Toolchain failures
//! are caught here and surfaced as error notifications; they never
//! propagate into the host as a fault.

use crate::config::ServerConfig;
use crate::document::DocumentStore;
use grillcheese_toolchain::{ScriptToolchain, ToolchainError};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower_lsp::lsp_types::Url;
use tracing::info;

/// Command identifier for "compile current file"
pub const COMPILE_COMMAND: &str = "grillcheese.compileFile";

/// Command identifier for "run current file"
pub const RUN_COMMAND: &str = "grillcheese.runFile";

/// The language id commands require on their target document
pub const LANGUAGE_ID: &str = "grillcheese";

/// All commands advertised in the server capabilities
pub fn supported_commands() -> Vec<String> {
    vec![COMPILE_COMMAND.to_string(), RUN_COMMAND.to_string()]
}

/// Errors from command execution
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The command name is not one of ours
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// No document URI argument was supplied
    #[error("Command requires a document URI argument")]
    MissingArgument,

    /// The argument was not a valid URI
    #[error("Invalid document URI: {0}")]
    InvalidUri(String),

    /// The document is not open on this server
    #[error("Please open a GrillCheese Script file (.gcs) — document not open: {0}")]
    DocumentNotOpen(Url),

    /// The document is open but not a GrillCheese Script file
    #[error("Please open a GrillCheese Script file (.gcs) — got language '{0}'")]
    WrongLanguage(String),

    /// The document URI has no local file path
    #[error("Document has no file path: {0}")]
    NotAFile(Url),

    /// The external compiler or runtime failed
    #[error(transparent)]
    Toolchain(#[from] ToolchainError),
}

impl CommandError {
    /// Whether this is an unmet precondition (warn the user) rather than
    /// a failure (error notification).
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            CommandError::DocumentNotOpen(_) | CommandError::WrongLanguage(_)
        )
    }
}

/// A successfully compiled file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFile {
    /// The GrillCheese source path
    pub source: PathBuf,
    /// The derived Lua output path
    pub output: PathBuf,
}

/// Executes workspace commands against the document store and toolchain
pub struct CommandExecutor {
    documents: Arc<DocumentStore>,
    toolchain: Arc<dyn ScriptToolchain>,
    config: ServerConfig,
}

impl CommandExecutor {
    /// Create a new executor
    pub fn new(
        documents: Arc<DocumentStore>,
        toolchain: Arc<dyn ScriptToolchain>,
        config: ServerConfig,
    ) -> Self {
        Self {
            documents,
            toolchain,
            config,
        }
    }

    /// Dispatch a command by name
    ///
    /// # Returns
    ///
    /// A user-facing success message for the notification on success.
    pub async fn execute(&self, command: &str, arguments: &[Value]) -> Result<String, CommandError> {
        match command {
            COMPILE_COMMAND => {
                let uri = Self::uri_argument(arguments)?;
                let compiled = self.compile_file(&uri).await?;
                Ok(format!(
                    "Compiled {} to {}",
                    compiled.source.display(),
                    compiled.output.display()
                ))
            }
            RUN_COMMAND => {
                let uri = Self::uri_argument(arguments)?;
                let compiled = self.run_file(&uri).await?;
                Ok(format!("Running {} with Love2D", compiled.output.display()))
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// Compile a document to its target file
    pub async fn compile_file(&self, uri: &Url) -> Result<CompiledFile, CommandError> {
        let source = self.checked_source_path(uri).await?;
        let output = source.with_extension(&self.config.target_extension);

        info!(
            "compiling {} -> {}",
            source.display(),
            output.display()
        );
        self.toolchain.compile(&source, &output).await?;

        Ok(CompiledFile { source, output })
    }

    /// Compile a document, then launch the result with the runtime
    pub async fn run_file(&self, uri: &Url) -> Result<CompiledFile, CommandError> {
        let compiled = self.compile_file(uri).await?;

        info!("running {}", compiled.output.display());
        self.toolchain.run(&compiled.output).await?;

        Ok(compiled)
    }

    /// Extract the document URI from command arguments
    fn uri_argument(arguments: &[Value]) -> Result<Url, CommandError> {
        let raw = arguments
            .first()
            .and_then(Value::as_str)
            .ok_or(CommandError::MissingArgument)?;

        Url::parse(raw).map_err(|_| CommandError::InvalidUri(raw.to_string()))
    }

    /// Verify the command preconditions and resolve the source path
    ///
    /// The document must be open and carry the GrillCheese language id.
    async fn checked_source_path(&self, uri: &Url) -> Result<PathBuf, CommandError> {
        let document = self
            .documents
            .get_document(uri)
            .await
            .ok_or_else(|| CommandError::DocumentNotOpen(uri.clone()))?;

        if document.language_id() != LANGUAGE_ID {
            return Err(CommandError::WrongLanguage(
                document.language_id().to_string(),
            ));
        }

        uri.to_file_path()
            .map_err(|_| CommandError::NotAFile(uri.clone()))
    }
}
