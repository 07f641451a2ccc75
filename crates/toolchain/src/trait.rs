// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # ScriptToolchain trait
//!
//! Async interface for the external GrillCheese compiler and the Love2D
//! runtime. Command handlers depend only on this trait, which keeps them
//! testable without process execution.

use crate::error::ToolchainResult;
use std::path::Path;

/// Abstraction over the external compiler and runtime
#[async_trait::async_trait]
pub trait ScriptToolchain: Send + Sync {
    /// Transpile a GrillCheese Script source file to Lua
    ///
    /// # Arguments
    ///
    /// * `source` - Path of the `.gcs` source file
    /// * `output` - Path the compiled `.lua` file should be written to
    ///
    /// # Errors
    ///
    /// Returns `ToolchainError::CompileFailed` when the compiler reports a
    /// failure, or `ToolchainError::LaunchFailed` when it cannot be
    /// started at all.
    async fn compile(&self, source: &Path, output: &Path) -> ToolchainResult<()>;

    /// Launch a compiled script with the Love2D runtime
    ///
    /// # Arguments
    ///
    /// * `script` - Path of the compiled `.lua` file
    ///
    /// # Errors
    ///
    /// Returns `ToolchainError::RunFailed` when the runtime exits with a
    /// failure, or `ToolchainError::LaunchFailed` when it cannot be
    /// started.
    async fn run(&self, script: &Path) -> ToolchainResult<()>;
}
