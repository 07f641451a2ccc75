// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for toolchain operations
//!
//! Failures from the external compiler/runtime are caught at the command
//! boundary and surfaced as notifications; they must never propagate as an
//! unhandled fault into the editor host.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for toolchain operations
pub type ToolchainResult<T> = Result<T, ToolchainError>;

/// Errors that can occur while invoking the external toolchain
#[derive(Debug, Error, Clone, Serialize)]
pub enum ToolchainError {
    /// The GrillCheese compiler reported a failure
    #[error("Compilation failed: {0}")]
    CompileFailed(String),

    /// The Love2D runtime reported a failure
    #[error("Run failed: {0}")]
    RunFailed(String),

    /// The tool binary could not be launched
    #[error("Failed to launch '{tool}': {reason}")]
    LaunchFailed { tool: String, reason: String },

    /// The operation is not supported by this toolchain implementation
    #[error("Toolchain operation not supported: {0}")]
    NotSupported(String),
}
