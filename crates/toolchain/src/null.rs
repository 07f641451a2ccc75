// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Null toolchain implementation
//!
//! Accepts every compile/run request without spawning a process. This is
//! the production default until the external compiler integration lands;
//! the command layer still exercises its full precondition/notification
//! path against it.

use crate::error::ToolchainResult;
use crate::r#trait::ScriptToolchain;
use std::path::Path;
use tracing::info;

/// Toolchain that performs no external process execution
#[derive(Debug, Clone, Copy, Default)]
pub struct NullToolchain;

impl NullToolchain {
    /// Create a new null toolchain
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ScriptToolchain for NullToolchain {
    async fn compile(&self, source: &Path, output: &Path) -> ToolchainResult<()> {
        info!(
            "compile requested (no compiler wired): {} -> {}",
            source.display(),
            output.display()
        );
        Ok(())
    }

    async fn run(&self, script: &Path) -> ToolchainResult<()> {
        info!(
            "run requested (no runtime wired): {}",
            script.display()
        );
        Ok(())
    }
}
