// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Recording toolchain mock
//!
//! Implements [`ScriptToolchain`] without spawning processes. Every call
//! is recorded so tests can assert ordering (e.g. that "run" compiles
//! first), and failures can be injected per operation.

use grillcheese_toolchain::{ScriptToolchain, ToolchainError, ToolchainResult};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A single recorded toolchain invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainCall {
    Compile { source: PathBuf, output: PathBuf },
    Run { script: PathBuf },
}

/// In-memory toolchain for testing
#[derive(Debug, Default)]
pub struct RecordingToolchain {
    calls: Mutex<Vec<ToolchainCall>>,
    fail_compile: Option<String>,
    fail_run: Option<String>,
}

impl RecordingToolchain {
    /// Create a toolchain that accepts every request
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every compile request fail with the given message
    pub fn with_compile_failure(mut self, message: impl Into<String>) -> Self {
        self.fail_compile = Some(message.into());
        self
    }

    /// Make every run request fail with the given message
    pub fn with_run_failure(mut self, message: impl Into<String>) -> Self {
        self.fail_run = Some(message.into());
        self
    }

    /// Get all recorded calls in invocation order
    pub fn calls(&self) -> Vec<ToolchainCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ToolchainCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl ScriptToolchain for RecordingToolchain {
    async fn compile(&self, source: &Path, output: &Path) -> ToolchainResult<()> {
        self.record(ToolchainCall::Compile {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
        });

        match &self.fail_compile {
            Some(message) => Err(ToolchainError::CompileFailed(message.clone())),
            None => Ok(()),
        }
    }

    async fn run(&self, script: &Path) -> ToolchainResult<()> {
        self.record(ToolchainCall::Run {
            script: script.to_path_buf(),
        });

        match &self.fail_run {
            Some(message) => Err(ToolchainError::RunFailed(message.clone())),
            None => Ok(()),
        }
    }
}
