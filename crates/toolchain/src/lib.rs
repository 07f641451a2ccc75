// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # GrillCheese Script Toolchain Layer
//!
//! This crate abstracts the external GrillCheese compiler and the Love2D
//! runtime behind the [`ScriptToolchain`] trait so that the language
//! server's command handlers never invoke processes directly:
//!
//! - the production server currently wires in [`NullToolchain`], which
//!   accepts every request without spawning anything (the external
//!   integration is not implemented yet);
//! - tests substitute a recording mock (see `grillcheese-test-utils`).
//!
//! ## Implementing the trait
//!
//! ```rust,ignore
//! use grillcheese_toolchain::{ScriptToolchain, ToolchainResult};
//! use async_trait::async_trait;
//! use std::path::Path;
//!
//! struct LoveToolchain;
//!
//! #[async_trait]
//! impl ScriptToolchain for LoveToolchain {
//!     async fn compile(&self, source: &Path, output: &Path) -> ToolchainResult<()> {
//!         // spawn the compiler here
//!     }
//!
//!     async fn run(&self, script: &Path) -> ToolchainResult<()> {
//!         // launch the runtime here
//!     }
//! }
//! ```

pub mod error;
pub mod null;
pub mod r#trait;

// Re-exports
pub use error::{ToolchainError, ToolchainResult};
pub use null::NullToolchain;
pub use r#trait::ScriptToolchain;
