// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for the GrillCheese Script language server
//!
//! This crate provides common testing components including:
//! - A recording toolchain mock (no process execution)
//! - Cursor-marker helpers for writing position-based tests
//! - Sample GrillCheese Script programs

pub mod fixtures;
pub mod mock_toolchain;

// Re-exports for convenience
pub use fixtures::{SAMPLE_GAME, cursor_position, strip_cursor_marker, test_uri};
pub use mock_toolchain::{RecordingToolchain, ToolchainCall};
