// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures and helpers
//!
//! Cursor positions in tests are written inline with a `|` marker:
//! `"x = love.|"` means "the cursor sits after the dot".

use tower_lsp::lsp_types::{Position, Url};

/// A small but representative GrillCheese Script program
pub const SAMPLE_GAME: &str = r#"import { load, render } from "sprlib"

int score = 0
float speed = 1.5
string[] names = ["player one", "player two"]
array = [1, 2, 3]

priv fn love.load() {
    love.window.setTitle("Sample Game")
}

priv fn love.update(float dt) {
    score = score + 1
}

priv fn love.draw() {
    love.graphics.print("score", 10, 10)
}

fn reset() {
    score = 0
}
"#;

/// Build a file URI for a test document
pub fn test_uri(name: &str) -> Url {
    Url::parse(&format!("file:///{name}")).expect("valid test uri")
}

/// Find the `|` cursor marker in a single-line fixture
///
/// Returns the position of the marker, which is where the cursor sits
/// after the marker is stripped.
pub fn cursor_position(line: &str) -> Position {
    let col = line.find('|').expect("fixture must contain a | marker");
    Position::new(0, col as u32)
}

/// Remove the cursor marker from fixture text
pub fn strip_cursor_marker(text: &str) -> String {
    text.replace('|', "")
}
