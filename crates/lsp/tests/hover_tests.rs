// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Hover integration tests
//!
//! Verifies the dictionary routing rule (Love2D line vs. keyword line)
//! and the exact-match-only lookup contract.

use grillcheese_lsp::document::Document;
use grillcheese_lsp::hover::HoverEngine;
use grillcheese_test_utils::test_uri;
use tower_lsp::lsp_types::{Hover, HoverContents, Position};

fn doc(content: &str) -> Document {
    Document::new(
        test_uri("game.gcs"),
        content.to_string(),
        1,
        "grillcheese".to_string(),
    )
}

fn markup(hover: Hover) -> String {
    match hover.contents {
        HoverContents::Markup(content) => content.value,
        other => panic!("expected markup hover contents, got {other:?}"),
    }
}

#[test]
fn test_hover_full_dotted_api_name() {
    let engine = HoverEngine::new();
    let document = doc("love.graphics.print(\"hello\", 10, 20)");

    let hover = engine
        .hover(&document, Position::new(0, 2))
        .expect("documented API name should hover");

    assert!(markup(hover).contains("love.graphics.print"));
}

#[test]
fn test_hover_resolves_whole_word_from_middle() {
    let engine = HoverEngine::new();
    let document = doc("    love.timer.getDelta()");

    // Cursor inside "timer"
    let hover = engine.hover(&document, Position::new(0, 10)).unwrap();
    assert!(markup(hover).contains("love.timer.getDelta"));
}

#[test]
fn test_hover_keyword() {
    let engine = HoverEngine::new();
    let document = doc("while (running) {");

    let hover = engine.hover(&document, Position::new(0, 2)).unwrap();
    assert!(markup(hover).contains("While loop"));
}

#[test]
fn test_hover_keyword_table_skipped_on_love_lines() {
    let engine = HoverEngine::new();

    // On a line mentioning the namespace, only the Love2D table applies,
    // so the keyword `if` finds nothing there.
    let document = doc("if (love.keyboard.isDown(\"space\")) {");
    assert!(engine.hover(&document, Position::new(0, 0)).is_none());

    // The same keyword on a plain line resolves.
    let document = doc("if (running) {");
    assert!(engine.hover(&document, Position::new(0, 0)).is_some());
}

#[test]
fn test_hover_undocumented_api_is_none() {
    let engine = HoverEngine::new();

    // `love.mouse.getX` completes but carries no hover documentation.
    let document = doc("love.mouse.getX()");
    assert!(engine.hover(&document, Position::new(0, 6)).is_none());
}

#[test]
fn test_hover_unknown_identifier_is_none() {
    let engine = HoverEngine::new();
    let document = doc("score = score + 1");

    assert!(engine.hover(&document, Position::new(0, 2)).is_none());
}

#[test]
fn test_hover_on_punctuation_is_none() {
    let engine = HoverEngine::new();
    let document = doc("x = (1 + 2)");

    assert!(engine.hover(&document, Position::new(0, 4)).is_none());
}

#[test]
fn test_hover_is_idempotent() {
    let engine = HoverEngine::new();
    let document = doc("int score = 0");

    let first = engine.hover(&document, Position::new(0, 1)).map(markup);
    let second = engine.hover(&document, Position::new(0, 1)).map(markup);
    assert_eq!(first, second);
}
