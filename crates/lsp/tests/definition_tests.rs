// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Go-to-definition integration tests
//!
//! Verifies the declaration-pattern scans over realistic documents,
//! including the deliberately preserved identifier-agnostic bare
//! `array = [` behavior.

use grillcheese_lsp::definition::DefinitionScanner;
use grillcheese_lsp::document::Document;
use grillcheese_test_utils::{SAMPLE_GAME, test_uri};
use tower_lsp::lsp_types::Position;

fn doc(content: &str) -> Document {
    Document::new(
        test_uri("game.gcs"),
        content.to_string(),
        1,
        "grillcheese".to_string(),
    )
}

#[test]
fn test_variable_and_function_definitions_both_reported() {
    let text = "int x = 5\nfn x() {}";
    let offsets = DefinitionScanner::find_definitions(text, "x").unwrap();

    assert_eq!(
        offsets,
        vec![0, 10],
        "variable-like match first, then function-like"
    );
}

#[test]
fn test_no_definitions_for_undeclared_identifier() {
    let text = "int x = 5\nfn draw() {}\nscore = score + 1";
    let offsets = DefinitionScanner::find_definitions(text, "score").unwrap();

    // `score` appears, but never in declaration position
    assert!(offsets.is_empty());
}

#[test]
fn test_sample_game_declarations() {
    let document = doc(SAMPLE_GAME);

    let score = DefinitionScanner::find_locations(&document, "score").unwrap();
    // "int score = 0" plus the identifier-agnostic "array = [" site
    assert_eq!(score.len(), 2);
    assert_eq!(score[0].range.start, Position::new(2, 0));

    let reset = DefinitionScanner::find_locations(&document, "reset").unwrap();
    assert_eq!(reset.len(), 2, "fn reset( plus the bare array site");
}

#[test]
fn test_bare_array_site_reported_for_unrelated_identifier() {
    let document = doc("array = [1, 2, 3]\nint x = 5");

    // Scanning for `x` still reports the collection-literal site; this
    // overbreadth is preserved behavior.
    let locations = DefinitionScanner::find_locations(&document, "x").unwrap();
    assert_eq!(locations.len(), 2);

    let lines: Vec<u32> = locations.iter().map(|l| l.range.start.line).collect();
    assert!(lines.contains(&0), "bare array site on line 0");
    assert!(lines.contains(&1), "int declaration on line 1");
}

#[test]
fn test_string_array_declaration() {
    let document = doc("string[] names = [\"a\", \"b\"]");

    let locations = DefinitionScanner::find_locations(&document, "names").unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].range.start, Position::new(0, 0));
}

#[test]
fn test_locations_point_into_the_scanned_document() {
    let document = doc("bool on = true");

    let locations = DefinitionScanner::find_locations(&document, "on").unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].uri, *document.uri());
}

#[test]
fn test_scan_is_idempotent() {
    let first = DefinitionScanner::find_definitions(SAMPLE_GAME, "speed").unwrap();
    let second = DefinitionScanner::find_definitions(SAMPLE_GAME, "speed").unwrap();
    assert_eq!(first, second);
}
