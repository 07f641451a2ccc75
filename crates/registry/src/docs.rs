// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Documentation dictionaries
//!
//! Two independent tables of Markdown documentation: one keyed by full
//! dotted Love2D API name, one keyed by GrillCheese keyword. Lookup is
//! exact-match only — hovering `print` does not resolve to
//! `love.graphics.print`.

/// A documentation entry: exact key plus Markdown body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocEntry {
    pub key: &'static str,
    pub markup: &'static str,
}

impl DocEntry {
    const fn new(key: &'static str, markup: &'static str) -> Self {
        Self { key, markup }
    }
}

/// Get all Love2D API documentation entries
pub fn love2d_docs() -> Vec<DocEntry> {
    vec![
        DocEntry::new(
            "love.graphics.print",
            "**love.graphics.print(text, x, y)**\n\nPrints text to the screen at the specified position.\n\n- `text`: The text to print\n- `x`: X coordinate\n- `y`: Y coordinate",
        ),
        DocEntry::new(
            "love.graphics.rectangle",
            "**love.graphics.rectangle(mode, x, y, width, height)**\n\nDraws a rectangle.\n\n- `mode`: \"fill\" or \"line\"\n- `x`: X coordinate\n- `y`: Y coordinate\n- `width`: Rectangle width\n- `height`: Rectangle height",
        ),
        DocEntry::new(
            "love.graphics.circle",
            "**love.graphics.circle(mode, x, y, radius)**\n\nDraws a circle.\n\n- `mode`: \"fill\" or \"line\"\n- `x`: X coordinate\n- `y`: Y coordinate\n- `radius`: Circle radius",
        ),
        DocEntry::new(
            "love.graphics.setColor",
            "**love.graphics.setColor(r, g, b, a)**\n\nSets the current drawing color.\n\n- `r`: Red component (0-1)\n- `g`: Green component (0-1)\n- `b`: Blue component (0-1)\n- `a`: Alpha component (0-1)",
        ),
        DocEntry::new(
            "love.keyboard.isDown",
            "**love.keyboard.isDown(key)**\n\nChecks if a key is currently pressed.\n\n- `key`: Key name (e.g., \"space\", \"left\", \"right\")",
        ),
        DocEntry::new(
            "love.mouse.getPosition",
            "**love.mouse.getPosition()**\n\nGets the current mouse position.\n\nReturns: `x, y` coordinates",
        ),
        DocEntry::new(
            "love.timer.getDelta",
            "**love.timer.getDelta()**\n\nGets the time between the current frame and the last frame.\n\nReturns: Delta time in seconds",
        ),
        DocEntry::new(
            "love.window.getWidth",
            "**love.window.getWidth()**\n\nGets the width of the window.\n\nReturns: Window width in pixels",
        ),
        DocEntry::new(
            "love.window.getHeight",
            "**love.window.getHeight()**\n\nGets the height of the window.\n\nReturns: Window height in pixels",
        ),
    ]
}

/// Get all GrillCheese keyword documentation entries
pub fn keyword_docs() -> Vec<DocEntry> {
    vec![
        DocEntry::new(
            "fn",
            "**fn** - Function declaration keyword\n\nUsed to declare functions in GrillCheese Script.\n\nExample:\n```grillcheese\nfn myFunction(param) {\n    // function body\n}\n```",
        ),
        DocEntry::new(
            "array",
            "**array** - Array declaration\n\nCreates a new array with the specified elements.\n\nExample:\n```grillcheese\narray = [1, 2, 3]\n```",
        ),
        DocEntry::new(
            "string[]",
            "**string[]** - String array type\n\nDeclares an array of strings.\n\nExample:\n```grillcheese\nstring[] names = [\"Alice\", \"Bob\"]\n```",
        ),
        DocEntry::new(
            "bool",
            "**bool** - Boolean type\n\nDeclares a boolean variable.\n\nExample:\n```grillcheese\nbool isActive = true\n```",
        ),
        DocEntry::new(
            "int",
            "**int** - Integer type\n\nDeclares an integer variable.\n\nExample:\n```grillcheese\nint count = 42\n```",
        ),
        DocEntry::new(
            "float",
            "**float** - Float type\n\nDeclares a float variable.\n\nExample:\n```grillcheese\nfloat pi = 3.14159\n```",
        ),
        DocEntry::new(
            "if",
            "**if** - Conditional statement\n\nExecutes code if a condition is true.\n\nExample:\n```grillcheese\nif (condition) {\n    // code\n}\n```",
        ),
        DocEntry::new(
            "while",
            "**while** - While loop\n\nRepeats code while a condition is true.\n\nExample:\n```grillcheese\nwhile (condition) {\n    // code\n}\n```",
        ),
        DocEntry::new("true", "**true** - Boolean true value"),
        DocEntry::new("false", "**false** - Boolean false value"),
        DocEntry::new("nil", "**nil** - Null value"),
        DocEntry::new("and", "**and** - Logical AND operator"),
        DocEntry::new("or", "**or** - Logical OR operator"),
        DocEntry::new("not", "**not** - Logical NOT operator"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_love2d_docs_keyed_by_full_dotted_name() {
        for entry in love2d_docs() {
            assert!(entry.key.starts_with("love."), "bad key {}", entry.key);
            assert!(
                entry.markup.contains(entry.key),
                "markup for {} does not mention it",
                entry.key
            );
        }
    }

    #[test]
    fn test_doc_keys_unique() {
        let love2d: HashSet<&str> = love2d_docs().iter().map(|d| d.key).collect();
        assert_eq!(love2d.len(), love2d_docs().len());

        let keywords: HashSet<&str> = keyword_docs().iter().map(|d| d.key).collect();
        assert_eq!(keywords.len(), keyword_docs().len());
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(love2d_docs().len(), 9);
        assert_eq!(keyword_docs().len(), 14);
    }
}
