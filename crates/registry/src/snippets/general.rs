// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! General language snippet definitions
//!
//! Keywords and control-flow constructs, typed declaration forms, and the
//! Love2D lifecycle callback skeletons.

use crate::SnippetEntry;

/// Get all general language snippets
pub fn all_snippets() -> Vec<SnippetEntry> {
    vec![
        // Keywords
        SnippetEntry::new("fn", "fn ${1:name}(${2:params}) {\n\t${3:// body}\n}")
            .with_detail("Function declaration"),
        SnippetEntry::new("pub fn", "pub fn ${1:name}(${2:params}) {\n\t${3:// body}\n}")
            .with_detail("Public function declaration"),
        SnippetEntry::new("priv fn", "priv fn ${1:name}(${2:params}) {\n\t${3:// body}\n}")
            .with_detail("Private function declaration"),
        SnippetEntry::new("if", "if (${1:condition}) {\n\t${2:// code}\n}")
            .with_detail("If statement"),
        SnippetEntry::new(
            "if else",
            "if (${1:condition}) {\n\t${2:// code}\n} else {\n\t${3:// code}\n}",
        )
        .with_detail("If-else statement"),
        SnippetEntry::new("while", "while (${1:condition}) {\n\t${2:// code}\n}")
            .with_detail("While loop"),
        SnippetEntry::new(
            "for",
            "for (${1:int} ${2:i} = ${3:0}; ${2:i} < ${4:10}; ${2:i}++) {\n\t${5:// code}\n}",
        )
        .with_detail("For loop (C-style)"),
        SnippetEntry::new(
            "for in",
            "for (${1:int} ${2:i}, ${3:string} ${4:item} in ipairs(${5:array})) {\n\t${6:// code}\n}",
        )
        .with_detail("For-in loop"),
        SnippetEntry::new("return", "return ${1:value}").with_detail("Return statement"),
        SnippetEntry::new("true", "true").with_detail("Boolean true"),
        SnippetEntry::new("false", "false").with_detail("Boolean false"),
        SnippetEntry::new("nil", "nil").with_detail("Nil value"),
        // Type declarations
        SnippetEntry::new("string[]", "string[] ${1:name} = [${2:\"item1\", \"item2\"}]")
            .with_detail("String array declaration"),
        SnippetEntry::new("bool", "bool ${1:name} = ${2:true}").with_detail("Boolean declaration"),
        SnippetEntry::new("int", "int ${1:name} = ${2:0}").with_detail("Integer declaration"),
        SnippetEntry::new("float", "float ${1:name} = ${2:0.0}").with_detail("Float declaration"),
        SnippetEntry::new("string", "string ${1:name} = \"${2:value}\"")
            .with_detail("String declaration"),
        // Love2D lifecycle callbacks
        SnippetEntry::new("love.draw", "priv fn love.draw() {\n\t${1:// drawing code}\n}")
            .with_detail("Love2D draw callback"),
        SnippetEntry::new(
            "love.update",
            "priv fn love.update(float dt) {\n\t${1:// update code}\n}",
        )
        .with_detail("Love2D update callback"),
        SnippetEntry::new(
            "love.load",
            "priv fn love.load() {\n\t${1:// initialization code}\n}",
        )
        .with_detail("Love2D load callback"),
        SnippetEntry::new(
            "love.keypressed",
            "priv fn love.keypressed(string key) {\n\t${1:// key handling}\n}",
        )
        .with_detail("Love2D key pressed callback"),
        SnippetEntry::new(
            "love.mousepressed",
            "priv fn love.mousepressed(int x, int y, int button) {\n\t${1:// mouse handling}\n}",
        )
        .with_detail("Love2D mouse pressed callback"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_declaration_forms_present() {
        let snippets = all_snippets();
        for ty in ["string[]", "bool", "int", "float", "string"] {
            assert!(
                snippets.iter().any(|s| s.name == ty),
                "missing declaration form for {ty}"
            );
        }
    }
}
