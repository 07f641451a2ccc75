// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Module import/export snippet definitions
//!
//! Covers the import forms (named, default, namespace, aliased), the
//! export forms (named, default, wildcard re-export), and the bundled
//! `sprlib` sprite module.

use crate::SnippetEntry;

/// Get all import/export snippets
pub fn all_snippets() -> Vec<SnippetEntry> {
    vec![
        // Import statements
        SnippetEntry::new(
            "import named",
            "import { ${1:function1}, ${2:function2} } from \"${3:module}\"",
        )
        .with_detail("Import named exports"),
        SnippetEntry::new("import default", "import ${1:name} from \"${2:module}\"")
            .with_detail("Import default export"),
        SnippetEntry::new("import all", "import * as ${1:namespace} from \"${2:module}\"")
            .with_detail("Import all exports as namespace"),
        SnippetEntry::new(
            "import with alias",
            "import { ${1:original} as ${2:alias} } from \"${3:module}\"",
        )
        .with_detail("Import with alias"),
        // Export statements
        SnippetEntry::new("export named", "export { ${1:function1}, ${2:function2} }")
            .with_detail("Export named items"),
        SnippetEntry::new("export default", "export default ${1:item}")
            .with_detail("Export default item"),
        SnippetEntry::new("export from", "export * from \"${1:module}\"")
            .with_detail("Re-export from module"),
        // Bundled modules
        SnippetEntry::new("sprlib", "import { load, render } from \"sprlib\"")
            .with_detail("Import sprlib functions"),
        SnippetEntry::new("sprlib colors", "import { colors } from \"sprlib.colors\"")
            .with_detail("Import sprlib colors"),
    ]
}
