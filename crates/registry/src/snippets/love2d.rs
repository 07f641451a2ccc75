// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Love2D API snippet definitions
//!
//! Grouped by sub-namespace: graphics, keyboard, mouse, window, timer,
//! math, audio, event.

use crate::SnippetEntry;

/// Get all builtin Love2D API snippets
pub fn all_snippets() -> Vec<SnippetEntry> {
    vec![
        // Graphics
        SnippetEntry::new(
            "love.graphics.print",
            "love.graphics.print(${1:text}, ${2:x}, ${3:y})",
        )
        .with_detail("Print text to screen"),
        SnippetEntry::new(
            "love.graphics.rectangle",
            "love.graphics.rectangle(\"${1|fill,line|}\", ${2:x}, ${3:y}, ${4:width}, ${5:height})",
        )
        .with_detail("Draw rectangle"),
        SnippetEntry::new(
            "love.graphics.circle",
            "love.graphics.circle(\"${1|fill,line|}\", ${2:x}, ${3:y}, ${4:radius})",
        )
        .with_detail("Draw circle"),
        SnippetEntry::new(
            "love.graphics.setColor",
            "love.graphics.setColor(${1:r}, ${2:g}, ${3:b}, ${4:a})",
        )
        .with_detail("Set drawing color"),
        SnippetEntry::new("love.graphics.getColor", "love.graphics.getColor()")
            .with_detail("Get current color"),
        SnippetEntry::new(
            "love.graphics.clear",
            "love.graphics.clear(${1:r}, ${2:g}, ${3:b}, ${4:a})",
        )
        .with_detail("Clear screen"),
        SnippetEntry::new("love.graphics.present", "love.graphics.present()")
            .with_detail("Present frame"),
        // Keyboard
        SnippetEntry::new("love.keyboard.isDown", "love.keyboard.isDown(\"${1:key}\")")
            .with_detail("Check if key is pressed"),
        // Mouse
        SnippetEntry::new("love.mouse.getPosition", "love.mouse.getPosition()")
            .with_detail("Get mouse position"),
        SnippetEntry::new("love.mouse.isDown", "love.mouse.isDown(${1:button})")
            .with_detail("Check if mouse button is pressed"),
        SnippetEntry::new("love.mouse.getX", "love.mouse.getX()")
            .with_detail("Get mouse X position"),
        SnippetEntry::new("love.mouse.getY", "love.mouse.getY()")
            .with_detail("Get mouse Y position"),
        // Window
        SnippetEntry::new("love.window.setTitle", "love.window.setTitle(\"${1:title}\")")
            .with_detail("Set window title"),
        SnippetEntry::new("love.window.getTitle", "love.window.getTitle()")
            .with_detail("Get window title"),
        SnippetEntry::new("love.window.getWidth", "love.window.getWidth()")
            .with_detail("Get window width"),
        SnippetEntry::new("love.window.getHeight", "love.window.getHeight()")
            .with_detail("Get window height"),
        // Timer
        SnippetEntry::new("love.timer.getDelta", "love.timer.getDelta()")
            .with_detail("Get frame delta time"),
        SnippetEntry::new("love.timer.getFPS", "love.timer.getFPS()")
            .with_detail("Get current FPS"),
        SnippetEntry::new("love.timer.sleep", "love.timer.sleep(${1:seconds})")
            .with_detail("Sleep for seconds"),
        // Math
        SnippetEntry::new("love.math.random", "love.math.random(${1:min}, ${2:max})")
            .with_detail("Generate random number"),
        SnippetEntry::new("love.math.randomseed", "love.math.randomseed(${1:seed})")
            .with_detail("Set random seed"),
        // Audio
        SnippetEntry::new(
            "love.audio.newSource",
            "love.audio.newSource(\"${1:file}\", \"${2|static,stream|}\")",
        )
        .with_detail("Create audio source"),
        SnippetEntry::new("love.audio.play", "love.audio.play(${1:source})")
            .with_detail("Play audio source"),
        SnippetEntry::new("love.audio.stop", "love.audio.stop(${1:source})")
            .with_detail("Stop audio source"),
        // Events
        SnippetEntry::new("love.event.quit", "love.event.quit()").with_detail("Quit application"),
        SnippetEntry::new("love.event.push", "love.event.push(\"${1:event}\", ${2:data})")
            .with_detail("Push event"),
    ]
}
