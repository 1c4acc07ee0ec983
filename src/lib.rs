//! Core library for the `remove-suggest-fixes` patch tool.
//!
//! The tool deletes the `suggestFixes` helper from one fixed TypeScript
//! source file. The function is found by textual markers, its end by a regex
//! for the known closing lines, and the file is rewritten in place. This is
//! a disposable patch, not a refactoring engine: nothing is configurable and
//! no syntax is parsed.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing the fixed target path, markers, and regex patterns.
pub mod constants;

/// Module defining the entry point logic.
/// This drives the whole patch: load, locate, cut, write, report.
pub mod entry_point;

/// Module locating the deletion span inside the loaded source.
pub mod locate;

/// Module for status output written to the console.
pub mod output;

/// Module applying the deletion to the source text.
pub mod splice;
