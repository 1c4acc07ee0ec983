//! Integration tests driving the real binary against a scratch tree.
//!
//! The target path is fixed and relative, so each test builds the expected
//! directory shape inside a tempdir and points the process there.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TARGET_REL: &str = "src/tools/helpers/errors.ts";

const PATCHABLE: &str = "A\nexport function suggestFixes(error: NotionMCPError): string[] {\n  let suggestions = []\n  return suggestions\n}\nexport function withErrorHandling() {}\n";

/// What PATCHABLE becomes: the span ends right after the closing brace, so
/// the newline that separated the two declarations survives.
const PATCHED: &str = "A\n\nexport function withErrorHandling() {}\n";

fn scratch_tree(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join(TARGET_REL);
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, content).unwrap();
    (dir, target)
}

fn patch_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("remove-suggest-fixes").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_removes_function_and_reports_success() {
    let (dir, target) = scratch_tree(PATCHABLE);

    patch_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully removed suggestFixes function.",
        ));

    assert_eq!(fs::read_to_string(&target).unwrap(), PATCHED);
}

#[test]
fn test_result_length_is_original_minus_span() {
    let (dir, target) = scratch_tree(PATCHABLE);

    patch_cmd(dir.path()).assert().success();

    let removed = PATCHABLE.len() - fs::read_to_string(&target).unwrap().len();
    let span_start = PATCHABLE.find("export function suggestFixes").unwrap();
    let span_end = PATCHABLE.find("suggestions\n}").unwrap() + "suggestions\n}".len();
    assert_eq!(removed, span_end - span_start);
}

#[test]
fn test_echoes_context_before_next_declaration() {
    let (dir, _target) = scratch_tree(PATCHABLE);

    patch_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Context before next declaration:"))
        .stdout(predicate::str::contains("return suggestions"));
}

#[test]
fn test_second_run_fails_without_touching_the_file() {
    let (dir, target) = scratch_tree(PATCHABLE);
    patch_cmd(dir.path()).assert().success();
    let after_first = fs::read_to_string(&target).unwrap();

    patch_cmd(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not find start marker:"))
        .stdout(predicate::str::contains("Successfully").not());

    assert_eq!(fs::read_to_string(&target).unwrap(), after_first);
}

#[test]
fn test_context_marker_before_start_is_invisible() {
    // The context marker exists, but only ahead of the start marker; the
    // suffix search must treat it as absent and leave the file alone.
    let content = "export function withErrorHandling() {}\nexport function suggestFixes(error: NotionMCPError): string[] {\n  let suggestions = []\n  return suggestions\n}\n";
    let (dir, target) = scratch_tree(content);

    patch_cmd(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not find context marker:"));

    assert_eq!(fs::read_to_string(&target).unwrap(), content);
}

#[test]
fn test_renamed_return_variable_fails_end_lookup() {
    let content = "export function suggestFixes(error: NotionMCPError): string[] {\n  let fixes = []\n  return fixes\n}\nexport function withErrorHandling() {}\n";
    let (dir, target) = scratch_tree(content);

    patch_cmd(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not find function end"));

    assert_eq!(fs::read_to_string(&target).unwrap(), content);
}

#[test]
fn test_missing_target_file_is_an_io_failure() {
    // No src tree at all: the read fails before any lookup runs, and the
    // failure surfaces as an error display rather than a lookup diagnostic.
    let dir = TempDir::new().unwrap();

    patch_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"))
        .stdout(predicate::str::contains("Could not find").not());
}
