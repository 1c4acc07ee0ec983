//! Shared constants and regex patterns.
//!
//! Everything the patch acts on is fixed at build time: the target path, the
//! markers bounding the function to delete, and the pattern for its closing
//! lines. There is deliberately no way to override any of these at runtime.

use regex::Regex;
use std::sync::OnceLock;

/// Path of the file to patch, relative to the working directory.
pub const TARGET_FILE: &str = "src/tools/helpers/errors.ts";

/// First line of the function to delete.
pub const START_MARKER: &str =
    "export function suggestFixes(error: NotionMCPError): string[] {";

/// Declaration that follows the deleted function. Used only to echo the
/// surrounding source for a human sanity check; it never moves the cut.
pub const CONTEXT_MARKER: &str = "export function withErrorHandling";

/// Number of characters echoed before the context marker.
pub const CONTEXT_WINDOW: usize = 100;

/// Regex for the closing lines of the `suggestFixes` body.
///
/// A textual heuristic, not a brace scanner: the body is known to end with
/// `return suggestions` followed by a lone closing brace.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_function_end_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"return suggestions\s*\n\}").expect("Invalid function end regex pattern")
    })
}

/// Regex for runs of three or more newlines.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_blank_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex pattern"))
}
