//! Status output for the patch run.
//!
//! All reporting goes through a caller-supplied writer so tests can capture
//! it; the binary passes stdout.

use crate::locate::LocateError;
use colored::Colorize;
use std::io::Write;

/// Echo the source immediately preceding the context marker.
///
/// Shown on every run that gets this far, so a human can eyeball what sits
/// between the deleted function and the next declaration. The echoed text
/// never affects the patch itself.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_context<W: Write>(writer: &mut W, snippet: &str) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}\n{}",
        "Context before next declaration:".cyan(),
        snippet
    )
}

/// Report a failed lookup. The only output an aborted run produces.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_failure<W: Write>(writer: &mut W, err: &LocateError) -> std::io::Result<()> {
    writeln!(writer, "{} {}", "Patch aborted:".red(), err)
}

/// Report the completed patch.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_success<W: Write>(writer: &mut W) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}",
        "Successfully removed suggestFixes function.".green()
    )
}
