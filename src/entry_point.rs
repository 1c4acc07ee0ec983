//! Entry point logic shared by the binary and the tests.
//!
//! The run is strictly linear: load, locate, cut, write, report. Any failed
//! lookup aborts before the file is touched, so every failure path leaves
//! the target exactly as it was read. The write is a plain truncating
//! overwrite of the same path, with no lock held between read and write.

use crate::locate::{self, DeletionSpan};
use crate::{constants, output, splice};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Run the patch against the current working directory, writing status to
/// stdout. Returns the process exit code.
///
/// # Errors
///
/// Returns an error if the target file cannot be read or written.
pub fn run() -> Result<i32> {
    run_to(&mut std::io::stdout())
}

/// Run the patch, writing status to `writer`. Returns the process exit code:
/// `0` when the function was removed, `1` when any marker lookup failed.
///
/// # Errors
///
/// Returns an error if the target file cannot be read or written, or if the
/// computed span cannot be applied. Failed lookups are not errors at this
/// level; they are reported to `writer` and mapped to exit code 1.
pub fn run_to<W: Write>(writer: &mut W) -> Result<i32> {
    let target = Path::new(constants::TARGET_FILE);
    let source = fs::read_to_string(target)
        .with_context(|| format!("Failed to read {}", target.display()))?;

    let Some(span) = locate_span(&source, writer)? else {
        return Ok(1);
    };

    let patched = splice::splice_out(&source, span)?;
    fs::write(target, patched)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    output::print_success(writer)?;
    Ok(0)
}

/// Resolve the deletion span, echoing the human-verification context along
/// the way. `None` means a lookup failed and has already been reported.
fn locate_span<W: Write>(source: &str, writer: &mut W) -> Result<Option<DeletionSpan>> {
    let start = match locate::find_start(source) {
        Ok(at) => at,
        Err(err) => {
            output::print_failure(writer, &err)?;
            return Ok(None);
        }
    };

    let context_at = match locate::find_context(source, start) {
        Ok(at) => at,
        Err(err) => {
            output::print_failure(writer, &err)?;
            return Ok(None);
        }
    };
    output::print_context(
        writer,
        locate::context_before(source, context_at, constants::CONTEXT_WINDOW),
    )?;

    let end = match locate::find_function_end(source, start) {
        Ok(at) => at,
        Err(err) => {
            output::print_failure(writer, &err)?;
            return Ok(None);
        }
    };

    Ok(Some(DeletionSpan { start, end }))
}
