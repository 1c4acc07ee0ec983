//! Binary entry point for the `remove-suggest-fixes` patch tool.
//!
//! This binary simply delegates to the shared `entry_point::run()` function
//! so the whole operation stays testable through an in-process writer.

use anyhow::Result;

fn main() -> Result<()> {
    let code = remove_suggest_fixes::entry_point::run()?;
    std::process::exit(code);
}
