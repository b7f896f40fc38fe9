//! Check command
//!
//! Usage: scenescript check <SCRIPT>
//!
//! Parses the script and reports the command count and any dropped lines.
//! Warnings are not fatal; only an unreadable file fails the command.

use clap::Args;
use std::path::PathBuf;

use scenescript_core::parse_script_file;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the script file
    pub script: PathBuf,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parse_script_file(&args.script)?;

    println!(
        "{}: {} command(s), {} warning(s)",
        args.script.display(),
        parsed.script.len(),
        parsed.warnings.len()
    );
    for warning in &parsed.warnings {
        println!("  warning: {}", warning);
    }

    Ok(())
}
