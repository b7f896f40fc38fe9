//! Export command
//!
//! Usage: scenescript export <SCRIPT> <OUT>
//!
//! Parses the script and writes the typed command list as JSON, for later
//! replay without re-parsing source text.

use clap::Args;
use std::path::PathBuf;

use scenescript_core::parse_script_file;
use scenescript_engine::persist;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Path to the script file
    pub script: PathBuf,

    /// Output path for the JSON command list
    pub out: PathBuf,
}

/// Execute the export command
pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parse_script_file(&args.script)?;
    for warning in &parsed.warnings {
        println!("warning: {}", warning);
    }

    persist::save_script(&args.out, &parsed.script)?;
    println!(
        "Exported {} command(s) to {}",
        parsed.script.len(),
        args.out.display()
    );

    Ok(())
}
