//! Run command
//!
//! Usage: scenescript run <SCRIPT> [--imports DIR]
//!
//! Parses the script and replays it against a headless in-memory scene.
//! With `--imports`, unresolvable object types are looked up as
//! `<DIR>/<type>.obj`; without it every unresolvable CREATE is cancelled
//! and abandoned after the automatic retry.

use clap::Args;
use std::path::PathBuf;

use scenescript_core::parse_script_file;
use scenescript_engine::{
    DirectoryImporter, ImportLibrary, ModelImporter, NullImporter, RunReport, Scene, Sequencer,
};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the script file
    pub script: PathBuf,

    /// Directory to resolve model imports from (default: cancel all imports)
    #[arg(long)]
    pub imports: Option<PathBuf>,
}

/// Execute the run command
pub fn execute(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parse_script_file(&args.script)?;
    for warning in &parsed.warnings {
        println!("warning: {}", warning);
    }

    let report = match &args.imports {
        Some(dir) => replay(parsed.script, DirectoryImporter::new(dir.as_path())),
        None => replay(parsed.script, NullImporter),
    };

    println!(
        "Run finished: {} completed, {} abandoned, {} missing",
        report.completed(),
        report.abandoned(),
        report.missing()
    );

    Ok(())
}

fn replay<I: ModelImporter>(
    script: scenescript_core::CommandScript,
    importer: I,
) -> RunReport {
    let mut scene = Scene::new(ImportLibrary::new(), importer);
    let report = Sequencer::new(script, &mut scene).run_to_end();

    for notice in &report.notices {
        println!("[{}] {}: {}", notice.index, notice.kind, notice.status);
    }
    report
}
