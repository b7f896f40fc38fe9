//! Scenescript CLI
//!
//! Command-line interface for parsing, replaying, and exporting scene
//! scripts.

use clap::{Parser, Subcommand};
use scenescript_core::logging::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "scenescript")]
#[command(about = "Scenescript - scene command script tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a script and report commands and warnings
    Check(commands::check::CheckArgs),
    /// Parse a script and replay it against a headless scene
    Run(commands::run::RunArgs),
    /// Parse a script and write the typed command list as JSON
    Export(commands::export::ExportArgs),
}

fn main() {
    init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Run(args) => commands::run::execute(args),
        Commands::Export(args) => commands::export::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
