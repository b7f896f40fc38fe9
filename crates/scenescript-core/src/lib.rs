//! Scenescript Core - command model and script parser
//!
//! This crate provides the foundational pieces of the scenescript language:
//! - The typed `Command` model, one variant per script instruction
//! - `CommandScript`, the ordered sequence replayed by the engine
//! - A line-oriented parser with log-and-skip recovery for bad lines
//! - The structured logging facility shared by the workspace
//!
//! The parser is a leaf component: it has no knowledge of scenes, objects,
//! or the sequencer that eventually replays its output.

pub mod command;
pub mod errors;
pub mod logging;
pub mod parser;

// Re-export commonly used types
pub use command::{Command, CommandKind, CommandScript};
pub use errors::{Result, ScriptError};
pub use parser::{parse_script, parse_script_file, ParseWarning, ParsedScript};
