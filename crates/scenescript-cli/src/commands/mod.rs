//! CLI subcommands

pub mod check;
pub mod export;
pub mod run;
