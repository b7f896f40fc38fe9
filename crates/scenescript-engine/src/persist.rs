//! Typed-command script persistence
//!
//! Saves and restores a `CommandScript` as a JSON list of typed commands,
//! so an authored scene setup can be replayed later without re-parsing the
//! source text. This owns only the command list; full scene-state saves
//! are a different collaborator's format.

use std::fs;
use std::path::Path;

use scenescript_core::CommandScript;

use crate::errors::{Result, SceneError};

/// Write a script to `path` as pretty-printed JSON
///
/// # Errors
///
/// Returns `Serialization` if encoding fails and `Io` if the file cannot
/// be written.
pub fn save_script(path: &Path, script: &CommandScript) -> Result<()> {
    let json = serde_json::to_string_pretty(script)?;
    fs::write(path, json).map_err(|e| SceneError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::info!(path = %path.display(), commands = script.len(), "saved script");
    Ok(())
}

/// Read a script previously written by `save_script`
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `Serialization` if its
/// contents are not a valid command list.
pub fn load_script(path: &Path) -> Result<CommandScript> {
    let json = fs::read_to_string(path).map_err(|e| SceneError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let script: CommandScript = serde_json::from_str(&json)?;
    tracing::info!(path = %path.display(), commands = script.len(), "loaded script");
    Ok(script)
}
