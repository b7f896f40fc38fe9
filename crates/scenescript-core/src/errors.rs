use thiserror::Error;

/// Result type alias using ScriptError
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Error taxonomy for script handling
///
/// Deliberately small: malformed or unrecognized lines are *warnings*
/// (log-and-skip), never errors. The only hard failure at parse level is
/// being unable to read the script file at all.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Script file could not be read
    #[error("Failed to read script file {path}: {message}")]
    Io { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ScriptError::Io {
            path: "scripts/missing.txt".to_string(),
            message: "No such file or directory".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("scripts/missing.txt"));
        assert!(rendered.contains("No such file"));
    }
}
