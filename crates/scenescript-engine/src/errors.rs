use thiserror::Error;

/// Result type alias using SceneError
pub type Result<T> = std::result::Result<T, SceneError>;

/// Error taxonomy for scene operations
///
/// No variant here is process-fatal. The sequencer converts lookup misses
/// into logged notices and keeps the run moving; IO and serialization
/// errors only surface from the persistence helpers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// No live object with the given name
    #[error("Object not found: {name}")]
    ObjectNotFound { name: String },

    /// No registered motion path with the given name
    #[error("Path not found: {name}")]
    PathNotFound { name: String },

    /// Script persistence file could not be read or written
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from serde_json::Error to SceneError
impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        SceneError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_the_object() {
        let err = SceneError::ObjectNotFound {
            name: "crane1".to_string(),
        };
        assert_eq!(err.to_string(), "Object not found: crane1");
    }
}
