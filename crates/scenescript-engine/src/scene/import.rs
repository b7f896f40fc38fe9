//! Model import seam
//!
//! `ModelImporter` is the point where object creation can suspend on the
//! outside world. An interactive file-pick dialog would implement this
//! trait in a frontend crate; the engine ships a non-interactive directory
//! lookup and an always-cancelling importer for headless runs.

use std::path::PathBuf;

use super::library::ObjectTemplate;

/// Supplies a model for an object type the scene cannot resolve itself
///
/// Returning `None` means the user declined to supply a file (a cancelled
/// import). Implementations may block indefinitely - a dialog left open is
/// valid, and no deadline is imposed on it.
pub trait ModelImporter {
    fn import_model(&mut self, type_name: &str) -> Option<ObjectTemplate>;
}

/// Non-interactive importer that looks for `<root>/<type_name>.obj`
///
/// The headless stand-in for a file-pick dialog: present file means the
/// user "picked" it, absent file means cancel.
#[derive(Debug, Clone)]
pub struct DirectoryImporter {
    root: PathBuf,
}

impl DirectoryImporter {
    /// Create an importer rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ModelImporter for DirectoryImporter {
    fn import_model(&mut self, type_name: &str) -> Option<ObjectTemplate> {
        let path = self.root.join(format!("{}.obj", type_name));
        if path.is_file() {
            tracing::info!(type_name, path = %path.display(), "imported model file");
            Some(ObjectTemplate::imported(type_name, path))
        } else {
            tracing::debug!(type_name, path = %path.display(), "no model file to import");
            None
        }
    }
}

/// Importer that cancels every request
///
/// Used when no import source is configured; every unresolvable CREATE is
/// then abandoned after the sequencer's automatic retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullImporter;

impl ModelImporter for NullImporter {
    fn import_model(&mut self, _type_name: &str) -> Option<ObjectTemplate> {
        None
    }
}
