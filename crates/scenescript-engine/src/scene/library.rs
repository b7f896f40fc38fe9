//! Import library - cache of resolved object templates
//!
//! The library is an explicitly owned value, constructed by the caller and
//! handed to the scene, so its lifetime is a deliberate choice rather than
//! hidden global state. Creation is serialized by the sequencer, so the
//! library never sees concurrent writers.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where a template's model data came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateSource {
    /// Shipped with the application's bundled resources
    Bundled,
    /// Imported from a user-supplied model file
    Imported { path: PathBuf },
}

/// A reusable resolved object template
///
/// Cloned for every instantiation of its type; the model data itself is
/// out of scope here, so the template records type name and provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTemplate {
    pub type_name: String,
    pub source: TemplateSource,
}

impl ObjectTemplate {
    /// Template backed by a bundled resource
    pub fn bundled(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            source: TemplateSource::Bundled,
        }
    }

    /// Template backed by an imported model file
    pub fn imported(type_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            type_name: type_name.into(),
            source: TemplateSource::Imported { path: path.into() },
        }
    }
}

/// Mapping from object type name to a previously resolved template
///
/// Keys are unique; the first successful resolution for a type wins and is
/// reused for every later creation of that type.
#[derive(Debug, Clone, Default)]
pub struct ImportLibrary {
    templates: HashMap<String, ObjectTemplate>,
}

impl ImportLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a type is already cached
    pub fn contains(&self, type_name: &str) -> bool {
        self.templates.contains_key(type_name)
    }

    /// Get the cached template for a type, if any
    pub fn get(&self, type_name: &str) -> Option<&ObjectTemplate> {
        self.templates.get(type_name)
    }

    /// Cache a template unless its type is already present
    pub fn insert_if_absent(&mut self, template: ObjectTemplate) {
        if !self.contains(&template.type_name) {
            self.templates.insert(template.type_name.clone(), template);
        }
    }

    /// Number of cached templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_resolution_wins() {
        let mut library = ImportLibrary::new();
        library.insert_if_absent(ObjectTemplate::bundled("box"));
        library.insert_if_absent(ObjectTemplate::imported("box", "/tmp/box.obj"));

        assert_eq!(library.len(), 1);
        assert_eq!(
            library.get("box").map(|t| &t.source),
            Some(&TemplateSource::Bundled)
        );
    }

    #[test]
    fn test_lookup_misses_on_unknown_type() {
        let library = ImportLibrary::new();
        assert!(!library.contains("crane"));
        assert!(library.get("crane").is_none());
    }
}
