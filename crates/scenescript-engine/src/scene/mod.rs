//! In-memory scene - the concrete `SceneOps` collaborator
//!
//! Holds the live object registry, bundled resource templates, named
//! motion paths, and the injected `ImportLibrary`. Object resolution
//! follows a fixed precedence: library cache, then bundled resources, then
//! the model importer.

pub mod import;
pub mod library;

use std::collections::HashMap;

use uuid::Uuid;

use crate::errors::{Result, SceneError};
use crate::sequencer::{CreateOutcome, OpOutcome, SceneOps};

pub use import::{DirectoryImporter, ModelImporter, NullImporter};
pub use library::{ImportLibrary, ObjectTemplate, TemplateSource};

/// Opaque handle to a live scene object
///
/// Minted by whichever `SceneOps` implementation creates the object;
/// handles are compared, stored, and passed back, never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(Uuid);

impl ObjectHandle {
    /// Mint a fresh unique handle
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A live object in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub handle: ObjectHandle,
    pub type_name: String,
    /// Display name; empty until `apply_transform` assigns it
    pub name: String,
    pub position: [f32; 3],
    /// Named cells holding opaque formula text
    pub cells: HashMap<String, String>,
}

/// A named path objects can move along
///
/// Waypoint interpolation is the motion system's concern; the scene only
/// resolves paths by name.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionPath {
    pub name: String,
    pub waypoints: Vec<[f32; 3]>,
}

/// A recorded move of an object along a path
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    pub object_name: String,
    pub path_name: String,
    pub duration_secs: f32,
    pub start_position: Option<f32>,
}

/// A recorded animated cell update
#[derive(Debug, Clone, PartialEq)]
pub struct CellAnimation {
    pub object_name: String,
    pub cell_name: String,
    pub duration_secs: f32,
    pub start_value: f32,
    pub end_value: f32,
    pub unit: Option<String>,
}

/// In-memory scene state plus the resolution machinery for object creation
pub struct Scene<I: ModelImporter> {
    library: ImportLibrary,
    importer: I,
    bundled: HashMap<String, ObjectTemplate>,
    objects: HashMap<ObjectHandle, SceneObject>,
    names: HashMap<String, ObjectHandle>,
    paths: HashMap<String, MotionPath>,
    motions: Vec<Motion>,
    animations: Vec<CellAnimation>,
}

impl<I: ModelImporter> Scene<I> {
    /// Create a scene with an injected template cache and importer
    pub fn new(library: ImportLibrary, importer: I) -> Self {
        Self {
            library,
            importer,
            bundled: HashMap::new(),
            objects: HashMap::new(),
            names: HashMap::new(),
            paths: HashMap::new(),
            motions: Vec::new(),
            animations: Vec::new(),
        }
    }

    /// Register a template shipped with the application
    pub fn register_bundled(&mut self, type_name: impl Into<String>) {
        let type_name = type_name.into();
        self.bundled
            .insert(type_name.clone(), ObjectTemplate::bundled(type_name));
    }

    /// Register a named motion path
    pub fn register_path(&mut self, path: MotionPath) {
        self.paths.insert(path.name.clone(), path);
    }

    /// Get a live object by display name
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.names.get(name).and_then(|h| self.objects.get(h))
    }

    /// Number of live objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// The template cache, for inspection
    pub fn library(&self) -> &ImportLibrary {
        &self.library
    }

    /// The model importer, for inspection
    pub fn importer(&self) -> &I {
        &self.importer
    }

    /// Moves recorded so far, in execution order
    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    /// Cell animations recorded so far, in execution order
    pub fn animations(&self) -> &[CellAnimation] {
        &self.animations
    }

    /// Instantiate a template as a fresh, unnamed object
    fn spawn(&mut self, template: ObjectTemplate) -> ObjectHandle {
        let handle = ObjectHandle::new();
        self.objects.insert(
            handle,
            SceneObject {
                handle,
                type_name: template.type_name,
                name: String::new(),
                position: [0.0; 3],
                cells: HashMap::new(),
            },
        );
        handle
    }

    /// Look up a live object by name
    ///
    /// # Errors
    ///
    /// Returns `ObjectNotFound` if no live object carries the name.
    fn require_object(&mut self, name: &str) -> Result<&mut SceneObject> {
        let handle = *self
            .names
            .get(name)
            .ok_or_else(|| SceneError::ObjectNotFound {
                name: name.to_string(),
            })?;
        // The name index only holds handles of live objects
        self.objects
            .get_mut(&handle)
            .ok_or_else(|| SceneError::ObjectNotFound {
                name: name.to_string(),
            })
    }

    /// Look up a registered path by name
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if no path carries the name.
    fn require_path(&self, name: &str) -> Result<&MotionPath> {
        self.paths.get(name).ok_or_else(|| SceneError::PathNotFound {
            name: name.to_string(),
        })
    }
}

impl<I: ModelImporter> SceneOps for Scene<I> {
    fn resolve_or_import(&mut self, type_name: &str) -> CreateOutcome {
        // (1) previously resolved template
        if let Some(template) = self.library.get(type_name).cloned() {
            tracing::debug!(type_name, "resolved from import library");
            return CreateOutcome::Resolved(self.spawn(template));
        }

        // (2) bundled resource; cache it for later creations
        if let Some(template) = self.bundled.get(type_name).cloned() {
            tracing::debug!(type_name, "resolved from bundled resources");
            self.library.insert_if_absent(template.clone());
            return CreateOutcome::Resolved(self.spawn(template));
        }

        // (3) ask the importer; may block on the user
        match self.importer.import_model(type_name) {
            Some(template) => {
                self.library.insert_if_absent(template.clone());
                CreateOutcome::Resolved(self.spawn(template))
            }
            None => CreateOutcome::ImportCancelled,
        }
    }

    fn apply_transform(&mut self, handle: ObjectHandle, name: &str, x: f32, y: f32, z: f32) {
        match self.objects.get_mut(&handle) {
            Some(object) => {
                object.name = name.to_string();
                object.position = [x, y, z];
                self.names.insert(name.to_string(), handle);
            }
            None => {
                tracing::warn!(%handle, name, "apply_transform on unknown handle");
            }
        }
    }

    fn set_cell(&mut self, object_name: &str, cell_name: &str, formula: &str) -> OpOutcome {
        match self.require_object(object_name) {
            Ok(object) => {
                object
                    .cells
                    .insert(cell_name.to_string(), formula.to_string());
                OpOutcome::Done
            }
            Err(err) => {
                tracing::debug!(%err, "set_cell miss");
                OpOutcome::NotFound
            }
        }
    }

    fn begin_move(
        &mut self,
        object_name: &str,
        path_name: &str,
        duration_secs: f32,
        start_position: Option<f32>,
    ) -> OpOutcome {
        if let Err(err) = self.require_object(object_name) {
            tracing::debug!(%err, "begin_move miss");
            return OpOutcome::NotFound;
        }
        if let Err(err) = self.require_path(path_name) {
            tracing::debug!(%err, "begin_move miss");
            return OpOutcome::NotFound;
        }

        self.motions.push(Motion {
            object_name: object_name.to_string(),
            path_name: path_name.to_string(),
            duration_secs,
            start_position,
        });
        OpOutcome::Done
    }

    fn begin_cell_update(
        &mut self,
        object_name: &str,
        cell_name: &str,
        duration_secs: f32,
        start_value: f32,
        end_value: f32,
        unit: Option<&str>,
    ) -> OpOutcome {
        if let Err(err) = self.require_object(object_name) {
            tracing::debug!(%err, "begin_cell_update miss");
            return OpOutcome::NotFound;
        }

        self.animations.push(CellAnimation {
            object_name: object_name.to_string(),
            cell_name: cell_name.to_string(),
            duration_secs,
            start_value,
            end_value,
            unit: unit.map(|u| u.to_string()),
        });
        OpOutcome::Done
    }

    fn destroy(&mut self, object_name: &str) -> OpOutcome {
        match self.names.remove(object_name) {
            Some(handle) => {
                self.objects.remove(&handle);
                tracing::debug!(object_name, "destroyed object");
                OpOutcome::Done
            }
            None => OpOutcome::NotFound,
        }
    }
}
