//! Scenescript Engine - command sequencing against a live scene
//!
//! This crate replays a parsed `CommandScript` one command at a time:
//! - `Sequencer` drives the per-command state machine, suspending on object
//!   creation until the resolve-or-import outcome is known, with one
//!   automatic retry on a cancelled import
//! - `SceneOps` is the capability trait the sequencer consumes; it is
//!   injected at construction, never reached through ambient state
//! - `Scene` is the in-memory collaborator: live objects, bundled
//!   templates, named motion paths, and an injectable `ImportLibrary`
//! - `persist` saves and restores the typed command list as JSON

pub mod errors;
pub mod persist;
pub mod scene;
pub mod sequencer;

// Re-export commonly used types
pub use errors::{Result, SceneError};
pub use scene::{
    CellAnimation, DirectoryImporter, ImportLibrary, ModelImporter, Motion, MotionPath,
    NullImporter, ObjectHandle, ObjectTemplate, Scene, SceneObject, TemplateSource,
};
pub use sequencer::{
    CreateOutcome, OpOutcome, RunReport, SceneOps, Sequencer, StepNotice, StepStatus,
};
