//! Command sequencer
//!
//! Replays a `CommandScript` against a `SceneOps` collaborator, one command
//! at a time. Object creation is the only suspending operation: the
//! sequencer blocks in `resolve_or_import` until the collaborator reports
//! either a resolved handle or a cancelled import, and nothing after a
//! CREATE begins until that outcome is known. A cancelled import is retried
//! once automatically; a second cancellation abandons that single command
//! and the run continues.
//!
//! A `Sequencer` yields one `StepNotice` per command and is consumed by the
//! run: once the iterator is exhausted it cannot be restarted. Start a
//! fresh `Sequencer` to replay a new script.

use scenescript_core::{Command, CommandKind, CommandScript};

use crate::scene::ObjectHandle;

/// Outcome of a resolve-or-import request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Object template was resolved and instantiated; handle is live
    Resolved(ObjectHandle),
    /// The user declined to supply an import file
    ImportCancelled,
}

/// Outcome of a synchronous scene operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpOutcome {
    /// Operation applied
    Done,
    /// Target object or path does not exist (recoverable)
    NotFound,
}

/// Capability set the sequencer consumes
///
/// Implementations own all scene state, including the import library; the
/// sequencer never touches that state directly. `resolve_or_import` may
/// block indefinitely (a user dialog has no deadline) - callers must not
/// impose a timeout the scripted format does not have.
pub trait SceneOps {
    /// Resolve an object type to a live instance, importing if necessary
    ///
    /// Blocks until the creation attempt finishes one way or the other.
    fn resolve_or_import(&mut self, type_name: &str) -> CreateOutcome;

    /// Assign name and position to a freshly created object
    fn apply_transform(&mut self, handle: ObjectHandle, name: &str, x: f32, y: f32, z: f32);

    /// Set a cell on a live object to an opaque formula
    fn set_cell(&mut self, object_name: &str, cell_name: &str, formula: &str) -> OpOutcome;

    /// Start a move of a live object along a named path
    fn begin_move(
        &mut self,
        object_name: &str,
        path_name: &str,
        duration_secs: f32,
        start_position: Option<f32>,
    ) -> OpOutcome;

    /// Start an animated cell update on a live object
    fn begin_cell_update(
        &mut self,
        object_name: &str,
        cell_name: &str,
        duration_secs: f32,
        start_value: f32,
        end_value: f32,
        unit: Option<&str>,
    ) -> OpOutcome;

    /// Destroy the live object with the given name
    fn destroy(&mut self, object_name: &str) -> OpOutcome;
}

/// How a single command's execution ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Command executed against the scene
    Completed,
    /// CREATE abandoned after the retry was also cancelled
    ImportAbandoned,
    /// Target object or path was missing; command skipped
    TargetMissing,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepStatus::Completed => f.write_str("completed"),
            StepStatus::ImportAbandoned => f.write_str("import abandoned"),
            StepStatus::TargetMissing => f.write_str("target missing"),
        }
    }
}

/// Completion notification for one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepNotice {
    /// Position of the command in the script
    pub index: usize,
    /// Kind of the command that finished
    pub kind: CommandKind,
    /// How it ended
    pub status: StepStatus,
}

/// Sequencer-internal execution state
///
/// Mutated only by the sequencer, never externally. `retry_attempted`
/// resets at each CREATE; `pending_creation` is true exactly while a
/// resolve-or-import request is outstanding, which is what enforces the
/// at-most-one-in-flight-creation guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct SequencerState {
    current_index: usize,
    pending_creation: bool,
    retry_attempted: bool,
}

/// Drives sequential, suspend-capable execution of a script
///
/// Implements `Iterator`: each `next()` fully executes the next command
/// (including any retry) and yields its completion notice. The sequence is
/// finite and the sequencer is not restartable once exhausted.
pub struct Sequencer<'a, O: SceneOps> {
    script: CommandScript,
    ops: &'a mut O,
    state: SequencerState,
}

impl<'a, O: SceneOps> Sequencer<'a, O> {
    /// Create a sequencer for one run of `script` against `ops`
    pub fn new(script: CommandScript, ops: &'a mut O) -> Self {
        Self {
            script,
            ops,
            state: SequencerState::default(),
        }
    }

    /// Execute every remaining command and collect the notices
    pub fn run_to_end(self) -> RunReport {
        RunReport {
            notices: self.collect(),
        }
    }

    /// Dispatch one command and report how it ended
    fn dispatch(&mut self, cmd: &Command) -> StepStatus {
        match cmd {
            Command::Create {
                import_name,
                display_name,
                x,
                y,
                z,
            } => self.run_create(import_name, display_name, *x, *y, *z),
            Command::SetObjCell {
                object_name,
                cell_name,
                formula,
            } => {
                let outcome = self.ops.set_cell(object_name, cell_name, formula);
                Self::check_target(object_name, outcome)
            }
            Command::Move {
                object_name,
                path_name,
                duration_secs,
                start_position,
            } => {
                let outcome =
                    self.ops
                        .begin_move(object_name, path_name, *duration_secs, *start_position);
                Self::check_target(object_name, outcome)
            }
            Command::Destroy { object_name } => {
                let outcome = self.ops.destroy(object_name);
                Self::check_target(object_name, outcome)
            }
            Command::DynUpdateCell {
                object_name,
                cell_name,
                duration_secs,
                start_value,
                end_value,
                unit,
            } => {
                let outcome = self.ops.begin_cell_update(
                    object_name,
                    cell_name,
                    *duration_secs,
                    *start_value,
                    *end_value,
                    unit.as_deref(),
                );
                Self::check_target(object_name, outcome)
            }
        }
    }

    /// Run one CREATE to completion: resolve, retry once on cancel, or abandon
    fn run_create(
        &mut self,
        import_name: &str,
        display_name: &str,
        x: f32,
        y: f32,
        z: f32,
    ) -> StepStatus {
        tracing::debug!(
            import_name,
            display_name,
            x,
            y,
            z,
            "creating object"
        );
        debug_assert!(
            !self.state.pending_creation,
            "a creation is already in flight"
        );
        self.state.pending_creation = true;
        self.state.retry_attempted = false;

        loop {
            match self.ops.resolve_or_import(import_name) {
                CreateOutcome::Resolved(handle) => {
                    self.ops.apply_transform(handle, display_name, x, y, z);
                    self.state.pending_creation = false;
                    return StepStatus::Completed;
                }
                CreateOutcome::ImportCancelled if !self.state.retry_attempted => {
                    self.state.retry_attempted = true;
                    tracing::debug!(import_name, "import cancelled, retrying once");
                }
                CreateOutcome::ImportCancelled => {
                    self.state.pending_creation = false;
                    tracing::warn!(
                        import_name,
                        display_name,
                        "cancelled import, abandoning command"
                    );
                    return StepStatus::ImportAbandoned;
                }
            }
        }
    }

    /// Map a synchronous outcome to a step status, logging misses
    fn check_target(object_name: &str, outcome: OpOutcome) -> StepStatus {
        match outcome {
            OpOutcome::Done => StepStatus::Completed,
            OpOutcome::NotFound => {
                tracing::warn!(object_name, "target not found, continuing");
                StepStatus::TargetMissing
            }
        }
    }
}

impl<O: SceneOps> Iterator for Sequencer<'_, O> {
    type Item = StepNotice;

    fn next(&mut self) -> Option<StepNotice> {
        // Dispatch: inspect the next command, if any remain
        let cmd = self.script.get(self.state.current_index)?.clone();
        let status = self.dispatch(&cmd);

        // Advance
        let notice = StepNotice {
            index: self.state.current_index,
            kind: cmd.kind(),
            status,
        };
        self.state.current_index += 1;
        Some(notice)
    }
}

/// Summary of one completed run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunReport {
    /// One notice per command, in execution order
    pub notices: Vec<StepNotice>,
}

impl RunReport {
    /// Number of commands that executed against the scene
    pub fn completed(&self) -> usize {
        self.count(StepStatus::Completed)
    }

    /// Number of CREATEs abandoned after a cancelled retry
    pub fn abandoned(&self) -> usize {
        self.count(StepStatus::ImportAbandoned)
    }

    /// Number of commands skipped because their target was missing
    pub fn missing(&self) -> usize {
        self.count(StepStatus::TargetMissing)
    }

    /// Check whether every command completed
    pub fn is_clean(&self) -> bool {
        self.notices
            .iter()
            .all(|n| n.status == StepStatus::Completed)
    }

    fn count(&self, status: StepStatus) -> usize {
        self.notices.iter().filter(|n| n.status == status).count()
    }
}
