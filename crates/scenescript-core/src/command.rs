//! Command types representing all scenescript instructions
//!
//! A `Command` is one typed instruction parsed from a script line. Commands
//! are collected into a `CommandScript` and replayed in source order by the
//! sequencer in `scenescript-engine`.

use serde::{Deserialize, Serialize};

/// One typed script instruction
///
/// Numeric fields are guaranteed finite by the parser; a line whose numbers
/// parse to NaN or infinity is dropped with a warning instead of producing
/// a `Command`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Create an object of type `import_name`, named `display_name`, at (x, y, z)
    ///
    /// Creation may suspend the sequencer: resolving the object type can
    /// require a user-driven model import.
    Create {
        import_name: String,
        display_name: String,
        x: f32,
        y: f32,
        z: f32,
    },

    /// Set a named cell on an object to a formula
    ///
    /// The formula is opaque text; it is stored, never evaluated here.
    SetObjCell {
        object_name: String,
        cell_name: String,
        formula: String,
    },

    /// Move an object along a named path over a duration
    Move {
        object_name: String,
        path_name: String,
        duration_secs: f32,
        /// Optional fractional starting position along the path
        start_position: Option<f32>,
    },

    /// Destroy the object with the given name
    Destroy { object_name: String },

    /// Animate a cell value from `start_value` to `end_value` over a duration
    DynUpdateCell {
        object_name: String,
        cell_name: String,
        duration_secs: f32,
        start_value: f32,
        end_value: f32,
        /// Unit label for the cell value; `None` means "no unit"
        unit: Option<String>,
    },
}

impl Command {
    /// Get the kind of this command
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Create { .. } => CommandKind::Create,
            Command::SetObjCell { .. } => CommandKind::SetObjCell,
            Command::Move { .. } => CommandKind::Move,
            Command::Destroy { .. } => CommandKind::Destroy,
            Command::DynUpdateCell { .. } => CommandKind::DynUpdateCell,
        }
    }
}

/// Discriminant-only view of a `Command`, used in notices and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    Create,
    SetObjCell,
    Move,
    Destroy,
    DynUpdateCell,
}

impl CommandKind {
    /// The script keyword that produces this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandKind::Create => "CREATE",
            CommandKind::SetObjCell => "SETOBJCELL",
            CommandKind::Move => "MOVE",
            CommandKind::Destroy => "DESTROY",
            CommandKind::DynUpdateCell => "DYNUPDATECELL",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Ordered sequence of commands from one script
///
/// Insertion order is execution order is source line order. Blank lines in
/// the source are skipped entirely and never shift an index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandScript {
    commands: Vec<Command>,
}

impl CommandScript {
    /// Create a new empty script
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command, preserving source order
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Get the command at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    /// Number of commands in the script
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the script has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the commands in execution order
    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// View the commands as a slice
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl FromIterator<Command> for CommandScript {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CommandScript {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
