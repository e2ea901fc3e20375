//! Ordered, append-only command sequences.

use serde::{Deserialize, Serialize};

use crate::command::Command;

/// An ordered list of commands submitted to the server in one request.
///
/// Order is significant: it determines which decoded result belongs to
/// which command, so the list is append-only and never reordered or
/// deduplicated. A scenario is reusable across executions.
///
/// Serializes transparently as a JSON array of command objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Scenario {
    commands: Vec<Command>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the tail. Returns `&mut Self` for chaining.
    pub fn push(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<Command> for Scenario {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
