use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Process-unique task identifier.
///
/// Only used to key UI updates; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item.
///
/// The title is fixed at creation; completion is the only mutable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    is_completed: bool,
}

impl Task {
    /// Build a task from an already-validated title.
    pub(crate) fn new(title: String) -> Self {
        Self {
            id: TaskId::new(),
            title,
            is_completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Flip completion and return the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }
}
