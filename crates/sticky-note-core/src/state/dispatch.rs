use tracing::{debug, info, warn};

use crate::errors::StickyError;
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;
use crate::tasks::{Task, TaskList};

/// Store implementation that owns the note's task list.
///
/// This is the only place the list is mutated. Readers get an immutable
/// snapshot through [`TaskStore::tasks`].
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: TaskList,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn remaining_count(&self) -> usize {
        self.tasks.remaining_count()
    }

    pub fn has_completed(&self) -> bool {
        self.tasks.iter().any(Task::is_completed)
    }

    fn delete(&mut self, indices: &[usize]) -> Result<Vec<Event>, DispatchError> {
        let removed = self.tasks.remove_at(indices)?;
        Ok(vec![Event::TasksDeleted {
            ids: removed.iter().map(Task::id).collect(),
        }])
    }
}

impl Store for TaskStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::SubmitTask { text } => self
                .tasks
                .add(&text)
                .map(|task| {
                    vec![Event::TaskAdded {
                        id: task.id(),
                        title: task.title().to_string(),
                    }]
                })
                .map_err(DispatchError::from),
            Command::ToggleTask { id } => self
                .tasks
                .toggle(id)
                .map(|completed| vec![Event::TaskToggled { id, completed }])
                .map_err(DispatchError::from),
            Command::DeleteTasks { indices } => self.delete(&indices),
            Command::ClearCompleted => {
                let indices = self.tasks.completed_indices();
                self.delete(&indices)
            }
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len(),
                task_count = self.tasks.len()
            ),
            Err(e) if e.is_user_error() => debug!(
                event = "core.state.dispatch_rejected",
                error = %e,
                error_code = e.error_code()
            ),
            Err(e) => warn!(
                event = "core.state.dispatch_failed",
                error = %e,
                error_code = e.error_code()
            ),
        }

        result
    }
}
