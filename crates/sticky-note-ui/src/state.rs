//! Note state for the task list view.
//!
//! Holds the task store and the input field buffer. Kept free of gpui types
//! so the submit/clear rules can be tested directly.

use sticky_note_core::config::NoteConfig;
use sticky_note_core::{Command, Event, StickyError, Store, Task, TaskId, TaskStore};

/// Text typed into the new-task field.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    text: String,
}

impl InputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append typed text, dropping control characters.
    ///
    /// Returns true if anything was appended.
    pub fn push_str(&mut self, typed: &str) -> bool {
        let before = self.text.len();
        self.text.extend(typed.chars().filter(|c| !c.is_control()));
        self.text.len() != before
    }

    /// Remove the last character. Returns true if the text changed.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Everything the note view renders.
pub struct NoteState {
    store: TaskStore,
    input: InputState,
    note: NoteConfig,
}

impl NoteState {
    pub fn new(note: NoteConfig) -> Self {
        Self {
            store: TaskStore::new(),
            input: InputState::default(),
            note,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn title(&self) -> &str {
        &self.note.title
    }

    pub fn placeholder(&self) -> &str {
        &self.note.placeholder
    }

    pub fn remaining_count(&self) -> usize {
        self.store.remaining_count()
    }

    pub fn has_completed(&self) -> bool {
        self.store.has_completed()
    }

    /// Submit the input field as a new task.
    ///
    /// The field is cleared only when a task was added; blank input is left
    /// as typed.
    pub fn submit_input(&mut self) -> bool {
        let text = self.input.text().to_string();
        let added = self
            .apply(Command::SubmitTask { text })
            .is_some_and(|events| events.iter().any(Event::is_task_added));

        if added {
            self.input.clear();
        }
        added
    }

    pub fn toggle_task(&mut self, id: TaskId) {
        self.apply(Command::ToggleTask { id });
    }

    pub fn delete_tasks(&mut self, indices: Vec<usize>) {
        self.apply(Command::DeleteTasks { indices });
    }

    pub fn clear_completed(&mut self) {
        self.apply(Command::ClearCompleted);
    }

    /// Dispatch a command. Rejections are logged and never shown.
    fn apply(&mut self, cmd: Command) -> Option<Vec<Event>> {
        match self.store.dispatch(cmd) {
            Ok(events) => Some(events),
            Err(e) if e.is_user_error() => {
                tracing::debug!(event = "ui.note.command_ignored", error = %e);
                None
            }
            Err(e) => {
                tracing::warn!(
                    event = "ui.note.command_failed",
                    error = %e,
                    error_code = e.error_code()
                );
                None
            }
        }
    }
}
