use crate::errors::StickyError;
use crate::tasks::types::TaskId;

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Task '{id}' not found")]
    NotFound { id: TaskId },

    #[error("Task index {index} out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl StickyError for TaskError {
    fn error_code(&self) -> &'static str {
        match self {
            TaskError::EmptyTitle => "TASK_EMPTY_TITLE",
            TaskError::NotFound { .. } => "TASK_NOT_FOUND",
            TaskError::IndexOutOfRange { .. } => "TASK_INDEX_OUT_OF_RANGE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, TaskError::EmptyTitle)
    }
}
