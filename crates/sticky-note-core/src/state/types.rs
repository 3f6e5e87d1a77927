use serde::{Deserialize, Serialize};

use crate::tasks::TaskId;

/// All operations the view can ask the store to perform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Append a task from raw input text. The text is trimmed; blank text is rejected.
    SubmitTask { text: String },
    /// Flip the completion flag of a task.
    ToggleTask { id: TaskId },
    /// Remove the tasks at these display positions in a single update.
    DeleteTasks { indices: Vec<usize> },
    /// Remove every completed task.
    ClearCompleted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serde_roundtrip() {
        let cmd = Command::DeleteTasks {
            indices: vec![2, 0],
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, deserialized);
    }
}
