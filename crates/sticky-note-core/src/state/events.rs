use serde::{Deserialize, Serialize};

use crate::tasks::TaskId;

/// State changes produced by a successful dispatch.
///
/// Each variant describes _what happened_. Rejected commands use the
/// `Result` error channel, not the event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A task was appended to the end of the list.
    TaskAdded { id: TaskId, title: String },
    /// A task's completion flag changed.
    TaskToggled { id: TaskId, completed: bool },
    /// Tasks were removed. `ids` is in former display order and may be empty.
    TasksDeleted { ids: Vec<TaskId> },
}

impl Event {
    /// True for the event that should clear the input field.
    pub fn is_task_added(&self) -> bool {
        matches!(self, Event::TaskAdded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let event = Event::TaskAdded {
            id: TaskId::new(),
            title: "Buy milk".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_is_task_added() {
        let id = TaskId::new();
        assert!(
            Event::TaskAdded {
                id,
                title: "x".to_string()
            }
            .is_task_added()
        );
        assert!(!Event::TaskToggled { id, completed: true }.is_task_added());
        assert!(!Event::TasksDeleted { ids: vec![id] }.is_task_added());
    }
}
