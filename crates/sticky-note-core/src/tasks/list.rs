use std::collections::BTreeSet;

use tracing::debug;

use super::errors::TaskError;
use super::types::{Task, TaskId};

/// Ordered, in-memory list of tasks.
///
/// New tasks append to the end. There is no sorting or grouping; the only
/// way the relative order of two tasks changes is that one of them is removed.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in display order.
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task built from `text` with surrounding whitespace trimmed.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::EmptyTitle` if nothing is left after trimming.
    pub fn add(&mut self, text: &str) -> Result<&Task, TaskError> {
        let title = text.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        self.tasks.push(Task::new(title.to_string()));
        let index = self.tasks.len() - 1;
        Ok(&self.tasks[index])
    }

    /// Flip completion of the task with `id`, returning the new value.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id() == id)
            .map(Task::toggle)
            .ok_or(TaskError::NotFound { id })
    }

    /// Remove every task at the given display positions in one update.
    ///
    /// Indices are a set: order and duplicates do not matter, and every
    /// index refers to the list as it was before the call. Validation
    /// happens up front, so an out-of-range index leaves the list untouched.
    ///
    /// Returns the removed tasks in display order.
    pub fn remove_at(&mut self, indices: &[usize]) -> Result<Vec<Task>, TaskError> {
        let positions: BTreeSet<usize> = indices.iter().copied().collect();

        if let Some(&index) = positions.last()
            && index >= self.tasks.len()
        {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }

        let mut removed = Vec::with_capacity(positions.len());
        let mut position = 0;
        self.tasks.retain(|task| {
            let keep = !positions.contains(&position);
            if !keep {
                removed.push(task.clone());
            }
            position += 1;
            keep
        });

        debug!(
            event = "core.tasks.removed",
            removed_count = removed.len(),
            remaining = self.tasks.len()
        );

        Ok(removed)
    }

    /// Display positions of every completed task, ascending.
    pub fn completed_indices(&self) -> Vec<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_completed())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of tasks not yet completed.
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_completed()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(titles: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for title in titles {
            list.add(title).unwrap();
        }
        list
    }

    fn titles(list: &TaskList) -> Vec<&str> {
        list.iter().map(Task::title).collect()
    }

    #[test]
    fn test_add_appends_trimmed_title() {
        let mut list = TaskList::new();
        let task = list.add("  Buy milk \t").unwrap();
        assert_eq!(task.title(), "Buy milk");
        assert!(!task.is_completed());

        list.add("Walk dog").unwrap();
        assert_eq!(titles(&list), vec!["Buy milk", "Walk dog"]);
    }

    #[test]
    fn test_add_keeps_interior_whitespace() {
        let mut list = TaskList::new();
        let task = list.add(" call  mom ").unwrap();
        assert_eq!(task.title(), "call  mom");
    }

    #[test]
    fn test_add_rejects_whitespace_only() {
        let mut list = TaskList::new();
        for input in ["", " ", "   ", "\t", "\n \t "] {
            let result = list.add(input);
            assert!(matches!(result, Err(TaskError::EmptyTitle)), "{input:?}");
        }
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut list = list_of(&["Buy milk"]);
        let id = list.as_slice()[0].id();

        assert!(list.toggle(id).unwrap());
        assert!(!list.toggle(id).unwrap());
        assert!(!list.as_slice()[0].is_completed());
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = list_of(&["Buy milk"]);
        let result = list.toggle(TaskId::new());
        assert!(matches!(result, Err(TaskError::NotFound { .. })));
        assert!(!list.as_slice()[0].is_completed());
    }

    #[test]
    fn test_remove_single_index_preserves_order() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        let removed = list.remove_at(&[1]).unwrap();

        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].title(), "b");
        assert_eq!(titles(&list), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_set_ignores_order_and_duplicates() {
        let mut forward = list_of(&["a", "b", "c", "d", "e"]);
        let mut backward = forward.clone();

        let removed = forward.remove_at(&[0, 2, 4]).unwrap();
        backward.remove_at(&[4, 0, 2, 2]).unwrap();

        assert_eq!(
            removed.iter().map(Task::title).collect::<Vec<_>>(),
            vec!["a", "c", "e"]
        );
        assert_eq!(titles(&forward), vec!["b", "d"]);
        assert_eq!(titles(&backward), vec!["b", "d"]);
    }

    #[test]
    fn test_remove_adjacent_indices_no_shift() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        list.remove_at(&[1, 2]).unwrap();
        assert_eq!(titles(&list), vec!["a", "d"]);
    }

    #[test]
    fn test_remove_out_of_range_is_atomic() {
        let mut list = list_of(&["a", "b"]);
        let result = list.remove_at(&[0, 2]);

        assert!(matches!(
            result,
            Err(TaskError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert_eq!(titles(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_empty_set_is_noop() {
        let mut list = list_of(&["a"]);
        assert!(list.remove_at(&[]).unwrap().is_empty());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_completed_indices_and_remaining() {
        let mut list = list_of(&["a", "b", "c"]);
        let ids: Vec<TaskId> = list.iter().map(Task::id).collect();
        list.toggle(ids[0]).unwrap();
        list.toggle(ids[2]).unwrap();

        assert_eq!(list.completed_indices(), vec![0, 2]);
        assert_eq!(list.remaining_count(), 1);
    }
}
