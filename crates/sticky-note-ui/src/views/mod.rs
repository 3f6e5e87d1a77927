//! View components for the sticky note.
//!
//! - `note_view` - Root view: title, input, list, footer and close control
//! - `input_field` - New-task input field
//! - `task_list` - Scrolling list of task rows

use gpui::{InteractiveElement, MouseButton};

pub mod input_field;
pub mod note_view;
pub mod task_list;

pub use note_view::NoteView;

/// Where a left press lands inside the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    Background,
    InputField,
    TaskRow,
    ClearCompleted,
    CloseButton,
}

impl PressTarget {
    /// Only the bare background moves the window.
    pub fn drags_window(self) -> bool {
        matches!(self, PressTarget::Background)
    }
}

/// Keep presses on `target` from reaching the root drag handler.
pub fn press_target<E: InteractiveElement>(element: E, target: PressTarget) -> E {
    if target.drags_window() {
        return element;
    }
    element.on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_background_drags_window() {
        assert!(PressTarget::Background.drags_window());
        for control in [
            PressTarget::InputField,
            PressTarget::TaskRow,
            PressTarget::ClearCompleted,
            PressTarget::CloseButton,
        ] {
            assert!(!control.drags_window(), "{control:?}");
        }
    }
}
