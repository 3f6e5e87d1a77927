//! New-task input field.
//!
//! Keystrokes are captured by the root view; this only draws the buffer.

use gpui::{IntoElement, div, prelude::*, px};

use crate::state::NoteState;
use crate::theme;
use crate::views::{PressTarget, press_target};

/// Render the input field with placeholder or typed text and a caret when focused.
pub fn render_input_field(state: &NoteState, has_focus: bool) -> impl IntoElement {
    let text = state.input().text();
    let is_empty = state.input().is_empty();

    let content = if is_empty {
        if has_focus {
            "|".to_string()
        } else {
            state.placeholder().to_string()
        }
    } else if has_focus {
        format!("{}|", text)
    } else {
        text.to_string()
    };

    press_target(div(), PressTarget::InputField)
        .w_full()
        .px(px(theme::SPACE_2))
        .py(px(theme::SPACE_1))
        .min_h(px(26.0))
        .bg(theme::input_background())
        .rounded(px(theme::RADIUS_MD))
        .border_1()
        .border_color(if has_focus {
            theme::input_border_focused()
        } else {
            theme::input_border()
        })
        .text_size(px(theme::TEXT_BASE))
        .text_color(if is_empty && !has_focus {
            theme::text_placeholder()
        } else {
            theme::text_white()
        })
        .overflow_hidden()
        .child(content)
}
