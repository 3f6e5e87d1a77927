//! Task list component.
//!
//! Renders one row per task in display order: a toggle glyph, the title
//! (struck through and muted once completed), and a delete control.

use gpui::{Context, IntoElement, div, prelude::*, px, uniform_list};
use sticky_note_core::TaskId;

use crate::state::NoteState;
use crate::theme;
use crate::views::{NoteView, PressTarget, press_target};

const ROW_HEIGHT: f32 = 24.0;

/// Glyph for the completion toggle.
fn toggle_glyph(completed: bool) -> &'static str {
    if completed { "✔" } else { "○" }
}

/// Render the task list from a snapshot of the note state.
///
/// An empty list renders nothing so the background stays draggable.
pub fn render_task_list(state: &NoteState, cx: &mut Context<NoteView>) -> impl IntoElement {
    let rows: Vec<(TaskId, String, bool)> = state
        .tasks()
        .iter()
        .map(|t| (t.id(), t.title().to_string(), t.is_completed()))
        .collect();
    let item_count = rows.len();

    div().size_full().when(item_count > 0, |this| {
        this.child(
            uniform_list(
                "task-list",
                item_count,
                cx.processor(move |_view, range: std::ops::Range<usize>, _window, cx| {
                    range
                        .map(|ix| {
                            let (id, title, completed) = rows[ix].clone();

                            press_target(div().id(ix), PressTarget::TaskRow)
                                .group("task-row")
                                .w_full()
                                .h(px(ROW_HEIGHT))
                                .px(px(theme::SPACE_1))
                                .flex()
                                .items_center()
                                .gap(px(theme::SPACE_2))
                                .rounded(px(theme::RADIUS_SM))
                                .hover(|style| style.bg(theme::row_hover()))
                                .child(
                                    div()
                                        .id(("toggle", ix))
                                        .cursor_pointer()
                                        .text_size(px(theme::TEXT_BASE))
                                        .text_color(theme::text_white())
                                        .on_click(cx.listener(move |view, _, _, cx| {
                                            view.on_toggle_click(id, cx);
                                        }))
                                        .child(toggle_glyph(completed)),
                                )
                                .child(
                                    div()
                                        .flex_1()
                                        .overflow_hidden()
                                        .text_ellipsis()
                                        .whitespace_nowrap()
                                        .text_size(px(theme::TEXT_BASE))
                                        .text_color(if completed {
                                            theme::text_muted()
                                        } else {
                                            theme::text_white()
                                        })
                                        .when(completed, |this| this.line_through())
                                        .child(title),
                                )
                                .child(
                                    div()
                                        .id(("delete", ix))
                                        .cursor_pointer()
                                        .invisible()
                                        .group_hover("task-row", |style| style.visible())
                                        .text_size(px(theme::TEXT_SM))
                                        .text_color(theme::text_muted())
                                        .hover(|style| style.text_color(theme::ember()))
                                        .on_click(cx.listener(move |view, _, _, cx| {
                                            view.on_delete_click(ix, cx);
                                        }))
                                        .child("×"),
                                )
                        })
                        .collect()
                }),
            )
            .size_full(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_glyph() {
        assert_eq!(toggle_glyph(true), "✔");
        assert_eq!(toggle_glyph(false), "○");
    }
}
