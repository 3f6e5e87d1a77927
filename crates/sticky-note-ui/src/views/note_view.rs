//! Root view of the sticky note.
//!
//! Owns the note state and the window focus. Composes the title, input
//! field, task list, footer and the close control drawn in the top-right
//! corner. Pressing on any background area drags the window.

use gpui::{
    App, Context, FocusHandle, Focusable, FontWeight, IntoElement, KeyDownEvent, MouseButton,
    MouseDownEvent, Render, Subscription, Window, div, prelude::*, px,
};
use sticky_note_core::chrome::ExitTrigger;
use sticky_note_core::config::NoteConfig;
use sticky_note_core::{ConfigureReason, TaskId, WindowChrome};

use crate::state::NoteState;
use crate::theme;
use crate::views::{PressTarget, input_field, press_target, task_list};
use crate::window::{self, WindowController};

pub struct NoteView {
    state: NoteState,
    focus_handle: FocusHandle,
    chrome: WindowChrome,
    /// Re-applies window chrome on activation. Must be stored to stay registered.
    _activation: Subscription,
}

impl NoteView {
    pub fn new(note: NoteConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let chrome = cx.global::<WindowController>().chrome();
        let activation = cx.observe_window_activation(window, move |view, window, _cx| {
            if window.is_window_active() {
                window::configure(window, &chrome, ConfigureReason::Activated);
                window.focus(&view.focus_handle);
            }
        });

        Self {
            state: NoteState::new(note),
            focus_handle,
            chrome,
            _activation: activation,
        }
    }

    fn on_submit(&mut self, cx: &mut Context<Self>) {
        if self.state.submit_input() {
            tracing::info!(
                event = "ui.note.task_submitted",
                task_count = self.state.tasks().len()
            );
            cx.notify();
        }
    }

    pub fn on_toggle_click(&mut self, id: TaskId, cx: &mut Context<Self>) {
        tracing::info!(event = "ui.note.task_toggled", task_id = %id);
        self.state.toggle_task(id);
        cx.notify();
    }

    pub fn on_delete_click(&mut self, index: usize, cx: &mut Context<Self>) {
        tracing::info!(event = "ui.note.task_deleted", index = index);
        self.state.delete_tasks(vec![index]);
        cx.notify();
    }

    fn on_clear_completed_click(&mut self, cx: &mut Context<Self>) {
        tracing::info!(event = "ui.note.completed_cleared");
        self.state.clear_completed();
        cx.notify();
    }

    fn on_close_click(&mut self, cx: &mut Context<Self>) {
        window::terminate(ExitTrigger::CloseButton, cx);
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let key_str = event.keystroke.key.to_string();
        let input = self.state.input_mut();

        match key_str.as_str() {
            "backspace" => {
                if input.backspace() {
                    cx.notify();
                }
            }
            "enter" => {
                self.on_submit(cx);
            }
            "space" => {
                input.push_str(" ");
                cx.notify();
            }
            _ => {
                let modifiers = &event.keystroke.modifiers;
                if modifiers.platform || modifiers.control {
                    cx.propagate();
                    return;
                }
                if let Some(typed) = event.keystroke.key_char.as_deref()
                    && input.push_str(typed)
                {
                    cx.notify();
                }
            }
        }
    }
}

impl Focusable for NoteView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for NoteView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let has_focus = self.focus_handle.is_focused(window);
        let remaining = self.state.remaining_count();
        let has_tasks = !self.state.tasks().is_empty();
        let has_completed = self.state.has_completed();

        div()
            .id("note-root")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .when(self.chrome.movable_by_background, |this| {
                this.on_mouse_down(
                    MouseButton::Left,
                    |_: &MouseDownEvent, window: &mut Window, _: &mut App| {
                        window.start_window_move();
                    },
                )
            })
            .relative()
            .size_full()
            .when(self.chrome.clip_to_bounds, |this| this.overflow_hidden())
            .bg(theme::transparent())
            .child(
                div()
                    .size_full()
                    .p(px(theme::SPACE_4))
                    .flex()
                    .flex_col()
                    .gap(px(theme::SPACE_2))
                    // Title
                    .child(
                        div()
                            .pr(px(theme::CLOSE_BUTTON_SIZE + theme::SPACE_2))
                            .text_size(px(theme::TEXT_LG))
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme::text_white())
                            .child(self.state.title().to_string()),
                    )
                    .child(input_field::render_input_field(&self.state, has_focus))
                    .child(
                        div()
                            .flex_1()
                            .overflow_hidden()
                            .child(task_list::render_task_list(&self.state, cx)),
                    )
                    // Footer
                    .when(has_tasks, |this| {
                        this.child(
                            div()
                                .flex()
                                .justify_between()
                                .items_center()
                                .text_size(px(theme::TEXT_XS))
                                .text_color(theme::text_muted())
                                .child(format!("{} left", remaining))
                                .when(has_completed, |footer| {
                                    footer.child(
                                        press_target(
                                            div().id("clear-completed-btn"),
                                            PressTarget::ClearCompleted,
                                        )
                                        .cursor_pointer()
                                        .hover(|style| style.text_color(theme::text_white()))
                                        .on_click(cx.listener(|view, _, _, cx| {
                                            view.on_clear_completed_click(cx);
                                        }))
                                        .child("Clear done"),
                                    )
                                }),
                        )
                    }),
            )
            // Close control, drawn by the note itself since the window has no title bar
            .child(
                press_target(div().id("close-btn"), PressTarget::CloseButton)
                    .absolute()
                    .top(px(theme::SPACE_2))
                    .right(px(theme::SPACE_2))
                    .size(px(theme::CLOSE_BUTTON_SIZE))
                    .rounded_full()
                    .bg(theme::ember())
                    .flex()
                    .items_center()
                    .justify_center()
                    .cursor_pointer()
                    .text_size(px(theme::TEXT_XS))
                    .text_color(theme::text_white())
                    .on_click(cx.listener(|view, _, _, cx| {
                        view.on_close_click(cx);
                    }))
                    .child("✕"),
            )
    }
}
