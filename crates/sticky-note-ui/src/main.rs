//! sticky-note: floating to-do widget
//!
//! A borderless, translucent note that stays above other windows and holds
//! a single in-memory task list. Escape, the close control, or closing the
//! window quits.

use gpui::{App, Application};
use sticky_note_core::StickyConfig;

mod state;
mod theme;
mod views;
mod window;

fn main() {
    sticky_note_core::init_logging(false);

    let config = StickyConfig::load();
    tracing::info!(
        event = "ui.app.starting",
        always_on_top = config.window.always_on_top
    );

    Application::new().run(move |cx: &mut App| {
        window::install(&config.window, cx);
        window::open_note_window(config.note, cx);
    });
}
