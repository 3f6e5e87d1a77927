//! Window controller.
//!
//! Turns the note's [`WindowChrome`] into a borderless floating window,
//! re-applies it whenever the window becomes active, and routes the three
//! exit paths (window closed, Escape, close button) into one termination.

use gpui::{
    App, AppContext, BorrowAppContext, Bounds, Global, KeyBinding, Window, WindowBackgroundAppearance,
    WindowBounds, WindowDecorations, WindowKind, WindowOptions, actions, px, size,
};
use sticky_note_core::chrome::{ExitTrigger, Lifecycle, QUIT_KEY};
use sticky_note_core::config::{NoteConfig, WindowConfig};
use sticky_note_core::{ConfigureReason, WindowChrome};
use tracing::{debug, info, warn};

use crate::views::NoteView;

actions!(sticky_note, [Quit]);

/// App-wide window state: the chrome to apply and the process lifecycle.
pub struct WindowController {
    chrome: WindowChrome,
    lifecycle: Lifecycle,
}

impl Global for WindowController {}

impl WindowController {
    pub fn chrome(&self) -> WindowChrome {
        self.chrome
    }
}

/// Install the controller, the Escape shortcut and the window-closed hook.
///
/// Called once at startup; the subscriptions live for the whole process.
pub fn install(config: &WindowConfig, cx: &mut App) {
    let chrome = WindowChrome::from_config(config);

    cx.set_global(WindowController {
        chrome,
        lifecycle: Lifecycle::Running,
    });

    // Bindings are matched before any element's key handler, so Escape
    // never reaches the input field.
    cx.bind_keys([KeyBinding::new(QUIT_KEY, Quit, None)]);
    cx.on_action(|_: &Quit, cx: &mut App| terminate(ExitTrigger::EscapeKey, cx));

    cx.on_window_closed(|cx| terminate(ExitTrigger::WindowClosed, cx))
        .detach();

    debug!(event = "ui.window.controller_installed", chrome = ?chrome);
}

/// Open the note window and apply its chrome.
pub fn open_note_window(note: NoteConfig, cx: &mut App) {
    let chrome = cx.global::<WindowController>().chrome();

    let handle = cx
        .open_window(window_options(&chrome, cx), |window, cx| {
            cx.new(|cx| NoteView::new(note, window, cx))
        })
        .expect("Failed to open note window");

    if let Err(e) = handle.update(cx, |_, window, _| {
        configure(window, &chrome, ConfigureReason::Launch);
    }) {
        warn!(event = "ui.window.launch_configure_failed", error = ?e);
    }

    cx.activate(true);
}

/// Re-apply the runtime-adjustable parts of the chrome.
///
/// Style, level and workspace behaviour are fixed when the window is
/// created; size and background can drift and are set again here.
pub fn configure(window: &mut Window, chrome: &WindowChrome, reason: ConfigureReason) {
    window.resize(size(px(chrome.width), px(chrome.height)));
    window.set_background_appearance(background_appearance(chrome));

    debug!(
        event = "ui.window.configured",
        reason = ?reason,
        width = chrome.width,
        height = chrome.height
    );
}

/// End the process. Only the first trigger does anything.
pub fn terminate(trigger: ExitTrigger, cx: &mut App) {
    let transitioned = if cx.has_global::<WindowController>() {
        cx.update_global::<WindowController, _>(|controller, _| {
            controller.lifecycle.terminate(trigger)
        })
    } else {
        true
    };

    if transitioned {
        info!(event = "ui.app.terminating", trigger = trigger.as_str());
        cx.quit();
    }
}

fn window_options(chrome: &WindowChrome, cx: &App) -> WindowOptions {
    let bounds = Bounds::centered(None, size(px(chrome.width), px(chrome.height)), cx);

    WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: None,
        focus: true,
        show: true,
        kind: window_kind(chrome),
        is_movable: true,
        is_resizable: false,
        window_background: background_appearance(chrome),
        window_decorations: chrome.borderless.then_some(WindowDecorations::Client),
        ..Default::default()
    }
}

fn background_appearance(chrome: &WindowChrome) -> WindowBackgroundAppearance {
    if chrome.transparent {
        WindowBackgroundAppearance::Transparent
    } else {
        WindowBackgroundAppearance::Opaque
    }
}

/// Pop-up windows float above normal ones and join every space.
fn window_kind(chrome: &WindowChrome) -> WindowKind {
    if chrome.always_on_top {
        WindowKind::PopUp
    } else {
        WindowKind::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_note_is_popup() {
        let chrome = WindowChrome::default();
        assert!(matches!(window_kind(&chrome), WindowKind::PopUp));
    }

    #[test]
    fn test_always_on_top_off_gives_normal_window() {
        let chrome = WindowChrome::from_config(&WindowConfig {
            always_on_top: false,
        });
        assert!(matches!(window_kind(&chrome), WindowKind::Normal));
    }

    #[test]
    fn test_background_appearance() {
        let transparent = WindowChrome::default();
        assert!(matches!(
            background_appearance(&transparent),
            WindowBackgroundAppearance::Transparent
        ));

        let opaque = WindowChrome {
            transparent: false,
            ..WindowChrome::default()
        };
        assert!(matches!(
            background_appearance(&opaque),
            WindowBackgroundAppearance::Opaque
        ));
    }
}
