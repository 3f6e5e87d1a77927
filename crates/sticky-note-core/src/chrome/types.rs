use crate::config::WindowConfig;

/// Fixed content width of the note, in logical pixels.
pub const WINDOW_WIDTH: f32 = 250.0;
/// Fixed content height of the note, in logical pixels.
pub const WINDOW_HEIGHT: f32 = 300.0;

/// How the note window should look and behave.
///
/// Applied when the window is first shown and again every time it becomes
/// the active window, since the OS may reset window styling on focus change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowChrome {
    pub width: f32,
    pub height: f32,
    /// No title bar and no minimize/zoom/close buttons.
    pub borderless: bool,
    /// Non-opaque window with a fully transparent fill.
    pub transparent: bool,
    /// Floating level above normal windows, joining every virtual desktop
    /// including full-screen spaces. The platform ties the two together.
    pub always_on_top: bool,
    /// Drag the window by pressing anywhere on its background.
    pub movable_by_background: bool,
    /// Clip content to the window bounds.
    pub clip_to_bounds: bool,
}

impl WindowChrome {
    pub fn from_config(config: &WindowConfig) -> Self {
        Self {
            always_on_top: config.always_on_top,
            ..Self::default()
        }
    }
}

impl Default for WindowChrome {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            borderless: true,
            transparent: true,
            always_on_top: true,
            movable_by_background: true,
            clip_to_bounds: true,
        }
    }
}

/// Why the window chrome is being (re)applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureReason {
    /// First show after launch.
    Launch,
    /// The window became the active window.
    Activated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chrome() {
        let chrome = WindowChrome::default();
        assert_eq!(chrome.width, 250.0);
        assert_eq!(chrome.height, 300.0);
        assert!(chrome.borderless);
        assert!(chrome.transparent);
        assert!(chrome.always_on_top);
        assert!(chrome.movable_by_background);
        assert!(chrome.clip_to_bounds);
    }

    #[test]
    fn test_from_config_keeps_fixed_size() {
        let config = WindowConfig {
            always_on_top: false,
        };
        let chrome = WindowChrome::from_config(&config);
        assert!(!chrome.always_on_top);
        assert_eq!(chrome.width, WINDOW_WIDTH);
        assert_eq!(chrome.height, WINDOW_HEIGHT);
        assert!(chrome.borderless);
    }
}
