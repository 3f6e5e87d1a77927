/// Key name that quits the note from anywhere in the window.
pub const QUIT_KEY: &str = "escape";

/// The three independent ways the note can end the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTrigger {
    /// The window was closed.
    WindowClosed,
    /// Escape was pressed.
    EscapeKey,
    /// The close control drawn inside the note was pressed.
    CloseButton,
}

impl ExitTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitTrigger::WindowClosed => "window_closed",
            ExitTrigger::EscapeKey => "escape_key",
            ExitTrigger::CloseButton => "close_button",
        }
    }
}

/// Process lifecycle: Running until the first exit trigger, then Terminated.
///
/// There is no transition back to Running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Running,
    Terminated {
        trigger: ExitTrigger,
    },
}

impl Lifecycle {
    /// Move to Terminated.
    ///
    /// Returns true only for the call that performed the transition; the
    /// trigger recorded is the first one seen.
    pub fn terminate(&mut self, trigger: ExitTrigger) -> bool {
        match self {
            Lifecycle::Running => {
                *self = Lifecycle::Terminated { trigger };
                true
            }
            Lifecycle::Terminated { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_trigger_terminates() {
        for trigger in [
            ExitTrigger::WindowClosed,
            ExitTrigger::EscapeKey,
            ExitTrigger::CloseButton,
        ] {
            let mut lifecycle = Lifecycle::default();
            assert_eq!(lifecycle, Lifecycle::Running);
            assert!(lifecycle.terminate(trigger));
            assert_eq!(lifecycle, Lifecycle::Terminated { trigger });
        }
    }

    #[test]
    fn test_terminate_is_one_way() {
        let mut lifecycle = Lifecycle::Running;
        assert!(lifecycle.terminate(ExitTrigger::CloseButton));
        // quitting closes the window, which reports again
        assert!(!lifecycle.terminate(ExitTrigger::WindowClosed));
        assert_eq!(
            lifecycle,
            Lifecycle::Terminated {
                trigger: ExitTrigger::CloseButton
            }
        );
    }

    #[test]
    fn test_trigger_names() {
        assert_eq!(ExitTrigger::WindowClosed.as_str(), "window_closed");
        assert_eq!(ExitTrigger::EscapeKey.as_str(), "escape_key");
        assert_eq!(ExitTrigger::CloseButton.as_str(), "close_button");
    }
}
