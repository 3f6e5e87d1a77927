//! Floating window description and process lifecycle.
//!
//! The UI crate turns a [`WindowChrome`] into platform window options and
//! routes every exit path through a single [`Lifecycle`].

pub mod lifecycle;
pub mod types;

pub use lifecycle::{ExitTrigger, Lifecycle, QUIT_KEY};
pub use types::{ConfigureReason, WINDOW_HEIGHT, WINDOW_WIDTH, WindowChrome};
