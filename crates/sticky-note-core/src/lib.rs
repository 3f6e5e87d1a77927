//! sticky-note-core: Core library for the sticky-note widget
//!
//! Everything the widget knows that is not drawing pixels lives here, so it
//! can be exercised without opening a window.
//!
//! # Main Entry Points
//!
//! - [`tasks`] - The task model and the ordered task list
//! - [`state`] - Commands, events and the `Store` that applies them
//! - [`chrome`] - Floating window description and process lifecycle
//! - [`config`] - Configuration loading
//! - [`logging`] - Tracing subscriber setup

pub mod chrome;
pub mod config;
pub mod errors;
pub mod logging;
pub mod state;
pub mod tasks;

// Re-export commonly used types at crate root for convenience
pub use chrome::{ConfigureReason, ExitTrigger, Lifecycle, WindowChrome};
pub use config::StickyConfig;
pub use errors::{ConfigError, StickyError};
pub use state::{Command, DispatchError, Event, Store, TaskStore};
pub use tasks::{Task, TaskError, TaskId, TaskList};

pub use logging::init_logging;
