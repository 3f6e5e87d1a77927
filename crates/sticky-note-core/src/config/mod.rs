//! # Configuration System
//!
//! Optional TOML configuration for the sticky note.
//!
//! The config file lives at `~/.sticky-note/config.toml`. Every key is
//! optional; a missing file means built-in defaults. The window size is not
//! configurable.
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.sticky-note/config.toml
//! [note]
//! title = "Groceries"
//! placeholder = "Add item"
//!
//! [window]
//! always_on_top = false
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use loading::{config_path, load_config_file, load_or_default};
pub use types::{NoteConfig, StickyConfig, WindowConfig};

impl StickyConfig {
    /// Load the user config, falling back to defaults.
    ///
    /// See [`loading::load_or_default`] for details.
    pub fn load() -> Self {
        loading::load_or_default()
    }
}
