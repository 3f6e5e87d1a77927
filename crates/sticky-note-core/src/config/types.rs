//! Configuration type definitions.
//!
//! These types are deserialized from `~/.sticky-note/config.toml`.

use serde::{Deserialize, Serialize};

/// Main configuration loaded from the TOML config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StickyConfig {
    /// Text shown in the note itself
    #[serde(default)]
    pub note: NoteConfig,

    /// Window behaviour
    #[serde(default)]
    pub window: WindowConfig,
}

/// Text content of the note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteConfig {
    /// Title shown at the top of the note.
    #[serde(default = "super::defaults::default_title")]
    pub title: String,

    /// Placeholder shown in the empty input field.
    #[serde(default = "super::defaults::default_placeholder")]
    pub placeholder: String,
}

/// Floating window behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Keep the note floating above normal windows on every virtual
    /// desktop. When false the note is an ordinary window.
    /// Default: true.
    #[serde(default = "super::defaults::default_true")]
    pub always_on_top: bool,
}
