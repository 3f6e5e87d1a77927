//! Default implementations for configuration types.
//!
//! Also the helper functions used by serde `#[serde(default = "...")]`.

use crate::config::types::{NoteConfig, WindowConfig};

pub const DEFAULT_TITLE: &str = "📝 Sticky Note";
pub const DEFAULT_PLACEHOLDER: &str = "Enter new task";

pub fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

pub fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

pub fn default_true() -> bool {
    true
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            placeholder: default_placeholder(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            always_on_top: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::types::StickyConfig;

    #[test]
    fn test_default_config() {
        let config = StickyConfig::default();
        assert_eq!(config.note.title, "📝 Sticky Note");
        assert_eq!(config.note.placeholder, "Enter new task");
        assert!(config.window.always_on_top);
    }

    #[test]
    fn test_serde_defaults_match_default_impl() {
        let config: StickyConfig = toml::from_str("").unwrap();
        assert_eq!(config, StickyConfig::default());
    }
}
