//! Configuration validation logic.

use crate::config::types::StickyConfig;
use crate::errors::ConfigError;

/// Validate a StickyConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Note title must not be blank
/// - Input placeholder must not be blank
pub fn validate_config(config: &StickyConfig) -> Result<(), ConfigError> {
    if config.note.title.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "note.title cannot be empty".to_string(),
        });
    }

    if config.note.placeholder.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "note.placeholder cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&StickyConfig::default()).is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut config = StickyConfig::default();
        config.note.title = "   ".to_string();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("note.title"));
    }

    #[test]
    fn test_blank_placeholder_rejected() {
        let mut config = StickyConfig::default();
        config.note.placeholder = String::new();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("note.placeholder"));
    }
}
