//! Configuration loading.
//!
//! There is a single config source, `~/.sticky-note/config.toml`. A broken
//! config never stops the note from launching: problems are logged and the
//! built-in defaults are used instead.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::types::StickyConfig;
use crate::config::validation::validate_config;
use crate::errors::{ConfigError, StickyError};

/// Location of the user config file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home_dir.join(".sticky-note").join("config.toml"))
}

/// Load and validate a configuration file.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or fails
/// validation.
pub fn load_config_file(path: &Path) -> Result<Option<StickyConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let config: StickyConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    validate_config(&config)?;
    Ok(Some(config))
}

/// Load the user config from [`config_path`], falling back to defaults.
pub fn load_or_default() -> StickyConfig {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            warn!(
                event = "core.config.path_unavailable",
                error = %e,
                error_code = e.error_code(),
                "Using default configuration"
            );
            return StickyConfig::default();
        }
    };

    load_from(&path)
}

fn load_from(path: &Path) -> StickyConfig {
    match load_config_file(path) {
        Ok(Some(config)) => {
            info!(event = "core.config.loaded", path = %path.display());
            config
        }
        Ok(None) => {
            debug!(event = "core.config.not_found", path = %path.display());
            StickyConfig::default()
        }
        Err(e) => {
            warn!(
                event = "core.config.load_failed",
                path = %path.display(),
                error = %e,
                error_code = e.error_code(),
                "Using default configuration"
            );
            StickyConfig::default()
        }
    }
}
