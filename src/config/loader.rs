//! Configuration loading from file system

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::OverlayConfig;
use crate::error::{OverlayError, Result};
use crate::theme::ThemeMode;

/// Tilde-expanded location of the user config file
pub fn config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Load configuration from ~/.config/tag-overlay/config.json
///
/// Returns `OverlayConfig::default()` if the file is missing or invalid.
#[instrument(name = "load_config")]
pub fn load_config() -> OverlayConfig {
    load_config_from(&config_path())
}

/// Load configuration from an explicit path, falling back to defaults
pub fn load_config_from(path: &Path) -> OverlayConfig {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return OverlayConfig::default();
    }

    match try_load_config(path) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load config, using defaults");
            OverlayConfig::default()
        }
    }
}

/// Strict variant that reports why a config could not be used
pub fn try_load_config(path: &Path) -> Result<OverlayConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| OverlayError::Config(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| OverlayError::Config(format!("{}: {}", path.display(), e)))
}

/// Effective theme mode for a config
pub fn resolve_mode(config: &OverlayConfig) -> ThemeMode {
    config.appearance.resolve()
}
