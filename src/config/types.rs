//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_THEME_PATH, DEFAULT_WATCH_THEME};
use crate::layout::LayoutConfig;
use crate::theme::{detect_system_appearance, ThemeMode};

/// Requested appearance. `System` follows the OS setting at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    System,
    Light,
    Dark,
}

impl Appearance {
    pub fn resolve(&self) -> ThemeMode {
        match self {
            Self::System => detect_system_appearance(),
            Self::Light => ThemeMode::Light,
            Self::Dark => ThemeMode::Dark,
        }
    }
}

impl std::str::FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" | "auto" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown appearance '{}'", other)),
        }
    }
}

// ============================================
// MAIN CONFIG
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayConfig {
    #[serde(default)]
    pub appearance: Appearance,
    /// Theme override file (default: ~/.config/tag-overlay/theme.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_path: Option<String>,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default = "default_watch_theme")]
    pub watch_theme: bool,
}

fn default_watch_theme() -> bool {
    DEFAULT_WATCH_THEME
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            appearance: Appearance::default(),
            theme_path: None, // Will use DEFAULT_THEME_PATH via getter
            layout: LayoutConfig::default(),
            watch_theme: DEFAULT_WATCH_THEME,
        }
    }
}

impl OverlayConfig {
    /// Returns the tilde-expanded theme file path
    pub fn get_theme_path(&self) -> PathBuf {
        let raw = self.theme_path.as_deref().unwrap_or(DEFAULT_THEME_PATH);
        PathBuf::from(shellexpand::tilde(raw).as_ref())
    }

    /// Returns the layout with invalid values replaced by defaults
    pub fn get_layout(&self) -> LayoutConfig {
        self.layout.sanitized()
    }
}
