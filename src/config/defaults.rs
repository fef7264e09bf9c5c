//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Config file location (tilde-expanded at load time)
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/tag-overlay/config.json";

/// Theme override file location (tilde-expanded at load time)
pub const DEFAULT_THEME_PATH: &str = "~/.config/tag-overlay/theme.json";

/// Hot-reload the theme file by default
pub const DEFAULT_WATCH_THEME: bool = true;

/// Default panel size
pub const DEFAULT_PANEL_WIDTH: f32 = 420.0;
pub const DEFAULT_MAX_PANEL_HEIGHT: f32 = 320.0;

/// Fixed single-line row height
pub const DEFAULT_ROW_HEIGHT: f32 = 24.0;

/// Default grid column sizes
pub const DEFAULT_ICON_WIDTH: f32 = 16.0;
pub const DEFAULT_ALIAS_MAX_WIDTH: f32 = 160.0;
pub const DEFAULT_METRIC_MIN_WIDTH: f32 = 36.0;
pub const DEFAULT_CELL_GAP: f32 = 8.0;

/// Average glyph advance at the row font size
pub const DEFAULT_CHAR_WIDTH: f32 = 7.0;

/// Related-tags header alias block
pub const DEFAULT_HEADER_ALIAS_MAX_HEIGHT: f32 = 64.0;
pub const HEADER_ALIAS_LINE_HEIGHT: f32 = 16.0;
