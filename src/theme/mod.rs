//! Theme module - category colors and panel tokens
//!
//! This module provides:
//! - Built-in light/dark token tables for both tag taxonomies
//! - Pure `(taxonomy, category, mode) -> color` resolution with `unknown` fallback
//! - Theme file overrides (JSON) and system appearance detection
//! - A process-wide theme store with file-watch hot reload
//!
//! # Module Structure
//!
//! - `hex_color` - Hex color parsing and serialization
//! - `types` - Theme struct definitions and loading
//! - `palette` - Built-in token tables
//! - `resolver` - Category color resolution
//! - `helpers` - gpui color bundles for render closures
//! - `service` - Global theme store and watcher service

mod helpers;
pub mod hex_color;
mod palette;
pub mod resolver;
pub mod service;
mod types;

pub use helpers::PanelColors;
pub use hex_color::HexColor;
pub use resolver::{resolve, resolve_disabled, resolve_row_color, resolve_tokens};
pub use service::{current_theme, set_current_theme};
pub use types::{
    detect_system_appearance, load_theme, load_theme_or_default, parse_theme, ModeOverrides,
    ModeTokens, RowOpacity, TagTheme, TaxonomyPalette, ThemeFile, ThemeMode,
};

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
