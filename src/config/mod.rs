//! Configuration module - overlay settings
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.config/tag-overlay/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (OverlayConfig, Appearance)
//! - `loader` - File system loading and parsing

pub mod defaults;
mod loader;
mod types;

// Re-export types that are used externally
pub use types::{Appearance, OverlayConfig};

// Re-export loader
pub use loader::{config_path, load_config, load_config_from, resolve_mode, try_load_config};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
