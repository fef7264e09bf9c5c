use super::defaults::*;
use super::*;
use crate::layout::LayoutConfig;
use crate::theme::ThemeMode;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = OverlayConfig::default();
    assert_eq!(config.appearance, Appearance::System);
    assert_eq!(config.theme_path, None);
    assert_eq!(config.layout, LayoutConfig::default());
    assert_eq!(config.watch_theme, DEFAULT_WATCH_THEME);
}

#[test]
fn test_layout_defaults() {
    let layout = LayoutConfig::default();
    assert_eq!(layout.panel_width, 420.0);
    assert_eq!(layout.max_panel_height, 320.0);
    assert_eq!(layout.row_height, 24.0);
    assert_eq!(layout.alias_max_width, 160.0);
}

#[test]
fn test_config_serialization() {
    let config = OverlayConfig {
        appearance: Appearance::Light,
        theme_path: Some("/tmp/theme.json".to_string()),
        layout: LayoutConfig {
            panel_width: 500.0,
            ..LayoutConfig::default()
        },
        watch_theme: false,
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"themePath\""));
    assert!(json.contains("\"watchTheme\""));

    let deserialized: OverlayConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn test_empty_object_uses_defaults() {
    let config: OverlayConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, OverlayConfig::default());
}

#[test]
fn test_partial_layout_keeps_other_defaults() {
    let config: OverlayConfig =
        serde_json::from_str(r#"{ "appearance": "dark", "layout": { "rowHeight": 28 } }"#).unwrap();
    assert_eq!(config.appearance, Appearance::Dark);
    assert_eq!(config.layout.row_height, 28.0);
    assert_eq!(config.layout.panel_width, DEFAULT_PANEL_WIDTH);
}

#[test]
fn test_resolve_mode_explicit() {
    let mut config = OverlayConfig::default();
    config.appearance = Appearance::Light;
    assert_eq!(resolve_mode(&config), ThemeMode::Light);
    config.appearance = Appearance::Dark;
    assert_eq!(resolve_mode(&config), ThemeMode::Dark);
}

#[test]
fn test_appearance_from_str() {
    assert_eq!("Light".parse::<Appearance>(), Ok(Appearance::Light));
    assert_eq!("auto".parse::<Appearance>(), Ok(Appearance::System));
    assert!("sepia".parse::<Appearance>().is_err());
}

#[test]
fn test_theme_path_expansion() {
    let config = OverlayConfig::default();
    let path = config.get_theme_path();
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with("tag-overlay/theme.json"));

    let custom = OverlayConfig {
        theme_path: Some("/etc/theme.json".to_string()),
        ..OverlayConfig::default()
    };
    assert_eq!(custom.get_theme_path(), std::path::PathBuf::from("/etc/theme.json"));
}

#[test]
fn test_get_layout_sanitizes() {
    let config = OverlayConfig {
        layout: LayoutConfig {
            char_width: -1.0,
            ..LayoutConfig::default()
        },
        ..OverlayConfig::default()
    };
    assert_eq!(config.get_layout().char_width, DEFAULT_CHAR_WIDTH);
}

#[test]
fn test_load_config_from_missing_file() {
    let config = load_config_from(std::path::Path::new("/nonexistent/config.json"));
    assert_eq!(config, OverlayConfig::default());
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "appearance": "light", "watchTheme": false }}"#).unwrap();

    let config = load_config_from(file.path());
    assert_eq!(config.appearance, Appearance::Light);
    assert!(!config.watch_theme);
}

#[test]
fn test_malformed_config_falls_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ appearance: ").unwrap();

    assert_eq!(load_config_from(file.path()), OverlayConfig::default());
    let err = try_load_config(file.path()).unwrap_err();
    assert!(matches!(err, crate::error::OverlayError::Config(_)));
}
