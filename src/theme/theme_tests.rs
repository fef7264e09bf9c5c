use super::*;
use crate::model::{RowViewModel, TagCategory, Taxonomy};
use std::io::Write;

#[test]
fn test_every_triple_resolves_deterministically() {
    let theme = TagTheme::default();
    for taxonomy in Taxonomy::ALL {
        for category in TagCategory::ALL {
            for mode in ThemeMode::ALL {
                let first = resolve(&theme, taxonomy, category, mode);
                let second = resolve(&theme, taxonomy, category, mode);
                assert_eq!(first, second, "{taxonomy}/{category}/{mode}");
            }
        }
    }
}

#[test]
fn test_artist_light_and_dark() {
    let theme = TagTheme::default();
    let light = resolve(&theme, Taxonomy::Danbooru, TagCategory::Artist, ThemeMode::Light);
    let dark = resolve(&theme, Taxonomy::Danbooru, TagCategory::Artist, ThemeMode::Dark);
    assert_eq!(light, 0xdc2626); // red-600
    assert_eq!(dark, 0xf87171); // red-400
    assert_ne!(light, dark);
}

#[test]
fn test_unsupported_pair_falls_back_to_unknown() {
    let theme = TagTheme::default();
    for mode in ThemeMode::ALL {
        let unknown = theme.tokens(mode).danbooru.unknown();
        assert_eq!(
            resolve(&theme, Taxonomy::Danbooru, TagCategory::Species, mode),
            unknown
        );
        assert_eq!(
            resolve(&theme, Taxonomy::Danbooru, TagCategory::Lore, mode),
            unknown
        );
    }
}

#[test]
fn test_resolve_tokens_never_fails() {
    let theme = TagTheme::default();
    let mode = ThemeMode::Light;
    assert_eq!(
        resolve_tokens(&theme, "e621", "lore", mode),
        resolve(&theme, Taxonomy::E621, TagCategory::Lore, mode)
    );
    assert_eq!(
        resolve_tokens(&theme, "e621", "not-a-category", mode),
        theme.tokens(mode).e621.unknown()
    );
    assert_eq!(
        resolve_tokens(&theme, "gelbooru", "artist", mode),
        theme.tokens(mode).danbooru.unknown()
    );
}

#[test]
fn test_palette_shapes() {
    let theme = TagTheme::default();
    for mode in ThemeMode::ALL {
        let tokens = theme.tokens(mode);
        let danbooru: std::collections::BTreeSet<_> = TagCategory::ALL
            .iter()
            .map(|c| resolve(&theme, Taxonomy::Danbooru, *c, mode))
            .collect();
        assert_eq!(danbooru.len(), 6, "danbooru {mode}");

        let e621: std::collections::BTreeSet<_> = TagCategory::ALL
            .iter()
            .map(|c| resolve(&theme, Taxonomy::E621, *c, mode))
            .collect();
        assert_eq!(e621.len(), 7, "e621 {mode}");
        assert_eq!(tokens.e621.unknown(), tokens.e621.get(TagCategory::Meta).unwrap());
    }
}

#[test]
fn test_disabled_ignores_category() {
    let theme = TagTheme::default();
    for mode in ThemeMode::ALL {
        for category in TagCategory::ALL {
            let row = RowViewModel::new("x", Taxonomy::E621, category).already_present(true);
            assert_eq!(resolve_row_color(&theme, &row, mode), resolve_disabled(&theme, mode));
        }
    }
}

#[test]
fn test_row_color_uses_category_when_not_present() {
    let theme = TagTheme::default();
    let row = RowViewModel::new("x", Taxonomy::Danbooru, TagCategory::Character);
    assert_eq!(resolve_row_color(&theme, &row, ThemeMode::Dark), 0x4ade80);
}

#[test]
fn test_override_palette_replaces_wholesale_and_fails_closed() {
    let json = r##"{
        "light": {
            "danbooru": { "general": "#000001", "unknown": "#000009", "artsit": "#ff0000" }
        }
    }"##;
    let theme = parse_theme(json, "inline").unwrap();
    let light = ThemeMode::Light;
    assert_eq!(resolve(&theme, Taxonomy::Danbooru, TagCategory::General, light), 0x000001);
    // Omitted (and misspelled) tokens fail closed to the palette's unknown
    assert_eq!(resolve(&theme, Taxonomy::Danbooru, TagCategory::Artist, light), 0x000009);
    // Other palettes and modes keep the built-in values
    assert_eq!(resolve(&theme, Taxonomy::Danbooru, TagCategory::Artist, ThemeMode::Dark), 0xf87171);
    assert_eq!(resolve(&theme, Taxonomy::E621, TagCategory::Lore, light), 0x059669);
}

#[test]
fn test_override_palette_without_unknown_keeps_builtin_unknown() {
    let json = r##"{ "dark": { "e621": { "species": 16711680 } } }"##;
    let theme = parse_theme(json, "inline").unwrap();
    let dark = ThemeMode::Dark;
    assert_eq!(resolve(&theme, Taxonomy::E621, TagCategory::Species, dark), 0xff0000);
    assert_eq!(
        resolve(&theme, Taxonomy::E621, TagCategory::General, dark),
        TagTheme::default().dark.e621.unknown()
    );
}

#[test]
fn test_scalar_overrides_and_opacity_clamp() {
    let json = r##"{
        "light": { "disabled": "#abc", "rowSelected": "#112233", "opacity": { "panel": 2.0, "alternate": 0.5, "hover": 0.5, "selected": -1.0 } }
    }"##;
    let theme = parse_theme(json, "inline").unwrap();
    assert_eq!(theme.light.disabled, 0xaabbcc);
    assert_eq!(theme.light.row_selected, 0x112233);
    assert_eq!(theme.light.opacity.panel, 1.0);
    assert_eq!(theme.light.opacity.selected, 0.0);
    assert_eq!(theme.dark, TagTheme::default().dark);
}

#[test]
fn test_parse_theme_reports_malformed_json() {
    let err = parse_theme("{ not json", "broken.json").unwrap_err();
    assert!(matches!(err, crate::error::OverlayError::ThemeParse { .. }));
}

#[test]
fn test_invalid_color_is_a_parse_error() {
    assert!(parse_theme(r##"{ "light": { "disabled": "#zzzzzz" } }"##, "inline").is_err());
}

#[test]
fn test_load_theme_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r##"{{ "dark": {{ "border": "#010203" }} }}"##).unwrap();

    let theme = load_theme(file.path()).unwrap();
    assert_eq!(theme.dark.border, 0x010203);
}

#[test]
fn test_load_theme_or_default_fallbacks() {
    assert_eq!(load_theme_or_default(None), TagTheme::default());
    assert_eq!(
        load_theme_or_default(Some(std::path::Path::new("/nonexistent/theme.json"))),
        TagTheme::default()
    );

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "garbage").unwrap();
    assert_eq!(load_theme_or_default(Some(file.path())), TagTheme::default());
}

#[test]
fn test_load_theme_missing_file_is_theme_load_error() {
    let err = load_theme(std::path::Path::new("/nonexistent/theme.json")).unwrap_err();
    assert!(matches!(err, crate::error::OverlayError::ThemeLoad { .. }));
}

#[test]
fn test_theme_mode_serde_and_toggle() {
    let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(mode, ThemeMode::Light);
    assert_eq!(mode.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::default(), ThemeMode::Dark);
}

#[test]
fn test_detect_system_appearance() {
    // Result depends on the machine; only verify it doesn't panic
    let _mode = detect_system_appearance();
}
