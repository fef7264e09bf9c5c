//! Theme type definitions
//!
//! - ThemeMode (light/dark)
//! - TaxonomyPalette: category -> color table for one vocabulary
//! - ModeTokens: every token one mode needs (palettes, text, backgrounds)
//! - TagTheme: light + dark tokens
//! - ThemeFile / ModeOverrides: the on-disk override format

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::process::Command;
use tracing::{debug, error, info, warn};

use super::hex_color::{hex_color_option_serde, to_hex_string, ColorValue, HexColor};
use super::palette;
use crate::error::{OverlayError, Result};
use crate::model::{TagCategory, Taxonomy};

/// Light or dark presentation. Passed explicitly into every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TaxonomyPalette
// =============================================================================

/// Category colors for one taxonomy in one mode.
///
/// Any category without an entry (including ones the taxonomy does not
/// support) resolves to `unknown`. There is no way to get "no color".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyPalette {
    entries: BTreeMap<TagCategory, HexColor>,
    unknown: HexColor,
}

impl TaxonomyPalette {
    pub fn new(unknown: HexColor) -> Self {
        Self {
            entries: BTreeMap::new(),
            unknown,
        }
    }

    /// Add or replace one entry. Setting `Unknown` replaces the fallback.
    pub fn with(mut self, category: TagCategory, color: HexColor) -> Self {
        self.set(category, color);
        self
    }

    pub fn set(&mut self, category: TagCategory, color: HexColor) {
        if category == TagCategory::Unknown {
            self.unknown = color;
        } else {
            self.entries.insert(category, color);
        }
    }

    /// Explicit entry for `category`, if the palette has one
    pub fn get(&self, category: TagCategory) -> Option<HexColor> {
        match category {
            TagCategory::Unknown => Some(self.unknown),
            other => self.entries.get(&other).copied(),
        }
    }

    pub fn unknown(&self) -> HexColor {
        self.unknown
    }

    /// Colors actually used by this palette, including the fallback
    pub fn distinct_colors(&self) -> BTreeSet<HexColor> {
        self.entries
            .values()
            .copied()
            .chain(std::iter::once(self.unknown))
            .collect()
    }

    /// Build a palette from a theme-file map of category token -> color.
    ///
    /// The map replaces the palette wholesale. Categories it omits fall back
    /// to `unknown`; if it has no `unknown` key, `fallback_unknown` is kept.
    /// Unrecognized keys are skipped.
    fn from_token_map(
        taxonomy: Taxonomy,
        map: &BTreeMap<String, ColorValue>,
        fallback_unknown: HexColor,
    ) -> Self {
        let mut palette = TaxonomyPalette::new(fallback_unknown);
        for (token, color) in map {
            match TagCategory::from_token(token) {
                Some(category) => {
                    if !taxonomy.supports(category) && category != TagCategory::Unknown {
                        debug!(
                            taxonomy = %taxonomy,
                            category = %category,
                            "Palette entry for a category outside this taxonomy"
                        );
                    }
                    palette.set(category, color.0);
                }
                None => warn!(
                    taxonomy = %taxonomy,
                    token = token.as_str(),
                    "Unrecognized category token in theme file, skipping"
                ),
            }
        }
        palette
    }
}

// =============================================================================
// ModeTokens
// =============================================================================

/// Opacity applied to row/panel backgrounds (0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowOpacity {
    pub panel: f32,
    pub alternate: f32,
    pub hover: f32,
    pub selected: f32,
}

impl RowOpacity {
    pub fn clamped(self) -> Self {
        Self {
            panel: self.panel.clamp(0.0, 1.0),
            alternate: self.alternate.clamp(0.0, 1.0),
            hover: self.hover.clamp(0.0, 1.0),
            selected: self.selected.clamp(0.0, 1.0),
        }
    }
}

impl Default for RowOpacity {
    fn default() -> Self {
        RowOpacity {
            panel: 0.98,
            alternate: 1.0,
            hover: 1.0,
            selected: 1.0,
        }
    }
}

/// Every token one theme mode supplies
#[derive(Debug, Clone, PartialEq)]
pub struct ModeTokens {
    pub danbooru: TaxonomyPalette,
    pub e621: TaxonomyPalette,
    /// Name color for rows whose tag is already in the input
    pub disabled: HexColor,
    pub text_primary: HexColor,
    pub text_secondary: HexColor,
    pub text_muted: HexColor,
    pub error: HexColor,
    pub panel_background: HexColor,
    pub row_alternate: HexColor,
    pub row_hover: HexColor,
    pub row_selected: HexColor,
    pub header_background: HexColor,
    pub border: HexColor,
    pub opacity: RowOpacity,
}

impl ModeTokens {
    pub fn palette(&self, taxonomy: Taxonomy) -> &TaxonomyPalette {
        match taxonomy {
            Taxonomy::Danbooru => &self.danbooru,
            Taxonomy::E621 => &self.e621,
        }
    }

    fn apply(&mut self, overrides: &ModeOverrides) {
        if let Some(map) = &overrides.danbooru {
            self.danbooru =
                TaxonomyPalette::from_token_map(Taxonomy::Danbooru, map, self.danbooru.unknown());
        }
        if let Some(map) = &overrides.e621 {
            self.e621 = TaxonomyPalette::from_token_map(Taxonomy::E621, map, self.e621.unknown());
        }

        let scalar_tokens: [(&mut HexColor, Option<HexColor>); 11] = [
            (&mut self.disabled, overrides.disabled),
            (&mut self.text_primary, overrides.text_primary),
            (&mut self.text_secondary, overrides.text_secondary),
            (&mut self.text_muted, overrides.text_muted),
            (&mut self.error, overrides.error),
            (&mut self.panel_background, overrides.panel_background),
            (&mut self.row_alternate, overrides.row_alternate),
            (&mut self.row_hover, overrides.row_hover),
            (&mut self.row_selected, overrides.row_selected),
            (&mut self.header_background, overrides.header_background),
            (&mut self.border, overrides.border),
        ];
        for (slot, value) in scalar_tokens {
            if let Some(color) = value {
                *slot = color;
            }
        }

        if let Some(opacity) = overrides.opacity {
            self.opacity = opacity.clamped();
        }
    }
}

// =============================================================================
// TagTheme
// =============================================================================

/// Complete theme: tokens for both modes
#[derive(Debug, Clone, PartialEq)]
pub struct TagTheme {
    pub light: ModeTokens,
    pub dark: ModeTokens,
}

impl Default for TagTheme {
    fn default() -> Self {
        TagTheme {
            light: palette::light_tokens(),
            dark: palette::dark_tokens(),
        }
    }
}

impl TagTheme {
    pub fn tokens(&self, mode: ThemeMode) -> &ModeTokens {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Built-in tokens with a theme file's overrides layered on top
    pub fn with_overrides(file: &ThemeFile) -> Self {
        let mut theme = TagTheme::default();
        if let Some(light) = &file.light {
            theme.light.apply(light);
        }
        if let Some(dark) = &file.dark {
            theme.dark.apply(dark);
        }
        theme
    }
}

// =============================================================================
// Theme file format
// =============================================================================

/// On-disk theme overrides.
///
/// ```json
/// {
///   "light": {
///     "danbooru": { "general": "#2563eb", "artist": "#dc2626", "unknown": "#6b7280" },
///     "disabled": "#9ca3af"
///   },
///   "dark": { "rowSelected": "#1e3a8a" }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeFile {
    #[serde(default)]
    pub light: Option<ModeOverrides>,
    #[serde(default)]
    pub dark: Option<ModeOverrides>,
}

/// Per-mode overrides; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeOverrides {
    #[serde(default)]
    pub danbooru: Option<BTreeMap<String, ColorValue>>,
    #[serde(default)]
    pub e621: Option<BTreeMap<String, ColorValue>>,
    #[serde(default, with = "hex_color_option_serde")]
    pub disabled: Option<HexColor>,
    #[serde(default, with = "hex_color_option_serde")]
    pub text_primary: Option<HexColor>,
    #[serde(default, with = "hex_color_option_serde")]
    pub text_secondary: Option<HexColor>,
    #[serde(default, with = "hex_color_option_serde")]
    pub text_muted: Option<HexColor>,
    #[serde(default, with = "hex_color_option_serde")]
    pub error: Option<HexColor>,
    #[serde(default, with = "hex_color_option_serde")]
    pub panel_background: Option<HexColor>,
    #[serde(default, with = "hex_color_option_serde")]
    pub row_alternate: Option<HexColor>,
    #[serde(default, with = "hex_color_option_serde")]
    pub row_hover: Option<HexColor>,
    #[serde(default, with = "hex_color_option_serde")]
    pub row_selected: Option<HexColor>,
    #[serde(default, with = "hex_color_option_serde")]
    pub header_background: Option<HexColor>,
    #[serde(default, with = "hex_color_option_serde")]
    pub border: Option<HexColor>,
    #[serde(default)]
    pub opacity: Option<RowOpacity>,
}

/// Parse theme-file JSON and layer it over the built-in tokens
pub fn parse_theme(contents: &str, origin: &str) -> Result<TagTheme> {
    let file: ThemeFile =
        serde_json::from_str(contents).map_err(|source| OverlayError::ThemeParse {
            path: origin.to_string(),
            source,
        })?;
    Ok(TagTheme::with_overrides(&file))
}

/// Load a theme file from disk
pub fn load_theme(path: &Path) -> Result<TagTheme> {
    let contents = std::fs::read_to_string(path).map_err(|source| OverlayError::ThemeLoad {
        path: path.display().to_string(),
        source,
    })?;
    let theme = parse_theme(&contents, &path.display().to_string())?;
    debug!(path = %path.display(), "Successfully loaded theme");
    log_theme_config(&theme);
    Ok(theme)
}

/// Load a theme file, falling back to the built-in tokens.
///
/// `None` or a missing file is not an error; unreadable or malformed files are
/// logged and ignored.
pub fn load_theme_or_default(path: Option<&Path>) -> TagTheme {
    let Some(path) = path else {
        debug!("No theme file configured, using built-in tokens");
        return TagTheme::default();
    };

    if !path.exists() {
        info!(path = %path.display(), "Theme file not found, using built-in tokens");
        return TagTheme::default();
    }

    match load_theme(path) {
        Ok(theme) => theme,
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to load theme, using built-in tokens");
            TagTheme::default()
        }
    }
}

/// Detect system appearance preference on macOS.
///
/// Uses `defaults read -g AppleInterfaceStyle`; in light mode that key is
/// absent and the command exits non-zero. Anywhere detection is unavailable,
/// dark is returned.
pub fn detect_system_appearance() -> ThemeMode {
    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => {
            if !output.status.success() {
                info!(
                    appearance = "light",
                    "System appearance detected (key not present)"
                );
                return ThemeMode::Light;
            }

            let stdout = String::from_utf8_lossy(&output.stdout);
            let mode = if stdout.to_lowercase().contains("dark") {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            info!(appearance = %mode, "System appearance detected");
            mode
        }
        Err(e) => {
            debug!(
                error = %e,
                default = "dark",
                "System appearance detection failed, using default"
            );
            ThemeMode::Dark
        }
    }
}

fn log_theme_config(theme: &TagTheme) {
    for mode in ThemeMode::ALL {
        let tokens = theme.tokens(mode);
        debug!(
            mode = %mode,
            danbooru_colors = tokens.danbooru.distinct_colors().len(),
            e621_colors = tokens.e621.distinct_colors().len(),
            disabled = to_hex_string(tokens.disabled),
            selected = to_hex_string(tokens.row_selected),
            "Theme tokens configured"
        );
    }
}
