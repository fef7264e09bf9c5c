//! Category -> color resolution
//!
//! Pure lookups over a [`TagTheme`]. Stateless, safe to call for any number
//! of rows in any order; nothing here is cached across calls so a mode or
//! theme change is picked up on the very next render.

use super::hex_color::HexColor;
use super::types::{TagTheme, ThemeMode};
use crate::logging;
use crate::model::{RowViewModel, TagCategory, Taxonomy};

/// Color for a `(taxonomy, category)` pair in `mode`.
///
/// Pairs without a palette entry resolve to that taxonomy's `unknown` color.
pub fn resolve(
    theme: &TagTheme,
    taxonomy: Taxonomy,
    category: TagCategory,
    mode: ThemeMode,
) -> HexColor {
    let palette = theme.tokens(mode).palette(taxonomy);
    match palette.get(category) {
        Some(color) => color,
        None => {
            logging::log_theme_resolved_fallback(taxonomy.as_str(), category.token(), mode.as_str());
            palette.unknown()
        }
    }
}

/// String form for host-supplied identifiers.
///
/// An unrecognized category token resolves to the taxonomy's `unknown`; an
/// unrecognized taxonomy token resolves against the Danbooru palette's
/// `unknown`.
pub fn resolve_tokens(
    theme: &TagTheme,
    taxonomy_token: &str,
    category_token: &str,
    mode: ThemeMode,
) -> HexColor {
    match taxonomy_token.parse::<Taxonomy>() {
        Ok(taxonomy) => resolve(theme, taxonomy, TagCategory::parse_lenient(category_token), mode),
        Err(_) => {
            logging::log_theme_resolved_fallback(taxonomy_token, category_token, mode.as_str());
            theme.tokens(mode).danbooru.unknown()
        }
    }
}

/// The single disabled color for `mode`, independent of taxonomy/category
pub fn resolve_disabled(theme: &TagTheme, mode: ThemeMode) -> HexColor {
    theme.tokens(mode).disabled
}

/// Name color for a row: disabled when the tag is already present,
/// category color otherwise
pub fn resolve_row_color(theme: &TagTheme, row: &RowViewModel, mode: ThemeMode) -> HexColor {
    if row.already_present {
        resolve_disabled(theme, mode)
    } else {
        resolve(theme, row.taxonomy, row.category, mode)
    }
}
