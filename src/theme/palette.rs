//! Built-in token tables
//!
//! Light mode uses the 600 shade of each hue, dark mode the 400 shade, so a
//! category keeps its hue across modes while staying legible on either
//! background.

use super::hex_color::HexColor;
use super::types::{ModeTokens, RowOpacity, TaxonomyPalette};
use crate::model::TagCategory;

// Tailwind shades
const BLUE_600: HexColor = 0x2563eb;
const BLUE_400: HexColor = 0x60a5fa;
const RED_600: HexColor = 0xdc2626;
const RED_400: HexColor = 0xf87171;
const PURPLE_600: HexColor = 0x9333ea;
const PURPLE_400: HexColor = 0xc084fc;
const GREEN_600: HexColor = 0x16a34a;
const GREEN_400: HexColor = 0x4ade80;
const ORANGE_600: HexColor = 0xea580c;
const ORANGE_400: HexColor = 0xfb923c;
const SKY_600: HexColor = 0x0284c7;
const SKY_400: HexColor = 0x38bdf8;
const AMBER_600: HexColor = 0xd97706;
const AMBER_400: HexColor = 0xfbbf24;
const FUCHSIA_600: HexColor = 0xc026d3;
const FUCHSIA_400: HexColor = 0xe879f9;
const EMERALD_600: HexColor = 0x059669;
const EMERALD_400: HexColor = 0x34d399;
const GRAY_500: HexColor = 0x6b7280;
const GRAY_400: HexColor = 0x9ca3af;

/// Danbooru: six colors; species and lore have no entry and share `unknown`
fn danbooru(light: bool) -> TaxonomyPalette {
    let (general, artist, copyright, character, meta, unknown) = if light {
        (BLUE_600, RED_600, PURPLE_600, GREEN_600, ORANGE_600, GRAY_500)
    } else {
        (BLUE_400, RED_400, PURPLE_400, GREEN_400, ORANGE_400, GRAY_400)
    };
    TaxonomyPalette::new(unknown)
        .with(TagCategory::General, general)
        .with(TagCategory::Artist, artist)
        .with(TagCategory::Copyright, copyright)
        .with(TagCategory::Character, character)
        .with(TagCategory::Meta, meta)
}

/// E621: seven colors; `unknown` reuses the meta gray
fn e621(light: bool) -> TaxonomyPalette {
    let (general, artist, copyright, character, species, meta, lore) = if light {
        (SKY_600, AMBER_600, FUCHSIA_600, GREEN_600, ORANGE_600, GRAY_500, EMERALD_600)
    } else {
        (SKY_400, AMBER_400, FUCHSIA_400, GREEN_400, ORANGE_400, GRAY_400, EMERALD_400)
    };
    TaxonomyPalette::new(meta)
        .with(TagCategory::General, general)
        .with(TagCategory::Artist, artist)
        .with(TagCategory::Copyright, copyright)
        .with(TagCategory::Character, character)
        .with(TagCategory::Species, species)
        .with(TagCategory::Meta, meta)
        .with(TagCategory::Lore, lore)
}

pub fn light_tokens() -> ModeTokens {
    ModeTokens {
        danbooru: danbooru(true),
        e621: e621(true),
        disabled: 0x9ca3af,
        text_primary: 0x111827,
        text_secondary: 0x374151,
        text_muted: 0x6b7280,
        error: 0xdc2626,
        panel_background: 0xffffff,
        row_alternate: 0xf3f4f6,
        row_hover: 0xe5e7eb,
        row_selected: 0xdbeafe,
        header_background: 0xf9fafb,
        border: 0xe5e7eb,
        opacity: RowOpacity::default(),
    }
}

pub fn dark_tokens() -> ModeTokens {
    ModeTokens {
        danbooru: danbooru(false),
        e621: e621(false),
        disabled: 0x4b5563,
        text_primary: 0xf9fafb,
        text_secondary: 0xd1d5db,
        text_muted: 0x9ca3af,
        error: 0xf87171,
        panel_background: 0x111827,
        row_alternate: 0x1f2937,
        row_hover: 0x374151,
        row_selected: 0x1e3a8a,
        header_background: 0x1f2937,
        border: 0x374151,
        opacity: RowOpacity::default(),
    }
}
