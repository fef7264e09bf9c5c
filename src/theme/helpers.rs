//! Lightweight theme extraction helpers
//!
//! Pre-computed gpui colors for the panel chrome. `Copy`, so render closures
//! can capture them without cloning the theme. Built fresh on every render.

use gpui::{rgb, rgba, Rgba};

use super::hex_color::{opacity_to_alpha, with_alpha};
use super::types::ModeTokens;

/// Colors for the overlay container, header bar and message cell
#[derive(Copy, Clone, Debug)]
pub struct PanelColors {
    pub background: Rgba,
    pub header_background: Rgba,
    pub border: Rgba,
    pub text_primary: Rgba,
    pub text_secondary: Rgba,
    pub text_muted: Rgba,
    pub error: Rgba,
    /// Hover feedback for header controls
    pub control_hover: Rgba,
}

impl PanelColors {
    pub fn from_tokens(tokens: &ModeTokens) -> Self {
        let opacity = tokens.opacity.clamped();
        PanelColors {
            background: rgba(with_alpha(
                tokens.panel_background,
                opacity_to_alpha(opacity.panel),
            )),
            header_background: rgb(tokens.header_background),
            border: rgb(tokens.border),
            text_primary: rgb(tokens.text_primary),
            text_secondary: rgb(tokens.text_secondary),
            text_muted: rgb(tokens.text_muted),
            error: rgb(tokens.error),
            control_hover: rgba(with_alpha(tokens.row_hover, opacity_to_alpha(opacity.hover))),
        }
    }
}

impl ModeTokens {
    /// Extract the panel chrome colors for this mode
    pub fn panel_colors(&self) -> PanelColors {
        PanelColors::from_tokens(self)
    }
}
