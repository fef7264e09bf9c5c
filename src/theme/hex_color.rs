//! Hex color parsing and serialization
//!
//! Colors are stored as `0xRRGGBB` integers. In theme files they are written
//! as `"#rrggbb"` strings, but bare integers are accepted too.

use serde::{Deserialize, Serialize};

use crate::error::OverlayError;

/// RGB color packed as 0xRRGGBB
pub type HexColor = u32;

/// Fully transparent RGBA value (for `gpui::rgba`)
pub const TRANSPARENT: u32 = 0x00000000;

/// A color as it appears in theme-file maps (`"general": "#2563eb"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(#[serde(with = "hex_color_serde")] pub HexColor);

/// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb` into a [`HexColor`].
pub fn parse_hex(value: &str) -> Result<HexColor, OverlayError> {
    let digits = value.trim().trim_start_matches('#');
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(OverlayError::InvalidColor(value.to_string())),
    };
    u32::from_str_radix(&expanded, 16).map_err(|_| OverlayError::InvalidColor(value.to_string()))
}

/// Format a color as `#rrggbb`
pub fn to_hex_string(color: HexColor) -> String {
    format!("#{:06x}", color & 0xFFFFFF)
}

/// Pack an RGB color with an alpha byte into the 0xRRGGBBAA layout `gpui::rgba` takes.
#[inline]
pub fn with_alpha(color: HexColor, alpha: u8) -> u32 {
    ((color & 0xFFFFFF) << 8) | alpha as u32
}

/// Convert a 0.0-1.0 opacity into an alpha byte
#[inline]
pub fn opacity_to_alpha(opacity: f32) -> u8 {
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Serde adapter: `#[serde(with = "hex_color_serde")]`
pub mod hex_color_serde {
    use super::{parse_hex, to_hex_string, HexColor};
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(color: &HexColor, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex_string(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HexColor, D::Error> {
        deserializer.deserialize_any(HexColorVisitor)
    }

    struct HexColorVisitor;

    impl<'de> Visitor<'de> for HexColorVisitor {
        type Value = HexColor;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a \"#rrggbb\" string or an integer color")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<HexColor, E> {
            parse_hex(v).map_err(|e| E::custom(e.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<HexColor, E> {
            if v > 0xFFFFFF {
                return Err(E::custom(format!("color {} out of range", v)));
            }
            Ok(v as HexColor)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<HexColor, E> {
            if !(0..=0xFFFFFF).contains(&v) {
                return Err(E::custom(format!("color {} out of range", v)));
            }
            Ok(v as HexColor)
        }
    }
}

/// Serde adapter for `Option<HexColor>`; use with `#[serde(default)]`
pub mod hex_color_option_serde {
    use super::{parse_hex, to_hex_string, HexColor};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Number(u64),
    }

    pub fn serialize<S: Serializer>(
        color: &Option<HexColor>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match color {
            Some(c) => serializer.serialize_some(&to_hex_string(*c)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<HexColor>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Text(s)) => parse_hex(&s).map(Some).map_err(D::Error::custom),
            Some(Repr::Number(n)) if n <= 0xFFFFFF => Ok(Some(n as HexColor)),
            Some(Repr::Number(n)) => Err(D::Error::custom(format!("color {} out of range", n))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex("#dc2626").unwrap(), 0xdc2626);
        assert_eq!(parse_hex("dc2626").unwrap(), 0xdc2626);
        assert_eq!(parse_hex("#fff").unwrap(), 0xffffff);
        assert_eq!(parse_hex("  #0a0  ").unwrap(), 0x00aa00);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(parse_hex("#12345").is_err());
        assert!(parse_hex("#gggggg").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn test_with_alpha_packs_rgba() {
        assert_eq!(with_alpha(0x2a2a2a, 0x40), 0x2a2a2a40);
        assert_eq!(opacity_to_alpha(1.0), 255);
        assert_eq!(opacity_to_alpha(0.0), 0);
        assert_eq!(opacity_to_alpha(7.0), 255);
    }
}
