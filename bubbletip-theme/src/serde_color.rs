// SPDX-License-Identifier: MIT OR Apache-2.0
//! Custom serialization helpers for [vello::peniko::Color].
//!
//! Use with `#[serde(with = "bubbletip_theme::serde_color")]`.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
pub fn parse_hex_color(hex: &str) -> ThemeResult<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 && digits.len() != 8 {
        return Err(ThemeError::invalid_color(
            hex,
            "hex color must be 6 or 8 characters",
        ));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ThemeError::invalid_color(hex, "not a hex digit"));
    }

    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| ThemeError::invalid_color(hex, "not a hex digit"))
    };

    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if digits.len() == 8 { channel(6)? } else { 255 };
    Ok(Color::from_rgba8(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let color = parse_hex_color("#ff8000").unwrap();
        let rgba = color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (255, 128, 0, 255));
    }

    #[test]
    fn test_parse_rgba_without_hash() {
        let color = parse_hex_color("00000080").unwrap();
        assert_eq!(color.to_rgba8().a, 128);
    }

    #[test]
    fn test_to_hex_omits_opaque_alpha() {
        assert_eq!(to_hex(Color::from_rgb8(0x12, 0x34, 0x56)), "#123456");
        assert_eq!(to_hex(Color::from_rgba8(0x12, 0x34, 0x56, 0x78)), "#12345678");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            parse_hex_color("#fff"),
            Err(ThemeError::InvalidColor { .. })
        ));
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("#+f+f+f").is_err());
    }
}
