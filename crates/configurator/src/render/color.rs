//! RGB color values
//!
//! Colors are stored as normalized floating point channels so they can be
//! interpolated directly, and parsed from or formatted to the `#rrggbb` hex
//! notation used by swatch attributes and configuration files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Linear RGB color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

/// Error returned when a string is not a `#rrggbb` color
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a #rrggbb color value")]
pub struct ParseColorError(pub String);

impl Color {
    /// Pure white
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// Pure black
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    /// Create a color from normalized channels
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Pack into `0xRRGGBB`, rounding each channel to the nearest byte
    pub fn to_hex(self) -> u32 {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (byte(self.r) << 16) | (byte(self.g) << 8) | byte(self.b)
    }

    /// Channels as a vector for interpolation
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Build from an interpolated vector
    pub fn from_vec3(v: &Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rrggbb` or bare `rrggbb`, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_with_and_without_hash() {
        let with_hash: Color = "#e74c3c".parse().unwrap();
        let bare: Color = "E74C3C".parse().unwrap();
        assert_eq!(with_hash, bare);
        assert_eq!(with_hash.to_hex(), 0xe7_4c_3c);
    }

    #[test]
    fn test_channels_are_normalized() {
        let color = Color::from_hex(0xff_80_00);
        assert_relative_eq!(color.r, 1.0);
        assert_relative_eq!(color.g, 128.0 / 255.0);
        assert_relative_eq!(color.b, 0.0);
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Color::from_hex(0x2c_3e_50).to_string(), "#2c3e50");
    }

    #[test]
    fn test_rejects_malformed_values() {
        for bad in ["", "#", "#12345", "#1234567", "#gg0000", "red", "0x2c3e50"] {
            assert!(bad.parse::<Color>().is_err(), "{bad:?} should be rejected");
        }
    }
}
