//! The fixed product color palette

use crate::render::Color;

/// Display name used for colors outside the palette
pub const FALLBACK_COLOR_NAME: &str = "Dark Blue";

/// Named base colors offered for the product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// `#2c3e50`
    DarkBlue,
    /// `#e74c3c`
    Red,
    /// `#2ecc71`
    Green,
    /// `#f1c40f`
    Yellow,
    /// `#9b59b6`
    Purple,
    /// `#1abc9c`
    Teal,
}

impl PaletteColor {
    /// Every palette entry in swatch order
    pub const ALL: [Self; 6] = [
        Self::DarkBlue,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Teal,
    ];

    /// Packed `0xRRGGBB` value
    pub const fn hex(self) -> u32 {
        match self {
            Self::DarkBlue => 0x2c_3e_50,
            Self::Red => 0xe7_4c_3c,
            Self::Green => 0x2e_cc_71,
            Self::Yellow => 0xf1_c4_0f,
            Self::Purple => 0x9b_59_b6,
            Self::Teal => 0x1a_bc_9c,
        }
    }

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::DarkBlue => "Dark Blue",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Purple => "Purple",
            Self::Teal => "Teal",
        }
    }

    /// Color value
    pub fn color(self) -> Color {
        Color::from_hex(self.hex())
    }

    /// Palette entry with exactly this value, if any
    pub fn from_color(color: Color) -> Option<Self> {
        let hex = color.to_hex();
        Self::ALL.into_iter().find(|entry| entry.hex() == hex)
    }
}

/// Display name of any color; values outside the palette map to [`FALLBACK_COLOR_NAME`]
pub fn color_name(color: Color) -> &'static str {
    PaletteColor::from_color(color).map_or(FALLBACK_COLOR_NAME, PaletteColor::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_maps_back_to_itself() {
        for entry in PaletteColor::ALL {
            assert_eq!(PaletteColor::from_color(entry.color()), Some(entry));
            assert_eq!(color_name(entry.color()), entry.name());
        }
    }

    #[test]
    fn test_names_match_swatch_values() {
        let expected = [
            ("#2c3e50", "Dark Blue"),
            ("#e74c3c", "Red"),
            ("#2ecc71", "Green"),
            ("#f1c40f", "Yellow"),
            ("#9b59b6", "Purple"),
            ("#1abc9c", "Teal"),
        ];
        for (value, name) in expected {
            assert_eq!(color_name(value.parse().unwrap()), name);
        }
    }

    #[test]
    fn test_unknown_color_falls_back() {
        assert_eq!(color_name(Color::from_hex(0x12_34_56)), FALLBACK_COLOR_NAME);
        assert_eq!(PaletteColor::from_color(Color::WHITE), None);
    }
}
