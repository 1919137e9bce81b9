//! RGB stroke color and predefined color constants.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an opaque RGB color with 8-bit components.
///
/// The stroke color is shared by every tool, and is persisted in its
/// `#rrggbb` form.
///
/// # Examples
///
/// ```
/// use scribe_panel::draw::Color;
/// let red = Color::new(0xea, 0x43, 0x35);
/// assert_eq!(red.to_hex(), "#ea4335");
/// assert_eq!("#ea4335".parse::<Color>().unwrap(), red);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

/// Error returned when a `#rrggbb` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    #[error("color '{0}' must have exactly six hex digits")]
    BadLength(String),
    #[error("color '{0}' contains a non-hex digit")]
    BadDigit(String),
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses a `#rrggbb` string (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(trimmed.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::BadLength(trimmed.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::BadDigit(trimmed.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Returns the components in the 0.0-1.0 range used by Cairo.
    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Perceived brightness in 0-255 (ITU-R BT.601 weights).
    pub fn luma(&self) -> u8 {
        let y = 0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64;
        y.round().clamp(0.0, 255.0) as u8
    }

    /// Border color that stays visible around a swatch of this color.
    ///
    /// Light swatches get a dark outline and dark swatches a light one.
    pub fn contrast_border(&self) -> Color {
        if self.luma() > 128 {
            Color::new(0x3c, 0x40, 0x43)
        } else {
            Color::new(0xda, 0xdc, 0xe0)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color
pub const RED: Color = Color::new(0xea, 0x43, 0x35);

/// Predefined green color
pub const GREEN: Color = Color::new(0x34, 0xa8, 0x53);

/// Predefined blue color
pub const BLUE: Color = Color::new(0x42, 0x85, 0xf4);

/// Predefined yellow color
pub const YELLOW: Color = Color::new(0xfb, 0xbc, 0x04);

/// Predefined orange color
pub const ORANGE: Color = Color::new(0xf2, 0x99, 0x00);

/// Predefined pink/purple color
pub const PINK: Color = Color::new(0xc5, 0x8a, 0xf9);

/// Predefined white color
pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

/// Predefined black color
pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_mixed_case() {
        assert_eq!(Color::from_hex("#EA4335").unwrap(), RED);
        assert_eq!(Color::from_hex(" #ffffff ").unwrap(), WHITE);
    }

    #[test]
    fn hex_parsing_rejects_malformed_input() {
        assert!(matches!(
            Color::from_hex("ea4335"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::from_hex("#fff"),
            Err(ColorParseError::BadLength(_))
        ));
        assert!(matches!(
            Color::from_hex("#gg0000"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn contrast_border_flips_on_brightness() {
        assert_eq!(WHITE.contrast_border(), Color::new(0x3c, 0x40, 0x43));
        assert_eq!(BLACK.contrast_border(), Color::new(0xda, 0xdc, 0xe0));
    }

    #[test]
    fn unit_rgb_scales_components() {
        let (r, g, b) = WHITE.to_unit_rgb();
        assert_eq!((r, g, b), (1.0, 1.0, 1.0));
        let (r, _, _) = BLACK.to_unit_rgb();
        assert_eq!(r, 0.0);
    }
}
