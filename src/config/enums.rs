//! Configuration enum types.

use crate::draw::{Color, color::RED};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a hex string, a named color, or RGB values.
///
/// # Examples
/// ```toml
/// # Hex color, same form the panel persists
/// color = "#ea4335"
///
/// # Named color
/// color = "blue"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#rrggbb` or one of: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Hex strings are parsed first, then named colors via `util::name_to_color()`.
    /// Anything else falls back to red with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_hex(name)
                .ok()
                .or_else(|| crate::util::name_to_color(name))
                .unwrap_or_else(|| {
                    warn!("Unknown color '{}', using red", name);
                    RED
                }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLUE;

    #[test]
    fn hex_named_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("#4285f4".into()).to_color(), BLUE);
        assert_eq!(ColorSpec::Name("Blue".into()).to_color(), BLUE);
        assert_eq!(
            ColorSpec::Rgb([1, 2, 3]).to_color(),
            Color::new(1, 2, 3)
        );
    }

    #[test]
    fn unknown_name_falls_back_to_red() {
        assert_eq!(ColorSpec::Name("mauve-ish".into()).to_color(), RED);
    }
}
