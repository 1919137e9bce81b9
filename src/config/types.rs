//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related defaults.
///
/// Used when the settings store has no remembered value for a key yet.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen size in pixels (valid range: 1 - 31)
    #[serde(default = "default_pen_size")]
    pub pen_size: u32,

    /// Default marker size in pixels (valid range: 1 - 100)
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,

    /// Default eraser size in pixels (valid range: 31 - 310)
    #[serde(default = "default_eraser_size")]
    pub eraser_size: u32,

    /// Default stroke color - `#rrggbb`, a named color, or an RGB array
    #[serde(default = "default_color")]
    pub color: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            pen_size: default_pen_size(),
            marker_size: default_marker_size(),
            eraser_size: default_eraser_size(),
            color: default_color(),
        }
    }
}

/// Display metrics the panel sizes itself from.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct DisplayConfig {
    /// Screen width in pixels
    #[serde(default = "default_screen_width")]
    pub screen_width: u32,

    /// Screen height in pixels; icon, font and page sizes scale with it
    #[serde(default = "default_screen_height")]
    pub screen_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
        }
    }
}

/// Board defaults.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct BoardConfig {
    /// Background of the first page: "transparent", "black" or "white"
    #[serde(default = "default_background")]
    pub default_background: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_background: default_background(),
        }
    }
}

/// Panel preferences.
#[derive(Debug, Serialize, Deserialize, Clone, Default, JsonSchema)]
pub struct UiConfig {
    /// Add a screenshot button to the floating root
    #[serde(default)]
    pub show_screenshot_button: bool,
}

fn default_pen_size() -> u32 {
    3
}

fn default_marker_size() -> u32 {
    20
}

fn default_eraser_size() -> u32 {
    62
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#ea4335".to_string())
}

fn default_screen_width() -> u32 {
    1920
}

fn default_screen_height() -> u32 {
    1080
}

fn default_background() -> String {
    "transparent".to_string()
}
