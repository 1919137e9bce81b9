//! Configuration file support for scribe-panel.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/scribe-panel/config.toml`. Settings include default tool sizes
//! and color, display metrics, the first page's background, and panel preferences.
//!
//! If no config file exists, sensible defaults are used automatically. Values the user
//! changes at runtime (sizes, color) are remembered separately by the settings store.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{BoardConfig, DisplayConfig, DrawingConfig, UiConfig};

use crate::input::{BackgroundKind, ToolKind};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user's config dir.
pub const APP_DIR: &str = "scribe-panel";

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// pen_size = 3
/// marker_size = 20
/// eraser_size = 62
/// color = "#ea4335"
///
/// [display]
/// screen_width = 1920
/// screen_height = 1080
///
/// [board]
/// default_background = "transparent"
///
/// [ui]
/// show_screenshot_button = false
/// ```
#[derive(Debug, Serialize, Deserialize, Default, Clone, JsonSchema)]
pub struct Config {
    /// Default tool sizes and stroke color
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Screen metrics used to size buttons and pages
    #[serde(default)]
    pub display: DisplayConfig,

    /// Board defaults
    #[serde(default)]
    pub board: BoardConfig,

    /// Panel preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Returns the JSON schema describing the config file.
    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `pen_size`: 1 - 31
    /// - `marker_size`: 1 - 100
    /// - `eraser_size`: 31 - 310
    /// - `screen_width`, `screen_height`: 240 - 16384
    pub fn validate_and_clamp(&mut self) {
        for kind in ToolKind::ALL {
            let size = self.drawing.size_for(kind);
            let clamped = kind.clamp_size(size);
            if clamped != size {
                log::warn!(
                    "Invalid {} {}, clamping to {}-{} range",
                    kind.settings_key(),
                    size,
                    kind.size_range().start(),
                    kind.size_range().end()
                );
                self.drawing.set_size_for(kind, clamped);
            }
        }

        if !(240..=16384).contains(&self.display.screen_width) {
            log::warn!(
                "Invalid screen_width {}, clamping to 240-16384 range",
                self.display.screen_width
            );
            self.display.screen_width = self.display.screen_width.clamp(240, 16384);
        }

        if !(240..=16384).contains(&self.display.screen_height) {
            log::warn!(
                "Invalid screen_height {}, clamping to 240-16384 range",
                self.display.screen_height
            );
            self.display.screen_height = self.display.screen_height.clamp(240, 16384);
        }

        if self
            .board
            .default_background
            .parse::<BackgroundKind>()
            .is_err()
        {
            log::warn!(
                "Invalid board default_background '{}', falling back to 'transparent'",
                self.board.default_background
            );
            self.board.default_background = "transparent".to_string();
        }
    }

    /// Background of the first page.
    pub fn default_background(&self) -> BackgroundKind {
        self.board
            .default_background
            .parse()
            .unwrap_or_default()
    }

    /// Returns the directory holding the config and settings files.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not find config directory")?
            .join(APP_DIR))
    }

    /// Returns the path to the configuration file.
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to `config_path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot be
    /// serialized, or the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

impl DrawingConfig {
    /// Default size for `kind`.
    pub fn size_for(&self, kind: ToolKind) -> u32 {
        match kind {
            ToolKind::Pen => self.pen_size,
            ToolKind::Marker => self.marker_size,
            ToolKind::Eraser => self.eraser_size,
        }
    }

    fn set_size_for(&mut self, kind: ToolKind, size: u32) {
        match kind {
            ToolKind::Pen => self.pen_size = size,
            ToolKind::Marker => self.marker_size = size,
            ToolKind::Eraser => self.eraser_size = size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_within_ranges() {
        let mut config = Config::default();
        config.validate_and_clamp();
        assert_eq!(config.drawing.pen_size, 3);
        assert_eq!(config.drawing.marker_size, 20);
        assert_eq!(config.drawing.eraser_size, 62);
        assert_eq!(config.default_background(), BackgroundKind::Transparent);
    }

    #[test]
    fn out_of_range_sizes_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            pen_size = 99
            marker_size = 0
            eraser_size = 5
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.drawing.pen_size, 31);
        assert_eq!(config.drawing.marker_size, 1);
        assert_eq!(config.drawing.eraser_size, 31);
    }

    #[test]
    fn invalid_background_falls_back() {
        let mut config: Config = toml::from_str(
            r#"
            [board]
            default_background = "plaid"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.board.default_background, "transparent");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("nope.toml")).unwrap();
        assert_eq!(config.display.screen_height, 1080);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.drawing.color = ColorSpec::Rgb([1, 2, 3]);
        config.board.default_background = "white".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.drawing.color.to_color(), Color::new(1, 2, 3));
        assert_eq!(loaded.default_background(), BackgroundKind::White);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing\npen_size = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
