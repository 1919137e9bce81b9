//! Key/value persistence for values the user changes from the panel.
//!
//! The panel writes each changed value immediately, one key at a time:
//! `pen-size`, `marker-size`, `eraser-size` (integers) and `color`
//! (`#rrggbb` string). On startup the same keys seed the drawing surface.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::DrawingConfig;
use crate::draw::Color;
use crate::host::DrawingSurface;
use crate::input::ToolKind;
use anyhow::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Key of the shared stroke color.
pub const COLOR_KEY: &str = "color";

/// A single persisted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Int(i64),
    Text(String),
}

/// Key/value persistence used by the panel controllers.
///
/// Writes happen synchronously on the UI thread; implementations should not
/// batch them.
pub trait SettingsStore {
    /// Stores an integer under `key`.
    fn set_int(&mut self, key: &str, value: i64) -> Result<()>;

    /// Stores a string under `key`.
    fn set_string(&mut self, key: &str, value: &str) -> Result<()>;

    /// Reads an integer, if present and of the right type.
    fn get_int(&self, key: &str) -> Option<i64>;

    /// Reads a string, if present and of the right type.
    fn get_string(&self, key: &str) -> Option<String>;
}

/// Seeds the drawing surface with remembered sizes and color.
///
/// Missing or malformed values fall back to `defaults`; sizes are clamped into
/// each tool's range. The active tool is left to the surface (pen on a fresh
/// surface).
pub fn restore_drawing_surface(
    store: &dyn SettingsStore,
    defaults: &DrawingConfig,
    surface: &mut dyn DrawingSurface,
) {
    for kind in ToolKind::ALL {
        let size = match store.get_int(kind.settings_key()) {
            Some(value) => {
                let raw = u32::try_from(value).unwrap_or(0);
                let clamped = kind.clamp_size(raw);
                if i64::from(clamped) != value {
                    warn!(
                        "Stored {} {} out of range, using {}",
                        kind.settings_key(),
                        value,
                        clamped
                    );
                }
                clamped
            }
            None => defaults.size_for(kind),
        };
        surface.set_tool_size(kind, size);
    }

    let color = match store.get_string(COLOR_KEY) {
        Some(text) => Color::from_hex(&text).unwrap_or_else(|err| {
            warn!("Ignoring stored color: {err}");
            defaults.color.to_color()
        }),
        None => defaults.color.to_color(),
    };
    surface.set_stroke_color(color);

    debug!(
        "Restored tool sizes pen={} marker={} eraser={} color={}",
        surface.tool_size(ToolKind::Pen),
        surface.tool_size(ToolKind::Marker),
        surface.tool_size(ToolKind::Eraser),
        color
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::headless::HeadlessSurface;

    #[test]
    fn restore_uses_defaults_when_store_is_empty() {
        let store = MemoryStore::new();
        let mut surface = HeadlessSurface::new();
        restore_drawing_surface(&store, &DrawingConfig::default(), &mut surface);

        assert_eq!(surface.tool_size(ToolKind::Pen), 3);
        assert_eq!(surface.tool_size(ToolKind::Marker), 20);
        assert_eq!(surface.tool_size(ToolKind::Eraser), 62);
        assert_eq!(surface.stroke_color().to_hex(), "#ea4335");
    }

    #[test]
    fn restore_prefers_stored_values_and_clamps() {
        let mut store = MemoryStore::new();
        store.set_int("pen-size", 12).unwrap();
        store.set_int("eraser-size", 5).unwrap();
        store.set_string("color", "#112233").unwrap();
        let mut surface = HeadlessSurface::new();
        restore_drawing_surface(&store, &DrawingConfig::default(), &mut surface);

        assert_eq!(surface.tool_size(ToolKind::Pen), 12);
        assert_eq!(surface.tool_size(ToolKind::Marker), 20);
        assert_eq!(surface.tool_size(ToolKind::Eraser), 31);
        assert_eq!(surface.stroke_color(), Color::new(0x11, 0x22, 0x33));
    }

    #[test]
    fn restore_ignores_malformed_color() {
        let mut store = MemoryStore::new();
        store.set_string("color", "teal-ish").unwrap();
        let mut surface = HeadlessSurface::new();
        restore_drawing_surface(&store, &DrawingConfig::default(), &mut surface);
        assert_eq!(surface.stroke_color().to_hex(), "#ea4335");
    }
}
