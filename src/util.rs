//! Utility functions for color names.
//!
//! This module provides:
//! - Name-to-color mapping used by the configuration file
//! - Color-to-name mapping used by the state summary

use crate::draw::{Color, color::*, palette::SWATCHES};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Exact matches only. Colors from the swatch grid that have no name are
/// reported as "Swatch N", anything else as "Custom".
pub fn color_to_name(color: &Color) -> String {
    let named = [
        (RED, "Red"),
        (GREEN, "Green"),
        (BLUE, "Blue"),
        (YELLOW, "Yellow"),
        (ORANGE, "Orange"),
        (PINK, "Pink"),
        (WHITE, "White"),
        (BLACK, "Black"),
    ];

    if let Some((_, name)) = named.iter().find(|(c, _)| c == color) {
        return (*name).to_string();
    }

    match SWATCHES.iter().position(|c| c == color) {
        Some(index) => format!("Swatch {index}"),
        None => "Custom".to_string(),
    }
}
