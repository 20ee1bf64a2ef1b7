//! Utility functions for color names.
//!
//! Named colors are the eight presets defined in [`crate::draw::color`]; any
//! other color can be written as `#RRGGBB`.

use crate::draw::{BLACK, BLUE, Color, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color names to Color values.
///
/// # Arguments
/// * `name` - Color name (case-insensitive)
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
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

/// Maps a Color value to its preset name, or `None` for custom colors.
pub fn color_to_name(color: &Color) -> Option<&'static str> {
    let name = match *color {
        RED => "red",
        GREEN => "green",
        BLUE => "blue",
        YELLOW => "yellow",
        ORANGE => "orange",
        PINK => "pink",
        WHITE => "white",
        BLACK => "black",
        _ => return None,
    };
    Some(name)
}

/// Parses a color name or a `#RRGGBB` hex string.
pub fn parse_color(text: &str) -> Option<Color> {
    let text = text.trim();
    if text.starts_with('#') {
        Color::from_hex(text)
    } else {
        name_to_color(text)
    }
}

/// Human-readable label: the preset name, or the hex form for custom colors.
pub fn color_label(color: &Color) -> String {
    color_to_name(color)
        .map(str::to_string)
        .unwrap_or_else(|| color.to_hex())
}
