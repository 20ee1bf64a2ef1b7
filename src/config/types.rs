//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::ToolKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the initial tool and stroke style of a session. The values can be
/// changed while sketching.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - either a named color (red, green, blue, yellow, orange, pink, white, black),
    /// a `#RRGGBB` string, or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke thickness in pixels (valid range: 1 - 50)
    #[serde(default = "default_thickness")]
    pub default_thickness: u32,

    /// Draw shapes exactly as dragged instead of snapping them
    #[serde(default)]
    pub freehand: bool,

    /// Tool selected at startup (line, rectangle, ellipse)
    #[serde(default = "default_tool")]
    pub default_tool: ToolKind,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            freehand: false,
            default_tool: default_tool(),
        }
    }
}

/// Blank canvas used when neither a file nor a clipboard image is available.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Background color of the blank canvas
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Display magnification settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    /// Fixed zoom factor (valid range: 1 - 32). When unset, the largest zoom
    /// that keeps the image within half the screen is used
    #[serde(default)]
    pub zoom: Option<u32>,

    /// Screen width used for automatic zoom
    #[serde(default = "default_screen_width")]
    pub screen_width: u32,

    /// Screen height used for automatic zoom
    #[serde(default = "default_screen_height")]
    pub screen_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom: None,
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
        }
    }
}

/// Where untitled images are saved.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Directory for untitled images (`~` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// File name template for untitled images (chrono format specifiers, `.png` is appended)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_thickness() -> u32 {
    5
}

fn default_tool() -> ToolKind {
    ToolKind::Line
}

fn default_canvas_width() -> i32 {
    600
}

fn default_canvas_height() -> i32 {
    400
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_screen_width() -> u32 {
    1920
}

fn default_screen_height() -> u32 {
    1080
}

fn default_save_directory() -> String {
    "~/Pictures/Sketchpad".to_string()
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
