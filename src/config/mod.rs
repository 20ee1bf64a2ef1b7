//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the starting tool and
//! stroke style, the blank canvas, display zoom, and where untitled images are saved.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, DisplayConfig, DrawingConfig, OutputConfig};

use crate::document::{BlankCanvas, GeneratedName, expand_tilde};
use crate::draw::{RED, WHITE};
use crate::input::{MAX_THICKNESS, MAX_ZOOM, MIN_THICKNESS, Style, ToolBox, fit_zoom};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CANVAS_SIDE: i32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "blue"
/// default_thickness = 3
/// default_tool = "rectangle"
///
/// [canvas]
/// width = 800
/// height = 600
///
/// [display]
/// zoom = 2
///
/// [output]
/// save_directory = "~/Pictures/Sketchpad"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting tool and stroke style
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Blank canvas used when there is nothing to open
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Display magnification
    #[serde(default)]
    pub display: DisplayConfig,

    /// Location of untitled images
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1 - 50
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    /// - `display.zoom`: 1 - 32
    fn validate_and_clamp(&mut self) {
        if !(MIN_THICKNESS..=MAX_THICKNESS).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {}, clamping to {}-{} range",
                self.drawing.default_thickness,
                MIN_THICKNESS,
                MAX_THICKNESS
            );
            self.drawing.default_thickness = self
                .drawing
                .default_thickness
                .clamp(MIN_THICKNESS, MAX_THICKNESS);
        }

        if !(1..=MAX_CANVAS_SIDE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_SIDE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_SIDE);
        }

        if !(1..=MAX_CANVAS_SIDE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_SIDE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_SIDE);
        }

        if let Some(zoom) = self.display.zoom
            && !(1..=MAX_ZOOM).contains(&zoom)
        {
            log::warn!("Invalid zoom {}, clamping to 1-{} range", zoom, MAX_ZOOM);
            self.display.zoom = Some(zoom.clamp(1, MAX_ZOOM));
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
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

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Initial stroke style for an image of the given size.
    pub fn style_for(&self, image_width: i32, image_height: i32) -> Style {
        let zoom = self.display.zoom.unwrap_or_else(|| {
            fit_zoom(
                self.display.screen_width,
                self.display.screen_height,
                image_width.max(0) as u32,
                image_height.max(0) as u32,
            )
        });
        let mut style = Style {
            color: self.drawing.default_color.to_color_or(RED),
            freehand: self.drawing.freehand,
            ..Style::default()
        };
        style.set_thickness(self.drawing.default_thickness);
        style.set_zoom(zoom);
        style
    }

    /// Tool selection at startup.
    pub fn tool_box(&self) -> ToolBox {
        ToolBox::new(self.drawing.default_tool)
    }

    /// Canvas used when there is nothing to open.
    pub fn blank_canvas(&self) -> BlankCanvas {
        BlankCanvas {
            width: self.canvas.width,
            height: self.canvas.height,
            background: self.canvas.background.to_color_or(WHITE),
        }
    }

    /// Save prompt that names untitled images after the current time.
    pub fn save_prompt(&self) -> GeneratedName {
        GeneratedName::new(
            expand_tilde(&self.output.save_directory),
            self.output.filename_template.clone(),
        )
    }
}
