//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black,
    /// or a `#RRGGBB` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown color names fall back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {}", name, fallback.to_hex());
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{ORANGE, RED, WHITE};

    #[test]
    fn test_color_spec_variants() {
        assert_eq!(ColorSpec::Name("white".into()).to_color_or(RED), WHITE);
        assert_eq!(ColorSpec::Name("#ff8000".into()).to_color_or(RED), ORANGE);
        assert_eq!(ColorSpec::Rgb([255, 128, 0]).to_color_or(RED), ORANGE);
        assert_eq!(ColorSpec::Name("mauve".into()).to_color_or(RED), RED);
        assert_eq!(ColorSpec::Name("mauve".into()).to_color_or(WHITE), WHITE);
    }
}
