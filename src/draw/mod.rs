//! Rasterization primitives (Cairo-based).
//!
//! This module defines the pixel-level side of sketching:
//! - [`Color`]: RGB color with predefined constants
//! - [`Canvas`]: the surface contract tools draw onto
//! - [`Raster`]: Cairo image surface implementing [`Canvas`]
//! - Rendering functions for lines, rectangles, and ellipses

pub mod canvas;
pub mod color;
pub mod render;

pub use canvas::{Canvas, Raster, RenderError};
pub use color::Color;
pub use render::{render_ellipse, render_line, render_rect};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
