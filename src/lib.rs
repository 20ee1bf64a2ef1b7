//! Drag-to-shape raster sketching.
//!
//! A [`SketchSession`](input::SketchSession) turns pointer drags into lines,
//! rectangles, and ellipses on an in-memory raster, with single-level undo.
//! [`document`] loads and saves the image, [`script`] replays recorded
//! gestures, and [`config`] supplies the starting tool, style, and canvas.

pub mod config;
pub mod document;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
