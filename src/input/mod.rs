//! Pointer input and the drag-to-shape engine.
//!
//! Pointer samples arrive in image space as [`Point`]s. A [`SketchSession`]
//! turns press/move/release sequences into [`DragSpan`]s, lets the selected
//! [`Tool`] reshape a copy of the span, and rasterizes the result onto a
//! preview raster that is committed on release.

pub mod point;
pub mod span;
pub mod state;
pub mod style;
pub mod tool;

pub use point::Point;
pub use span::DragSpan;
pub use state::{DrawingState, SketchSession};
pub use style::{MAX_THICKNESS, MAX_ZOOM, MIN_THICKNESS, Style, fit_zoom};
pub use tool::{Tool, ToolBox, ToolKind};
