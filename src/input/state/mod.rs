mod core;
mod mouse;

pub use core::{DrawingState, SketchSession};
