//! Sketch session state machine and image ownership.

use crate::draw::{Color, Raster, RenderError};
use crate::input::{DragSpan, Style, ToolBox, ToolKind};
use log::debug;

/// Current gesture state.
///
/// A session is idle until the pointer is pressed and stays dragging until the
/// matching release (or a cancel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Waiting for a press
    Idle,
    /// Pointer held; `span` tracks the press point and latest position
    Dragging { span: DragSpan },
}

/// One editing session over a single image.
///
/// The session exclusively owns three rasters of identical size:
/// - `image`: the committed picture
/// - `previous`: the committed picture before the last commit (undo depth 1)
/// - `scratch`: what is shown while dragging, rebuilt from `image` on every move
pub struct SketchSession {
    pub(super) image: Raster,
    pub(super) previous: Raster,
    pub(super) scratch: Raster,
    /// Current gesture state machine
    pub state: DrawingState,
    /// Stroke parameters handed to every draw call
    pub style: Style,
    /// Selected tool and per-tool switches
    pub tools: ToolBox,
    /// Whether the displayed image changed since the last `take_redraw`
    pub needs_redraw: bool,
}

impl SketchSession {
    /// Starts a session over `image`.
    ///
    /// Undo before the first commit swaps two identical copies.
    pub fn new(image: Raster, style: Style, tools: ToolBox) -> Result<Self, RenderError> {
        let previous = image.duplicate()?;
        let scratch = image.duplicate()?;
        debug!(
            "Session started on {}x{} image with {} tool",
            image.width(),
            image.height(),
            tools.selected
        );
        Ok(Self {
            image,
            previous,
            scratch,
            state: DrawingState::Idle,
            style,
            tools,
            needs_redraw: true,
        })
    }

    /// The committed image.
    pub fn image(&self) -> &Raster {
        &self.image
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DrawingState::Dragging { .. })
    }

    /// Reads a committed pixel, `None` outside the image.
    pub fn pixel(&mut self, col: i32, row: i32) -> Result<Option<Color>, RenderError> {
        self.image.pixel(col, row)
    }

    /// Reads a displayed pixel, `None` outside the image.
    pub fn preview_pixel(&mut self, col: i32, row: i32) -> Result<Option<Color>, RenderError> {
        self.scratch.pixel(col, row)
    }

    /// Swaps the committed image with the one before the last commit.
    ///
    /// Calling it twice restores the image bit for bit. Ignored mid-drag.
    pub fn undo(&mut self) -> Result<(), RenderError> {
        if self.is_dragging() {
            debug!("Ignoring undo while dragging");
            return Ok(());
        }
        std::mem::swap(&mut self.image, &mut self.previous);
        self.scratch = self.image.duplicate()?;
        self.needs_redraw = true;
        debug!("Undo: swapped committed and previous image");
        Ok(())
    }

    /// Returns and clears the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// The displayed image enlarged by the current zoom factor.
    pub fn display(&self) -> Result<Raster, RenderError> {
        self.scratch.scaled(self.style.zoom)
    }

    // =========================================================================
    // Controls
    // =========================================================================

    pub fn select_tool(&mut self, kind: ToolKind) {
        if self.tools.selected != kind {
            debug!("Tool changed: {} -> {}", self.tools.selected, kind);
        }
        self.tools.selected = kind;
    }

    /// Sets the fill switch of the selected tool; `false` when it has none.
    pub fn set_fill(&mut self, fill: bool) -> bool {
        self.tools.set_fill(fill)
    }

    /// Sets whether ellipses grow from the press point as their centre.
    pub fn set_centered(&mut self, centered: bool) {
        self.tools.ellipse_centered = centered;
    }

    pub fn set_freehand(&mut self, freehand: bool) {
        self.style.freehand = freehand;
    }

    pub fn set_thickness(&mut self, thickness: u32) {
        self.style.set_thickness(thickness);
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn set_zoom(&mut self, zoom: u32) {
        let before = self.style.zoom;
        self.style.set_zoom(zoom);
        if self.style.zoom != before {
            self.needs_redraw = true;
        }
    }
}
