use crate::draw::RenderError;
use crate::input::{DragSpan, Point};
use log::debug;

use super::{DrawingState, SketchSession};

impl SketchSession {
    /// Processes a pointer press at an image-space point.
    ///
    /// # Behavior
    /// - While Idle: starts a fresh span at `point` and resets the preview
    /// - While Dragging: ignored, the current gesture keeps its press point
    pub fn press(&mut self, point: Point) -> Result<(), RenderError> {
        if self.is_dragging() {
            debug!("Ignoring press at {point} while dragging");
            return Ok(());
        }
        self.scratch = self.image.duplicate()?;
        self.state = DrawingState::Dragging {
            span: DragSpan::begin(point),
        };
        debug!("Drag started at {point}");
        Ok(())
    }

    /// Processes pointer motion while the button is held.
    ///
    /// Every move rebuilds the preview from the committed image, so only the
    /// latest shape is ever visible. The tool reshapes its own copy of the span;
    /// the stored span keeps the raw press and pointer points.
    pub fn move_to(&mut self, point: Point) -> Result<(), RenderError> {
        let DrawingState::Dragging { span } = &mut self.state else {
            debug!("Ignoring move to {point} while idle");
            return Ok(());
        };
        span.end = point;
        let mut working = *span;

        let mut preview = self.image.duplicate()?;
        self.tools.current().draw(&mut working, &mut preview, &self.style)?;
        self.scratch = preview;
        self.needs_redraw = true;
        Ok(())
    }

    /// Processes the pointer release and commits the preview.
    ///
    /// The committed image before this call becomes the undo target.
    pub fn release(&mut self) -> Result<(), RenderError> {
        let DrawingState::Dragging { span } = self.state else {
            debug!("Ignoring release while idle");
            return Ok(());
        };
        let committed = self.scratch.duplicate()?;
        self.previous = std::mem::replace(&mut self.image, committed);
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
        debug!("Committed {} from {} to {}", self.tools.selected, span.start, span.end);
        Ok(())
    }

    /// Abandons the current drag without committing anything.
    pub fn cancel(&mut self) -> Result<(), RenderError> {
        if !self.is_dragging() {
            return Ok(());
        }
        self.scratch = self.image.duplicate()?;
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
        debug!("Drag cancelled");
        Ok(())
    }

    /// Press at a screen-space position, divided down by the zoom factor.
    pub fn pointer_down(&mut self, x: i32, y: i32) -> Result<(), RenderError> {
        self.press(Point::from_screen(x, y, self.style.zoom))
    }

    /// Motion at a screen-space position, divided down by the zoom factor.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> Result<(), RenderError> {
        self.move_to(Point::from_screen(x, y, self.style.zoom))
    }
}
