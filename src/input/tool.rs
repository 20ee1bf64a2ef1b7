//! Drawing tool selection and shape dispatch.

use super::span::DragSpan;
use super::style::Style;
use crate::draw::{Canvas, RenderError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool with its per-tool switches.
///
/// The active tool determines what shape a drag produces and which span
/// transforms run before the shape is handed to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Straight line between press and pointer
    Line,
    /// Axis-aligned rectangle spanning the drag
    Rectangle { fill: bool },
    /// Ellipse inscribed in the drag box, or centred on the press point
    Ellipse { fill: bool, centered: bool },
}

impl Tool {
    /// Reshapes the working copy `span` and rasterizes the result onto `canvas`.
    ///
    /// `span` is consumed as scratch space: callers must pass a copy, never the
    /// live gesture.
    pub fn draw<C: Canvas>(
        &self,
        span: &mut DragSpan,
        canvas: &mut C,
        style: &Style,
    ) -> Result<(), RenderError> {
        match *self {
            Tool::Line => {
                if !style.freehand {
                    span.snap_to_axis_or_diagonal(false);
                }
                canvas.draw_line(span.to_draw_list(), style.color, style.thickness.max(1))
            }
            Tool::Rectangle { fill } => {
                snap_box(span, style);
                let (d_row, d_col) = span.coordinate_difference();
                let width = clamp_width(style.thickness, d_row.min(d_col));
                canvas.draw_rectangle(
                    span.to_draw_list(),
                    fill.then_some(style.color),
                    style.color,
                    width,
                )
            }
            Tool::Ellipse { fill, centered } => {
                if centered {
                    span.derive_centered(style.freehand);
                } else {
                    snap_box(span, style);
                }
                // max, not min: a flat ellipse still gets a full ring
                let (d_row, d_col) = span.coordinate_difference();
                let width = clamp_width(style.thickness, d_row.max(d_col));
                canvas.draw_ellipse(
                    span.to_draw_list(),
                    fill.then_some(style.color),
                    style.color,
                    width,
                )
            }
        }
    }
}

fn snap_box(span: &mut DragSpan, style: &Style) {
    if !style.freehand {
        span.snap_to_axis_or_diagonal(true);
    }
    span.normalize_to_bounding_box();
}

/// Caps the stroke at `extent` pixels, but never below 1.
fn clamp_width(thickness: u32, extent: i32) -> u32 {
    let extent = u32::try_from(extent).unwrap_or(0);
    thickness.min(extent).max(1)
}

/// Tool identity without per-tool switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Line,
    Rectangle,
    Ellipse,
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Ellipse => "ellipse",
        };
        f.write_str(name)
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" | "l" => Ok(ToolKind::Line),
            "rectangle" | "rect" | "r" => Ok(ToolKind::Rectangle),
            "ellipse" | "circle" | "c" => Ok(ToolKind::Ellipse),
            other => Err(format!("Unknown tool '{other}'")),
        }
    }
}

/// All tools with their remembered switches, plus which one is selected.
///
/// Switching tools keeps every tool's own fill/centre setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolBox {
    pub selected: ToolKind,
    pub rectangle_fill: bool,
    pub ellipse_fill: bool,
    pub ellipse_centered: bool,
}

impl Default for ToolBox {
    fn default() -> Self {
        Self::new(ToolKind::Line)
    }
}

impl ToolBox {
    pub fn new(selected: ToolKind) -> Self {
        Self {
            selected,
            rectangle_fill: false,
            ellipse_fill: false,
            ellipse_centered: false,
        }
    }

    /// The selected tool with its current switches.
    pub fn current(&self) -> Tool {
        match self.selected {
            ToolKind::Line => Tool::Line,
            ToolKind::Rectangle => Tool::Rectangle {
                fill: self.rectangle_fill,
            },
            ToolKind::Ellipse => Tool::Ellipse {
                fill: self.ellipse_fill,
                centered: self.ellipse_centered,
            },
        }
    }

    /// Sets the fill switch of the selected tool.
    ///
    /// Returns `false` when the selected tool has no fill (lines).
    pub fn set_fill(&mut self, fill: bool) -> bool {
        match self.selected {
            ToolKind::Line => false,
            ToolKind::Rectangle => {
                self.rectangle_fill = fill;
                true
            }
            ToolKind::Ellipse => {
                self.ellipse_fill = fill;
                true
            }
        }
    }
}
