//! Drag gesture geometry.
//!
//! A [`DragSpan`] is the pair of pointer positions that defines one shape: the
//! press point and the current (or release) point. Tools take a working copy of
//! the span and reshape it with the operations below before handing its
//! coordinates to a canvas.

use super::point::Point;

/// Press point, current point, and whether the pointer is still held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSpan {
    pub start: Point,
    pub end: Point,
    /// True only between a press and its matching release.
    pub dragging: bool,
}

impl DragSpan {
    /// Builds a span from two points without marking it as dragging.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            dragging: false,
        }
    }

    /// Starts a fresh gesture at `point`.
    pub fn begin(point: Point) -> Self {
        Self {
            start: point,
            end: point,
            dragging: true,
        }
    }

    /// Absolute `(row, col)` distance between start and end, saturated to `i32`.
    pub fn coordinate_difference(&self) -> (i32, i32) {
        let (d_row, d_col) = self.wide_difference();
        (saturate(d_row), saturate(d_col))
    }

    fn wide_difference(&self) -> (i64, i64) {
        (
            (i64::from(self.start.row) - i64::from(self.end.row)).abs(),
            (i64::from(self.start.col) - i64::from(self.end.col)).abs(),
        )
    }

    /// Snaps the gesture onto a vertical, horizontal, or 45° diagonal stroke.
    ///
    /// Vertical is tested before horizontal and both before diagonal, so exact
    /// ties (`d_row == 2 * d_col`, `d_row == d_col == 0`) resolve in that order.
    /// With `diagonal_only` the axis checks are skipped.
    ///
    /// Diagonals are rewritten so that `start` is the upper endpoint and the
    /// stroke runs top to bottom with `length` rows and `length` columns.
    /// Arithmetic is done in `i64`; results past the `i32` range saturate.
    pub fn snap_to_axis_or_diagonal(&mut self, diagonal_only: bool) {
        let (d_row, d_col) = self.wide_difference();

        if !diagonal_only {
            if d_row >= 2 * d_col {
                self.end.col = self.start.col;
                return;
            }
            if d_col >= 2 * d_row {
                self.end.row = self.start.row;
                return;
            }
        }

        let length = round_half_even(d_row + d_col);
        let (start, end) = (self.start, self.end);
        let upward = end.row < start.row;
        let backslash = (end.row >= start.row && end.col >= start.col)
            || (upward && end.col <= start.col);
        // "/" walks left while going down
        let step = if backslash { length } else { -length };

        let (mut top, mut top_col) = (i64::from(start.row), i64::from(start.col));
        if upward {
            top -= length;
            top_col -= step;
        }

        self.start = Point::new(saturate(top), saturate(top_col));
        self.end = Point::new(saturate(top + length), saturate(top_col + step));
    }

    /// Reorders the corners into an axis-aligned box: `start` becomes the
    /// top-left and `end` the bottom-right corner.
    pub fn normalize_to_bounding_box(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = Point::new(start.row.min(end.row), start.col.min(end.col));
        self.end = Point::new(start.row.max(end.row), start.col.max(end.col));
    }

    /// Treats `start` as the centre and replaces the span with the box of the
    /// shape around it.
    ///
    /// Free-hand keeps the raw pointer offsets as half-axes (an ellipse through
    /// the pointer's bounding corner); otherwise the box is the square around a
    /// circle whose radius is the pointer's distance from the centre.
    pub fn derive_centered(&mut self, freehand: bool) {
        let (d_row, d_col) = self.wide_difference();
        let (row, col) = (i64::from(self.start.row), i64::from(self.start.col));

        let (half_rows, half_cols) = if freehand {
            (d_row, d_col)
        } else {
            let radius = ((d_row as f64).powi(2) + (d_col as f64).powi(2)).sqrt().round() as i64;
            (radius, radius)
        };

        self.start = Point::new(saturate(row - half_rows), saturate(col - half_cols));
        self.end = Point::new(saturate(row + half_rows), saturate(col + half_cols));
    }

    /// Coordinates in rasterizer order: `[start.col, start.row, end.col, end.row]`.
    pub fn to_draw_list(&self) -> [i32; 4] {
        [self.start.col, self.start.row, self.end.col, self.end.row]
    }
}

/// `sum / 2` rounded half to even, so `6.5 -> 6` and `7.5 -> 8`.
fn round_half_even(sum: i64) -> i64 {
    (sum as f64 / 2.0).round_ties_even() as i64
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
