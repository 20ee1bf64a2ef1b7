//! Image-space pointer coordinates.

/// A pixel position in image space, stored row-first.
///
/// Points are `Copy`; every geometry transform works on its own copy and never
/// on the pointer sample it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Converts a screen-space pointer position into image space.
    ///
    /// The displayed image is enlarged `zoom` times, so screen `x`/`y` are
    /// floor-divided by the zoom factor (`x` maps to the column, `y` to the row).
    pub fn from_screen(x: i32, y: i32, zoom: u32) -> Self {
        let zoom = i32::try_from(zoom.max(1)).unwrap_or(i32::MAX);
        Self {
            row: y.div_euclid(zoom),
            col: x.div_euclid(zoom),
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}
