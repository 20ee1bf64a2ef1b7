//! Shared stroke parameters read by every tool.

use crate::draw::{Color, RED};

/// Smallest and largest stroke thickness accepted from controls.
pub const MIN_THICKNESS: u32 = 1;
pub const MAX_THICKNESS: u32 = 50;

/// Largest display magnification.
pub const MAX_ZOOM: u32 = 32;

/// Stroke settings shared by all tools.
///
/// Owned by the session and passed by reference into every draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Stroke thickness in pixels
    pub thickness: u32,
    /// Stroke (and fill) color
    pub color: Color,
    /// When set, gestures are drawn as dragged instead of snapped
    pub freehand: bool,
    /// Display magnification; pointer positions are divided by it
    pub zoom: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            thickness: 5,
            color: RED,
            freehand: false,
            zoom: 1,
        }
    }
}

impl Style {
    /// Sets the thickness, clamped to the accepted range.
    pub fn set_thickness(&mut self, thickness: u32) {
        let clamped = thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
        if clamped != thickness {
            log::warn!(
                "Thickness {} out of range, clamping to {}-{}",
                thickness,
                MIN_THICKNESS,
                MAX_THICKNESS
            );
        }
        self.thickness = clamped;
    }

    /// Sets the zoom factor, clamped to 1-32.
    pub fn set_zoom(&mut self, zoom: u32) {
        let clamped = zoom.clamp(1, MAX_ZOOM);
        if clamped != zoom {
            log::warn!("Zoom {} out of range, clamping to 1-{}", zoom, MAX_ZOOM);
        }
        self.zoom = clamped;
    }
}

/// Picks the largest zoom that keeps the image within half the screen.
///
/// Never returns less than 1, so images larger than half the screen are shown
/// unscaled.
pub fn fit_zoom(screen_width: u32, screen_height: u32, image_width: u32, image_height: u32) -> u32 {
    if image_width == 0 || image_height == 0 {
        return 1;
    }
    let by_height = (screen_height / image_height) / 2;
    let by_width = (screen_width / image_width) / 2;
    by_height.min(by_width).max(1)
}
