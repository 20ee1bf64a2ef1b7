//! Cairo-based rendering functions for shape primitives.
//!
//! Coordinates follow the column-first draw-list convention:
//! `[x0, y0, x1, y1]` where `x` is a column and `y` a row. Boxes are inclusive
//! pixel ranges, so `[2, 2, 4, 4]` covers a 3x3 block of pixels. Outlines are
//! laid inside the box, never outside it.

use super::color::Color;

fn set_source(ctx: &cairo::Context, color: Color) {
    let (r, g, b) = color.components();
    ctx.set_source_rgb(r, g, b);
}

/// Normalizes a draw list into `(min_x, min_y, width, height)` pixel extents.
fn pixel_extents(bounds: [i32; 4]) -> (f64, f64, f64, f64) {
    let [x0, y0, x1, y1] = bounds;
    let (min_x, max_x) = (x0.min(x1) as f64, x0.max(x1) as f64);
    let (min_y, max_y) = (y0.min(y1) as f64, y0.max(y1) as f64);
    (min_x, min_y, max_x - min_x + 1.0, max_y - min_y + 1.0)
}

/// Render a straight stroke between two pixel centres.
///
/// A zero-length line leaves a `width`-sized square dot so that a click
/// without a drag is still visible.
pub fn render_line(
    ctx: &cairo::Context,
    points: [i32; 4],
    color: Color,
    width: u32,
) -> Result<(), cairo::Error> {
    let [x0, y0, x1, y1] = points;
    let width = width.max(1) as f64;
    set_source(ctx, color);

    if x0 == x1 && y0 == y1 {
        let half = width / 2.0;
        ctx.rectangle(x0 as f64 + 0.5 - half, y0 as f64 + 0.5 - half, width, width);
        return ctx.fill();
    }

    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Butt);
    ctx.move_to(x0 as f64 + 0.5, y0 as f64 + 0.5);
    ctx.line_to(x1 as f64 + 0.5, y1 as f64 + 0.5);
    ctx.stroke()
}

/// Render an axis-aligned rectangle with an optional fill and an inner outline.
pub fn render_rect(
    ctx: &cairo::Context,
    bounds: [i32; 4],
    fill: Option<Color>,
    outline: Color,
    width: u32,
) -> Result<(), cairo::Error> {
    let (x, y, w, h) = pixel_extents(bounds);
    let width = width.max(1) as f64;

    if let Some(fill) = fill {
        set_source(ctx, fill);
        ctx.rectangle(x, y, w, h);
        ctx.fill()?;
    }

    set_source(ctx, outline);
    let inner_w = w - width;
    let inner_h = h - width;
    if inner_w <= 0.0 || inner_h <= 0.0 {
        // Outline covers the whole box.
        ctx.rectangle(x, y, w, h);
        return ctx.fill();
    }

    let inset = width / 2.0;
    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.rectangle(x + inset, y + inset, inner_w, inner_h);
    ctx.stroke()
}

fn ellipse_path(ctx: &cairo::Context, cx: f64, cy: f64, rx: f64, ry: f64) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, std::f64::consts::PI * 2.0);
    ctx.restore()
}

/// Render an ellipse inscribed in the box, with an optional fill and an inner outline.
pub fn render_ellipse(
    ctx: &cairo::Context,
    bounds: [i32; 4],
    fill: Option<Color>,
    outline: Color,
    width: u32,
) -> Result<(), cairo::Error> {
    let (x, y, w, h) = pixel_extents(bounds);
    let width = width.max(1) as f64;
    let (rx, ry) = (w / 2.0, h / 2.0);
    let (cx, cy) = (x + rx, y + ry);

    if let Some(fill) = fill {
        set_source(ctx, fill);
        ellipse_path(ctx, cx, cy, rx, ry)?;
        ctx.fill()?;
    }

    set_source(ctx, outline);
    let inset = width / 2.0;
    if rx - inset <= 0.0 || ry - inset <= 0.0 {
        // Ring thicker than the ellipse itself: paint it solid.
        ellipse_path(ctx, cx, cy, rx, ry)?;
        return ctx.fill();
    }

    ctx.set_line_width(width);
    ellipse_path(ctx, cx, cy, rx - inset, ry - inset)?;
    ctx.stroke()
}
