//! Pixel surfaces that shapes are rasterized onto.
//!
//! [`Canvas`] is the seam between the geometry engine and the rasterizer: tools
//! compute final coordinates and hand them to a canvas. [`Raster`] is the
//! production canvas, a Cairo RGB24 image surface.

use super::color::{Color, WHITE};
use super::render;
use thiserror::Error;

/// Errors raised while drawing onto or reading back a raster.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Zoom factor {zoom} is too large for this image")]
    ZoomTooLarge { zoom: u32 },
}

/// Rasterizer surface used by tools.
///
/// All coordinates use the column-first draw-list order `[x0, y0, x1, y1]`.
pub trait Canvas {
    /// Strokes a straight line of `width` pixels.
    fn draw_line(&mut self, points: [i32; 4], color: Color, width: u32) -> Result<(), RenderError>;

    /// Draws an axis-aligned rectangle outline inside `bounds`, optionally filled.
    fn draw_rectangle(
        &mut self,
        bounds: [i32; 4],
        fill: Option<Color>,
        outline: Color,
        width: u32,
    ) -> Result<(), RenderError>;

    /// Draws an ellipse inscribed in `bounds`, optionally filled.
    fn draw_ellipse(
        &mut self,
        bounds: [i32; 4],
        fill: Option<Color>,
        outline: Color,
        width: u32,
    ) -> Result<(), RenderError>;
}

/// Opaque RGB pixel buffer backed by a Cairo image surface.
#[derive(Debug)]
pub struct Raster {
    surface: cairo::ImageSurface,
}

impl Raster {
    /// Creates a `width`x`height` raster filled with `background`.
    pub fn blank(width: i32, height: i32, background: Color) -> Result<Self, RenderError> {
        if width <= 0 || height <= 0 {
            return Err(RenderError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            let (r, g, b) = background.components();
            ctx.set_source_rgb(r, g, b);
            ctx.paint()?;
        }
        Ok(Self { surface })
    }

    /// Builds a raster from packed RGBA8 pixels, flattening alpha over white.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, RenderError> {
        let size_error = || RenderError::InvalidSize {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        };
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4));
        if expected != Some(rgba.len()) {
            return Err(size_error());
        }
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(size_error());
        };

        let mut raster = Self::blank(w, h, WHITE)?;
        let stride = raster.surface.stride() as usize;
        raster.surface.flush();
        {
            let mut data = raster.surface.data()?;
            for (index, pixel) in rgba.chunks_exact(4).enumerate() {
                let &[r, g, b, a] = pixel else { continue };
                let over_white =
                    |c: u8| (c as u32 * a as u32 + 255 * (255 - a as u32) + 127) / 255;
                let word = (over_white(r) << 16) | (over_white(g) << 8) | over_white(b);
                let offset = (index / width as usize) * stride + (index % width as usize) * 4;
                data[offset..offset + 4].copy_from_slice(&word.to_ne_bytes());
            }
        }
        Ok(raster)
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Returns a full, independent copy of this raster.
    pub fn duplicate(&self) -> Result<Self, RenderError> {
        let surface =
            cairo::ImageSurface::create(cairo::Format::Rgb24, self.width(), self.height())?;
        {
            let ctx = cairo::Context::new(&surface)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            ctx.paint()?;
        }
        Ok(Self { surface })
    }

    /// Returns a copy enlarged `zoom` times with nearest-neighbour sampling.
    pub fn scaled(&self, zoom: u32) -> Result<Self, RenderError> {
        let scaled_size = i32::try_from(zoom.max(1)).ok().and_then(|factor| {
            Some((
                factor,
                self.width().checked_mul(factor)?,
                self.height().checked_mul(factor)?,
            ))
        });
        let Some((zoom, width, height)) = scaled_size else {
            return Err(RenderError::ZoomTooLarge { zoom });
        };
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            ctx.scale(zoom as f64, zoom as f64);
            let pattern = cairo::SurfacePattern::create(&self.surface);
            pattern.set_filter(cairo::Filter::Nearest);
            ctx.set_source(&pattern)?;
            ctx.paint()?;
        }
        Ok(Self { surface })
    }

    /// Reads the pixel at (`col`, `row`), or `None` outside the raster.
    pub fn pixel(&mut self, col: i32, row: i32) -> Result<Option<Color>, RenderError> {
        if col < 0 || row < 0 || col >= self.width() || row >= self.height() {
            return Ok(None);
        }
        let stride = self.surface.stride() as usize;
        self.surface.flush();
        let data = self.surface.data()?;
        let offset = row as usize * stride + col as usize * 4;
        let word = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        Ok(Some(Color::new(
            (word >> 16) as u8,
            (word >> 8) as u8,
            word as u8,
        )))
    }

    /// Compares every pixel with `other`; rasters of different sizes never match.
    pub fn same_pixels(&mut self, other: &mut Raster) -> Result<bool, RenderError> {
        if self.width() != other.width() || self.height() != other.height() {
            return Ok(false);
        }
        for row in 0..self.height() {
            for col in 0..self.width() {
                if self.pixel(col, row)? != other.pixel(col, row)? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Encodes the raster as PNG.
    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> Result<(), cairo::IoError> {
        self.surface.write_to_png(writer)
    }

    fn context(&self) -> Result<cairo::Context, RenderError> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_antialias(cairo::Antialias::None);
        Ok(ctx)
    }
}

impl Canvas for Raster {
    fn draw_line(&mut self, points: [i32; 4], color: Color, width: u32) -> Result<(), RenderError> {
        let ctx = self.context()?;
        render::render_line(&ctx, points, color, width)?;
        Ok(())
    }

    fn draw_rectangle(
        &mut self,
        bounds: [i32; 4],
        fill: Option<Color>,
        outline: Color,
        width: u32,
    ) -> Result<(), RenderError> {
        let ctx = self.context()?;
        render::render_rect(&ctx, bounds, fill, outline, width)?;
        Ok(())
    }

    fn draw_ellipse(
        &mut self,
        bounds: [i32; 4],
        fill: Option<Color>,
        outline: Color,
        width: u32,
    ) -> Result<(), RenderError> {
        let ctx = self.context()?;
        render::render_ellipse(&ctx, bounds, fill, outline, width)?;
        Ok(())
    }
}
