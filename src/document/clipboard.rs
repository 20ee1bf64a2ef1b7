//! Clipboard image source used when no file is given at startup.

use super::file::raster_from_image;
use super::types::DocumentError;
use crate::draw::Raster;
use std::io::Read;
use wl_clipboard_rs::paste::{ClipboardType, Error as PasteError, MimeType, Seat, get_contents};

const PNG_MIME: &str = "image/png";

/// A clipboard that may hold a PNG image.
pub trait ImageClipboard {
    /// Returns the PNG bytes on the clipboard, or `None` when it holds no image.
    fn read_png(&mut self) -> Result<Option<Vec<u8>>, DocumentError>;
}

/// Regular (Ctrl+V) Wayland clipboard of the default seat.
#[derive(Debug, Default, Clone, Copy)]
pub struct WaylandClipboard;

impl ImageClipboard for WaylandClipboard {
    fn read_png(&mut self) -> Result<Option<Vec<u8>>, DocumentError> {
        let contents = get_contents(
            ClipboardType::Regular,
            Seat::Unspecified,
            MimeType::Specific(PNG_MIME),
        );
        match contents {
            Ok((mut pipe, mime)) => {
                let mut bytes = Vec::new();
                pipe.read_to_end(&mut bytes)?;
                log::debug!("Read {} bytes of {} from clipboard", bytes.len(), mime);
                Ok(Some(bytes))
            }
            Err(PasteError::ClipboardEmpty | PasteError::NoMimeType | PasteError::NoSeats) => {
                log::debug!("Clipboard holds no image");
                Ok(None)
            }
            Err(err) => {
                log::warn!("Clipboard unavailable, starting without it: {}", err);
                Ok(None)
            }
        }
    }
}

/// Clipboard that never holds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ImageClipboard for NoClipboard {
    fn read_png(&mut self) -> Result<Option<Vec<u8>>, DocumentError> {
        Ok(None)
    }
}

/// Decodes the clipboard image, if any, into an opaque raster.
///
/// Any format the `image` crate recognises is accepted; data that does not
/// decode is an error.
pub fn image_from_clipboard(
    clipboard: &mut dyn ImageClipboard,
) -> Result<Option<Raster>, DocumentError> {
    let Some(bytes) = clipboard.read_png()? else {
        return Ok(None);
    };
    let decoded = image::load_from_memory(&bytes).map_err(|source| DocumentError::Decode {
        origin: "clipboard".to_string(),
        source,
    })?;
    let raster = raster_from_image(&decoded)?;
    log::info!(
        "Using {}x{} image from clipboard",
        raster.width(),
        raster.height()
    );
    Ok(Some(raster))
}
