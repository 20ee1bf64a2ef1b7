//! Image file loading and PNG saving.

use super::types::DocumentError;
use crate::draw::{Raster, RenderError};
use chrono::Local;
use image::{DynamicImage, ImageReader};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

const PNG_SUFFIX: &str = ".png";

/// Appends `.png` unless the path already ends with it (case-sensitive).
pub fn with_png_extension(path: &Path) -> PathBuf {
    let raw = path.as_os_str();
    if raw.to_string_lossy().ends_with(PNG_SUFFIX) {
        return path.to_path_buf();
    }
    let mut extended = raw.to_os_string();
    extended.push(PNG_SUFFIX);
    PathBuf::from(extended)
}

/// Final path component for display, or the whole path when it has none.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
///
/// # Returns
/// Generated filename with a `.png` extension
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    format!("{}{}", now.format(template), PNG_SUFFIX)
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, DocumentError> {
    if !directory.exists() {
        log::info!("Creating save directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(directory.to_path_buf())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Loads any image format the `image` crate decodes as an opaque raster
/// (alpha flattened over white). The format is sniffed from the file contents.
pub fn load_image(path: &Path) -> Result<Raster, DocumentError> {
    let open_error = |source| DocumentError::Open {
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)
        .map_err(open_error)?
        .with_guessed_format()
        .map_err(open_error)?
        .decode()
        .map_err(|source| DocumentError::Decode {
            origin: path.display().to_string(),
            source,
        })?;
    let raster = raster_from_image(&decoded)?;
    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        raster.width(),
        raster.height()
    );
    Ok(raster)
}

pub(crate) fn raster_from_image(image: &DynamicImage) -> Result<Raster, RenderError> {
    let rgba = image.to_rgba8();
    Raster::from_rgba(rgba.width(), rgba.height(), rgba.as_raw())
}

/// Writes `image` to `path` as PNG, replacing any existing file.
pub fn save_png(image: &Raster, path: &Path) -> Result<(), DocumentError> {
    let file = File::create(path).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source: cairo::IoError::Io(source),
    })?;
    let mut writer = BufWriter::new(file);
    image
        .write_png(&mut writer)
        .map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Saved image to {}", path.display());
    Ok(())
}
