//! Error and prompt types for image persistence.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draw::RenderError;

/// Errors that can occur while loading or saving an image.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: cairo::IoError,
    },

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Render(#[from] RenderError),
}

/// Asks the user where an untitled image should be saved.
///
/// Stands in for a save dialog. `None` means the user dismissed it.
pub trait SavePrompt {
    fn ask_path(&mut self) -> Result<Option<PathBuf>, DocumentError>;
}

/// Prompt that always answers with the same path.
#[derive(Debug, Clone)]
pub struct FixedPath(pub Option<PathBuf>);

impl SavePrompt for FixedPath {
    fn ask_path(&mut self) -> Result<Option<PathBuf>, DocumentError> {
        Ok(self.0.clone())
    }
}

/// Prompt that invents a timestamped name inside a save directory.
#[derive(Debug, Clone)]
pub struct GeneratedName {
    /// Directory files are placed in, created on demand.
    pub save_directory: PathBuf,
    /// File stem template (supports chrono format specifiers).
    pub filename_template: String,
}

impl GeneratedName {
    pub fn new(save_directory: impl AsRef<Path>, filename_template: impl Into<String>) -> Self {
        Self {
            save_directory: save_directory.as_ref().to_path_buf(),
            filename_template: filename_template.into(),
        }
    }
}

impl SavePrompt for GeneratedName {
    fn ask_path(&mut self) -> Result<Option<PathBuf>, DocumentError> {
        let directory = super::file::ensure_directory_exists(&self.save_directory)?;
        let filename = super::file::generate_filename(&self.filename_template);
        Ok(Some(directory.join(filename)))
    }
}
