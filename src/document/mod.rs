//! Image persistence: the file behind a session and where its first image
//! comes from.
//!
//! A [`Document`] remembers the path an image was opened from or last saved
//! to. Untitled documents ask a [`SavePrompt`] for a path on first save.

pub mod clipboard;
pub mod file;
pub mod types;

pub use clipboard::{ImageClipboard, NoClipboard, WaylandClipboard, image_from_clipboard};
pub use file::{expand_tilde, file_name, load_image, save_png, with_png_extension};
pub use types::{DocumentError, FixedPath, GeneratedName, SavePrompt};

use crate::draw::{Color, Raster};
use std::path::{Path, PathBuf};

/// Size and colour of the canvas used when there is nothing to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankCanvas {
    pub width: i32,
    pub height: i32,
    pub background: Color,
}

/// The file an image belongs to, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    path: Option<PathBuf>,
}

impl Document {
    pub fn untitled() -> Self {
        Self { path: None }
    }

    /// A document backed by `path`, with `.png` appended when missing.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(with_png_extension(path.as_ref())),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Window title: `Paint: <file name>` or `Paint: (untitled)`.
    pub fn title(&self) -> String {
        match &self.path {
            Some(path) => format!("Paint: {}", file_name(path)),
            None => "Paint: (untitled)".to_string(),
        }
    }

    /// Saves to the known path, or behaves like [`Document::save_as`] when
    /// there is none.
    ///
    /// Returns the path written, `None` when the prompt was dismissed.
    pub fn save(
        &mut self,
        image: &Raster,
        prompt: &mut dyn SavePrompt,
    ) -> Result<Option<PathBuf>, DocumentError> {
        match &self.path {
            Some(path) => {
                save_png(image, path)?;
                Ok(Some(path.clone()))
            }
            None => self.save_as(image, prompt),
        }
    }

    /// Asks for a new path, remembers it, and saves there.
    pub fn save_as(
        &mut self,
        image: &Raster,
        prompt: &mut dyn SavePrompt,
    ) -> Result<Option<PathBuf>, DocumentError> {
        let Some(answer) = prompt.ask_path()? else {
            log::debug!("Save cancelled");
            return Ok(None);
        };
        let path = with_png_extension(&answer);
        save_png(image, &path)?;
        self.path = Some(path.clone());
        Ok(Some(path))
    }
}

/// Resolves the image a session starts with.
///
/// A given path is loaded as-is when it exists, else with `.png` appended.
/// Without a path the clipboard image is used, and failing that a blank canvas.
/// The document always saves to a `.png` path.
pub fn open_initial(
    path: Option<&Path>,
    clipboard: &mut dyn ImageClipboard,
    blank: BlankCanvas,
) -> Result<(Document, Raster), DocumentError> {
    if let Some(path) = path {
        let resolved = if path.is_file() {
            path.to_path_buf()
        } else {
            with_png_extension(path)
        };
        let image = load_image(&resolved)?;
        return Ok((Document::at(resolved), image));
    }

    if let Some(image) = image_from_clipboard(clipboard)? {
        return Ok((Document::untitled(), image));
    }

    log::info!(
        "Starting with blank {}x{} canvas",
        blank.width,
        blank.height
    );
    let image = Raster::blank(blank.width, blank.height, blank.background)?;
    Ok((Document::untitled(), image))
}

#[cfg(test)]
mod tests {
    use super::clipboard::tests::{StaticClipboard, png_bytes};
    use super::*;
    use crate::draw::{BLUE, WHITE};

    const BLANK: BlankCanvas = BlankCanvas {
        width: 600,
        height: 400,
        background: WHITE,
    };

    #[test]
    fn test_titles() {
        assert_eq!(Document::untitled().title(), "Paint: (untitled)");
        assert_eq!(Document::at("/tmp/art/cat").title(), "Paint: cat.png");
    }

    #[test]
    fn test_untitled_save_uses_prompt_and_remembers_path() {
        let dir = tempfile::tempdir().unwrap();
        let image = Raster::blank(4, 4, WHITE).unwrap();
        let mut document = Document::untitled();
        let mut prompt = FixedPath(Some(dir.path().join("first")));

        let saved = document.save(&image, &mut prompt).unwrap();
        let expected = dir.path().join("first.png");
        assert_eq!(saved.as_deref(), Some(expected.as_path()));
        assert!(expected.is_file());
        assert_eq!(document.title(), "Paint: first.png");

        // the next save goes to the same file without asking
        let mut refuse = FixedPath(None);
        let again = document.save(&image, &mut refuse).unwrap();
        assert_eq!(again.as_deref(), Some(expected.as_path()));
    }

    #[test]
    fn test_dismissed_prompt_is_a_no_op() {
        let image = Raster::blank(4, 4, WHITE).unwrap();
        let mut document = Document::untitled();
        let saved = document.save_as(&image, &mut FixedPath(None)).unwrap();
        assert!(saved.is_none());
        assert!(document.path().is_none());
    }

    #[test]
    fn test_save_as_switches_file() {
        let dir = tempfile::tempdir().unwrap();
        let image = Raster::blank(4, 4, WHITE).unwrap();
        let mut document = Document::at(dir.path().join("a.png"));
        let mut prompt = FixedPath(Some(dir.path().join("b.png")));

        document.save_as(&image, &mut prompt).unwrap();
        assert_eq!(document.path(), Some(dir.path().join("b.png").as_path()));
        assert!(!dir.path().join("a.png").exists());
    }

    #[test]
    fn test_generated_name_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("sketches");
        let mut prompt = GeneratedName::new(&target, "sketch_%Y");
        let image = Raster::blank(4, 4, WHITE).unwrap();

        let saved = Document::untitled()
            .save(&image, &mut prompt)
            .unwrap()
            .unwrap();
        assert!(saved.starts_with(&target));
        assert!(saved.is_file());
    }

    #[test]
    fn test_open_initial_prefers_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("start.png");
        save_png(&Raster::blank(30, 20, WHITE).unwrap(), &path).unwrap();
        let mut clipboard = StaticClipboard(Some(png_bytes(5, 5)));

        let (document, image) =
            open_initial(Some(dir.path().join("start").as_path()), &mut clipboard, BLANK).unwrap();
        assert_eq!(document.path(), Some(path.as_path()));
        assert_eq!((image.width(), image.height()), (30, 20));
    }

    #[test]
    fn test_open_initial_loads_other_formats_but_saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.bmp");
        image::RgbImage::from_pixel(7, 5, image::Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();

        let (document, image) = open_initial(Some(path.as_path()), &mut NoClipboard, BLANK).unwrap();
        assert_eq!((image.width(), image.height()), (7, 5));
        assert_eq!(document.path(), Some(dir.path().join("scan.bmp.png").as_path()));
    }

    #[test]
    fn test_open_initial_falls_back_to_clipboard() {
        let mut clipboard = StaticClipboard(Some(png_bytes(5, 3)));
        let (document, mut image) = open_initial(None, &mut clipboard, BLANK).unwrap();
        assert!(document.path().is_none());
        assert_eq!((image.width(), image.height()), (5, 3));
        assert_eq!(image.pixel(2, 0).unwrap(), Some(BLUE));
    }

    #[test]
    fn test_open_initial_falls_back_to_blank() {
        let (document, mut image) = open_initial(None, &mut NoClipboard, BLANK).unwrap();
        assert_eq!(document.title(), "Paint: (untitled)");
        assert_eq!((image.width(), image.height()), (600, 400));
        assert_eq!(image.pixel(599, 399).unwrap(), Some(WHITE));
    }

    #[test]
    fn test_open_initial_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_initial(Some(dir.path().join("absent").as_path()), &mut NoClipboard, BLANK);
        assert!(matches!(result, Err(DocumentError::Open { .. })));
    }
}
