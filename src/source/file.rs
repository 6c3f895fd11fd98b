use super::ImageSource;
use crate::error::LogoError;
use image::{ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

/// Raster image read from the filesystem
///
/// The format is guessed from the file content rather than the extension,
/// so anything the `image` crate can decode (PNG, JPEG, BMP, ...) is accepted.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load_error(&self, source: image::ImageError) -> LogoError {
        LogoError::Load {
            path: self.path.clone(),
            source,
        }
    }
}

impl ImageSource for FileSource {
    fn load(&mut self) -> Result<RgbaImage, LogoError> {
        let _span = tracing::debug_span!("load").entered();

        let reader = ImageReader::open(&self.path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| self.load_error(image::ImageError::IoError(e)))?;

        let decoded = reader.decode().map_err(|e| self.load_error(e))?;

        tracing::debug!(
            "Decoded {} ({}x{}, {:?})",
            self.path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(decoded.to_rgba8())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
