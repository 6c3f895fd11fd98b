use super::OutputSink;
use crate::error::LogoError;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Writes the transparent logo as a PNG file
pub struct PngWriter {
    path: PathBuf,
}

impl PngWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Serialize an RGBA image to PNG bytes
    pub fn encode(image: &RgbaImage) -> Result<Vec<u8>, LogoError> {
        let _span = tracing::debug_span!("encode_png").entered();

        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, ImageFormat::Png)
            .map_err(|source| LogoError::Encode { source })?;

        Ok(bytes.into_inner())
    }
}

impl OutputSink for PngWriter {
    fn write_image(&mut self, image: &RgbaImage) -> Result<(), LogoError> {
        let bytes = Self::encode(image)?;

        std::fs::write(&self.path, &bytes).map_err(|source| LogoError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), self.path.display());
        tracing::info!("Successfully processed PNG: {}", self.path.display());

        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
