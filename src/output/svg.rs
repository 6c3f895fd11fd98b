use super::OutputSink;
use crate::error::LogoError;
use base64::Engine;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Build an SVG document that embeds PNG bytes as a data URI
///
/// The root element carries explicit pixel width/height and a matching
/// viewBox; the single `<image>` child fills it.
pub fn compose_svg(width: u32, height: u32, png: &[u8]) -> String {
    let _span = tracing::debug_span!("compose_svg").entered();

    let payload = base64::engine::general_purpose::STANDARD.encode(png);
    tracing::debug!("Encoded {} PNG bytes into {} base64 chars", png.len(), payload.len());

    format!(
        concat!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#,
            "\n",
            r#"    <image width="{w}" height="{h}" xlink:href="data:image/png;base64,{data}"/>"#,
            "\n",
            "</svg>"
        ),
        w = width,
        h = height,
        data = payload
    )
}

/// Writes an SVG wrapper around an already written PNG
///
/// The PNG is re-read from disk so the embedded payload is exactly the file
/// that was persisted.
pub struct SvgWrapper {
    png_path: PathBuf,
    svg_path: PathBuf,
}

impl SvgWrapper {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(png_path: P, svg_path: Q) -> Self {
        Self {
            png_path: png_path.as_ref().to_path_buf(),
            svg_path: svg_path.as_ref().to_path_buf(),
        }
    }
}

impl OutputSink for SvgWrapper {
    fn write_image(&mut self, image: &RgbaImage) -> Result<(), LogoError> {
        let png = std::fs::read(&self.png_path).map_err(|source| LogoError::Read {
            path: self.png_path.clone(),
            source,
        })?;

        let (width, height) = image.dimensions();
        let svg = compose_svg(width, height, &png);

        std::fs::write(&self.svg_path, svg).map_err(|source| LogoError::Write {
            path: self.svg_path.clone(),
            source,
        })?;

        tracing::info!("Successfully created SVG: {}", self.svg_path.display());

        Ok(())
    }

    fn path(&self) -> &Path {
        &self.svg_path
    }
}
