mod png;
mod svg;

pub use png::PngWriter;
pub use svg::SvgWrapper;

use crate::error::LogoError;
use image::RgbaImage;
use std::path::Path;

/// Trait for artifact destinations
pub trait OutputSink {
    /// Write the processed image, overwriting any existing file
    fn write_image(&mut self, image: &RgbaImage) -> Result<(), LogoError>;

    /// Path of the artifact this sink produces
    fn path(&self) -> &Path;
}
