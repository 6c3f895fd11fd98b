mod file;

pub use file::FileSource;

use crate::error::LogoError;
use image::RgbaImage;
use std::path::Path;

/// Trait for logo image sources
pub trait ImageSource {
    /// Load the image as an RGBA buffer
    fn load(&mut self) -> Result<RgbaImage, LogoError>;

    /// Where the image comes from
    fn path(&self) -> &Path;
}
