use image::{Rgba, RgbaImage};

/// Fully transparent white, written over every keyed-out pixel
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Trait for background keys
/// Decides per pixel whether it belongs to the background of a logo
pub trait BackgroundKey {
    /// Whether the pixel is background
    ///
    /// The decision is binary; there is no partial alpha for edge pixels.
    fn is_background(&self, pixel: &Rgba<u8>) -> bool;

    /// Pixel written in place of background pixels
    fn cleared(&self) -> Rgba<u8> {
        TRANSPARENT_WHITE
    }

    /// Replace every background pixel in place
    ///
    /// Foreground pixels, including their alpha, are left untouched.
    /// Dimensions and pixel order are preserved.
    ///
    /// Returns the number of pixels that were keyed out.
    fn key_out(&self, image: &mut RgbaImage) -> usize {
        let _span = tracing::debug_span!("key_out").entered();

        let cleared = self.cleared();
        let mut keyed = 0;
        for pixel in image.pixels_mut() {
            if self.is_background(pixel) {
                *pixel = cleared;
                keyed += 1;
            }
        }

        tracing::debug!(
            "Keyed out {} of {} pixels",
            keyed,
            image.width() as u64 * image.height() as u64
        );

        keyed
    }
}
