use super::types::BackgroundKey;
use image::Rgba;

/// Channel value every colour channel must exceed for a pixel to count as background
pub const BACKGROUND_THRESHOLD: u8 = 240;

/// Keys out near-white pixels
///
/// A pixel is background when its red, green and blue channels are all
/// strictly above the threshold. Alpha is not considered.
#[derive(Debug, Clone, Copy)]
pub struct WhiteThreshold {
    threshold: u8,
}

impl WhiteThreshold {
    pub fn new() -> Self {
        Self {
            threshold: BACKGROUND_THRESHOLD,
        }
    }
}

impl Default for WhiteThreshold {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundKey for WhiteThreshold {
    fn is_background(&self, pixel: &Rgba<u8>) -> bool {
        let [r, g, b, _] = pixel.0;
        r > self.threshold && g > self.threshold && b > self.threshold
    }
}
