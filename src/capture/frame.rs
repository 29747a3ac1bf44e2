//! Frame data structures for captured screen content

use image::RgbaImage;
use std::time::Instant;

use super::CaptureRect;

/// Pixels grabbed from the screen for one tick
#[derive(Debug)]
pub struct CapturedFrame {
    /// Raw RGBA pixels, `region.width` x `region.height`
    pub image: RgbaImage,
    /// Screen region the pixels came from
    pub region: CaptureRect,
    /// Timestamp when frame was captured
    pub timestamp: Instant,
}

impl CapturedFrame {
    pub fn new(image: RgbaImage, region: CaptureRect) -> Self {
        Self {
            image,
            region,
            timestamp: Instant::now(),
        }
    }

    /// Get frame dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
