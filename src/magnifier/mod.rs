//! Capture-and-render loop
//!
//! Each tick reads the pointer, grabs the screen region around it sized
//! inversely to the zoom factor, scales it to the fixed output size, draws
//! the border, and hands the frame to the overlay together with the window
//! position next to the cursor.

pub mod geometry;
pub mod render;
pub mod worker;

use image::RgbaImage;
use std::time::Duration;
use tracing::trace;

use crate::capture::{CaptureError, CaptureRect, CapturedFrame, Point, PointerSource, ScreenSource};
use crate::config::AppConfig;
use crate::shared::MagnifierState;

pub use render::BorderStyle;
pub use worker::CaptureWorker;

/// Fixed refresh period of the capture loop
pub const TICK_INTERVAL: Duration = Duration::from_millis(40);

/// Output geometry and styling for rendered frames
#[derive(Debug, Clone, PartialEq)]
pub struct MagnifierConfig {
    /// Output image width in pixels
    pub output_width: u32,
    /// Output image height in pixels
    pub output_height: u32,
    /// Overlay window offset from the cursor
    pub offset: (i32, i32),
    /// Border drawn over each frame
    pub border: BorderStyle,
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        Self::from_app_config(&AppConfig::default())
    }
}

impl MagnifierConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            output_width: config.overlay.width.max(1),
            output_height: config.overlay.height.max(1),
            offset: (config.overlay.offset_x, config.overlay.offset_y),
            border: BorderStyle::from(&config.border),
        }
    }

    pub fn output_size(&self) -> (u32, u32) {
        (self.output_width, self.output_height)
    }
}

/// A magnified frame ready for display
#[derive(Debug, Clone)]
pub struct OverlayFrame {
    /// Scaled and bordered pixels, always the configured output size
    pub image: RgbaImage,
    /// Where the overlay window's top-left corner goes
    pub position: Point,
    /// Screen region the pixels came from
    pub source: CaptureRect,
    /// Pointer position sampled for this frame
    pub pointer: Point,
}

/// Result of one tick
#[derive(Debug)]
pub enum TickOutcome {
    /// The magnifier is disabled; the overlay should not be shown
    Hidden,
    /// A new frame to display
    Frame(OverlayFrame),
}

/// Produces overlay frames from a screen and pointer source
pub struct Magnifier {
    screen: Box<dyn ScreenSource>,
    pointer: Box<dyn PointerSource>,
    config: MagnifierConfig,
}

impl Magnifier {
    pub fn new(
        screen: Box<dyn ScreenSource>,
        pointer: Box<dyn PointerSource>,
        config: MagnifierConfig,
    ) -> Self {
        Self {
            screen,
            pointer,
            config,
        }
    }

    pub fn config(&self) -> &MagnifierConfig {
        &self.config
    }

    /// Run one tick against the current settings
    pub fn tick(&mut self, settings: MagnifierState) -> Result<TickOutcome, CaptureError> {
        if !settings.enabled {
            return Ok(TickOutcome::Hidden);
        }
        self.render_frame(settings.zoom).map(TickOutcome::Frame)
    }

    /// Capture and render one frame at `zoom`
    pub fn render_frame(&mut self, zoom: f32) -> Result<OverlayFrame, CaptureError> {
        let pointer = self.pointer.position()?;
        let output = self.config.output_size();

        let bounds = self.screen.screen_bounds(pointer)?;
        let region = geometry::clamp_to_screen(geometry::capture_rect(pointer, zoom, output), bounds);
        if region.is_empty() {
            return Err(CaptureError::InvalidRegion);
        }

        let captured = CapturedFrame::new(self.screen.capture(region)?, region);
        trace!(
            "Captured {:?} at ({}, {}) for pointer ({}, {})",
            captured.dimensions(),
            region.x,
            region.y,
            pointer.x,
            pointer.y
        );

        let mut image = render::scale_bilinear(&captured.image, output.0, output.1);
        render::draw_rounded_border(&mut image, &self.config.border);
        trace!("Frame rendered in {:?}", captured.timestamp.elapsed());

        Ok(OverlayFrame {
            image,
            position: geometry::overlay_position(pointer, self.config.offset),
            source: captured.region,
            pointer,
        })
    }
}
