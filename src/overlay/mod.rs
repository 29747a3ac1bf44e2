//! Overlay Presentation Layer
//!
//! Shows the magnified frame in an undecorated, always-on-top, click-through
//! viewport that sits next to the cursor. The viewport exists only while a
//! frame is being presented; hiding it simply stops showing the viewport.

use egui::{pos2, vec2, Pos2, TextureHandle, Vec2, ViewportBuilder, ViewportCommand, ViewportId};
use tracing::{debug, trace};

use crate::capture::Point;
use crate::magnifier::OverlayFrame;

/// Viewport identifier of the overlay window
pub fn overlay_viewport_id() -> ViewportId {
    ViewportId::from_hash_of("magnifier_overlay")
}

/// Builder for the overlay window at `position` (in points) with `size`
pub fn overlay_viewport(position: Pos2, size: Vec2) -> ViewportBuilder {
    ViewportBuilder::default()
        .with_title("Magnifier")
        .with_decorations(false)
        .with_always_on_top()
        .with_transparent(true)
        .with_resizable(false)
        .with_mouse_passthrough(true)
        .with_taskbar(false)
        .with_inner_size(size)
        .with_position(position)
}

/// Convert a physical-pixel screen position into egui points
pub fn to_points(position: Point, pixels_per_point: f32) -> Pos2 {
    let ppp = if pixels_per_point > 0.0 { pixels_per_point } else { 1.0 };
    pos2(position.x as f32 / ppp, position.y as f32 / ppp)
}

/// The floating magnifier window
pub struct OverlayWindow {
    /// Frame waiting to be uploaded to the GPU
    pending: Option<OverlayFrame>,
    /// Texture holding the last uploaded frame
    texture: Option<TextureHandle>,
    /// Screen position of the window; `None` while hidden
    position: Option<Point>,
    /// Output size in pixels
    size: (u32, u32),
}

impl OverlayWindow {
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            pending: None,
            texture: None,
            position: None,
            size,
        }
    }

    /// Accept a new frame; the window becomes visible on the next `show`
    pub fn receive(&mut self, frame: OverlayFrame) {
        trace!(
            "Overlay at ({}, {}) for pointer ({}, {})",
            frame.position.x,
            frame.position.y,
            frame.pointer.x,
            frame.pointer.y
        );
        self.position = Some(frame.position);
        self.size = frame.image.dimensions();
        self.pending = Some(frame);
    }

    /// Hide the window immediately
    pub fn hide(&mut self) {
        if self.position.is_some() {
            debug!("Hiding magnifier overlay");
        }
        self.pending = None;
        self.position = None;
        self.texture = None;
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.position.is_some()
    }

    /// Current screen position, if visible
    #[cfg(test)]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Present the overlay viewport for this UI frame
    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(position) = self.position else {
            return;
        };

        if let Some(frame) = self.pending.take() {
            let (width, height) = frame.image.dimensions();
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [width as usize, height as usize],
                frame.image.as_raw(),
            );

            if let Some(texture) = self.texture.as_mut() {
                texture.set(color_image, egui::TextureOptions::LINEAR);
            } else {
                self.texture = Some(ctx.load_texture(
                    "magnifier_frame",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }

        let Some(texture_id) = self.texture.as_ref().map(|t| t.id()) else {
            return;
        };

        let ppp = ctx.pixels_per_point();
        let size = vec2(self.size.0 as f32 / ppp, self.size.1 as f32 / ppp);
        let outer_position = to_points(position, ppp);

        ctx.show_viewport_immediate(
            overlay_viewport_id(),
            overlay_viewport(outer_position, size),
            |ctx, _class| {
                ctx.send_viewport_cmd(ViewportCommand::OuterPosition(outer_position));
                egui::CentralPanel::default()
                    .frame(egui::Frame::none())
                    .show(ctx, |ui| {
                        ui.image((texture_id, size));
                    });
            },
        );
    }
}
