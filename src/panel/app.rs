//! Control panel application
//!
//! Drives the control window and the magnifier overlay from the egui
//! event loop.

use std::time::{Duration, Instant};

use super::theme;
use super::view::render_control_view;
use crate::app::MagnifierApp;
use crate::magnifier::TICK_INTERVAL;
use crate::overlay::OverlayWindow;
use crate::shared::PanelCommand;

/// Main control panel application
pub struct ControlPanelApp {
    /// Coordinator owning the capture worker
    coordinator: MagnifierApp,
    /// Floating magnifier window
    overlay: OverlayWindow,
    /// Theme applied flag
    theme_applied: bool,
    /// Frame counter for FPS calculation
    frame_counter: FrameCounter,
}

/// Helper for calculating FPS
struct FrameCounter {
    frames_this_second: u32,
    last_fps_update: Instant,
    current_fps: f32,
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self {
            frames_this_second: 0,
            last_fps_update: Instant::now(),
            current_fps: 0.0,
        }
    }
}

impl FrameCounter {
    fn record_frame(&mut self) {
        self.frames_this_second += 1;
    }

    /// Recompute the rate once per second; returns it when updated
    fn update(&mut self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.last_fps_update);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        self.current_fps = self.frames_this_second as f32 / elapsed.as_secs_f32();
        self.frames_this_second = 0;
        self.last_fps_update = now;
        Some(self.current_fps)
    }
}

impl ControlPanelApp {
    /// Create the panel around a running coordinator
    pub fn new(coordinator: MagnifierApp, output_size: (u32, u32)) -> Self {
        Self {
            coordinator,
            overlay: OverlayWindow::new(output_size),
            theme_applied: false,
            frame_counter: FrameCounter::default(),
        }
    }

    /// Get native options for the control window
    pub fn options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([320.0, 220.0])
                .with_min_inner_size([300.0, 180.0])
                .with_title("Magnifier Control"),
            ..Default::default()
        }
    }

    /// Move the newest worker frame into the overlay
    fn sync_frames(&mut self) {
        let enabled = self.coordinator.settings().enabled;
        let frame = self.coordinator.latest_frame();

        if enabled {
            if let Some(frame) = frame {
                self.overlay.receive(frame);
                self.frame_counter.record_frame();
            }
        } else {
            self.overlay.hide();
        }

        if let Some(fps) = self.frame_counter.update(Instant::now()) {
            self.coordinator.state().write().runtime.capture_fps = fps;
        }

        if !self.coordinator.is_worker_running() {
            let shared = self.coordinator.state();
            let mut state = shared.write();
            if state.runtime.last_error.is_none() {
                state.runtime.set_error("Capture worker stopped");
            }
        }
    }

    fn handle_command(&mut self, command: PanelCommand) {
        let settings = self.coordinator.apply(command);
        if !settings.enabled {
            self.overlay.hide();
        }
    }
}

impl eframe::App for ControlPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        self.sync_frames();

        let snapshot = self.coordinator.state().read().clone();
        let commands = egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(theme::ThemeColors::BG_PANEL)
                    .inner_margin(15.0),
            )
            .show(ctx, |ui| render_control_view(ui, &snapshot))
            .inner;

        for command in commands {
            self.handle_command(command);
        }

        self.overlay.show(ctx);

        // Keep polling the worker even without input events
        ctx.request_repaint_after(TICK_INTERVAL);
    }
}
