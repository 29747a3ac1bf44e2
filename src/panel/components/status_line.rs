//! One-line status indicator for the control panel

use egui::{RichText, Vec2};

use crate::panel::theme::ThemeColors;
use crate::shared::SharedAppState;

/// Status types for the indicator dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusKind {
    Active,
    Paused,
    Error,
}

impl StatusKind {
    pub fn color(&self) -> egui::Color32 {
        match self {
            StatusKind::Active => ThemeColors::STATUS_RUNNING,
            StatusKind::Paused => ThemeColors::STATUS_STOPPED,
            StatusKind::Error => ThemeColors::STATUS_ERROR,
        }
    }
}

/// Summarize the runtime state for display
pub fn panel_status(state: &SharedAppState) -> (StatusKind, String) {
    if let Some(error) = &state.runtime.last_error {
        return (StatusKind::Error, error.clone());
    }
    if !state.runtime.capture_available {
        return (StatusKind::Error, "Screen capture unavailable".to_string());
    }
    if !state.settings.enabled {
        return (StatusKind::Paused, "Magnifier off".to_string());
    }
    if !state.runtime.is_capturing {
        return (StatusKind::Paused, "Starting...".to_string());
    }
    (
        StatusKind::Active,
        format!("{:.0} fps, {} frames", state.runtime.capture_fps, state.runtime.frames_rendered),
    )
}

/// Render a status dot followed by a short message
pub fn render_status_line(ui: &mut egui::Ui, kind: StatusKind, message: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 4.0, kind.color());
        ui.label(RichText::new(message).size(11.0).color(ThemeColors::TEXT_MUTED));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state() -> SharedAppState {
        let mut state = SharedAppState::new(&AppConfig::default());
        state.runtime.is_capturing = true;
        state
    }

    #[test]
    fn test_status_active() {
        let mut state = state();
        state.runtime.frames_rendered = 42;
        state.runtime.capture_fps = 24.6;

        let (kind, message) = panel_status(&state);

        assert_eq!(kind, StatusKind::Active);
        assert_eq!(message, "25 fps, 42 frames");
    }

    #[test]
    fn test_status_paused_when_disabled() {
        let mut state = state();
        state.settings.enabled = false;

        assert_eq!(panel_status(&state), (StatusKind::Paused, "Magnifier off".to_string()));
    }

    #[test]
    fn test_status_error_wins() {
        let mut state = state();
        state.settings.enabled = false;
        state.runtime.set_error("Capture failed: device busy");

        let (kind, message) = panel_status(&state);

        assert_eq!(kind, StatusKind::Error);
        assert_eq!(message, "Capture failed: device busy");
    }

    #[test]
    fn test_status_unavailable() {
        let mut state = state();
        state.runtime.capture_available = false;

        assert_eq!(panel_status(&state).0, StatusKind::Error);
    }
}
