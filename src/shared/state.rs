//! Shared application state between control panel and capture worker

use crate::config::{clamp_zoom, AppConfig};

/// Slider position for the lowest zoom (1.0x)
pub const MIN_ZOOM_TICKS: i32 = 10;
/// Slider position for the highest zoom (5.0x)
pub const MAX_ZOOM_TICKS: i32 = 50;

/// Convert a slider position to a zoom factor (`ticks / 10`)
pub fn zoom_from_ticks(ticks: i32) -> f32 {
    ticks.clamp(MIN_ZOOM_TICKS, MAX_ZOOM_TICKS) as f32 / 10.0
}

/// Convert a zoom factor to the nearest slider position
pub fn ticks_from_zoom(zoom: f32) -> i32 {
    ((clamp_zoom(zoom) * 10.0).round() as i32).clamp(MIN_ZOOM_TICKS, MAX_ZOOM_TICKS)
}

/// The two values the control panel writes and the capture loop reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnifierState {
    /// Magnification multiplier in [1.0, 5.0]
    pub zoom: f32,
    /// Overlay visible iff enabled
    pub enabled: bool,
}

impl Default for MagnifierState {
    fn default() -> Self {
        Self {
            zoom: 1.7,
            enabled: true,
        }
    }
}

/// Actions the control panel can perform on the shared state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    /// Slider moved to the given position
    SetZoomTicks(i32),
    /// Enable/disable button clicked
    ToggleEnabled,
}

/// Central shared state between control panel and capture worker
#[derive(Debug, Clone, Default)]
pub struct SharedAppState {
    /// Live magnifier settings
    pub settings: MagnifierState,
    /// Runtime state (not persisted)
    pub runtime: RuntimeState,
}

impl SharedAppState {
    /// Create a new shared state seeded from the configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            settings: MagnifierState {
                zoom: clamp_zoom(config.magnifier.zoom),
                enabled: config.magnifier.enabled,
            },
            runtime: RuntimeState::default(),
        }
    }

    /// Apply a panel command
    pub fn apply(&mut self, command: PanelCommand) {
        match command {
            PanelCommand::SetZoomTicks(ticks) => {
                self.settings.zoom = zoom_from_ticks(ticks);
            }
            PanelCommand::ToggleEnabled => {
                self.settings.enabled = !self.settings.enabled;
            }
        }
    }

    /// Current slider position
    pub fn zoom_ticks(&self) -> i32 {
        ticks_from_zoom(self.settings.zoom)
    }

    /// Label for the enable/disable button reflecting the current state
    pub fn toggle_label(&self) -> &'static str {
        if self.settings.enabled {
            "Disable Magnifier"
        } else {
            "Enable Magnifier"
        }
    }
}

/// Runtime state that is not persisted
#[derive(Debug, Clone)]
pub struct RuntimeState {
    /// Whether the capture worker is running
    pub is_capturing: bool,
    /// Whether the capture backend initialized
    pub capture_available: bool,
    /// Frames produced by the capture worker
    pub frames_rendered: u64,
    /// Frames per second received by the panel
    pub capture_fps: f32,
    /// Last error message (if any)
    pub last_error: Option<String>,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            is_capturing: false,
            capture_available: true,
            frames_rendered: 0,
            capture_fps: 0.0,
            last_error: None,
        }
    }
}

impl RuntimeState {
    /// Clear any error state
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_maps_exactly() {
        for (ticks, zoom) in [(10, 1.0), (20, 2.0), (30, 3.0), (40, 4.0), (50, 5.0)] {
            assert_eq!(zoom_from_ticks(ticks), zoom);
        }
    }

    #[test]
    fn test_slider_out_of_range_is_clamped() {
        assert_eq!(zoom_from_ticks(0), 1.0);
        assert_eq!(zoom_from_ticks(99), 5.0);
    }

    #[test]
    fn test_ticks_from_zoom() {
        assert_eq!(ticks_from_zoom(1.7), 17);
        assert_eq!(ticks_from_zoom(2.34), 23);
        assert_eq!(ticks_from_zoom(0.2), MIN_ZOOM_TICKS);
        assert_eq!(ticks_from_zoom(8.0), MAX_ZOOM_TICKS);
    }

    #[test]
    fn test_initial_state_from_config() {
        let mut config = AppConfig::default();
        config.magnifier.zoom = 9.0;
        config.magnifier.enabled = false;

        let state = SharedAppState::new(&config);

        assert_eq!(state.settings.zoom, 5.0);
        assert!(!state.settings.enabled);
        assert_eq!(state.toggle_label(), "Enable Magnifier");
    }

    #[test]
    fn test_set_zoom_command() {
        let mut state = SharedAppState::new(&AppConfig::default());
        assert_eq!(state.zoom_ticks(), 17);

        state.apply(PanelCommand::SetZoomTicks(35));

        assert_eq!(state.settings.zoom, 3.5);
        assert_eq!(state.zoom_ticks(), 35);
    }

    #[test]
    fn test_toggle_enabled_cycles() {
        let mut state = SharedAppState::new(&AppConfig::default());
        assert!(state.settings.enabled);
        assert_eq!(state.toggle_label(), "Disable Magnifier");

        state.apply(PanelCommand::ToggleEnabled);
        assert!(!state.settings.enabled);
        assert_eq!(state.toggle_label(), "Enable Magnifier");

        state.apply(PanelCommand::ToggleEnabled);
        assert!(state.settings.enabled);
        assert_eq!(state.toggle_label(), "Disable Magnifier");
    }

    #[test]
    fn test_runtime_error_helpers() {
        let mut runtime = RuntimeState::default();
        runtime.set_error("capture failed");
        assert_eq!(runtime.last_error.as_deref(), Some("capture failed"));
        runtime.clear_error();
        assert!(runtime.last_error.is_none());
    }
}
