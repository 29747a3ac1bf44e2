//! Control view: zoom readout, zoom slider, enable toggle and status

use egui::{vec2, RichText};

use super::components::{panel_status, render_status_line, zoom_slider};
use super::theme::ThemeColors;
use crate::shared::{PanelCommand, SharedAppState};

/// Label shown above the slider
pub fn zoom_label(zoom: f32) -> String {
    format!("Zoom Level: {:.1}x", zoom)
}

/// Render the control view from a state snapshot.
///
/// Returns the commands produced by user interaction this frame.
pub fn render_control_view(ui: &mut egui::Ui, state: &SharedAppState) -> Vec<PanelCommand> {
    let mut commands = Vec::new();

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(zoom_label(state.settings.zoom))
                .size(14.0)
                .color(ThemeColors::TEXT_LABEL),
        );
        ui.add_space(8.0);

        let mut ticks = state.zoom_ticks();
        if zoom_slider(ui, &mut ticks).changed() {
            commands.push(PanelCommand::SetZoomTicks(ticks));
        }

        ui.add_space(12.0);

        let button = egui::Button::new(
            RichText::new(state.toggle_label()).color(ThemeColors::TEXT_PRIMARY),
        )
        .min_size(vec2(250.0, 30.0));
        if ui.add(button).clicked() {
            commands.push(PanelCommand::ToggleEnabled);
        }

        ui.add_space(10.0);
    });

    let (kind, message) = panel_status(state);
    render_status_line(ui, kind, &message);

    commands
}
