//! Zoom slider component
//!
//! An integer slider over zoom ticks that also responds to the mouse wheel
//! while hovered, with value labels painted under the rail.

use egui::{Align2, FontId, Response, Sense, Slider, Ui, Vec2};

use crate::panel::theme::ThemeColors;
use crate::shared::state::{MAX_ZOOM_TICKS, MIN_ZOOM_TICKS};

/// Spacing between labelled ticks
const LABEL_STEP: i32 = 10;

/// Labels painted under the slider: every whole zoom factor
pub fn tick_labels() -> Vec<(i32, String)> {
    (MIN_ZOOM_TICKS..=MAX_ZOOM_TICKS)
        .step_by(LABEL_STEP as usize)
        .map(|ticks| (ticks, format!("{:.1}", ticks as f32 / 10.0)))
        .collect()
}

/// Horizontal position of `ticks` along a rail from `left` spanning `width`
pub fn tick_x(ticks: i32, left: f32, width: f32) -> f32 {
    let span = (MAX_ZOOM_TICKS - MIN_ZOOM_TICKS) as f32;
    left + width * (ticks - MIN_ZOOM_TICKS) as f32 / span
}

/// Add the zoom slider and return its response.
///
/// One wheel notch moves the slider by one tick; the response is marked
/// changed when the wheel moved the value.
pub fn zoom_slider(ui: &mut Ui, ticks: &mut i32) -> Response {
    let mut response = ui.add(
        Slider::new(ticks, MIN_ZOOM_TICKS..=MAX_ZOOM_TICKS)
            .step_by(1.0)
            .show_value(false),
    );

    if response.hovered() {
        let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
        if scroll_delta != 0.0 {
            let direction = if scroll_delta > 0.0 { 1 } else { -1 };
            let new_value = (*ticks + direction).clamp(MIN_ZOOM_TICKS, MAX_ZOOM_TICKS);
            if new_value != *ticks {
                *ticks = new_value;
                response.mark_changed();
                ui.ctx().request_repaint();
            }
        }
    }

    paint_tick_labels(ui, &response);

    response
}

fn paint_tick_labels(ui: &mut Ui, slider: &Response) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(slider.rect.width(), 16.0), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    // The handle center never reaches the rail ends
    let inset = slider.rect.height() / 2.0;
    let left = slider.rect.left() + inset;
    let width = (slider.rect.width() - 2.0 * inset).max(0.0);

    for (ticks, label) in tick_labels() {
        ui.painter().text(
            egui::pos2(tick_x(ticks, left, width), rect.center().y),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(11.0),
            ThemeColors::TEXT_PRIMARY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_labels() {
        let labels: Vec<String> = tick_labels().into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["1.0", "2.0", "3.0", "4.0", "5.0"]);
    }

    #[test]
    fn test_tick_x_spans_rail() {
        assert_eq!(tick_x(MIN_ZOOM_TICKS, 10.0, 200.0), 10.0);
        assert_eq!(tick_x(MAX_ZOOM_TICKS, 10.0, 200.0), 210.0);
        assert_eq!(tick_x(30, 10.0, 200.0), 110.0);
    }
}
