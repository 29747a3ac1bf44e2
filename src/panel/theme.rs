//! Control panel theme and styling
//!
//! Compact dark theme for the magnifier control window.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Dark color palette
pub struct ThemeColors;

impl ThemeColors {
    // Background colors
    pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 30);
    pub const BG_BUTTON: Color32 = Color32::from_rgb(45, 45, 45);
    pub const BG_BUTTON_HOVER: Color32 = Color32::from_rgb(52, 52, 52);
    pub const BG_BUTTON_PRESSED: Color32 = Color32::from_rgb(60, 60, 60);

    // Accent colors
    pub const ACCENT_PRIMARY: Color32 = Color32::from_rgb(88, 166, 255);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
    pub const TEXT_LABEL: Color32 = Color32::from_rgb(192, 192, 192);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(128, 128, 128);

    // Status colors
    pub const STATUS_RUNNING: Color32 = Color32::from_rgb(46, 204, 113);
    pub const STATUS_STOPPED: Color32 = Color32::from_rgb(160, 160, 175);
    pub const STATUS_ERROR: Color32 = Color32::from_rgb(231, 76, 60);
}

/// Apply the panel theme to egui
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let mut visuals = Visuals::dark();

    visuals.window_fill = ThemeColors::BG_PANEL;
    visuals.panel_fill = ThemeColors::BG_PANEL;
    visuals.extreme_bg_color = ThemeColors::BG_BUTTON;

    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_LABEL);

    // Buttons fill with weak_bg_fill; rounded like the rest of the panel
    visuals.widgets.inactive.weak_bg_fill = ThemeColors::BG_BUTTON;
    visuals.widgets.inactive.bg_fill = ThemeColors::BG_BUTTON;
    visuals.widgets.inactive.bg_stroke = Stroke::NONE;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(5.0);

    visuals.widgets.hovered.weak_bg_fill = ThemeColors::BG_BUTTON_HOVER;
    visuals.widgets.hovered.bg_fill = ThemeColors::BG_BUTTON_HOVER;
    visuals.widgets.hovered.bg_stroke = Stroke::NONE;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(5.0);

    visuals.widgets.active.weak_bg_fill = ThemeColors::BG_BUTTON_PRESSED;
    visuals.widgets.active.bg_fill = ThemeColors::BG_BUTTON_PRESSED;
    visuals.widgets.active.bg_stroke = Stroke::NONE;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT_PRIMARY);
    visuals.widgets.active.rounding = Rounding::same(5.0);

    // Slider rail fill
    visuals.selection.bg_fill = ThemeColors::ACCENT_PRIMARY;
    visuals.selection.stroke = Stroke::new(1.0, ThemeColors::ACCENT_PRIMARY);
    visuals.slider_trailing_fill = true;

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.slider_width = 250.0;

    style.text_styles = [
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(16.0, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}
