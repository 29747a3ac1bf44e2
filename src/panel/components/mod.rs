//! Reusable UI components for the control panel

pub mod status_line;
pub mod zoom_slider;

pub use status_line::{panel_status, render_status_line, StatusKind};
pub use zoom_slider::zoom_slider;
