//! Control Panel Module
//!
//! The small "Magnifier Control" window: a zoom slider, an enable/disable
//! button and a status line. It also hosts the overlay viewport.

pub mod app;
pub mod components;
pub mod theme;
pub mod view;

pub use app::ControlPanelApp;

use std::sync::{Arc, OnceLock};

use anyhow::{anyhow, Result};

use crate::app::MagnifierApp;
use crate::magnifier::Magnifier;
use crate::shared::SharedState;

/// Run the control panel until its window is closed
pub fn run_panel(shared_state: SharedState, magnifier: Magnifier) -> Result<()> {
    let output_size = magnifier.config().output_size();

    // The worker starts before the event loop; it wakes the UI once the
    // context exists
    let repaint_ctx: Arc<OnceLock<egui::Context>> = Arc::default();
    let request_repaint = {
        let repaint_ctx = repaint_ctx.clone();
        move || {
            if let Some(ctx) = repaint_ctx.get() {
                ctx.request_repaint();
            }
        }
    };

    let coordinator = MagnifierApp::start(shared_state, magnifier, request_repaint)?;

    eframe::run_native(
        "Magnifier Control",
        ControlPanelApp::options(),
        Box::new(move |cc| {
            let _ = repaint_ctx.set(cc.egui_ctx.clone());
            Ok(Box::new(ControlPanelApp::new(coordinator, output_size)))
        }),
    )
    .map_err(|e| anyhow!("Control panel error: {}", e))
}
