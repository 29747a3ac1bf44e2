//! Application Coordinator
//!
//! Owns the capture worker thread and the channels between it and the
//! control panel, and applies panel commands to the shared state.

use anyhow::Result;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::thread::JoinHandle;
use tracing::{debug, error, info};

use crate::capture::{CaptureError, ScreenSource, UnavailableScreen};
use crate::magnifier::{CaptureWorker, Magnifier, OverlayFrame};
use crate::shared::{CaptureToPanel, MagnifierState, PanelCommand, PanelToCapture, SharedState};

/// Use the probed screen backend, or a stand-in that reports why it failed.
///
/// On failure the runtime state is marked unavailable so the panel opens
/// with the error showing.
pub fn screen_or_unavailable<S: ScreenSource + 'static>(
    probe: Result<S, CaptureError>,
    shared_state: &SharedState,
) -> Box<dyn ScreenSource> {
    match probe {
        Ok(screen) => Box::new(screen),
        Err(e) => {
            error!("Screen capture unavailable: {}", e);
            let mut state = shared_state.write();
            state.runtime.capture_available = false;
            state.runtime.set_error(e.to_string());
            Box::new(UnavailableScreen::new(e.to_string()))
        }
    }
}

/// Main application coordinator
pub struct MagnifierApp {
    /// Shared state between control panel and capture worker
    shared_state: SharedState,
    /// Channel to receive frames from the worker
    from_worker: Receiver<CaptureToPanel>,
    /// Channel to send control messages to the worker
    to_worker: Sender<PanelToCapture>,
    /// Handle to the worker thread
    worker_handle: Option<JoinHandle<()>>,
}

impl MagnifierApp {
    /// Start the capture worker in a background thread
    pub fn start(
        shared_state: SharedState,
        magnifier: Magnifier,
        request_repaint: impl Fn() + Send + 'static,
    ) -> Result<Self> {
        let (frame_tx, from_worker) = bounded(1);
        let (to_worker, control_rx) = unbounded();

        let handle = CaptureWorker::new(
            magnifier,
            shared_state.clone(),
            frame_tx,
            control_rx,
            Box::new(request_repaint),
        )
        .spawn()?;

        info!("Capture worker started in background thread");

        Ok(Self {
            shared_state,
            from_worker,
            to_worker,
            worker_handle: Some(handle),
        })
    }

    /// Get current shared state
    pub fn state(&self) -> SharedState {
        self.shared_state.clone()
    }

    /// Snapshot of the live magnifier settings
    pub fn settings(&self) -> MagnifierState {
        self.shared_state.read().settings
    }

    /// Drain pending worker messages and return the newest frame, if any
    pub fn latest_frame(&self) -> Option<OverlayFrame> {
        let mut latest = None;
        while let Ok(msg) = self.from_worker.try_recv() {
            match msg {
                CaptureToPanel::Frame(frame) => latest = Some(frame),
                CaptureToPanel::Stopped => debug!("Capture worker reported stop"),
            }
        }
        latest
    }

    /// Apply a panel command and return the resulting settings
    pub fn apply(&self, command: PanelCommand) -> MagnifierState {
        let settings = {
            let mut state = self.shared_state.write();
            state.apply(command);
            state.settings
        };

        match command {
            PanelCommand::SetZoomTicks(_) => debug!("Zoom set to {:.1}x", settings.zoom),
            PanelCommand::ToggleEnabled => info!(
                "Magnifier {}",
                if settings.enabled { "enabled" } else { "disabled" }
            ),
        }

        settings
    }

    /// Check if the worker thread is running
    pub fn is_worker_running(&self) -> bool {
        self.worker_handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    /// Stop the worker and wait for it to exit
    pub fn shutdown(&mut self) {
        let _ = self.to_worker.send(PanelToCapture::Shutdown);

        if let Some(handle) = self.worker_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MagnifierApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}
