//! Timer-driven capture thread

use crossbeam_channel::{select, tick, Receiver, Sender, TrySendError};
use std::thread::JoinHandle;
use tracing::{debug, info, warn};

use super::{Magnifier, TickOutcome, TICK_INTERVAL};
use crate::capture::CaptureError;
use crate::shared::{CaptureToPanel, PanelToCapture, SharedState};

/// Callback used to wake the UI after a frame is published
pub type RepaintFn = Box<dyn Fn() + Send>;

/// Runs the magnifier on a fixed interval until told to stop
pub struct CaptureWorker {
    magnifier: Magnifier,
    shared_state: SharedState,
    frames: Sender<CaptureToPanel>,
    control: Receiver<PanelToCapture>,
    request_repaint: RepaintFn,
    reported_unavailable: bool,
}

impl CaptureWorker {
    pub fn new(
        magnifier: Magnifier,
        shared_state: SharedState,
        frames: Sender<CaptureToPanel>,
        control: Receiver<PanelToCapture>,
        request_repaint: RepaintFn,
    ) -> Self {
        Self {
            magnifier,
            shared_state,
            frames,
            control,
            request_repaint,
            reported_unavailable: false,
        }
    }

    /// Start the worker on its own thread
    pub fn spawn(self) -> std::io::Result<JoinHandle<()>> {
        std::thread::Builder::new()
            .name("magnifier-capture".to_string())
            .spawn(move || self.run())
    }

    fn run(mut self) {
        info!("Capture worker starting ({} ms interval)", TICK_INTERVAL.as_millis());
        self.shared_state.write().runtime.is_capturing = true;

        let ticker = tick(TICK_INTERVAL);
        loop {
            select! {
                recv(self.control) -> msg => match msg {
                    Ok(PanelToCapture::Shutdown) | Err(_) => break,
                },
                recv(ticker) -> _ => {
                    if !self.on_tick() {
                        break;
                    }
                }
            }
        }

        self.shared_state.write().runtime.is_capturing = false;
        let _ = self.frames.try_send(CaptureToPanel::Stopped);
        info!("Capture worker exiting...");
    }

    /// Run one tick; returns false once the panel side has gone away
    fn on_tick(&mut self) -> bool {
        let settings = self.shared_state.read().settings;

        match self.magnifier.tick(settings) {
            Ok(TickOutcome::Hidden) => true,
            Ok(TickOutcome::Frame(frame)) => {
                {
                    let mut state = self.shared_state.write();
                    state.runtime.capture_available = true;
                    state.runtime.clear_error();
                }

                // Capacity is one frame; a full channel means the UI has not
                // consumed the previous frame yet, so this one is dropped.
                match self.frames.try_send(CaptureToPanel::Frame(frame)) {
                    Ok(()) => {
                        self.shared_state.write().runtime.frames_rendered += 1;
                    }
                    Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Disconnected(_)) => return false,
                }
                (self.request_repaint)();
                true
            }
            Err(e) => {
                self.report_error(e);
                true
            }
        }
    }

    fn report_error(&mut self, error: CaptureError) {
        let message = error.to_string();
        let mut state = self.shared_state.write();

        if error.is_unavailable() {
            state.runtime.capture_available = false;
            if self.reported_unavailable {
                debug!("Magnifier tick skipped: {}", message);
            } else {
                warn!("Magnifier tick skipped: {}", message);
                self.reported_unavailable = true;
            }
        } else if state.runtime.last_error.as_deref() == Some(message.as_str()) {
            debug!("Magnifier tick failed again: {}", message);
        } else {
            warn!("Magnifier tick failed: {}", message);
        }

        state.runtime.set_error(message);
    }
}
