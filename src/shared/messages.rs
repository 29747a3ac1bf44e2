//! Message types for communication between control panel and capture worker

use crate::magnifier::OverlayFrame;

/// Messages sent from the control panel to the capture worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelToCapture {
    /// Request the worker to stop
    Shutdown,
}

/// Messages sent from the capture worker to the control panel
#[derive(Debug)]
pub enum CaptureToPanel {
    /// A rendered frame ready for the overlay
    Frame(OverlayFrame),
    /// The worker has stopped
    Stopped,
}
