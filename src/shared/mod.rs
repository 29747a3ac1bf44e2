//! Shared state and messaging between control panel and capture worker
//!
//! The panel writes the magnifier settings, the capture worker reads them on
//! every tick. Rendered frames travel back over a channel.

pub mod messages;
pub mod state;

use parking_lot::RwLock;
use std::sync::Arc;

pub use messages::{CaptureToPanel, PanelToCapture};
pub use state::{MagnifierState, PanelCommand, RuntimeState, SharedAppState};

/// Handle to the shared state held by both sides
pub type SharedState = Arc<RwLock<SharedAppState>>;
