//! Pointer position via device_query

use std::cell::OnceCell;

use device_query::{DeviceQuery, DeviceState};

use super::{CaptureError, Point, PointerSource};

thread_local! {
    // Opened once on the thread that queries; `None` when no display was reachable
    static DEVICE_STATE: OnceCell<Option<DeviceState>> = const { OnceCell::new() };
}

/// Reads the global mouse position from the OS.
///
/// The platform connection is opened lazily on the querying thread and
/// reused for every later query from that thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeviceQueryPointer;

impl PointerSource for DeviceQueryPointer {
    fn position(&self) -> Result<Point, CaptureError> {
        DEVICE_STATE.with(|cell| {
            let state = cell.get_or_init(DeviceState::checked_new);
            match state {
                Some(state) => {
                    let (x, y) = state.get_mouse().coords;
                    Ok(Point::new(x, y))
                }
                None => Err(CaptureError::Unavailable(
                    "could not connect to the display to read the pointer".to_string(),
                )),
            }
        })
    }
}
