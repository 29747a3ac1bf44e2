//! Display capture via xcap

use image::{imageops, RgbaImage};
use tracing::debug;
use xcap::Monitor;

use super::{CaptureError, CaptureRect, Point, ScreenSource};

/// Information about a connected monitor
#[derive(Debug, Clone)]
pub struct MonitorInfo {
    pub index: usize,
    pub name: String,
    pub bounds: CaptureRect,
    pub is_primary: bool,
    pub scale_factor: f32,
}

/// Enumerate connected monitors
pub fn list_monitors() -> Result<Vec<MonitorInfo>, CaptureError> {
    let monitors = Monitor::all().map_err(|e| CaptureError::Unavailable(e.to_string()))?;

    monitors
        .iter()
        .enumerate()
        .map(|(index, monitor)| {
            Ok(MonitorInfo {
                index,
                name: monitor
                    .name()
                    .unwrap_or_else(|_| format!("Monitor {}", index)),
                bounds: monitor_bounds(monitor)?,
                is_primary: monitor.is_primary().unwrap_or(false),
                scale_factor: monitor.scale_factor().unwrap_or(1.0),
            })
        })
        .collect()
}

fn monitor_bounds(monitor: &Monitor) -> Result<CaptureRect, CaptureError> {
    let failed = |e: xcap::XCapError| CaptureError::Failed(format!("Failed to query monitor: {}", e));
    Ok(CaptureRect::new(
        monitor.x().map_err(failed)?,
        monitor.y().map_err(failed)?,
        monitor.width().map_err(failed)?,
        monitor.height().map_err(failed)?,
    ))
}

/// Screen source backed by the platform capture API
#[derive(Debug)]
pub struct XcapScreen {
    _private: (),
}

impl XcapScreen {
    /// Probe the capture backend.
    ///
    /// Fails with [`CaptureError::Unavailable`] when no display can be reached.
    pub fn new() -> Result<Self, CaptureError> {
        let monitors = Monitor::all().map_err(|e| CaptureError::Unavailable(e.to_string()))?;
        if monitors.is_empty() {
            return Err(CaptureError::Unavailable("no monitors detected".to_string()));
        }
        debug!("Screen capture ready, {} monitor(s) detected", monitors.len());
        Ok(Self { _private: () })
    }
}

impl ScreenSource for XcapScreen {
    fn screen_bounds(&self, point: Point) -> Result<CaptureRect, CaptureError> {
        let monitor = Monitor::from_point(point.x, point.y)
            .map_err(|_| CaptureError::NoScreenAt { x: point.x, y: point.y })?;
        monitor_bounds(&monitor)
    }

    fn capture(&mut self, rect: CaptureRect) -> Result<RgbaImage, CaptureError> {
        if rect.is_empty() {
            return Err(CaptureError::InvalidRegion);
        }

        let monitor = Monitor::from_point(rect.x, rect.y)
            .map_err(|_| CaptureError::NoScreenAt { x: rect.x, y: rect.y })?;
        let bounds = monitor_bounds(&monitor)?;
        let region = monitor_relative(bounds, rect)?;

        let pixels = monitor
            .capture_region(region.x as u32, region.y as u32, region.width, region.height)
            .map_err(|e| CaptureError::Failed(format!("Failed to capture screen: {}", e)))?;

        fit_to_size(pixels, rect.width, rect.height)
    }
}

/// Translate `rect` into coordinates relative to the monitor at `bounds`.
///
/// The rectangle is clipped to the monitor; an empty intersection is an
/// [`CaptureError::InvalidRegion`].
pub(crate) fn monitor_relative(
    bounds: CaptureRect,
    rect: CaptureRect,
) -> Result<CaptureRect, CaptureError> {
    let left = rect.x.max(bounds.x);
    let top = rect.y.max(bounds.y);
    let right = rect.right().min(bounds.right());
    let bottom = rect.bottom().min(bounds.bottom());

    if right <= left || bottom <= top {
        return Err(CaptureError::InvalidRegion);
    }

    Ok(CaptureRect::new(
        left - bounds.x,
        top - bounds.y,
        (right - left) as u32,
        (bottom - top) as u32,
    ))
}

/// Resize captured pixels to the requested logical size.
///
/// Scaled monitors hand back more pixels than the logical region covers;
/// unscaled captures pass through untouched.
pub(crate) fn fit_to_size(
    pixels: RgbaImage,
    width: u32,
    height: u32,
) -> Result<RgbaImage, CaptureError> {
    if width == 0 || height == 0 || pixels.width() == 0 || pixels.height() == 0 {
        return Err(CaptureError::InvalidRegion);
    }

    if pixels.dimensions() == (width, height) {
        Ok(pixels)
    } else {
        Ok(imageops::resize(
            &pixels,
            width,
            height,
            imageops::FilterType::Triangle,
        ))
    }
}

/// Placeholder used when the capture backend failed to initialize.
///
/// Every call reports the startup failure; the render loop keeps running
/// and the panel can surface the problem.
#[derive(Debug, Clone)]
pub struct UnavailableScreen {
    reason: String,
}

impl UnavailableScreen {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl ScreenSource for UnavailableScreen {
    fn screen_bounds(&self, _point: Point) -> Result<CaptureRect, CaptureError> {
        Err(CaptureError::Unavailable(self.reason.clone()))
    }

    fn capture(&mut self, _rect: CaptureRect) -> Result<RgbaImage, CaptureError> {
        Err(CaptureError::Unavailable(self.reason.clone()))
    }
}
