//! In-memory capture sources for tests

use image::{Rgba, RgbaImage};
use parking_lot::Mutex;
use std::sync::Arc;

use super::{CaptureError, CaptureRect, Point, PointerSource, ScreenSource};

/// Color of the virtual desktop pixel at (x, y)
pub fn desktop_pixel(x: i32, y: i32) -> Rgba<u8> {
    Rgba([x.rem_euclid(256) as u8, y.rem_euclid(256) as u8, 128, 255])
}

/// A single virtual screen that records every capture request
#[derive(Clone)]
pub struct FakeScreen {
    pub bounds: CaptureRect,
    pub captures: Arc<Mutex<Vec<CaptureRect>>>,
    pub fail_next: Arc<Mutex<Option<CaptureError>>>,
}

impl FakeScreen {
    pub fn new(bounds: CaptureRect) -> Self {
        Self {
            bounds,
            captures: Arc::new(Mutex::new(Vec::new())),
            fail_next: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_capture(&self) -> Option<CaptureRect> {
        self.captures.lock().last().copied()
    }
}

impl ScreenSource for FakeScreen {
    fn screen_bounds(&self, point: Point) -> Result<CaptureRect, CaptureError> {
        if self.bounds.contains(point) {
            Ok(self.bounds)
        } else {
            Err(CaptureError::NoScreenAt { x: point.x, y: point.y })
        }
    }

    fn capture(&mut self, rect: CaptureRect) -> Result<RgbaImage, CaptureError> {
        if let Some(err) = self.fail_next.lock().take() {
            return Err(err);
        }
        if rect.is_empty() {
            return Err(CaptureError::InvalidRegion);
        }
        self.captures.lock().push(rect);
        Ok(RgbaImage::from_fn(rect.width, rect.height, |x, y| {
            desktop_pixel(rect.x + x as i32, rect.y + y as i32)
        }))
    }
}

/// A pointer whose position tests can move
#[derive(Clone, Default)]
pub struct FakePointer {
    pub position: Arc<Mutex<Point>>,
    pub failure: Arc<Mutex<Option<CaptureError>>>,
}

impl FakePointer {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            position: Arc::new(Mutex::new(Point::new(x, y))),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// A pointer whose every query fails with `error`
    pub fn failing(error: CaptureError) -> Self {
        let pointer = Self::at(0, 0);
        *pointer.failure.lock() = Some(error);
        pointer
    }

    pub fn move_to(&self, x: i32, y: i32) {
        *self.position.lock() = Point::new(x, y);
    }
}

impl PointerSource for FakePointer {
    fn position(&self) -> Result<Point, CaptureError> {
        match self.failure.lock().as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(*self.position.lock()),
        }
    }
}
