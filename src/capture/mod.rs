//! Screen Capture Layer
//!
//! Pointer queries and pixel capture behind small traits so the render loop
//! can run against the real display or against in-memory fakes.

pub mod frame;
pub mod pointer;
pub mod screen;

#[cfg(test)]
pub mod fake;

use image::RgbaImage;
use thiserror::Error;

pub use frame::CapturedFrame;
pub use pointer::DeviceQueryPointer;
pub use screen::{list_monitors, MonitorInfo, UnavailableScreen, XcapScreen};

/// A point in virtual-desktop pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by an offset
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned pixel rectangle in virtual-desktop coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    #[cfg(test)]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[cfg(test)]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Whether `other` lies completely inside this rectangle
    #[cfg(test)]
    pub fn contains_rect(&self, other: &CaptureRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Screen capture errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CaptureError {
    /// The capture backend could not be initialized
    #[error("Screen capture unavailable: {0}")]
    Unavailable(String),

    /// A single capture attempt failed
    #[error("Capture failed: {0}")]
    Failed(String),

    /// No monitor contains the requested point
    #[error("No screen found at ({x}, {y})")]
    NoScreenAt { x: i32, y: i32 },

    /// The capture rectangle is empty
    #[error("Capture region is empty")]
    InvalidRegion,
}

impl CaptureError {
    /// Whether the error means capture will never succeed in this process
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CaptureError::Unavailable(_))
    }
}

/// Source of screen pixels
pub trait ScreenSource: Send {
    /// Bounds of the screen that contains `point`
    fn screen_bounds(&self, point: Point) -> Result<CaptureRect, CaptureError>;

    /// Capture the pixels inside `rect`; the result is `rect.width` x `rect.height`
    fn capture(&mut self, rect: CaptureRect) -> Result<RgbaImage, CaptureError>;
}

/// Source of the current pointer location
pub trait PointerSource: Send {
    fn position(&self) -> Result<Point, CaptureError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_area() {
        let rect = CaptureRect::new(-2, 42, 205, 117);
        assert_eq!(rect.right(), 203);
        assert_eq!(rect.bottom(), 159);
        assert_eq!(rect.area(), 205 * 117);
        assert!(!rect.is_empty());
        assert!(CaptureRect::new(0, 0, 0, 10).is_empty());
    }

    #[test]
    fn test_rect_contains() {
        let screen = CaptureRect::new(0, 0, 1920, 1080);
        assert!(screen.contains(Point::new(0, 0)));
        assert!(screen.contains(Point::new(1919, 1079)));
        assert!(!screen.contains(Point::new(1920, 500)));
        assert!(!screen.contains(Point::new(-1, 500)));

        assert!(screen.contains_rect(&CaptureRect::new(10, 10, 100, 100)));
        assert!(!screen.contains_rect(&CaptureRect::new(-2, 42, 205, 117)));
    }

    #[test]
    fn test_unavailable_is_distinct() {
        assert!(CaptureError::Unavailable("no display".into()).is_unavailable());
        assert!(!CaptureError::Failed("timeout".into()).is_unavailable());
        assert!(!CaptureError::InvalidRegion.is_unavailable());
    }
}
