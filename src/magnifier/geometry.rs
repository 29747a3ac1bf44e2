//! Capture rectangle and overlay placement math

use crate::capture::{CaptureRect, Point};

/// Size of the screen region that fills an `output` sized image at `zoom`.
///
/// Each side is `floor(output / zoom)`, never less than one pixel.
pub fn capture_size(output: (u32, u32), zoom: f32) -> (u32, u32) {
    let zoom = if zoom.is_finite() && zoom > 0.0 { zoom as f64 } else { 1.0 };
    let width = (output.0 as f64 / zoom) as u32;
    let height = (output.1 as f64 / zoom) as u32;
    (width.max(1), height.max(1))
}

/// Capture rectangle centered on the pointer
pub fn capture_rect(pointer: Point, zoom: f32, output: (u32, u32)) -> CaptureRect {
    let (width, height) = capture_size(output, zoom);
    CaptureRect::new(
        pointer.x - (width / 2) as i32,
        pointer.y - (height / 2) as i32,
        width,
        height,
    )
}

/// Shift `rect` so it lies inside `screen`.
///
/// The size is kept unless the rectangle is larger than the screen, in which
/// case it is cut down to the screen size.
pub fn clamp_to_screen(rect: CaptureRect, screen: CaptureRect) -> CaptureRect {
    let width = rect.width.min(screen.width);
    let height = rect.height.min(screen.height);
    let x = rect.x.clamp(screen.x, screen.right() - width as i32);
    let y = rect.y.clamp(screen.y, screen.bottom() - height as i32);
    CaptureRect::new(x, y, width, height)
}

/// Top-left corner of the overlay window for a pointer position
pub fn overlay_position(pointer: Point, offset: (i32, i32)) -> Point {
    pointer.offset(offset.0, offset.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::{zoom_from_ticks, MAX_ZOOM_TICKS, MIN_ZOOM_TICKS};

    const OUTPUT: (u32, u32) = (350, 200);

    #[test]
    fn test_capture_size_truncates() {
        assert_eq!(capture_size(OUTPUT, 1.0), (350, 200));
        assert_eq!(capture_size(OUTPUT, 1.7), (205, 117));
        assert_eq!(capture_size(OUTPUT, 2.0), (175, 100));
        assert_eq!(capture_size(OUTPUT, 5.0), (70, 40));
    }

    #[test]
    fn test_capture_size_never_zero() {
        assert_eq!(capture_size((3, 2), 5.0), (1, 1));
        assert_eq!(capture_size(OUTPUT, 0.0), (350, 200));
        assert_eq!(capture_size(OUTPUT, f32::NAN), (350, 200));
    }

    #[test]
    fn test_area_shrinks_as_zoom_grows() {
        let mut previous: Option<u64> = None;
        for ticks in MIN_ZOOM_TICKS..=MAX_ZOOM_TICKS {
            let rect = capture_rect(Point::new(500, 500), zoom_from_ticks(ticks), OUTPUT);
            if let Some(prev) = previous {
                assert!(
                    rect.area() < prev,
                    "area did not shrink at ticks {}: {} >= {}",
                    ticks,
                    rect.area(),
                    prev
                );
            }
            previous = Some(rect.area());
        }
    }

    #[test]
    fn test_capture_rect_centered_on_pointer() {
        let rect = capture_rect(Point::new(100, 100), 1.7, OUTPUT);
        assert_eq!(rect, CaptureRect::new(-2, 42, 205, 117));

        let rect = capture_rect(Point::new(960, 540), 2.0, OUTPUT);
        assert_eq!(rect, CaptureRect::new(873, 490, 175, 100));
    }

    #[test]
    fn test_clamp_shifts_into_screen() {
        let screen = CaptureRect::new(0, 0, 1920, 1080);

        let top_left = clamp_to_screen(CaptureRect::new(-2, -50, 205, 117), screen);
        assert_eq!(top_left, CaptureRect::new(0, 0, 205, 117));

        let bottom_right = clamp_to_screen(CaptureRect::new(1800, 1000, 205, 117), screen);
        assert_eq!(bottom_right, CaptureRect::new(1715, 963, 205, 117));
        assert!(screen.contains_rect(&bottom_right));
    }

    #[test]
    fn test_clamp_leaves_inner_rect_alone() {
        let screen = CaptureRect::new(0, 0, 1920, 1080);
        let rect = CaptureRect::new(400, 300, 175, 100);
        assert_eq!(clamp_to_screen(rect, screen), rect);
    }

    #[test]
    fn test_clamp_on_offset_monitor() {
        let screen = CaptureRect::new(-1280, 0, 1280, 1024);
        let clamped = clamp_to_screen(CaptureRect::new(-20, 500, 175, 100), screen);
        assert_eq!(clamped, CaptureRect::new(-175, 500, 175, 100));
    }

    #[test]
    fn test_clamp_larger_than_screen() {
        let screen = CaptureRect::new(0, 0, 100, 50);
        let clamped = clamp_to_screen(CaptureRect::new(-30, -30, 350, 200), screen);
        assert_eq!(clamped, screen);
    }

    #[test]
    fn test_overlay_position_offset() {
        assert_eq!(overlay_position(Point::new(100, 100), (30, 60)), Point::new(130, 160));
        assert_eq!(overlay_position(Point::new(-500, 20), (30, 60)), Point::new(-470, 80));
    }
}
