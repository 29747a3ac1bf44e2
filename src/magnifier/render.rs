//! Frame scaling and border decoration

use image::{imageops, Rgba, RgbaImage};
use imageproc::pixelops::interpolate;

use crate::config::BorderSettings;

/// Rounded border drawn over every magnified frame
#[derive(Debug, Clone, PartialEq)]
pub struct BorderStyle {
    /// Stroke color; alpha is the blend weight
    pub color: Rgba<u8>,
    /// Stroke width in pixels
    pub thickness: f32,
    /// Corner radius in pixels
    pub corner_radius: f32,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::from(&BorderSettings::default())
    }
}

impl From<&BorderSettings> for BorderStyle {
    fn from(settings: &BorderSettings) -> Self {
        Self {
            color: Rgba(settings.color),
            thickness: settings.thickness.max(0.0),
            corner_radius: settings.corner_radius.max(0.0),
        }
    }
}

/// Scale `source` to `width` x `height` with bilinear filtering.
///
/// The result is fully opaque.
pub fn scale_bilinear(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut scaled = imageops::resize(source, width, height, imageops::FilterType::Triangle);
    for pixel in scaled.pixels_mut() {
        pixel[3] = 255;
    }
    scaled
}

/// Signed distance from (px, py) to the outline of a rounded rectangle.
///
/// Negative inside, positive outside.
fn rounded_rect_distance(px: f32, py: f32, rect: (f32, f32, f32, f32), radius: f32) -> f32 {
    let (x, y, w, h) = rect;
    let half_w = w / 2.0;
    let half_h = h / 2.0;
    let radius = radius.min(half_w).min(half_h);

    let qx = (px - (x + half_w)).abs() - (half_w - radius);
    let qy = (py - (y + half_h)).abs() - (half_h - radius);

    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

/// Draw an anti-aliased rounded border inset from the image edge.
///
/// The stroke path runs along (1, 2, width - 3, height - 4), matching a
/// 3 px stroke that stays clear of the outermost pixel row.
pub fn draw_rounded_border(image: &mut RgbaImage, style: &BorderStyle) {
    let (width, height) = image.dimensions();
    if width < 4 || height < 5 || style.thickness <= 0.0 {
        return;
    }

    let path = (1.0, 2.0, (width - 3) as f32, (height - 4) as f32);
    let half_stroke = style.thickness / 2.0;
    let opacity = style.color[3] as f32 / 255.0;
    let stroke = Rgba([style.color[0], style.color[1], style.color[2], 255]);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let distance = rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, path, style.corner_radius);
        let coverage = (half_stroke + 0.5 - distance.abs()).clamp(0.0, 1.0);
        if coverage <= 0.0 {
            continue;
        }
        let weight = coverage * opacity;
        let blended = interpolate(stroke, *pixel, weight);
        *pixel = Rgba([blended[0], blended[1], blended[2], pixel[3]]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
    }

    #[test]
    fn test_scale_to_output_size() {
        for (w, h) in [(350, 200), (205, 117), (70, 40), (1, 1)] {
            let scaled = scale_bilinear(&solid(w, h, 10), 350, 200);
            assert_eq!(scaled.dimensions(), (350, 200));
        }
    }

    #[test]
    fn test_scale_interpolates_between_pixels() {
        let mut source = RgbaImage::new(2, 1);
        source.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        source.put_pixel(1, 0, Rgba([200, 200, 200, 255]));

        let scaled = scale_bilinear(&source, 8, 1);

        // Edges keep the source colors, the middle is a blend of both
        assert!(scaled.get_pixel(0, 0)[0] < 30);
        assert!(scaled.get_pixel(7, 0)[0] > 170);
        let middle = scaled.get_pixel(4, 0)[0];
        assert!(middle > 60 && middle < 160, "middle = {}", middle);
    }

    #[test]
    fn test_scale_output_is_opaque() {
        let source = RgbaImage::from_pixel(4, 4, Rgba([50, 60, 70, 0]));
        let scaled = scale_bilinear(&source, 8, 8);
        assert!(scaled.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_border_blends_on_edges() {
        let mut image = solid(350, 200, 0);
        draw_rounded_border(&mut image, &BorderStyle::default());

        // Top edge of the stroke path at y = 2
        let top = image.get_pixel(175, 2)[0];
        assert!(top > 100 && top < 200, "top = {}", top);

        // Left edge of the stroke path at x = 1
        let left = image.get_pixel(1, 100)[0];
        assert!(left > 100 && left < 200, "left = {}", left);
    }

    #[test]
    fn test_border_leaves_interior_and_corners() {
        let mut image = solid(350, 200, 0);
        draw_rounded_border(&mut image, &BorderStyle::default());

        assert_eq!(image.get_pixel(175, 100), &Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(20, 20), &Rgba([0, 0, 0, 255]));
        // Rounded corner leaves the extreme corner untouched
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(349, 199), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_border_keeps_alpha() {
        let mut image = solid(100, 60, 255);
        draw_rounded_border(&mut image, &BorderStyle::default());
        assert!(image.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_zero_thickness_draws_nothing() {
        let mut image = solid(100, 60, 0);
        let style = BorderStyle {
            thickness: 0.0,
            ..BorderStyle::default()
        };
        draw_rounded_border(&mut image, &style);
        assert!(image.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_style_from_settings() {
        let settings = BorderSettings {
            color: [1, 2, 3, 4],
            thickness: -1.0,
            corner_radius: 5.0,
        };
        let style = BorderStyle::from(&settings);
        assert_eq!(style.color, Rgba([1, 2, 3, 4]));
        assert_eq!(style.thickness, 0.0);
        assert_eq!(style.corner_radius, 5.0);
    }
}
