use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportState;

/// Maps a pixel to the complex plane. The raster centre (`width / 2.0`,
/// `height / 2.0`, sub-pixel for odd sizes) lands on the viewport offset and
/// each pixel spans `zoom` units.
#[must_use]
pub fn map_pixel(pixel: Point, width: u32, height: u32, viewport: &ViewportState) -> Complex {
    let real = (f64::from(pixel.x) - f64::from(width) / 2.0) * viewport.zoom() + viewport.x_offset();
    let imag = (f64::from(pixel.y) - f64::from(height) / 2.0) * viewport.zoom() + viewport.y_offset();

    Complex { real, imag }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_pixel_maps_to_offset() {
        let viewport = ViewportState::new(0.003, -0.7, 0.25).unwrap();
        let result = map_pixel(Point { x: 960, y: 540 }, 1920, 1080, &viewport);

        assert_eq!(result, Complex::new(-0.7, 0.25));
    }

    #[test]
    fn test_odd_dimensions_use_fractional_centre() {
        let viewport = ViewportState::new(1.0, 0.0, 0.0).unwrap();
        let result = map_pixel(Point { x: 1, y: 2 }, 3, 5, &viewport);

        assert_eq!(result, Complex::new(-0.5, -0.5));
    }

    #[test]
    fn test_top_left_corner() {
        let viewport = ViewportState::new(0.5, 1.0, -1.0).unwrap();
        let result = map_pixel(Point { x: 0, y: 0 }, 4, 2, &viewport);

        assert_eq!(result, Complex::new(0.0, -1.5));
    }

    #[test]
    fn test_is_deterministic() {
        let viewport = ViewportState::default();
        let pixel = Point { x: 17, y: 3 };

        assert_eq!(
            map_pixel(pixel, 31, 7, &viewport),
            map_pixel(pixel, 31, 7, &viewport)
        );
    }

    #[test]
    fn test_centre_identity_holds_within_rounding() {
        for (zoom, x_offset, y_offset) in [(0.003, -0.7, 0.0), (1e-9, 0.3, -0.01), (2.0, -1.25, 1.5)] {
            let viewport = ViewportState::new(zoom, x_offset, y_offset).unwrap();
            let result = map_pixel(Point { x: 50, y: 20 }, 100, 40, &viewport);

            assert!((result.real - x_offset).abs() < 1e-12);
            assert!((result.imag - y_offset).abs() < 1e-12);
        }
    }
}
