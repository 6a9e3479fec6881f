use crate::core::data::complex::Complex;
use crate::core::data::complex_bounds::{ComplexBounds, ComplexBoundsError};
use crate::core::data::point::PixelPoint;
use crate::core::data::viewport::Viewport;
use crate::core::data::zoom_region::ZoomRegion;

/// Interpolates between `min` and `max`. Written as `min·(1−t) + max·t` so that
/// `t == 0` and `t == 1` hit the end points exactly.
fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min * (1.0 - t) + max * t
}

/// Maps a pixel coordinate onto the complex plane. Pixel `(0, 0)` lands on
/// `(xmin, ymin)` and pixel `(width - 1, height - 1)` on `(xmax, ymax)`.
///
/// Positions outside the viewport are not rejected; they map to the matching point
/// outside `bounds`.
#[must_use]
pub fn to_plane(pixel: PixelPoint, bounds: ComplexBounds, viewport: Viewport) -> Complex {
    let tx = pixel.x / f64::from(viewport.width() - 1);
    let ty = pixel.y / f64::from(viewport.height() - 1);

    Complex {
        real: lerp(bounds.xmin(), bounds.xmax(), tx),
        imag: lerp(bounds.ymin(), bounds.ymax(), ty),
    }
}

/// Maps both corners of a pixel rectangle onto the plane, producing the bounds of the
/// next view.
///
/// Fails when the mapped corners no longer describe a valid region, which happens once
/// the zoom runs out of `f64` precision.
pub fn rect_to_plane(
    region: ZoomRegion,
    bounds: ComplexBounds,
    viewport: Viewport,
) -> Result<ComplexBounds, ComplexBoundsError> {
    let min = to_plane(region.top_left(), bounds, viewport);
    let max = to_plane(region.bottom_right(), bounds, viewport);

    ComplexBounds::new(min.real, max.real, min.imag, max.imag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ComplexBounds {
        ComplexBounds::new(-2.0, 1.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_to_plane_corners_are_exact() {
        let cases = [
            (ComplexBounds::new(-2.0, 1.0, -1.0, 1.0).unwrap(), 101, 101),
            (ComplexBounds::new(-2.4, 1.0, -0.95625, 0.95625).unwrap(), 1600, 900),
            (ComplexBounds::new(-0.7453, -0.7451, 0.1127, 0.1128).unwrap(), 7, 3),
        ];

        for (bounds, width, height) in cases {
            let viewport = Viewport::new(width, height).unwrap();
            let top_left = to_plane(PixelPoint::new(0.0, 0.0), bounds, viewport);
            let bottom_right = to_plane(
                PixelPoint::new(f64::from(width - 1), f64::from(height - 1)),
                bounds,
                viewport,
            );

            assert_eq!(top_left, Complex::new(bounds.xmin(), bounds.ymin()));
            assert_eq!(bottom_right, Complex::new(bounds.xmax(), bounds.ymax()));
        }
    }

    #[test]
    fn test_to_plane_centre() {
        let bounds = ComplexBounds::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let viewport = Viewport::new(101, 101).unwrap();

        let centre = to_plane(PixelPoint::new(50.0, 50.0), bounds, viewport);

        assert_eq!(centre, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_to_plane_outside_viewport_extrapolates() {
        let viewport = Viewport::new(4, 3).unwrap();

        let left = to_plane(PixelPoint::new(-3.0, 0.0), bounds(), viewport);
        let below = to_plane(PixelPoint::new(0.0, 4.0), bounds(), viewport);

        assert!((left.real - -5.0).abs() < 1e-12);
        assert!((below.imag - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rect_to_plane_maps_both_corners() {
        let viewport = Viewport::new(4, 3).unwrap();
        let region = ZoomRegion::new(PixelPoint::new(0.0, 0.0), 3.0, 1.0).unwrap();

        let zoomed = rect_to_plane(region, bounds(), viewport).unwrap();

        assert_eq!(zoomed.xmin(), -2.0);
        assert_eq!(zoomed.xmax(), 1.0);
        assert_eq!(zoomed.ymin(), -1.0);
        assert!((zoomed.ymax() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_rect_to_plane_is_contractive_inside_viewport() {
        let viewport = Viewport::new(1600, 900).unwrap();
        let bounds = ComplexBounds::centred_with_aspect(-2.4, 1.0, 1600, 900).unwrap();
        let centres = [
            PixelPoint::new(800.0, 450.0),
            PixelPoint::new(150.0, 80.0),
            PixelPoint::new(1500.0, 820.0),
        ];

        for centre in centres {
            let region = ZoomRegion::centred_on(centre, viewport, 8).unwrap();
            let zoomed = rect_to_plane(region, bounds, viewport).unwrap();

            assert!(zoomed.area() < bounds.area());
            assert!(bounds.contains_bounds(&zoomed));
        }
    }

    #[test]
    fn test_rect_to_plane_fails_when_precision_runs_out() {
        let viewport = Viewport::new(1600, 900).unwrap();
        // One ulp wide on the real axis; a sliver at the left edge cannot be split.
        let tiny = ComplexBounds::new(1.0, 1.0 + f64::EPSILON, 0.0, 1.0).unwrap();
        let region = ZoomRegion::new(PixelPoint::new(0.0, 0.0), 0.1, 0.1).unwrap();

        assert!(rect_to_plane(region, tiny, viewport).is_err());
    }
}
