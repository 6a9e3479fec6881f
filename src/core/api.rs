//! Operations the display collaborator calls into.

use crate::core::data::complex_bounds::{ComplexBounds, ComplexBoundsError};
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::point::PixelPoint;
use crate::core::data::viewport::Viewport;
use crate::core::data::zoom_region::{ZoomRegion, ZoomRegionError};
use crate::core::util::plane_mapper::rect_to_plane;
use std::error::Error;
use std::fmt;

pub use crate::core::actions::render_frame::render_frame::render;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomError {
    Region(ZoomRegionError),
    Bounds(ComplexBoundsError),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(err) => write!(f, "invalid zoom region: {}", err),
            Self::Bounds(err) => write!(f, "zoom produced invalid bounds: {}", err),
        }
    }
}

impl Error for ZoomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::Bounds(err) => Some(err),
        }
    }
}

impl From<ZoomRegionError> for ZoomError {
    fn from(err: ZoomRegionError) -> Self {
        Self::Region(err)
    }
}

impl From<ComplexBoundsError> for ZoomError {
    fn from(err: ComplexBoundsError) -> Self {
        Self::Bounds(err)
    }
}

/// Bounds of the view selected by a `width × height` pixel rectangle at `top_left`.
/// Zero-area rectangles are rejected before any mapping happens.
pub fn apply_zoom(
    top_left: PixelPoint,
    width: f64,
    height: f64,
    bounds: ComplexBounds,
    viewport: Viewport,
) -> Result<ComplexBounds, ZoomError> {
    let region = ZoomRegion::new(top_left, width, height)?;

    Ok(rect_to_plane(region, bounds, viewport)?)
}

/// Doubles or halves the iteration budget; halving stops at 1.
#[must_use]
pub fn adjust_precision(current: IterationBudget, increase: bool) -> IterationBudget {
    if increase {
        current.doubled()
    } else {
        current.halved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_precision() {
        assert_eq!(adjust_precision(IterationBudget::new(10), true).get(), 20);
        assert_eq!(adjust_precision(IterationBudget::new(10), false).get(), 5);
        assert_eq!(adjust_precision(IterationBudget::new(1), false).get(), 1);
    }

    #[test]
    fn test_apply_zoom_rejects_degenerate_region() {
        let bounds = ComplexBounds::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let viewport = Viewport::new(4, 4).unwrap();

        let result = apply_zoom(PixelPoint::new(1.0, 1.0), 0.0, 1.0, bounds, viewport);

        assert_eq!(
            result,
            Err(ZoomError::Region(ZoomRegionError::Degenerate {
                width: 0.0,
                height: 1.0
            }))
        );
    }

    #[test]
    fn test_apply_zoom_maps_rectangle() {
        let bounds = ComplexBounds::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let viewport = Viewport::new(4, 3).unwrap();

        let zoomed = apply_zoom(PixelPoint::new(1.0, 0.0), 2.0, 2.0, bounds, viewport).unwrap();

        assert!((zoomed.xmin() - -1.0).abs() < 1e-12);
        assert!((zoomed.xmax() - 1.0).abs() < 1e-12);
        assert_eq!(zoomed.ymin(), -1.0);
        assert_eq!(zoomed.ymax(), 1.0);
    }
}
