use crate::core::data::point::PixelPoint;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomRegionError {
    Degenerate { width: f64, height: f64 },
}

impl fmt::Display for ZoomRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate { width, height } => {
                write!(
                    f,
                    "zoom region must have a positive area: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ZoomRegionError {}

/// A screen-space rectangle selected for the next zoom.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomRegion {
    top_left: PixelPoint,
    width: f64,
    height: f64,
}

impl ZoomRegion {
    pub fn new(top_left: PixelPoint, width: f64, height: f64) -> Result<Self, ZoomRegionError> {
        // Written so that NaN sizes fail too.
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ZoomRegionError::Degenerate { width, height });
        }

        Ok(Self {
            top_left,
            width,
            height,
        })
    }

    /// A region spanning `1/divisor` of the viewport's pixel extent (`width - 1` by
    /// `height - 1`, the same extent the plane mapping uses), centred on `centre` and
    /// shifted as needed to stay inside the viewport.
    pub fn centred_on(
        centre: PixelPoint,
        viewport: Viewport,
        divisor: u32,
    ) -> Result<Self, ZoomRegionError> {
        let divisor = f64::from(divisor.max(1));
        let width = f64::from(viewport.width() - 1) / divisor;
        let height = f64::from(viewport.height() - 1) / divisor;

        let max_x = (f64::from(viewport.width() - 1) - width).max(0.0);
        let max_y = (f64::from(viewport.height() - 1) - height).max(0.0);

        let x = (centre.x - width / 2.0).max(0.0).min(max_x);
        let y = (centre.y - height / 2.0).max(0.0).min(max_y);

        Self::new(PixelPoint::new(x, y), width, height)
    }

    #[must_use]
    pub fn top_left(&self) -> PixelPoint {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> PixelPoint {
        PixelPoint::new(self.top_left.x + self.width, self.top_left.y + self.height)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}
