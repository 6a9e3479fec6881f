use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexBoundsError {
    InvalidExtent { width: f64, height: f64 },
    NonFinite,
}

impl fmt::Display for ComplexBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { width, height } => {
                write!(
                    f,
                    "complex bounds extent must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite => write!(f, "complex bounds must be finite"),
        }
    }
}

impl Error for ComplexBoundsError {}

/// Visible region of the complex plane. `xmin < xmax` and `ymin < ymax` always hold.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexBounds {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl ComplexBounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, ComplexBoundsError> {
        if !(xmin.is_finite() && xmax.is_finite() && ymin.is_finite() && ymax.is_finite()) {
            return Err(ComplexBoundsError::NonFinite);
        }

        // Also catches extents that collapsed to zero at deep zoom.
        if xmin >= xmax || ymin >= ymax {
            return Err(ComplexBoundsError::InvalidExtent {
                width: xmax - xmin,
                height: ymax - ymin,
            });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// Bounds spanning `[xmin, xmax]` on the real axis, with an imaginary extent
    /// matching the `width:height` aspect ratio, centred on the real axis.
    pub fn centred_with_aspect(
        xmin: f64,
        xmax: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, ComplexBoundsError> {
        let y_range = (xmax - xmin) * f64::from(height) / f64::from(width);

        Self::new(xmin, xmax, -y_range / 2.0, y_range / 2.0)
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn min_corner(&self) -> Complex {
        Complex::new(self.xmin, self.ymin)
    }

    #[must_use]
    pub fn max_corner(&self) -> Complex {
        Complex::new(self.xmax, self.ymax)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.xmin <= point.real
            && point.real <= self.xmax
            && self.ymin <= point.imag
            && point.imag <= self.ymax
    }

    #[must_use]
    pub fn contains_bounds(&self, other: &ComplexBounds) -> bool {
        self.contains_point(other.min_corner()) && self.contains_point(other.max_corner())
    }
}
