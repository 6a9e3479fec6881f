/// A position in viewport pixel space. Fractional, since pointer positions and zoom
/// region corners rarely land on pixel centres.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
