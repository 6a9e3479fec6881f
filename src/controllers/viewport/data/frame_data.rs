use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub struct FrameData {
    pub pixel_buffer: PixelBuffer,
    /// Magnification relative to the home view, as shown in the overlay.
    pub zoom_factor: f64,
    pub max_iterations: u32,
}
