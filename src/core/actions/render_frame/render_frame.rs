use crate::core::data::colour::Colour;
use crate::core::data::complex_bounds::ComplexBounds;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::PixelPoint;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::escape_time;
use crate::core::fractals::mandelbrot::colour_map::colour_for;
use crate::core::util::plane_mapper::to_plane;

/// Colour of the pixel at `(x, y)` for the given view.
#[must_use]
pub fn render_pixel(
    x: u32,
    y: u32,
    bounds: ComplexBounds,
    viewport: Viewport,
    max_iterations: IterationBudget,
) -> Colour {
    let c = to_plane(PixelPoint::new(f64::from(x), f64::from(y)), bounds, viewport);

    colour_for(escape_time(c, max_iterations), max_iterations)
}

/// Fills one row of RGBA bytes. `row` must be exactly `width * 4` bytes long.
pub(crate) fn render_row(
    y: u32,
    row: &mut [u8],
    bounds: ComplexBounds,
    viewport: Viewport,
    max_iterations: IterationBudget,
) {
    for (x, pixel) in (0..viewport.width()).zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
        pixel.copy_from_slice(&render_pixel(x, y, bounds, viewport, max_iterations).to_rgba());
    }
}

/// Renders a complete frame, row-major. Pure: the same inputs always give the same
/// bytes, and every call allocates a fresh buffer.
#[must_use]
pub fn render(
    bounds: ComplexBounds,
    viewport: Viewport,
    max_iterations: IterationBudget,
) -> PixelBuffer {
    let row_bytes = viewport.width() as usize * BYTES_PER_PIXEL;
    let mut frame = PixelBuffer::new(viewport);

    for (y, row) in (0..viewport.height()).zip(frame.buffer_mut().chunks_exact_mut(row_bytes)) {
        render_row(y, row, bounds, viewport, max_iterations);
    }

    frame
}
