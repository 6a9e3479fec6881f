use rayon::prelude::*;

use crate::core::actions::render_frame::render_frame::render_row;
use crate::core::data::complex_bounds::ComplexBounds;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::viewport::Viewport;

/// Row-parallel variant of [`render`](super::render_frame::render) using rayon's
/// work-stealing scheduler. Each worker owns a disjoint row slice, so the output is
/// byte-identical to the serial renderer.
#[must_use]
pub fn render_parallel(
    bounds: ComplexBounds,
    viewport: Viewport,
    max_iterations: IterationBudget,
) -> PixelBuffer {
    let row_bytes = viewport.width() as usize * BYTES_PER_PIXEL;
    let mut frame = PixelBuffer::new(viewport);

    frame
        .buffer_mut()
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            render_row(y as u32, row, bounds, viewport, max_iterations);
        });

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::render_frame::render;

    #[test]
    fn test_parallel_matches_serial() {
        let bounds = ComplexBounds::centred_with_aspect(-2.4, 1.0, 160, 90).unwrap();
        let viewport = Viewport::new(160, 90).unwrap();
        let budget = IterationBudget::new(64);

        assert_eq!(
            render_parallel(bounds, viewport, budget),
            render(bounds, viewport, budget)
        );
    }

    #[test]
    fn test_parallel_with_smallest_viewport() {
        let bounds = ComplexBounds::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let viewport = Viewport::new(2, 2).unwrap();
        let budget = IterationBudget::new(1);

        assert_eq!(
            render_parallel(bounds, viewport, budget),
            render(bounds, viewport, budget)
        );
    }
}
