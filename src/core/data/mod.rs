pub mod colour;
pub mod complex;
pub mod complex_bounds;
pub mod iteration_budget;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;
pub mod zoom_region;
