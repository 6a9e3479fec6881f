//! Interactive Mandelbrot explorer: escape-time rendering, a pixel-to-plane mapper
//! and a viewport state machine that zooms and adjusts precision from input events.

mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
mod input;
pub mod presenters;

pub use config::{CONFIG_ENV_VAR, ConfigError, ExplorerConfig};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::snapshot::SnapshotController;
pub use controllers::viewport::{
    ControlFlow, InputEvent, Key, Transition, ViewportController, ViewportRules, ViewportState,
};
pub use crate::core::api::{ZoomError, adjust_precision, apply_zoom, render};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_bounds::{ComplexBounds, ComplexBoundsError};
pub use crate::core::data::iteration_budget::IterationBudget;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::PixelPoint;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::colour_map::{colour_for, hsv_to_rgb};
pub use crate::core::util::plane_mapper::{rect_to_plane, to_plane};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
