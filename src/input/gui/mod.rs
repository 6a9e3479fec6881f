//! Windowed front end: winit for the window and input, pixels for the
//! framebuffer, egui for the overlay.

mod app;
pub mod events;

pub use app::run_gui;
