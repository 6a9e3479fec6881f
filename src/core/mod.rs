pub mod actions;
pub mod api;
pub mod data;
pub mod fractals;
pub mod util;
