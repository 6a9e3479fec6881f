//! Viewport state machine: owns the current bounds and iteration budget, turns input
//! events into transitions and renders a frame after each accepted one.

pub mod controller;
pub mod data;
pub mod events;
pub mod ports;
pub mod state;

pub use controller::{ControlFlow, ViewportController};
pub use events::{InputEvent, Key};
pub use state::{Transition, ViewportRules, ViewportState};
