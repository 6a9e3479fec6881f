//! Input adapters that turn platform events into viewport input events.

pub mod gui;
