pub mod ports;
pub mod snapshot;
pub mod viewport;
