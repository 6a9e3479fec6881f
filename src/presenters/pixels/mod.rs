pub mod presenter;

pub use presenter::{OverlayValues, PixelsPresenter};
