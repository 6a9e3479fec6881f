pub mod render_frame;
#[cfg(feature = "parallel")]
pub mod render_frame_parallel;
