use crate::controllers::viewport::data::frame_data::FrameData;

/// Receives every frame the controller renders, in order.
pub trait FrameSink {
    fn present(&mut self, frame: FrameData);
}
