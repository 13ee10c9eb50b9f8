use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

/// What the controller hands to the presentation layer. Cancelled work
/// produces no event at all.
#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}
