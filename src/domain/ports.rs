use crate::domain::model::{Detection, Frame};
use crate::utils::error::Result;

/// A video source read frame by frame.
pub trait FrameSource {
    /// Total frames, when the container reports it.
    fn frame_count(&self) -> Option<usize>;

    fn seek(&mut self, index: usize) -> Result<()>;

    /// `Ok(None)` once the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// Opaque inference engine, e.g. a pretrained object-detection network.
pub trait Detector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>>;
}
