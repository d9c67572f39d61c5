pub mod accumulate;
pub mod detection;
pub mod summer;

pub use crate::domain::model::{Detection, Frame, FrameReport, Number, SumOutcome, SumPolicy};
pub use crate::domain::ports::{Detector, FrameSource};
pub use crate::utils::error::Result;
