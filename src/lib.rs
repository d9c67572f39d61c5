pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::{toml_config::TomlConfig, OutputFormat};
pub use crate::core::{
    accumulate::{append_to, SharedAccumulator},
    detection::{DetectionRunner, DetectionSettings},
    summer::{max_of_sum, sum_checked, sum_strict, sum_unchecked, sum_with_policy},
};
pub use crate::domain::model::{BoundingBox, Detection, Frame, FrameReport, Number, SumOutcome, SumPolicy};
pub use crate::domain::ports::{Detector, FrameSource};
pub use crate::utils::error::{ListError, Result};
