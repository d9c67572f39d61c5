use crate::domain::model::FrameReport;
use crate::domain::ports::{Detector, FrameSource};
use crate::utils::error::Result;
use crate::utils::validation::{validate_ordered_range, validate_right_angle, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionSettings {
    /// Inclusive.
    pub first_frame: usize,
    /// Exclusive; clamped to the source length when it is known.
    pub last_frame: usize,
    pub rotate_degrees: Option<u32>,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            first_frame: 0,
            last_frame: 10,
            rotate_degrees: None,
        }
    }
}

impl Validate for DetectionSettings {
    fn validate(&self) -> Result<()> {
        validate_ordered_range("detection.first_frame", self.first_frame, self.last_frame)?;
        if let Some(degrees) = self.rotate_degrees {
            validate_right_angle("detection.rotate_degrees", degrees)?;
        }
        Ok(())
    }
}

pub struct DetectionRunner<S: FrameSource, D: Detector> {
    source: S,
    detector: D,
    settings: DetectionSettings,
}

impl<S: FrameSource, D: Detector> DetectionRunner<S, D> {
    pub fn new(source: S, detector: D, settings: DetectionSettings) -> Self {
        Self {
            source,
            detector,
            settings,
        }
    }

    pub fn settings(&self) -> &DetectionSettings {
        &self.settings
    }

    pub fn into_parts(self) -> (S, D) {
        (self.source, self.detector)
    }

    pub fn run(&mut self) -> Result<Vec<FrameReport>> {
        self.settings.validate()?;

        let total = self.source.frame_count();
        let first = self.settings.first_frame;
        let last = match total {
            Some(total) => self.settings.last_frame.min(total),
            None => self.settings.last_frame,
        };

        tracing::info!(
            "🎬 Running detection on frames {}..{} (source reports {:?} frames)",
            first,
            last,
            total
        );

        let mut reports = Vec::new();
        if first >= last {
            return Ok(reports);
        }

        self.source.seek(first)?;
        for index in first..last {
            let frame = match self.source.next_frame()? {
                Some(frame) => frame,
                None => {
                    tracing::warn!("Frame source ended early at frame {}", index);
                    break;
                }
            };

            let frame = match self.settings.rotate_degrees {
                Some(degrees) => frame.rotate(degrees)?,
                None => frame,
            };

            let detections = self.detector.detect(&frame)?;
            tracing::info!("Frame {}: {} detection(s)", index, detections.len());
            for detection in &detections {
                tracing::debug!(
                    label = %detection.label,
                    confidence = detection.confidence,
                    "  {:?}",
                    detection.bbox
                );
            }

            reports.push(FrameReport {
                frame_index: index,
                detections,
            });
        }

        tracing::info!("✅ Detection finished, {} frame(s) processed", reports.len());
        Ok(reports)
    }
}
