use pairwise_lists::{
    BoundingBox, Detection, DetectionRunner, DetectionSettings, Detector, Frame, FrameSource,
    ListError, Result,
};

/// In-memory video: frame `i` is a 2x1 single-channel image `[i, i + 100]`.
struct FakeVideo {
    frames: usize,
    reported: Option<usize>,
    cursor: usize,
    seeks: Vec<usize>,
}

impl FakeVideo {
    fn new(frames: usize) -> Self {
        Self {
            frames,
            reported: Some(frames),
            cursor: 0,
            seeks: Vec::new(),
        }
    }
}

impl FrameSource for FakeVideo {
    fn frame_count(&self) -> Option<usize> {
        self.reported
    }

    fn seek(&mut self, index: usize) -> Result<()> {
        self.seeks.push(index);
        self.cursor = index;
        Ok(())
    }

    fn next_frame(&mut self) -> Result<Option<Frame>> {
        if self.cursor >= self.frames {
            return Ok(None);
        }
        let i = self.cursor as u8;
        self.cursor += 1;
        Frame::new(i as usize, 2, 1, 1, vec![i, i + 100]).map(Some)
    }
}

#[derive(Default)]
struct RecordingDetector {
    seen: Vec<Frame>,
    fail_on: Option<usize>,
}

impl Detector for RecordingDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>> {
        if self.fail_on == Some(frame.index()) {
            return Err(ListError::DetectionError {
                message: format!("network rejected frame {}", frame.index()),
            });
        }
        self.seen.push(frame.clone());
        Ok(vec![Detection {
            label: "person".to_string(),
            confidence: 0.9,
            bbox: BoundingBox {
                x: frame.index() as f32,
                y: 0.0,
                width: frame.width() as f32,
                height: frame.height() as f32,
            },
        }])
    }
}

fn settings(first: usize, last: usize, rotate: Option<u32>) -> DetectionSettings {
    DetectionSettings {
        first_frame: first,
        last_frame: last,
        rotate_degrees: rotate,
    }
}

#[test]
fn test_processes_requested_range() {
    let mut runner = DetectionRunner::new(
        FakeVideo::new(20),
        RecordingDetector::default(),
        settings(3, 6, None),
    );

    let reports = runner.run().unwrap();
    let indices: Vec<usize> = reports.iter().map(|r| r.frame_index).collect();
    assert_eq!(indices, vec![3, 4, 5]);
    assert!(reports.iter().all(|r| r.detections.len() == 1));

    let (video, detector) = runner.into_parts();
    assert_eq!(video.seeks, vec![3]);
    assert_eq!(detector.seen.len(), 3);
    assert_eq!(detector.seen[0].data(), &[3, 103]);
}

#[test]
fn test_stops_when_source_runs_out() {
    let mut video = FakeVideo::new(4);
    video.reported = None;
    let mut runner = DetectionRunner::new(video, RecordingDetector::default(), settings(0, 10, None));

    let reports = runner.run().unwrap();
    assert_eq!(reports.len(), 4);
}

#[test]
fn test_range_is_clamped_to_frame_count() {
    let mut runner = DetectionRunner::new(
        FakeVideo::new(2),
        RecordingDetector::default(),
        settings(0, 10, None),
    );
    assert_eq!(runner.run().unwrap().len(), 2);

    let mut past_end = DetectionRunner::new(
        FakeVideo::new(2),
        RecordingDetector::default(),
        settings(5, 10, None),
    );
    assert!(past_end.run().unwrap().is_empty());
    let (video, _) = past_end.into_parts();
    assert!(video.seeks.is_empty());
}

#[test]
fn test_frames_are_rotated_before_detection() {
    let mut runner = DetectionRunner::new(
        FakeVideo::new(1),
        RecordingDetector::default(),
        settings(0, 1, Some(90)),
    );

    let reports = runner.run().unwrap();
    assert_eq!(reports[0].detections[0].bbox.width, 1.0);
    assert_eq!(reports[0].detections[0].bbox.height, 2.0);

    let (_, detector) = runner.into_parts();
    let frame = &detector.seen[0];
    assert_eq!((frame.width(), frame.height()), (1, 2));
    assert_eq!(frame.data(), &[0, 100]);
}

#[test]
fn test_detector_errors_propagate() {
    let detector = RecordingDetector {
        seen: Vec::new(),
        fail_on: Some(2),
    };
    let mut runner = DetectionRunner::new(FakeVideo::new(5), detector, settings(0, 5, None));

    let err = runner.run().unwrap_err();
    assert!(matches!(err, ListError::DetectionError { .. }));
    let (_, detector) = runner.into_parts();
    assert_eq!(detector.seen.len(), 2);
}

#[test]
fn test_invalid_settings_are_rejected_before_reading() {
    let mut runner = DetectionRunner::new(
        FakeVideo::new(5),
        RecordingDetector::default(),
        settings(4, 1, None),
    );
    assert!(runner.run().is_err());
    let (video, _) = runner.into_parts();
    assert!(video.seeks.is_empty());
}
