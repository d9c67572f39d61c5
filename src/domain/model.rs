use crate::utils::error::{ListError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// A value in a numeric sequence: integers and floats may be mixed freely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(sum) => Number::Int(sum),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

// Exact comparison; `i as f64` would round integers beyond 2^53.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return None;
    }
    if f >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if f < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }

    // In range, so the truncated value converts to i64 without loss.
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        unequal => Some(unequal),
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // Debug keeps the trailing ".0" on whole floats
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl FromStr for Number {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Ok(Number::Int(v));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|e| ListError::InvalidNumber {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Outcome of the sentinel-returning sum: a mismatch comes back as a value, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SumOutcome<T> {
    Sum(Vec<T>),
    LengthMismatch { left: usize, right: usize },
}

impl<T> SumOutcome<T> {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, SumOutcome::LengthMismatch { .. })
    }

    pub fn into_sum(self) -> Option<Vec<T>> {
        match self {
            SumOutcome::Sum(values) => Some(values),
            SumOutcome::LengthMismatch { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<Vec<T>> {
        match self {
            SumOutcome::Sum(values) => Ok(values),
            SumOutcome::LengthMismatch { left, right } => {
                Err(ListError::LengthMismatch { left, right })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SumPolicy {
    Unchecked,
    Checked,
    #[default]
    Strict,
}

impl SumPolicy {
    pub const NAMES: [&'static str; 3] = ["unchecked", "checked", "strict"];

    pub fn as_str(self) -> &'static str {
        match self {
            SumPolicy::Unchecked => "unchecked",
            SumPolicy::Checked => "checked",
            SumPolicy::Strict => "strict",
        }
    }
}

impl FromStr for SumPolicy {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unchecked" => Ok(SumPolicy::Unchecked),
            "checked" => Ok(SumPolicy::Checked),
            "strict" => Ok(SumPolicy::Strict),
            other => Err(ListError::InvalidConfigValueError {
                field: "summation.policy".to_string(),
                value: other.to_string(),
                reason: format!("Valid policies: {}", SumPolicy::NAMES.join(", ")),
            }),
        }
    }
}

/// One decoded video frame, row-major with interleaved channels.
///
/// The buffer always holds exactly `width * height * channels` bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    index: usize,
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Frame {
    pub fn new(
        index: usize,
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(channels))
            .ok_or_else(|| ListError::FrameSourceError {
                message: format!(
                    "frame {} dimensions {}x{}x{} overflow the address space",
                    index, width, height, channels
                ),
            })?;

        if data.len() != expected {
            return Err(ListError::FrameSourceError {
                message: format!(
                    "frame {} has {} bytes, expected {} ({}x{}x{})",
                    index,
                    data.len(),
                    expected,
                    width,
                    height,
                    channels
                ),
            });
        }
        Ok(Self {
            index,
            width,
            height,
            channels,
            data,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Channel bytes at (`row`, `col`), or `None` outside the frame.
    pub fn pixel(&self, row: usize, col: usize) -> Option<&[u8]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.pixel_at(row, col))
    }

    // Callers guarantee row < height and col < width.
    fn pixel_at(&self, row: usize, col: usize) -> &[u8] {
        let start = (row * self.width + col) * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Rotates clockwise by a multiple of 90 degrees.
    pub fn rotate(&self, degrees: u32) -> Result<Frame> {
        crate::utils::validation::validate_right_angle("rotate_degrees", degrees)?;

        let (w, h) = (self.width, self.height);
        match degrees {
            0 => Ok(self.clone()),
            90 => Ok(self.remap(h, w, |r, c| (h - 1 - c, r))),
            180 => Ok(self.remap(w, h, |r, c| (h - 1 - r, w - 1 - c))),
            _ => Ok(self.remap(h, w, |r, c| (c, w - 1 - r))),
        }
    }

    // `source_of` maps a destination (row, col) onto the source (row, col).
    fn remap<F>(&self, new_width: usize, new_height: usize, source_of: F) -> Frame
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        let mut data = Vec::with_capacity(self.data.len());
        for r in 0..new_height {
            for c in 0..new_width {
                let (sr, sc) = source_of(r, c);
                data.extend_from_slice(self.pixel_at(sr, sc));
            }
        }
        Frame {
            index: self.index,
            width: new_width,
            height: new_height,
            channels: self.channels,
            data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
    pub bbox: BoundingBox,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame_index: usize,
    pub detections: Vec<Detection>,
}
