use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Normalized rectangle locating a snippet on its source image.
/// Both axes span `[0, 1]`; the origin is the bottom-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Horizontal center of the box.
    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// One recognized line of text as reported by the OCR collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub text: String,
    pub bounding_box: BoundingBox,
    pub confidence: f64,
    pub page_index: usize,
}

/// Structured metadata derived from a snippet's raw text.
///
/// `timestamp_raw` is kept even when the time failed to parse, for
/// traceability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub timestamp: Option<NaiveTime>,
    pub timestamp_raw: Option<String>,
    pub is_system_message: bool,
    pub artifacts_removed: Vec<String>,
}

/// Horizontal bucket a bubble falls into on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BubblePosition {
    Left,
    Right,
    Center,
}

/// A snippet after cleaning and sender classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedBubble {
    pub cleaned_text: String,
    pub bounding_box: BoundingBox,
    pub page_index: usize,
    pub position: BubblePosition,
    pub is_from_user: bool,
    pub metadata: Metadata,
}

/// Per-screenshot digest used for overlap detection and ranking.
///
/// The fingerprints are drawn only from the screenshot's own snippets and do
/// not change after creation; `overlaps_with` and `rank` are filled in by the
/// later pipeline stages.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenshotSummary {
    pub page_index: usize,
    pub earliest_timestamp: Option<NaiveTime>,
    pub latest_timestamp: Option<NaiveTime>,
    pub top_snippets: Vec<String>,
    pub bottom_snippets: Vec<String>,
    pub overlaps_with: BTreeSet<usize>,
    pub rank: i32,
}

/// Final transcript unit. `chronological_index` values form a dense `0..N-1`
/// range over one stitching run's output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub is_from_user: bool,
    pub source_page_index: usize,
    pub source_bounding_box: BoundingBox,
    pub chronological_index: usize,
    pub metadata: Metadata,
}

/// Per-page failure reported by the OCR collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionError {
    pub kind: RecognitionFailureKind,
    pub message: String,
}

impl RecognitionError {
    pub fn new(kind: RecognitionFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionFailureKind {
    /// The capture payload could not be interpreted at all.
    InvalidCapture,
    /// Recognition ran but found no text on the page.
    NoTextDetected,
    /// The per-page time bound elapsed before the collaborator answered.
    Timeout,
    /// Opaque failure inside the recognition engine.
    Engine,
}

impl fmt::Display for RecognitionFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognitionFailureKind::InvalidCapture => write!(f, "invalid capture"),
            RecognitionFailureKind::NoTextDetected => write!(f, "no text detected"),
            RecognitionFailureKind::Timeout => write!(f, "timeout"),
            RecognitionFailureKind::Engine => write!(f, "recognition engine error"),
        }
    }
}

/// Failure of a whole stitching run. Individual page failures are dropped
/// from the run and only surface when no page could be recognized at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StitchError {
    #[error("recognition failed on every page: {0}")]
    AllPagesFailed(RecognitionError),
}
