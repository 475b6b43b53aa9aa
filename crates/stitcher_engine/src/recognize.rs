use async_trait::async_trait;
use serde::Deserialize;

use crate::{BoundingBox, RecognitionError, RecognitionFailureKind, Snippet};

/// The OCR collaborator consumed by the pipeline.
///
/// Implementations receive raw image bytes and the page's position in the
/// capture sequence, and answer with unordered snippets. The pipeline never
/// inspects pixels itself; any recognition engine that reports text, a
/// normalized bottom-left-origin bounding box, and a confidence satisfies
/// this contract.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(
        &self,
        image: &[u8],
        page_index: usize,
    ) -> Result<Vec<Snippet>, RecognitionError>;
}

/// Recognizer over pre-captured recognition dumps.
///
/// Treats each "image" as a JSON document of the shape Vision-style OCR
/// helpers emit: `{"items": [{"text", "bounding_box": {x, y, width, height},
/// "confidence"}]}`. Deterministic and engine-independent, which makes it the
/// collaborator of choice for offline runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCaptureRecognizer;

#[derive(Deserialize)]
struct CaptureDocument {
    items: Vec<CaptureItem>,
}

#[derive(Deserialize)]
struct CaptureItem {
    text: String,
    bounding_box: CaptureBox,
    #[serde(default)]
    confidence: f64,
}

#[derive(Deserialize)]
struct CaptureBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[async_trait]
impl TextRecognizer for JsonCaptureRecognizer {
    async fn recognize(
        &self,
        image: &[u8],
        page_index: usize,
    ) -> Result<Vec<Snippet>, RecognitionError> {
        let document: CaptureDocument = serde_json::from_slice(image).map_err(|err| {
            RecognitionError::new(RecognitionFailureKind::InvalidCapture, err.to_string())
        })?;

        if document.items.is_empty() {
            return Err(RecognitionError::new(
                RecognitionFailureKind::NoTextDetected,
                "capture contains no text items",
            ));
        }

        Ok(document
            .items
            .into_iter()
            .map(|item| Snippet {
                text: item.text,
                bounding_box: clamp_box(&item.bounding_box),
                confidence: item.confidence,
                page_index,
            })
            .collect())
    }
}

// Captures are expected to carry normalized coordinates already; a malformed
// one must not push geometry outside the unit square.
fn clamp_box(raw: &CaptureBox) -> BoundingBox {
    let x = raw.x.clamp(0.0, 1.0);
    let y = raw.y.clamp(0.0, 1.0);
    let width = raw.width.clamp(0.0, 1.0).min(1.0 - x);
    let height = raw.height.clamp(0.0, 1.0).min(1.0 - y);
    BoundingBox {
        x,
        y,
        width,
        height,
    }
}
