//! Stitching engine: rebuilds one ordered, de-duplicated chat transcript
//! from independently captured messaging-app screenshots.
mod types;
mod recognize;
mod normalize;
mod classify;
mod order;
mod summary;
mod overlap;
mod rank;
mod dedupe;
mod stitch;

pub use classify::{bubble_position, classify, is_from_user};
pub use dedupe::dedupe;
pub use normalize::clean;
pub use order::{sort_vertically, VerticalOrder};
pub use overlap::{detect_overlaps, overlaps, text_match};
pub use rank::{compute_ranks, order_by_rank, precedes};
pub use recognize::{JsonCaptureRecognizer, TextRecognizer};
pub use stitch::{StitchSettings, Stitcher};
pub use summary::summarize;
pub use types::{
    BoundingBox, BubblePosition, ClassifiedBubble, Message, Metadata, RecognitionError,
    RecognitionFailureKind, ScreenshotSummary, Snippet, StitchError,
};
