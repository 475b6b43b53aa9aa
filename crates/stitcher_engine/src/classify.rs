//! Sender classification from bubble geometry.

use crate::normalize;
use crate::{BoundingBox, BubblePosition, ClassifiedBubble, Snippet};

// Deadband around the horizontal midpoint; anything between the cutoffs is
// treated as center-aligned system or ambiguous text.
const LEFT_CUTOFF: f64 = 0.35;
const RIGHT_CUTOFF: f64 = 0.65;

const FIRST_PERSON_INDICATORS: &[&str] = &[
    "i ", "i'm ", "i'll ", "i've ", "i'd ", "me ", "my ", "mine ", "myself ",
];

/// Bucket a bubble by the horizontal center of its bounding box.
pub fn bubble_position(bounding_box: &BoundingBox) -> BubblePosition {
    let mid_x = bounding_box.mid_x();
    if mid_x < LEFT_CUTOFF {
        BubblePosition::Left
    } else if mid_x > RIGHT_CUTOFF {
        BubblePosition::Right
    } else {
        BubblePosition::Center
    }
}

/// Infer the sender: right-aligned bubbles belong to the device owner,
/// left-aligned to the other party. Center-aligned text falls back to a
/// first-person wording heuristic and may misclassify ambiguous system text.
pub fn is_from_user(position: BubblePosition, cleaned_text: &str) -> bool {
    match position {
        BubblePosition::Right => true,
        BubblePosition::Left => false,
        BubblePosition::Center => {
            let lowered = cleaned_text.to_lowercase();
            FIRST_PERSON_INDICATORS
                .iter()
                .any(|indicator| lowered.contains(indicator))
        }
    }
}

/// Clean one snippet and classify its sender.
pub fn classify(snippet: &Snippet) -> ClassifiedBubble {
    let (cleaned_text, metadata) = normalize::clean(&snippet.text);
    let position = bubble_position(&snippet.bounding_box);
    ClassifiedBubble {
        is_from_user: is_from_user(position, &cleaned_text),
        cleaned_text,
        bounding_box: snippet.bounding_box.clone(),
        page_index: snippet.page_index,
        position,
        metadata,
    }
}
