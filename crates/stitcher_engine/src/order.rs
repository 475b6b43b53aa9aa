//! Vertical ordering of snippets within one screenshot.

use std::cmp::Ordering;

use crate::Snippet;

/// Reading direction for a page of snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalOrder {
    TopToBottom,
    BottomToTop,
}

/// Sort snippets by vertical position.
///
/// The bounding-box origin is bottom-left, so `1.0 - origin_y` grows downward
/// on screen: ascending gives top-to-bottom. Both directions share the one
/// comparator and only flip the sort direction.
pub fn sort_vertically(snippets: &[Snippet], direction: VerticalOrder) -> Vec<Snippet> {
    let mut ordered = snippets.to_vec();
    ordered.sort_by(|a, b| {
        let top_down = compare_top_down(a, b);
        match direction {
            VerticalOrder::TopToBottom => top_down,
            VerticalOrder::BottomToTop => top_down.reverse(),
        }
    });
    ordered
}

fn compare_top_down(a: &Snippet, b: &Snippet) -> Ordering {
    let a_depth = 1.0 - a.bounding_box.y;
    let b_depth = 1.0 - b.bounding_box.y;
    a_depth.total_cmp(&b_depth)
}
