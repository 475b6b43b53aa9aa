//! Pairwise overlap detection between screenshot summaries.

use crate::ScreenshotSummary;

/// Case- and whitespace-normalized equality-or-containment test.
///
/// Deliberately permissive: dropped characters or a truncated line at a
/// screenshot edge still count as the same content. Empty strings never
/// match — an empty fingerprint would otherwise be contained in everything.
pub fn text_match(a: &str, b: &str) -> bool {
    let a = normalize_for_match(a);
    let b = normalize_for_match(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(&b) || b.contains(&a)
}

fn normalize_for_match(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when `a` and `b` share or border the same conversation span.
///
/// The timestamp arm doubles as a before/after signal for the ranker: a page
/// whose span ends before the other's begins counts as adjacent content.
pub fn overlaps(a: &ScreenshotSummary, b: &ScreenshotSummary) -> bool {
    if let (Some(a_latest), Some(b_earliest)) = (a.latest_timestamp, b.earliest_timestamp) {
        if a_latest < b_earliest {
            return true;
        }
    }

    let tail_into_head = a
        .bottom_snippets
        .iter()
        .any(|bottom| b.top_snippets.iter().any(|top| text_match(bottom, top)));
    if tail_into_head {
        return true;
    }

    // Reverse direction covers captures supplied out of order.
    a.top_snippets
        .iter()
        .any(|top| b.bottom_snippets.iter().any(|bottom| text_match(top, bottom)))
}

/// Record `j`'s page in `i.overlaps_with` for every ordered pair `(i, j)`
/// that overlaps.
pub fn detect_overlaps(summaries: &mut [ScreenshotSummary]) {
    let mut found = Vec::new();
    for (i, a) in summaries.iter().enumerate() {
        for (j, b) in summaries.iter().enumerate() {
            if i != j && overlaps(a, b) {
                found.push((i, b.page_index));
            }
        }
    }
    for (i, page) in found {
        summaries[i].overlaps_with.insert(page);
    }
}
