//! Chronological ranking of screenshot summaries.
//!
//! Ranks are votes: every directional signal pulls the earlier page's rank
//! down and pushes the later page's up. The computation is a pure function
//! over an immutable summary slice; nothing is accumulated in place.

use std::collections::HashMap;

use crate::overlap::text_match;
use crate::ScreenshotSummary;

/// Compute a fresh rank vector, one entry per summary in input order.
pub fn compute_ranks(summaries: &[ScreenshotSummary]) -> Vec<i32> {
    let mut ranks = vec![0i32; summaries.len()];
    let position_of_page: HashMap<usize, usize> = summaries
        .iter()
        .enumerate()
        .map(|(position, summary)| (summary.page_index, position))
        .collect();

    // Timestamp pass: wall-clock spans that do not touch give a hard ordering.
    for (i, a) in summaries.iter().enumerate() {
        for (j, b) in summaries.iter().enumerate() {
            if i != j && timestamps_precede(a, b) {
                ranks[i] -= 1;
                ranks[j] += 1;
            }
        }
    }

    // Overlap pass: shared content votes again, with capture order as the
    // last-resort direction.
    for (i, a) in summaries.iter().enumerate() {
        for page in &a.overlaps_with {
            let Some(&j) = position_of_page.get(page) else {
                continue;
            };
            if i != j && precedes(a, &summaries[j]) {
                ranks[i] -= 1;
                ranks[j] += 1;
            }
        }
    }

    ranks
}

/// Assign ranks and return the summaries sorted by ascending rank.
///
/// The sort is stable, so equal ranks keep capture order — the same
/// tiebreaker `precedes` falls back to.
pub fn order_by_rank(mut summaries: Vec<ScreenshotSummary>) -> Vec<ScreenshotSummary> {
    let ranks = compute_ranks(&summaries);
    for (summary, rank) in summaries.iter_mut().zip(ranks) {
        summary.rank = rank;
    }
    summaries.sort_by_key(|summary| summary.rank);
    summaries
}

/// Directional precedence between two overlapping pages: timestamps first,
/// then content carried from the end of `a` into the start of `b`, then
/// capture order.
pub fn precedes(a: &ScreenshotSummary, b: &ScreenshotSummary) -> bool {
    if timestamps_precede(a, b) {
        return true;
    }
    let tail_into_head = a
        .bottom_snippets
        .iter()
        .any(|bottom| b.top_snippets.iter().any(|top| text_match(bottom, top)));
    if tail_into_head {
        return true;
    }
    a.page_index < b.page_index
}

fn timestamps_precede(a: &ScreenshotSummary, b: &ScreenshotSummary) -> bool {
    match (a.latest_timestamp, b.earliest_timestamp) {
        (Some(a_latest), Some(b_earliest)) => a_latest < b_earliest,
        _ => false,
    }
}
