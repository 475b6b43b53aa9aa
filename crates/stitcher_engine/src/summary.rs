//! Per-screenshot digest: timestamp span and overlap fingerprints.

use std::collections::BTreeSet;

use chrono::NaiveTime;

use crate::normalize;
use crate::order::{sort_vertically, VerticalOrder};
use crate::{ScreenshotSummary, Snippet};

/// Snippets taken from each edge of a screenshot as its overlap fingerprint.
const FINGERPRINT_LEN: usize = 3;

/// Summarize one page of snippets.
///
/// An empty snippet list produces an empty summary, which is how the
/// orchestrator keeps page indices positional for failed or missing pages.
pub fn summarize(page_index: usize, snippets: &[Snippet]) -> ScreenshotSummary {
    let mut earliest: Option<NaiveTime> = None;
    let mut latest: Option<NaiveTime> = None;
    for snippet in snippets {
        let (_, metadata) = normalize::clean(&snippet.text);
        if let Some(timestamp) = metadata.timestamp {
            earliest = Some(earliest.map_or(timestamp, |current| current.min(timestamp)));
            latest = Some(latest.map_or(timestamp, |current| current.max(timestamp)));
        }
    }

    ScreenshotSummary {
        page_index,
        earliest_timestamp: earliest,
        latest_timestamp: latest,
        top_snippets: fingerprint(snippets, VerticalOrder::TopToBottom),
        bottom_snippets: fingerprint(snippets, VerticalOrder::BottomToTop),
        overlaps_with: BTreeSet::new(),
        rank: 0,
    }
}

fn fingerprint(snippets: &[Snippet], direction: VerticalOrder) -> Vec<String> {
    sort_vertically(snippets, direction)
        .iter()
        .take(FINGERPRINT_LEN)
        .map(|snippet| normalize::clean(&snippet.text).0)
        .collect()
}
