use std::collections::BTreeSet;

use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use stitcher_engine::{
    compute_ranks, detect_overlaps, order_by_rank, overlaps, precedes, summarize, BoundingBox,
    ScreenshotSummary, Snippet,
};

fn snippet(text: &str, y: f64, page_index: usize) -> Snippet {
    Snippet {
        text: text.to_string(),
        bounding_box: BoundingBox {
            x: 0.15,
            y,
            width: 0.2,
            height: 0.04,
        },
        confidence: 0.9,
        page_index,
    }
}

fn summary(
    page_index: usize,
    span: Option<((u32, u32), (u32, u32))>,
    top: &[&str],
    bottom: &[&str],
) -> ScreenshotSummary {
    let time = |(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    ScreenshotSummary {
        page_index,
        earliest_timestamp: span.map(|(earliest, _)| time(earliest)),
        latest_timestamp: span.map(|(_, latest)| time(latest)),
        top_snippets: top.iter().map(|s| s.to_string()).collect(),
        bottom_snippets: bottom.iter().map(|s| s.to_string()).collect(),
        overlaps_with: BTreeSet::new(),
        rank: 0,
    }
}

#[test]
fn shared_edge_content_marks_overlap_and_orders_pages() {
    let page_a = vec![
        snippet("Hey", 0.9, 0),
        snippet("How's it going", 0.7, 0),
        snippet("Want to meet later", 0.5, 0),
        snippet("see you then", 0.2, 0),
    ];
    let page_b = vec![
        snippet("See you then!", 0.95, 1),
        snippet("Sounds good", 0.7, 1),
        snippet("At the usual place", 0.5, 1),
        snippet("bye", 0.2, 1),
    ];

    let a = summarize(0, &page_a);
    let b = summarize(1, &page_b);
    assert!(overlaps(&a, &b));
    assert!(precedes(&a, &b));

    let mut summaries = vec![a, b];
    detect_overlaps(&mut summaries);
    assert!(summaries[0].overlaps_with.contains(&1));

    let ordered = order_by_rank(summaries);
    let pages: Vec<usize> = ordered.iter().map(|s| s.page_index).collect();
    assert_eq!(pages, vec![0, 1]);
    assert!(ordered[0].rank < ordered[1].rank);
}

#[test]
fn summaries_track_timestamp_span_and_fingerprints() {
    let page = vec![
        snippet("9:15 AM", 0.95, 0),
        snippet("morning!", 0.8, 0),
        snippet("coffee?", 0.6, 0),
        snippet("sure, 10:30 AM works", 0.4, 0),
        snippet("great", 0.2, 0),
    ];
    let summary = summarize(0, &page);

    assert_eq!(summary.earliest_timestamp, NaiveTime::from_hms_opt(9, 15, 0));
    assert_eq!(summary.latest_timestamp, NaiveTime::from_hms_opt(10, 30, 0));
    // Fingerprints hold cleaned text in each reading direction.
    assert_eq!(
        summary.top_snippets,
        vec!["".to_string(), "morning!".to_string(), "coffee?".to_string()]
    );
    assert_eq!(
        summary.bottom_snippets,
        vec![
            "great".to_string(),
            "sure,  works".to_string(),
            "coffee?".to_string()
        ]
    );
}

#[test]
fn timestamps_outrank_capture_order() {
    // Supplied out of order: the later page comes first in the input.
    let late = summary(0, Some(((15, 0), (15, 10))), &["afternoon"], &["later"]);
    let early = summary(1, Some(((9, 0), (9, 5))), &["morning"], &["soon"]);

    let mut summaries = vec![late, early];
    detect_overlaps(&mut summaries);
    let ordered = order_by_rank(summaries);
    let pages: Vec<usize> = ordered.iter().map(|s| s.page_index).collect();
    assert_eq!(pages, vec![1, 0]);
}

#[test]
fn tie_preserves_capture_order() {
    let first = summary(0, None, &["alpha"], &["beta"]);
    let second = summary(1, None, &["gamma"], &["delta"]);

    let summaries = vec![first, second];
    assert_eq!(compute_ranks(&summaries), vec![0, 0]);

    let ordered = order_by_rank(summaries);
    let pages: Vec<usize> = ordered.iter().map(|s| s.page_index).collect();
    assert_eq!(pages, vec![0, 1]);
}

#[test]
fn overlap_falls_back_to_capture_order_for_direction() {
    // Same fingerprint on both edges: content matches both ways, timestamps
    // are absent, so capture order decides who precedes.
    let a = summary(0, None, &["shared line"], &["shared line"]);
    let b = summary(1, None, &["shared line"], &["shared line"]);
    assert!(precedes(&a, &b));

    let mut summaries = vec![a, b];
    detect_overlaps(&mut summaries);
    let ordered = order_by_rank(summaries);
    let pages: Vec<usize> = ordered.iter().map(|s| s.page_index).collect();
    assert_eq!(pages, vec![0, 1]);
}
