use pretty_assertions::assert_eq;
use stitcher_engine::{
    bubble_position, classify, is_from_user, sort_vertically, BoundingBox, BubblePosition,
    Snippet, VerticalOrder,
};

fn snippet(text: &str, mid_x: f64, y: f64) -> Snippet {
    Snippet {
        text: text.to_string(),
        bounding_box: BoundingBox {
            x: mid_x - 0.1,
            y,
            width: 0.2,
            height: 0.04,
        },
        confidence: 0.9,
        page_index: 0,
    }
}

#[test]
fn position_buckets_respect_the_deadband() {
    let left = snippet("hi", 0.34, 0.5);
    let center = snippet("hi", 0.5, 0.5);
    let right = snippet("hi", 0.66, 0.5);
    assert_eq!(bubble_position(&left.bounding_box), BubblePosition::Left);
    assert_eq!(bubble_position(&center.bounding_box), BubblePosition::Center);
    assert_eq!(bubble_position(&right.bounding_box), BubblePosition::Right);
}

#[test]
fn sender_follows_alignment() {
    assert!(is_from_user(BubblePosition::Right, "anything"));
    assert!(!is_from_user(BubblePosition::Left, "anything"));
}

#[test]
fn center_alignment_falls_back_to_first_person_wording() {
    assert!(is_from_user(BubblePosition::Center, "I'll be there soon"));
    assert!(is_from_user(BubblePosition::Center, "my train is late"));
    assert!(!is_from_user(BubblePosition::Center, "ok"));
    assert!(!is_from_user(BubblePosition::Center, "sounds good"));
}

#[test]
fn classify_combines_cleaning_and_geometry() {
    let bubble = classify(&snippet("Delivered I'm outside 5:12 PM", 0.75, 0.3));
    assert_eq!(bubble.cleaned_text, "I'm outside");
    assert_eq!(bubble.position, BubblePosition::Right);
    assert!(bubble.is_from_user);
    assert!(bubble.metadata.timestamp.is_some());
}

#[test]
fn top_to_bottom_and_bottom_to_top_are_distinct_orders() {
    // Larger origin_y is visually higher on screen.
    let page = vec![
        snippet("middle", 0.3, 0.5),
        snippet("top", 0.3, 0.9),
        snippet("bottom", 0.3, 0.1),
    ];

    let top_down: Vec<String> = sort_vertically(&page, VerticalOrder::TopToBottom)
        .into_iter()
        .map(|s| s.text)
        .collect();
    let bottom_up: Vec<String> = sort_vertically(&page, VerticalOrder::BottomToTop)
        .into_iter()
        .map(|s| s.text)
        .collect();

    assert_eq!(top_down, vec!["top", "middle", "bottom"]);
    assert_eq!(bottom_up, vec!["bottom", "middle", "top"]);
}
