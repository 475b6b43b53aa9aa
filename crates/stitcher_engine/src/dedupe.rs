//! Duplicate collapsing across overlapping screenshot regions.

use std::collections::HashSet;

use crate::Message;

/// Collapse repeated messages, keeping the first occurrence.
///
/// Input must already be in final chronological sequence, so "first" means
/// earliest chronologically. Messages whose normalized (lowercased, trimmed)
/// text is empty are dropped outright, and survivors are renumbered so
/// `chronological_index` stays a dense `0..N-1` range.
pub fn dedupe(messages: Vec<Message>) -> Vec<Message> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(messages.len());
    for mut message in messages {
        let key = message.text.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        if seen.insert(key) {
            message.chronological_index = unique.len();
            unique.push(message);
        }
    }
    unique
}
