//! Chrome stripping and metadata extraction for raw OCR snippets.
//!
//! Cleaning always succeeds; the worst case is the trimmed input with empty
//! metadata. The step order is fixed, since each step operates on the output
//! of the previous one.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Metadata;

// Pre-compiled patterns; cleaning runs once per snippet per stage.
static TIME_OF_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s*(AM|PM))?\b").unwrap()
});
static STANDALONE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\d{1,2}:\d{2}(?::\d{2})?\s*(?:AM|PM)?\s*$").unwrap()
});
static MONTH_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,?\s*\d{4})?\b",
    )
    .unwrap()
});

// Longest tokens first, so "Text Message" is removed whole instead of
// leaving "Text " behind after a bare "Message" match.
const CHROME_TOKENS: &[&str] = &[
    "Not Delivered",
    "Text Message",
    "Delivered",
    "Last week",
    "Yesterday",
    "iMessage",
    "Message",
    "Today",
    "Read",
    "Sent",
    "SMS",
    "MMS",
];

static CHROME_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    CHROME_TOKENS
        .iter()
        .map(|token| {
            let pattern = Regex::new(&format!("(?i){}", regex::escape(token))).unwrap();
            (*token, pattern)
        })
        .collect()
});

// Scanned against the original, un-cleaned text: a snippet that was pure
// chrome cleans down to nothing, and only the original still shows it.
const SYSTEM_KEYWORDS: &[&str] = &[
    "imessage", "sms", "mms", "delivered", "read", "sent", "today", "yesterday", "now", "edited",
    "typing", "seen", "received", "via",
];

/// Strip chrome from one raw snippet and extract its metadata.
pub fn clean(raw_text: &str) -> (String, Metadata) {
    let mut metadata = Metadata::default();
    let mut text = raw_text.trim().to_string();

    if let Some(matched) = TIME_OF_DAY.find(&text) {
        let raw = matched.as_str().to_string();
        metadata.timestamp = parse_time_of_day(&raw);
        metadata.timestamp_raw = Some(raw);
        // Every occurrence goes, not just the recorded one; a repeat pass
        // over the cleaned text must find nothing left to strip.
        text = TIME_OF_DAY.replace_all(&text, "").into_owned();
    }

    for (token, pattern) in CHROME_PATTERNS.iter() {
        if pattern.is_match(&text) {
            text = pattern.replace_all(&text, "").into_owned();
            metadata.artifacts_removed.push((*token).to_string());
        }
    }

    text = text
        .trim_start_matches(|c: char| matches!(c, '•' | '*' | '-') || c.is_whitespace())
        .to_string();

    text = MONTH_DATE.replace_all(&text, "").into_owned();

    let cleaned = text.trim().to_string();

    let original_lower = raw_text.to_lowercase();
    metadata.is_system_message = SYSTEM_KEYWORDS
        .iter()
        .any(|keyword| original_lower.contains(keyword))
        || STANDALONE_TIME.is_match(raw_text);

    (cleaned, metadata)
}

/// Parse an `H:MM[:SS][ AM|PM]` string into a time of day.
///
/// 12-hour inputs wrap `12` to `0` before the PM shift, so `12:05 AM` is
/// five past midnight and `12:30 PM` is half past noon. Out-of-range
/// components yield `None`.
fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let captures = TIME_OF_DAY.captures(raw)?;
    let mut hour: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minute: u32 = captures.get(2)?.as_str().parse().ok()?;
    let second: u32 = match captures.get(3) {
        Some(seconds) => seconds.as_str().parse().ok()?,
        None => 0,
    };

    if let Some(meridiem) = captures.get(4) {
        if hour == 12 {
            hour = 0;
        }
        if meridiem.as_str().eq_ignore_ascii_case("pm") && hour < 12 {
            hour += 12;
        }
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}
