//! Summary formatting and LinkPulse action names.

use crate::tracker::TrackerType;

/// `"<TAG> p1:p2:..."`, skipping empty properties. Just the tag when none remain.
pub fn summarize<'a, I>(tracker: TrackerType, props: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = props
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(":");
    if joined.is_empty() {
        tracker.tag().to_string()
    } else {
        format!("{} {}", tracker.tag(), joined)
    }
}

/// Action keyword for a LinkPulse path segment (`/p?` is a pageview, ...).
pub fn lp_action(segment: &str) -> Option<&'static str> {
    match segment {
        "p" => Some("pageview"),
        "pl" => Some("pageload"),
        "c" => Some("click"),
        "is" => Some("inscreen"),
        "u" => Some("unique users"),
        "v" => Some("video"),
        _ => None,
    }
}
