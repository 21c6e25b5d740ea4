//! Small string helpers shared by the DOM layer and logging.

use itertools::Itertools;

/// Collapse all runs of whitespace (including newlines) into single spaces
/// and trim both ends.
///
/// Used to approximate a browser's rendered `innerText` from raw text nodes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_whitespace("  Hello\n\t world "), "Hello world");
/// ```
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().join(" ")
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at `max` characters with an ellipsis and the number
/// of dropped characters appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let total = s.chars().count();
    if total <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max).collect();
        format!("{}…(+{} chars)", kept, total - max)
    }
}
