//! String utilities for the domain layer.

/// Length of a string in Unicode scalar values.
///
/// Field limits are expressed in characters, not bytes, so a name written
/// in a non-Latin script gets the same allowance as an ASCII one.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Collapse every whitespace run (including non-breaking spaces) to a single
/// space and trim both ends.
pub fn compact_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len.saturating_sub(3);
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
