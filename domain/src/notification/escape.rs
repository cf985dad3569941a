//! HTML escaping for email bodies

/// Escape the five HTML-significant characters.
///
/// `'` becomes `&#39;` because HTML 4 has no named entity for it and some
/// mail clients do not understand `&apos;`.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
