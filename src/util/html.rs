//! HTML text escaping for values interpolated into markup.

use std::fmt::Display;

/// Escape `&`, `<`, `>`, `"` and `'` in the string form of `value`.
///
/// Equivalent to replacing `&` first and then the remaining four characters,
/// so entities produced here are never escaped twice within one call. The
/// transform is not idempotent; apply it once per rendered value.
pub fn escape_html(value: impl Display) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;
