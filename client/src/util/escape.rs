//! Entity escaping for values interpolated into markup.
//!
//! Only strings spliced into an `inner_html` template go through here. Text
//! rendered as a text node (participant emails, option labels) is already
//! inert and must not be escaped a second time.

#[cfg(test)]
#[path = "escape_test.rs"]
mod escape_test;

use std::fmt::Display;

/// Convert `value` to text and replace `& < > " '` with HTML entities.
pub fn escape_html(value: impl Display) -> String {
    let text = value.to_string();
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}
