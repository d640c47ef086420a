//! HTML escaping and data-attribute encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters percent-encoded when embedding source text in a data
/// attribute. Everything except alphanumerics and `-_.!~*'()` is encoded,
/// matching JavaScript's `encodeURIComponent` so the copy script can
/// decode with `decodeURIComponent`.
const DATA_ATTR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escape HTML special characters.
///
/// Only used for code block bodies; all other text flows through the
/// inline formatter unescaped.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Percent-encode source text for storage in a `data-` attribute.
///
/// Round-trip safe: percent-decoding the result yields the input exactly.
#[must_use]
pub fn encode_data_attr(text: &str) -> String {
    utf8_percent_encode(text, DATA_ATTR).to_string()
}
