//! Shared utility functions.

use std::borrow::Cow;

/// Shorten `s` to at most `max_chars` characters for logs and status lines.
///
/// Counts `char`s rather than bytes so multi-byte text is never split, and
/// appends `...` when something was cut.
pub fn ellipsize(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        None => Cow::Borrowed(s),
        Some((cut, _)) => Cow::Owned(format!("{}...", &s[..cut])),
    }
}
