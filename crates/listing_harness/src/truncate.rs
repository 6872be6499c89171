//! Shortening of diagnostic strings.
//!
//! Inputs and outputs reported on failure can be arbitrarily large. Before a
//! value is printed it is cut down to a fixed number of characters and
//! annotated with its original length, e.g.
//!
//! ```text
//! 0123456789... [length = 100000]
//! ```
//!
//! Only diagnostic copies are ever truncated; compared strings are untouched.

/// Truncates `text` in place if it is longer than `max_len` characters.
///
/// The result is the first `max_len` characters followed by
/// `... [length = <original length>]`. Text of exactly `max_len` characters
/// is left alone. Lengths are counted in `char`s so a multi-byte character is
/// never split.
pub fn truncate_in_place(text: &mut String, max_len: usize) {
    let length = text.chars().count();
    if length <= max_len {
        return;
    }

    let cut = text
        .char_indices()
        .nth(max_len)
        .map_or(text.len(), |(idx, _)| idx);
    text.truncate(cut);
    text.push_str("... [length = ");
    text.push_str(&length.to_string());
    text.push(']');
}

/// Returns a truncated copy of `text`.
#[must_use]
pub fn truncated(text: &str, max_len: usize) -> String {
    let mut owned = text.to_string();
    truncate_in_place(&mut owned, max_len);
    owned
}
