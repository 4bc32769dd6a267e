//! Output size control for tool results.

/// Appended after text cut down by [`truncate_with_marker`].
pub const TRUNCATION_MARKER: &str = "\n\n[Content truncated...]";

/// Keep the first `max_chars` characters and append [`TRUNCATION_MARKER`].
///
/// Strings of at most `max_chars` characters are returned unchanged. The
/// result of a truncation starts with the same `max_chars` characters, so
/// applying the same cap again yields the same string.
pub fn truncate_with_marker(text: String, max_chars: usize) -> String {
    match char_boundary(&text, max_chars) {
        Some(end) => {
            let mut truncated = String::with_capacity(end + TRUNCATION_MARKER.len());
            truncated.push_str(&text[..end]);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => text,
    }
}

/// Keep the first `max_chars` characters without a marker.
pub fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some(end) = char_boundary(&text, max_chars) {
        text.truncate(end);
    }
    text
}

/// Decode bytes as UTF-8, dropping invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Byte offset of the character at index `max_chars`, or `None` when the
/// string has no more than `max_chars` characters.
fn char_boundary(text: &str, max_chars: usize) -> Option<usize> {
    text.char_indices().nth(max_chars).map(|(idx, _)| idx)
}
