// src/normalize.rs
//! Text normalization shared by the scorer and the batch aggregator.
//!
//! Lexicon matching runs on lowercase text with single spaces. Thai script has
//! no case, so lowercasing only touches Latin fragments mixed into comments.

/// Max characters kept in `original_text` previews.
pub const PREVIEW_CHARS: usize = 100;

/// Marker appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Trim, collapse whitespace runs into one space and lowercase.
/// `None` and empty input both yield an empty string.
pub fn normalize(text: Option<&str>) -> String {
    let Some(input) = text else {
        return String::new();
    };

    let mut out = String::with_capacity(input.len());
    for word in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.to_lowercase()
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `PREVIEW_CHARS` characters, plus `ELLIPSIS` when the text was longer.
pub fn truncate_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
