//! Grapheme and char boundary helpers for cursor movement.
//!
//! Cursor columns are byte offsets, so every movement has to land on a
//! boundary that is safe to slice at. Horizontal movement steps whole
//! grapheme clusters so a combining sequence is never split.

use unicode_segmentation::UnicodeSegmentation;

/// Largest char boundary in `s` that is `<= byte` (clamped to `s.len()`).
#[must_use]
pub fn floor_char_boundary(s: &str, byte: usize) -> usize {
    if byte >= s.len() {
        return s.len();
    }
    let mut idx = byte;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Byte offset of the grapheme boundary after `byte`, or `s.len()`.
#[must_use]
pub fn next_grapheme_boundary(s: &str, byte: usize) -> usize {
    let start = floor_char_boundary(s, byte);
    if start >= s.len() {
        return s.len();
    }
    s[start..]
        .graphemes(true)
        .next()
        .map_or(s.len(), |g| start + g.len())
}

/// Byte offset of the grapheme boundary before `byte`, or 0.
#[must_use]
pub fn prev_grapheme_boundary(s: &str, byte: usize) -> usize {
    let end = floor_char_boundary(s, byte);
    if end == 0 {
        return 0;
    }
    s[..end]
        .grapheme_indices(true)
        .next_back()
        .map_or(0, |(idx, _)| idx)
}

/// Number of grapheme clusters in `s`.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}
