//! Cursor position and word motion.

use crate::text::{LineBuffer, visual_column};
use crate::unicode::floor_char_boundary;

/// Cursor position in the buffer.
///
/// `column` is a byte offset that always sits on a char boundary of its
/// line; `visual_column` is the cached cell column of that offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    line: usize,
    column: usize,
    visual_column: usize,
}

impl Cursor {
    /// Line index (0-based).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Byte offset within the line.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub fn visual_column(&self) -> usize {
        self.visual_column
    }

    /// Clamp (`line`, `column`) to `buffer` and refresh the visual column.
    pub(crate) fn place(&mut self, buffer: &LineBuffer, line: usize, column: usize, tab_width: usize) {
        let line = line.min(buffer.len() - 1);
        let text = buffer.line(line).unwrap_or_default();
        self.line = line;
        self.column = floor_char_boundary(text, column);
        self.visual_column = visual_column(text, self.column, tab_width);
    }
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Start of the whitespace-delimited word before `col`.
#[must_use]
pub fn prev_word_start(line: &str, col: usize) -> usize {
    let bytes = line.as_bytes();
    let mut idx = col.min(bytes.len());
    while idx > 0 && is_blank(bytes[idx - 1]) {
        idx -= 1;
    }
    while idx > 0 && !is_blank(bytes[idx - 1]) {
        idx -= 1;
    }
    idx
}

/// End of the whitespace-delimited word at or after `col`.
#[must_use]
pub fn next_word_end(line: &str, col: usize) -> usize {
    let bytes = line.as_bytes();
    let mut idx = col.min(bytes.len());
    while idx < bytes.len() && is_blank(bytes[idx]) {
        idx += 1;
    }
    while idx < bytes.len() && !is_blank(bytes[idx]) {
        idx += 1;
    }
    idx
}
