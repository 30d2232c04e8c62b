//! Byte offset and visual column conversion for a single line.
//!
//! A visual column counts terminal cells from the start of the line. Tabs
//! advance to the next multiple of the tab width; every other char advances
//! by its display width, so wide CJK text takes two cells and combining
//! marks take none.

use crate::unicode::{display_width_char, floor_char_boundary};

/// Tab stop width used when the editor is not configured otherwise.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Column reached after drawing `ch` starting at `col`.
#[inline]
pub(crate) fn advance(col: usize, ch: char, tab_width: usize) -> usize {
    if ch == '\t' {
        let tab_width = tab_width.max(1);
        col + tab_width - col % tab_width
    } else {
        col + display_width_char(ch)
    }
}

/// Visual column of byte offset `byte` in `line`.
///
/// Offsets past the end or inside a char are clamped to the char boundary
/// at or before them.
#[must_use]
pub fn visual_column(line: &str, byte: usize, tab_width: usize) -> usize {
    let end = floor_char_boundary(line, byte);
    line[..end]
        .chars()
        .fold(0, |col, ch| advance(col, ch, tab_width))
}

/// Byte offset of the char whose cell span contains visual column `target`.
///
/// Returns `line.len()` when `target` lies past the last cell, and the start
/// of a tab or wide char when `target` falls inside it.
#[must_use]
pub fn byte_for_visual_column(line: &str, target: usize, tab_width: usize) -> usize {
    let mut col = 0;
    for (idx, ch) in line.char_indices() {
        let next = advance(col, ch, tab_width);
        if next > target {
            return idx;
        }
        col = next;
    }
    line.len()
}

/// Total number of cells needed to draw `line`.
#[must_use]
pub fn line_width(line: &str, tab_width: usize) -> usize {
    visual_column(line, line.len(), tab_width)
}

/// Replace every tab with spaces up to its tab stop.
#[must_use]
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + tab_width * 2);
    let mut col = 0;
    for ch in line.chars() {
        let next = advance(col, ch, tab_width);
        if ch == '\t' {
            out.extend(std::iter::repeat_n(' ', next - col));
        } else {
            out.push(ch);
        }
        col = next;
    }
    out
}
