//! Scroll window over the buffer and per-line render segments.
//!
//! The core does not draw anything. A renderer asks for the [`Viewport`]
//! and, for each visible line, the [`RenderSegment`]s that fall inside the
//! horizontal window: runs of tab-expanded text tagged with the token that
//! covers them (or `None` for unhighlighted gaps).

use std::ops::Range;

use super::column::advance;
use crate::highlight::Token;

/// Visible window into the buffer, in lines and visual columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line.
    pub top: usize,
    /// First visible visual column.
    pub left: usize,
    /// Number of visible cells per row.
    pub width: usize,
    /// Number of visible text rows.
    pub height: usize,
}

impl Viewport {
    /// Create a viewport scrolled to the origin.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            top: 0,
            left: 0,
            width,
            height,
        }
    }

    /// Change the window size, keeping the scroll offsets.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Scroll the minimum amount that puts (`line`, `visual_col`) inside the window.
    pub fn scroll_to(&mut self, line: usize, visual_col: usize) {
        let height = self.height.max(1);
        if line < self.top {
            self.top = line;
        } else if line >= self.top + height {
            self.top = line + 1 - height;
        }

        let width = self.width.max(1);
        if visual_col < self.left {
            self.left = visual_col;
        } else if visual_col >= self.left + width {
            self.left = visual_col + 1 - width;
        }
    }

    /// Line indices covered by the window, clipped to `line_count`.
    #[must_use]
    pub fn rows(&self, line_count: usize) -> Range<usize> {
        let start = self.top.min(line_count);
        let end = self.top.saturating_add(self.height).min(line_count);
        start..end
    }

    /// Check whether a position is inside the window.
    #[must_use]
    pub fn contains(&self, line: usize, visual_col: usize) -> bool {
        line >= self.top
            && line < self.top.saturating_add(self.height)
            && visual_col >= self.left
            && visual_col < self.left.saturating_add(self.width)
    }

    /// Screen position of (`line`, `visual_col`) relative to the window origin.
    #[must_use]
    pub fn to_screen(&self, line: usize, visual_col: usize) -> Option<(usize, usize)> {
        self.contains(line, visual_col)
            .then(|| (visual_col - self.left, line - self.top))
    }
}

/// A clipped run of one line ready to be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSegment {
    /// Screen column relative to the viewport's left edge.
    pub column: usize,
    /// Text with tabs expanded; partially visible wide chars become spaces.
    pub text: String,
    /// Token covering this run, `None` for plain text between tokens.
    pub token: Option<Token>,
}

impl RenderSegment {
    /// Number of cells the segment occupies.
    #[must_use]
    pub fn width(&self) -> usize {
        crate::unicode::display_width(&self.text)
    }
}

// Split the line into alternating gap and token pieces covering every byte.
fn pieces(line: &str, tokens: &[Token]) -> Vec<(usize, usize, Option<Token>)> {
    let mut out = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut pos = 0;
    for token in tokens {
        let start = token.start.max(pos);
        let end = token.end.min(line.len());
        if start >= end || !line.is_char_boundary(start) || !line.is_char_boundary(end) {
            continue;
        }
        if pos < start {
            out.push((pos, start, None));
        }
        out.push((start, end, Some(*token)));
        pos = end;
    }
    if pos < line.len() {
        out.push((pos, line.len(), None));
    }
    out
}

/// Clip `line` and its `tokens` to the window `[left, left + width)`.
///
/// Tokens must be sorted and disjoint, as the buffer keeps them. Tabs are
/// expanded relative to the start of the line, so a tab straddling the left
/// edge renders only its visible cells.
#[must_use]
pub fn visible_segments(
    line: &str,
    tokens: &[Token],
    left: usize,
    width: usize,
    tab_width: usize,
) -> Vec<RenderSegment> {
    let right = left.saturating_add(width);
    let mut segments = Vec::new();
    let mut col = 0;

    for (start, end, token) in pieces(line, tokens) {
        if col >= right {
            break;
        }
        let mut text = String::new();
        let mut column = None;
        for ch in line[start..end].chars() {
            let next = advance(col, ch, tab_width);
            let shown_start = col.max(left);
            let shown_end = next.min(right);
            if shown_start < shown_end {
                column.get_or_insert(shown_start - left);
                if ch == '\t' || shown_end - shown_start < next - col {
                    text.extend(std::iter::repeat_n(' ', shown_end - shown_start));
                } else {
                    text.push(ch);
                }
            } else if next == col && column.is_some() {
                // zero-width char attached to a visible base
                text.push(ch);
            }
            col = next;
            if col >= right {
                break;
            }
        }
        if let Some(column) = column {
            segments.push(RenderSegment {
                column,
                text,
                token,
            });
        }
    }
    segments
}
