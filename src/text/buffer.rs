//! Line storage kept in lock-step with its highlighting.
//!
//! [`LineBuffer`] owns the lines together with one token list and one
//! embedded-context list per line. Every structural edit goes through a
//! method here that re-tokenizes exactly the lines it touched, so the three
//! vectors always have the same length and the annotations never describe
//! text that is no longer there.

use std::ops::Range;

use super::view::{RenderSegment, visible_segments};
use crate::event::{LogLevel, emit_log};
use crate::highlight::{EmbeddedContext, Highlighter, Language, LineHighlight, Token, TokenSpan};
use crate::unicode::floor_char_boundary;

/// Lines of text plus their tokens and embedded contexts.
///
/// The buffer is never empty: a fresh buffer holds a single empty line, and
/// operations that would remove the last line leave `[""]` behind.
#[derive(Clone, Debug)]
pub struct LineBuffer {
    lines: Vec<String>,
    tokens: Vec<Vec<Token>>,
    contexts: Vec<Vec<EmbeddedContext>>,
    highlighter: Highlighter,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of one line and its annotations.
#[derive(Clone, Copy, Debug)]
pub struct LineView<'a> {
    pub index: usize,
    pub text: &'a str,
    pub tokens: &'a [Token],
    pub contexts: &'a [EmbeddedContext],
}

impl<'a> LineView<'a> {
    /// Tokens paired with the text they cover.
    #[must_use]
    pub fn spans(&self) -> Vec<TokenSpan<'a>> {
        let text = self.text;
        self.tokens
            .iter()
            .map(|token| TokenSpan {
                kind: token.kind,
                text: token.text(text),
            })
            .collect()
    }

    /// Segments of this line visible in `[left, left + width)`.
    #[must_use]
    pub fn segments(&self, left: usize, width: usize, tab_width: usize) -> Vec<RenderSegment> {
        visible_segments(self.text, self.tokens, left, width, tab_width)
    }

    /// Embedded context covering byte `offset`, if any.
    #[must_use]
    pub fn context_at(&self, offset: usize) -> Option<&'a EmbeddedContext> {
        self.contexts
            .iter()
            .find(|ctx| ctx.start <= offset && offset < ctx.end)
    }
}

fn has_terminator(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

/// Split `text` into lines, treating `\r\n`, `\n` and a lone `\r` as breaks.
///
/// A trailing break yields a trailing empty line, so joining the result with
/// `"\n"` reproduces the normalized input.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    if !has_terminator(text) {
        return vec![text.to_string()];
    }
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

fn flatten_lines(lines: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out = Vec::new();
    for line in lines {
        if has_terminator(&line) {
            out.extend(split_lines(&line));
        } else {
            out.push(line);
        }
    }
    out
}

impl LineBuffer {
    /// Create a buffer holding one empty plain-text line.
    #[must_use]
    pub fn new() -> Self {
        Self::with_highlighter(Highlighter::plain())
    }

    /// Create an empty buffer that highlights with `highlighter`.
    #[must_use]
    pub fn with_highlighter(highlighter: Highlighter) -> Self {
        Self {
            lines: vec![String::new()],
            tokens: vec![Vec::new()],
            contexts: vec![Vec::new()],
            highlighter,
        }
    }

    /// Create a buffer from text, normalizing line endings.
    #[must_use]
    pub fn from_text(text: &str, highlighter: Highlighter) -> Self {
        let mut buffer = Self::with_highlighter(highlighter);
        buffer.replace_all(text);
        buffer
    }

    /// Number of lines, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Byte length of a line, 0 for indices past the end.
    #[must_use]
    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map_or(0, String::len)
    }

    #[must_use]
    pub fn tokens(&self, index: usize) -> &[Token] {
        self.tokens.get(index).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contexts(&self, index: usize) -> &[EmbeddedContext] {
        self.contexts.get(index).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn line_view(&self, index: usize) -> Option<LineView<'_>> {
        Some(LineView {
            index,
            text: self.lines.get(index)?,
            tokens: &self.tokens[index],
            contexts: &self.contexts[index],
        })
    }

    /// Views over a range of lines, clipped to the buffer.
    pub fn views(&self, range: Range<usize>) -> impl Iterator<Item = LineView<'_>> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        (start..end).filter_map(|index| self.line_view(index))
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    #[must_use]
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.highlighter.language()
    }

    /// Join all lines with `"\n"`.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.lines.join("\n")
    }

    /// Indices of the lines containing `needle`, in order. Empty for an empty needle.
    #[must_use]
    pub fn find(&self, needle: &str) -> Vec<usize> {
        if needle.is_empty() {
            return Vec::new();
        }
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(needle))
            .map(|(index, _)| index)
            .collect()
    }

    fn clamp_line(&self, index: usize) -> usize {
        index.min(self.lines.len() - 1)
    }

    fn highlight(&self, line: &str) -> LineHighlight {
        self.highlighter.highlight_line(line)
    }

    fn retokenize(&mut self, index: usize) {
        let LineHighlight { tokens, contexts } = self.highlight(&self.lines[index]);
        self.tokens[index] = tokens;
        self.contexts[index] = contexts;
    }

    fn retokenize_all(&mut self) {
        let (tokens, contexts) = self
            .lines
            .iter()
            .map(|line| {
                let LineHighlight { tokens, contexts } = self.highlight(line);
                (tokens, contexts)
            })
            .unzip();
        self.tokens = tokens;
        self.contexts = contexts;
        emit_log(
            LogLevel::Debug,
            "buffer",
            &format!(
                "re-tokenized {} lines as {}",
                self.lines.len(),
                self.language().display_name()
            ),
        );
    }

    /// Insert `text` at (`line`, `col`) and return the position after it.
    ///
    /// Line breaks inside `text` split the line, so pasted multi-line text
    /// keeps the buffer free of terminators.
    pub fn insert_str(&mut self, line: usize, col: usize, text: &str) -> (usize, usize) {
        let line = self.clamp_line(line);
        let col = floor_char_boundary(&self.lines[line], col);
        if !has_terminator(text) {
            self.lines[line].insert_str(col, text);
            self.retokenize(line);
            return (line, col + text.len());
        }

        let mut parts = split_lines(text).into_iter();
        let first = parts.next().unwrap_or_default();
        let mut rest: Vec<String> = parts.collect();
        let tail = self.lines[line].split_off(col);
        self.lines[line].push_str(&first);

        let end_line = line + rest.len();
        let end_col = rest.last().map_or(0, String::len);
        if let Some(last) = rest.last_mut() {
            last.push_str(&tail);
        }
        self.retokenize(line);
        self.insert_lines_after(line, rest);
        (end_line, end_col)
    }

    /// Remove bytes `start..end` of a line and return them.
    ///
    /// Both ends are clamped to the line and floored to char boundaries.
    pub fn remove_range(&mut self, line: usize, start: usize, end: usize) -> String {
        let line = self.clamp_line(line);
        let text = &self.lines[line];
        let end = floor_char_boundary(text, end);
        let start = floor_char_boundary(text, start).min(end);
        if start == end {
            return String::new();
        }
        let removed: String = self.lines[line].drain(start..end).collect();
        self.retokenize(line);
        removed
    }

    /// Replace the whole content of a line.
    pub fn replace_line(&mut self, line: usize, text: &str) {
        let line = self.clamp_line(line);
        self.lines[line].clear();
        self.insert_str(line, 0, text);
    }

    /// Split a line at `col`; the tail moves to a new line prefixed by `prefix`.
    ///
    /// Returns the index of the new line.
    pub fn split_line(&mut self, line: usize, col: usize, prefix: &str) -> usize {
        let line = self.clamp_line(line);
        let col = floor_char_boundary(&self.lines[line], col);
        let tail = self.lines[line].split_off(col);
        let mut new_line = String::with_capacity(prefix.len() + tail.len());
        new_line.push_str(prefix);
        new_line.push_str(&tail);
        self.retokenize(line);
        self.insert_lines_after(line, vec![new_line]);
        line + 1
    }

    /// Insert lines directly after `line`, tokenizing only the new lines.
    pub fn insert_lines_after(&mut self, line: usize, lines: Vec<String>) {
        let line = self.clamp_line(line);
        let lines = flatten_lines(lines);
        let count = lines.len();
        if count == 0 {
            return;
        }
        let at = line + 1;
        let (tokens, contexts): (Vec<_>, Vec<_>) = lines
            .iter()
            .map(|text| {
                let LineHighlight { tokens, contexts } = self.highlight(text);
                (tokens, contexts)
            })
            .unzip();
        self.lines.splice(at..at, lines);
        self.tokens.splice(at..at, tokens);
        self.contexts.splice(at..at, contexts);
    }

    /// Append the next line onto `line` and return the join column.
    ///
    /// Returns `None` when `line` is the last line.
    pub fn join_with_next(&mut self, line: usize) -> Option<usize> {
        if line + 1 >= self.lines.len() {
            return None;
        }
        let col = self.lines[line].len();
        let next = self.lines.remove(line + 1);
        self.tokens.remove(line + 1);
        self.contexts.remove(line + 1);
        self.lines[line].push_str(&next);
        self.retokenize(line);
        Some(col)
    }

    /// Append lines at the end, tokenizing only the new lines.
    ///
    /// Returns the number of lines added.
    pub fn append_lines(&mut self, lines: impl IntoIterator<Item = String>) -> usize {
        let last = self.lines.len() - 1;
        let before = self.lines.len();
        self.insert_lines_after(last, flatten_lines(lines));
        self.lines.len() - before
    }

    /// Replace every line, re-tokenizing the whole buffer.
    ///
    /// An empty list leaves a single empty line.
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        let mut lines = flatten_lines(lines);
        if lines.is_empty() {
            lines.push(String::new());
        }
        self.lines = lines;
        self.retokenize_all();
    }

    /// Replace the content with `text`, normalizing `\r\n` to `\n`.
    pub fn replace_all(&mut self, text: &str) {
        self.replace_lines(split_lines(text));
    }

    /// Switch highlighters and re-tokenize everything.
    pub fn set_highlighter(&mut self, highlighter: Highlighter) {
        self.highlighter = highlighter;
        self.retokenize_all();
    }

    /// Verify the structural invariants, describing the first violation.
    ///
    /// Also re-highlights every line and compares against the stored
    /// annotations, so this is meant for tests and debug assertions.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.lines.is_empty() {
            return Err("buffer has no lines".to_string());
        }
        if self.tokens.len() != self.lines.len() || self.contexts.len() != self.lines.len() {
            return Err(format!(
                "length mismatch: {} lines, {} token lists, {} context lists",
                self.lines.len(),
                self.tokens.len(),
                self.contexts.len()
            ));
        }
        for (index, line) in self.lines.iter().enumerate() {
            if has_terminator(line) {
                return Err(format!("line {index} contains a line terminator"));
            }
            let mut last_end = 0;
            for token in &self.tokens[index] {
                if token.start >= token.end || token.end > line.len() {
                    return Err(format!("line {index}: token {token:?} out of bounds"));
                }
                if token.start < last_end {
                    return Err(format!("line {index}: token {token:?} overlaps"));
                }
                if !line.is_char_boundary(token.start) || !line.is_char_boundary(token.end) {
                    return Err(format!("line {index}: token {token:?} splits a char"));
                }
                last_end = token.end;
            }
            for ctx in &self.contexts[index] {
                if ctx.start >= ctx.end || ctx.end > line.len() {
                    return Err(format!("line {index}: context {ctx:?} out of bounds"));
                }
            }
            let fresh = self.highlight(line);
            if fresh.tokens != self.tokens[index] || fresh.contexts != self.contexts[index] {
                return Err(format!("line {index}: annotations are stale"));
            }
        }
        Ok(())
    }
}
