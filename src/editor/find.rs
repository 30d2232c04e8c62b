//! Incremental find state.

use crate::text::LineBuffer;

/// Query, matching lines and the selected match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FindState {
    query: String,
    results: Vec<usize>,
    current: usize,
}

impl FindState {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Indices of the lines that contain the query.
    #[must_use]
    pub fn results(&self) -> &[usize] {
        &self.results
    }

    /// Position of the selected match within [`results`](Self::results).
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.results.is_empty()).then_some(self.current)
    }

    /// Line of the selected match.
    #[must_use]
    pub fn current_line(&self) -> Option<usize> {
        self.results.get(self.current).copied()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.current = 0;
    }

    pub fn push(&mut self, c: char, buffer: &LineBuffer) {
        self.query.push(c);
        self.refresh(buffer);
    }

    pub fn pop(&mut self, buffer: &LineBuffer) {
        if self.query.pop().is_some() {
            self.refresh(buffer);
        }
    }

    /// Recompute matches and select the first one.
    pub fn refresh(&mut self, buffer: &LineBuffer) {
        self.results = buffer.find(&self.query);
        self.current = 0;
    }

    /// Select the next match, wrapping around.
    pub fn next(&mut self) -> Option<usize> {
        if self.results.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.results.len();
        self.current_line()
    }

    /// Select the previous match, wrapping around.
    pub fn prev(&mut self) -> Option<usize> {
        if self.results.is_empty() {
            return None;
        }
        self.current = (self.current + self.results.len() - 1) % self.results.len();
        self.current_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::Highlighter;

    #[test]
    fn test_find_cycles_through_matches() {
        let buffer = LineBuffer::from_text("foo\nbar\nfood\nfoo", Highlighter::plain());
        let mut find = FindState::default();
        for c in "foo".chars() {
            find.push(c, &buffer);
        }
        assert_eq!(find.results(), &[0, 2, 3]);
        assert_eq!(find.current_line(), Some(0));
        assert_eq!(find.next(), Some(2));
        assert_eq!(find.next(), Some(3));
        assert_eq!(find.next(), Some(0));
        assert_eq!(find.prev(), Some(3));
    }

    #[test]
    fn test_editing_query_recomputes() {
        let buffer = LineBuffer::from_text("ab\nac", Highlighter::plain());
        let mut find = FindState::default();
        find.push('a', &buffer);
        find.push('c', &buffer);
        assert_eq!(find.results(), &[1]);
        find.pop(&buffer);
        assert_eq!(find.results(), &[0, 1]);
        find.pop(&buffer);
        assert!(find.results().is_empty());
        assert_eq!(find.current_index(), None);
        assert_eq!(find.next(), None);
    }
}
