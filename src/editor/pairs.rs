//! Auto-closing delimiter pairs.

use crate::unicode::floor_char_boundary;

/// Brackets, quotes and backticks, in the order they are checked.
pub const DEFAULT_PAIRS: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('"', '"'),
    ('\'', '\''),
    ('`', '`'),
];

/// What typing a char should do at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairAction {
    /// Insert the char as typed.
    Insert,
    /// Insert the char and this closer, leaving the cursor between them.
    AutoClose(char),
    /// The same closer already follows the cursor: move past it.
    SkipOver,
}

fn quote_count(before: &str, quote: char) -> usize {
    before.chars().filter(|&c| c == quote).count()
}

/// Decide how to handle `c` typed at byte `col` of `line`.
///
/// `col` is clamped down to a char boundary.
///
/// A quote only opens a new pair when the count of that quote before the
/// cursor is even; with an odd count it closes the open one, skipping over
/// an identical char that already follows.
#[must_use]
pub fn pair_action(pairs: &[(char, char)], line: &str, col: usize, c: char) -> PairAction {
    let col = floor_char_boundary(line, col);
    let (before, after) = line.split_at(col);
    let next = after.chars().next();
    for &(open, close) in pairs {
        if open == close {
            if c != open {
                continue;
            }
            if quote_count(before, c) % 2 == 0 {
                return PairAction::AutoClose(close);
            }
            if next == Some(c) {
                return PairAction::SkipOver;
            }
            return PairAction::Insert;
        }
        if c == open {
            return PairAction::AutoClose(close);
        }
        if c == close && next == Some(c) {
            return PairAction::SkipOver;
        }
    }
    PairAction::Insert
}

/// Check whether `open` and `close` form a bracket pair (quotes excluded).
#[must_use]
pub fn is_bracket_pair(pairs: &[(char, char)], open: char, close: char) -> bool {
    open != close && pairs.iter().any(|&pair| pair == (open, close))
}

/// Chars immediately around byte `col`, if any. `col` is clamped down to a
/// char boundary.
#[must_use]
pub fn chars_around(line: &str, col: usize) -> (Option<char>, Option<char>) {
    let (before, after) = line.split_at(floor_char_boundary(line, col));
    (before.chars().next_back(), after.chars().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_auto_close() {
        assert_eq!(pair_action(DEFAULT_PAIRS, "f", 1, '('), PairAction::AutoClose(')'));
        assert_eq!(pair_action(DEFAULT_PAIRS, "", 0, '{'), PairAction::AutoClose('}'));
    }

    #[test]
    fn test_closer_skips_over_identical_char() {
        assert_eq!(pair_action(DEFAULT_PAIRS, "f()", 2, ')'), PairAction::SkipOver);
        assert_eq!(pair_action(DEFAULT_PAIRS, "f(x", 3, ')'), PairAction::Insert);
        assert_eq!(pair_action(DEFAULT_PAIRS, "[]", 1, ')'), PairAction::Insert);
    }

    #[test]
    fn test_quote_parity() {
        assert_eq!(pair_action(DEFAULT_PAIRS, "x = ", 4, '"'), PairAction::AutoClose('"'));
        assert_eq!(pair_action(DEFAULT_PAIRS, "x = \"\"", 5, '"'), PairAction::SkipOver);
        assert_eq!(pair_action(DEFAULT_PAIRS, "x = \"ab", 7, '"'), PairAction::Insert);
        assert_eq!(
            pair_action(DEFAULT_PAIRS, "a \"b\" ", 6, '"'),
            PairAction::AutoClose('"')
        );
    }

    #[test]
    fn test_other_quote_kinds_are_independent() {
        assert_eq!(pair_action(DEFAULT_PAIRS, "\"it", 3, '\''), PairAction::AutoClose('\''));
    }

    #[test]
    fn test_no_pairs_configured() {
        assert_eq!(pair_action(&[], "", 0, '('), PairAction::Insert);
    }

    #[test]
    fn test_bracket_pair_and_neighbours() {
        assert!(is_bracket_pair(DEFAULT_PAIRS, '{', '}'));
        assert!(!is_bracket_pair(DEFAULT_PAIRS, '"', '"'));
        assert!(!is_bracket_pair(DEFAULT_PAIRS, '(', ']'));
        assert_eq!(chars_around("a日b", 4), (Some('日'), Some('b')));
        assert_eq!(chars_around("", 0), (None, None));
    }

    #[test]
    fn test_mid_char_column_clamps_down() {
        // byte 2 is inside the three-byte '日'
        assert_eq!(chars_around("a日b", 2), (Some('a'), Some('日')));
        assert_eq!(chars_around("a日b", 99), (Some('b'), None));
        assert_eq!(pair_action(DEFAULT_PAIRS, "\"日\"", 2, '"'), PairAction::Insert);
        assert_eq!(pair_action(DEFAULT_PAIRS, "é)", 1, ')'), PairAction::Insert);
        assert_eq!(pair_action(DEFAULT_PAIRS, "é)", 2, ')'), PairAction::SkipOver);
    }
}
