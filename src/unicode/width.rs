//! Display width calculation for terminal columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get the display width of a string in terminal columns.
#[must_use]
pub fn display_width(s: &str) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|b| (0x20..0x7f).contains(b)).count();
    }
    UnicodeWidthStr::width(s)
}

/// Get the display width of a character in terminal columns.
///
/// Control characters report 0. Tabs are not handled here; tab expansion
/// depends on the current column and lives in the column mapper.
#[inline]
#[must_use]
pub fn display_width_char(c: char) -> usize {
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    if c < ' ' {
        return 0;
    }
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Check if a character occupies two terminal columns.
#[must_use]
pub fn is_wide(c: char) -> bool {
    display_width_char(c) == 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width_char('a'), 1);
        assert_eq!(display_width_char('\u{7}'), 0);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width("漢字"), 4);
        assert_eq!(display_width_char('漢'), 2);
        assert!(is_wide('漢'));
        assert!(!is_wide('a'));
    }

    #[test]
    fn test_combining_mark_is_zero_width() {
        assert_eq!(display_width_char('\u{0301}'), 0);
        assert_eq!(display_width("e\u{0301}"), 1);
    }
}
