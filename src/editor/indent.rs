//! Smart indentation from a grammar's [`IndentRules`].

use crate::highlight::{BlockStyle, IndentRules};

/// Leading run of spaces and tabs.
#[must_use]
pub fn leading_whitespace(line: &str) -> &str {
    let end = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..end]
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// `line` ends with `word` and the word is not the tail of a longer identifier.
fn ends_with_word(line: &str, word: &str) -> bool {
    let Some(head) = line.strip_suffix(word) else {
        return false;
    };
    head.as_bytes().last().is_none_or(|&b| !is_word_byte(b))
}

fn ends_with_block_keyword(rules: &IndentRules, trimmed: &str) -> bool {
    let lower = trimmed.to_ascii_lowercase();
    rules.block_keywords.iter().any(|kw| match rules.block_style {
        BlockStyle::Bare => ends_with_word(&lower, kw),
        BlockStyle::Colon => lower
            .strip_suffix(':')
            .is_some_and(|head| ends_with_word(head.trim_end(), kw)),
        BlockStyle::BareOrBrace => {
            ends_with_word(&lower, kw)
                || lower
                    .strip_suffix(" {")
                    .is_some_and(|head| ends_with_word(head, kw))
        }
    })
}

// More opening tags than closing tags on a line ending in `>`.
fn opens_markup_tag(trimmed: &str) -> bool {
    if !trimmed.ends_with('>')
        || trimmed.ends_with("/>")
        || trimmed.ends_with("-->")
        || trimmed.contains("<!")
    {
        return false;
    }
    let closing = trimmed.matches("</").count();
    let opening = trimmed.matches('<').count() - closing;
    opening > closing
}

/// Check whether a line (already cut at the cursor) opens a block.
#[must_use]
pub fn opens_block(rules: &IndentRules, line: &str) -> bool {
    let trimmed = line.trim();
    let Some(last) = trimmed.chars().last() else {
        return false;
    };
    if matches!(last, '{' | '[' | '(') {
        return true;
    }
    if last == ':' && rules.colon_blocks {
        return true;
    }
    if rules.markup_tags && opens_markup_tag(trimmed) {
        return true;
    }
    ends_with_block_keyword(rules, trimmed)
}

/// Indentation for the line that follows `line` after pressing Enter.
#[must_use]
pub fn next_line_indent(rules: &IndentRules, line: &str, indent_unit: &str) -> String {
    let mut indent = leading_whitespace(line).to_string();
    if opens_block(rules, line) {
        indent.push_str(indent_unit);
    }
    indent
}

/// Remove one indentation level: a trailing tab, else up to `tab_width` trailing spaces.
#[must_use]
pub fn dedent(indent: &str, tab_width: usize) -> &str {
    if let Some(rest) = indent.strip_suffix('\t') {
        return rest;
    }
    let spaces = indent.len() - indent.trim_end_matches(' ').len();
    &indent[..indent.len() - spaces.min(tab_width.max(1))]
}

/// Check whether `c` closes a bracket, which triggers dedent.
#[must_use]
pub fn is_closing_bracket(c: char) -> bool {
    matches!(c, '}' | ']' | ')')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{Grammar, Language};

    fn rules(language: Language) -> IndentRules {
        *Grammar::compile(language).unwrap().indent_rules()
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("\t  x = 1"), "\t  ");
        assert_eq!(leading_whitespace("x"), "");
        assert_eq!(leading_whitespace("   "), "   ");
    }

    #[test]
    fn test_brackets_open_blocks_everywhere() {
        let plain = IndentRules::BRACKETS_ONLY;
        assert!(opens_block(&plain, "foo(  "));
        assert!(opens_block(&plain, "x = ["));
        assert!(!opens_block(&plain, "x = 1"));
        assert!(!opens_block(&plain, ""));
    }

    #[test]
    fn test_bare_keyword_is_whole_word() {
        let go = rules(Language::Go);
        assert!(opens_block(&go, "\t} else"));
        assert!(!opens_block(&go, "motif"));
        assert!(!opens_block(&go, "x := elif_count"));
    }

    #[test]
    fn test_python_colon_rules() {
        let py = rules(Language::Python);
        assert!(opens_block(&py, "def greet(name):"));
        assert!(opens_block(&py, "else :"));
        assert!(!opens_block(&py, "else"));
        assert!(!opens_block(&py, "x = 1"));
    }

    #[test]
    fn test_squid_keyword_with_brace() {
        let squid = rules(Language::Squid);
        assert!(opens_block(&squid, "el"));
        assert!(opens_block(&squid, "while x < 3 {"));
        assert!(opens_block(&squid, "x = def"));
        assert!(!opens_block(&squid, "model"));
    }

    #[test]
    fn test_markup_tags() {
        let html = rules(Language::Html);
        assert!(opens_block(&html, "<div class=\"a\">"));
        assert!(!opens_block(&html, "<br/>"));
        assert!(!opens_block(&html, "<p>text</p>"));
        assert!(!opens_block(&html, "<!-- note -->"));
        assert!(!opens_block(&html, "<!DOCTYPE html>"));
        assert!(!opens_block(&rules(Language::Go), "<div>"));
    }

    #[test]
    fn test_next_line_indent() {
        let go = rules(Language::Go);
        assert_eq!(next_line_indent(&go, "\tif x {", "\t"), "\t\t");
        assert_eq!(next_line_indent(&go, "\tx++", "\t"), "\t");
        assert_eq!(next_line_indent(&go, "  f(", "  "), "    ");
    }

    #[test]
    fn test_dedent() {
        assert_eq!(dedent("\t\t", 4), "\t");
        assert_eq!(dedent("        ", 4), "    ");
        assert_eq!(dedent("  ", 4), "");
        assert_eq!(dedent("", 4), "");
        assert_eq!(dedent("\t  ", 2), "\t");
    }
}
