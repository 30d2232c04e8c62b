//! Property-based tests for the line buffer.
//!
//! Arbitrary sequences of structural edits must keep lines, tokens and
//! contexts in lock-step, keep every span inside its line and leave tokens
//! sorted and disjoint.

use proptest::prelude::*;
use site_rust::highlight::{Highlighter, Language, Tokenizer, builtin_grammar};
use site_rust::text::{LineBuffer, split_lines};

// ============================================================================
// Strategies
// ============================================================================

/// Fragments that exercise literals, embeds, brackets and multi-byte text.
fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "let", " ", "\t", "x", "=", "1", "\"", "'", "//", "/*", "*/", "#", "{", "}", "(", ")",
        "<script>", "</script>", "<style>", "p{}", "<?php", "?>", "日本", "é", "e\u{301}", "😀",
        "\n", "\r\n", "node -e '", "fn", "def", ":",
    ])
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..12).prop_map(|parts| parts.concat())
}

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

#[derive(Clone, Debug)]
enum Edit {
    Insert { line: usize, col: usize, text: String },
    Remove { line: usize, start: usize, end: usize },
    Replace { line: usize, text: String },
    Split { line: usize, col: usize, prefix: String },
    Join { line: usize },
    InsertAfter { line: usize, lines: Vec<String> },
    Append { lines: Vec<String> },
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0..8usize, 0..40usize, text()).prop_map(|(line, col, text)| Edit::Insert { line, col, text }),
        (0..8usize, 0..40usize, 0..40usize)
            .prop_map(|(line, start, end)| Edit::Remove { line, start, end }),
        (0..8usize, text()).prop_map(|(line, text)| Edit::Replace { line, text }),
        (0..8usize, 0..40usize, prop::sample::select(vec!["", "\t", "    "]))
            .prop_map(|(line, col, prefix)| Edit::Split { line, col, prefix: prefix.to_string() }),
        (0..8usize).prop_map(|line| Edit::Join { line }),
        (0..8usize, prop::collection::vec(text(), 0..3))
            .prop_map(|(line, lines)| Edit::InsertAfter { line, lines }),
        prop::collection::vec(text(), 0..3).prop_map(|lines| Edit::Append { lines }),
    ]
}

fn apply(buffer: &mut LineBuffer, edit: Edit) {
    match edit {
        Edit::Insert { line, col, text } => {
            buffer.insert_str(line, col, &text);
        }
        Edit::Remove { line, start, end } => {
            buffer.remove_range(line, start, end);
        }
        Edit::Replace { line, text } => buffer.replace_line(line, &text),
        Edit::Split { line, col, prefix } => {
            buffer.split_line(line, col, &prefix);
        }
        Edit::Join { line } => {
            buffer.join_with_next(line);
        }
        Edit::InsertAfter { line, lines } => buffer.insert_lines_after(line, lines),
        Edit::Append { lines } => {
            buffer.append_lines(lines);
        }
    }
}

// ============================================================================
// Buffer Properties
// ============================================================================

proptest! {
    /// Every structural edit leaves the buffer consistent.
    #[test]
    fn edits_preserve_lockstep(
        language in language(),
        initial in text(),
        edits in prop::collection::vec(edit(), 0..16),
    ) {
        let mut buffer = LineBuffer::from_text(&initial, Highlighter::new(language));
        prop_assert!(buffer.check_invariants().is_ok());
        for edit in edits {
            let description = format!("{edit:?}");
            apply(&mut buffer, edit);
            let report = buffer.check_invariants();
            prop_assert!(report.is_ok(), "after {}: {:?}", description, report);
            prop_assert!(!buffer.is_empty());
        }
    }

    /// Serializing and splitting again gives back the same lines.
    #[test]
    fn serialize_round_trips(initial in text(), edits in prop::collection::vec(edit(), 0..8)) {
        let mut buffer = LineBuffer::from_text(&initial, Highlighter::plain());
        for edit in edits {
            apply(&mut buffer, edit);
        }
        let lines: Vec<String> = buffer.lines().map(str::to_string).collect();
        prop_assert_eq!(split_lines(&buffer.serialize()), lines);
    }

    /// Tokenizing the same line twice gives identical tokens.
    #[test]
    fn tokenize_is_idempotent(language in language(), line in "[ -~\\t日é]{0,60}") {
        let grammar = builtin_grammar(language);
        prop_assert_eq!(grammar.tokenize(&line), grammar.tokenize(&line));
    }

    /// Highlighted tokens are sorted, disjoint and on char boundaries.
    #[test]
    fn highlight_tokens_are_disjoint(language in language(), line in "[ -~\\t日é]{0,60}") {
        let result = Highlighter::new(language).highlight_line(&line);
        let mut last_end = 0usize;
        for token in &result.tokens {
            prop_assert!(token.start < token.end);
            prop_assert!(token.start >= last_end, "overlap at {:?}", token);
            prop_assert!(token.end <= line.len());
            prop_assert!(line.is_char_boundary(token.start) && line.is_char_boundary(token.end));
            last_end = token.end;
        }
        for context in &result.contexts {
            prop_assert!(context.start <= context.end && context.end <= line.len());
        }
    }
}
