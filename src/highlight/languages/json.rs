//! JSON grammar.

use crate::highlight::grammar::{GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

pub static JSON: GrammarTable = GrammarTable {
    language: Language::Json,
    keywords: &["true", "false", "null"],
    fold_keyword_case: false,
    word: None,
    literals: &[
        // object keys win the tie against plain strings
        Rule::new(TokenKind::Property, r#"("(?:[^"\\]|\\.)*")\s*:"#),
        Rule::new(TokenKind::String, r#""(?:[^"\\]|\\.)*"?"#),
    ],
    patterns: &[
        Rule::new(TokenKind::Number, r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b"),
        Rule::new(TokenKind::Delimiter, r"[{}\[\],:]"),
    ],
    refinements: &[],
    embeds: &[],
    indent: IndentRules::BRACKETS_ONLY,
};
