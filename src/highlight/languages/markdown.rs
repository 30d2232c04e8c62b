//! Markdown grammar.

use crate::highlight::grammar::{GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

pub static MARKDOWN: GrammarTable = GrammarTable {
    language: Language::Markdown,
    keywords: &[],
    fold_keyword_case: false,
    word: None,
    literals: &[
        Rule::new(TokenKind::Preprocessor, r"^\s*(?:```|~~~).*$"),
        Rule::new(TokenKind::Keyword, r"^#{1,6}\s.*$"),
        Rule::new(TokenKind::String, r"`[^`]+`"),
        Rule::new(TokenKind::Comment, r"<!--.*?(?:-->|$)"),
    ],
    patterns: &[
        Rule::new(TokenKind::Delimiter, r"^\s*(?:[-*+]|\d+[.)])\s|^\s*>+"),
        Rule::new(TokenKind::Important, r"\*\*[^*]+\*\*|__[^_]+__"),
        Rule::new(TokenKind::Tag, r"!?\[([^\]]+)\]\("),
        Rule::new(TokenKind::Value, r"\]\(([^)\s]+)"),
        Rule::new(TokenKind::Value, r"<(https?://[^>]+)>"),
        Rule::new(TokenKind::Delimiter, r"^\s*(?:-{3,}|\*{3,}|_{3,})\s*$"),
    ],
    refinements: &[],
    embeds: &[],
    indent: IndentRules::BRACKETS_ONLY,
};
