//! Rust grammar.

use super::{C_FAMILY_BLOCK_KEYWORDS, C_NUMBER, SLASH_COMMENTS};
use crate::highlight::grammar::{BlockStyle, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

const KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
    "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "union",
];

pub static RUST: GrammarTable = GrammarTable {
    language: Language::Rust,
    keywords: KEYWORDS,
    fold_keyword_case: false,
    word: None,
    literals: &[
        Rule::new(
            TokenKind::String,
            r##"b?r#+".*?(?:"#+|$)|b?r"[^"]*"?|b?"(?:[^"\\]|\\.)*"?|b?'(?:[^'\\]|\\(?:u\{[0-9a-fA-F]{1,6}\}|x[0-9a-fA-F]{2}|.))'"##,
        ),
        Rule::new(TokenKind::Comment, SLASH_COMMENTS),
    ],
    patterns: &[
        Rule::new(TokenKind::Annotation, r"#!?\[[a-zA-Z_][\w:]*"),
        Rule::new(TokenKind::Macro, r"\b([a-zA-Z_]\w*!)(?:[^=]|$)"),
        Rule::new(TokenKind::Number, C_NUMBER),
        Rule::new(TokenKind::Namespace, r"\b([a-z_]\w*)::"),
        Rule::new(TokenKind::Operator, r"::|->|=>|\.\.=?|[+\-*/=<>!&|^%?]+"),
        Rule::new(TokenKind::Method, r"\.([a-zA-Z_]\w*)\s*(?:::<[^>]*>\s*)?\("),
        Rule::new(
            TokenKind::Function,
            r"\bfn\s+([a-zA-Z_]\w*)|\b([a-zA-Z_]\w*)\s*(?:::<[^>]*>\s*)?\(",
        ),
        // lifetimes and loop labels
        Rule::new(TokenKind::Annotation, r"'[a-zA-Z_]\w*\b"),
        Rule::new(TokenKind::Constant, r"\b[A-Z][A-Z0-9_]+\b"),
        Rule::new(TokenKind::Type, r"\b[A-Z]\w*\b"),
        Rule::new(TokenKind::Property, r"\.([a-zA-Z_]\w*)"),
    ],
    refinements: &[],
    embeds: &[],
    indent: IndentRules {
        block_keywords: C_FAMILY_BLOCK_KEYWORDS,
        block_style: BlockStyle::Bare,
        colon_blocks: false,
        markup_tags: false,
    },
};
