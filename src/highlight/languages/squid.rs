//! Squid++ grammar: a small scripting language with `#...#` comments and
//! `'1.5` quoted floats.

use crate::highlight::grammar::{BlockStyle, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

const KEYWORDS: &[&str] = &[
    "var", "suppress", "def", "if", "el", "elif", "while", "for", "return", "true", "false",
    "null", "break", "continue", "include", "pkg_create", "pkg_list", "pkg_remove", "i2fl",
    "fl2i", "write", "read", "cat", "append", "tp", "abs", "sqrt", "pow", "sin", "cos",
    "upper", "lower", "trim", "env", "exec", "sleep", "now",
];

const BLOCK_KEYWORDS: &[&str] = &["if", "el", "elif", "while", "for", "def"];

pub static SQUID: GrammarTable = GrammarTable {
    language: Language::Squid,
    keywords: KEYWORDS,
    fold_keyword_case: false,
    word: None,
    literals: &[
        Rule::new(TokenKind::String, r#""(?:[^"\\]|\\.)*"?"#),
        Rule::new(TokenKind::Comment, r"#[^#]*#?"),
    ],
    patterns: &[
        Rule::new(TokenKind::Number, r"'\d*\.?\d+|\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b"),
        Rule::new(TokenKind::Function, r"\bvar\s+([a-zA-Z_]\w*)\s*=\s*def\b"),
        Rule::new(TokenKind::Function, r"\b([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Operator, r"==|!=|<=|>=|&&|\|\||[+\-*/=<>!%]"),
        Rule::new(TokenKind::Delimiter, r"[{}\[\]();,]"),
        Rule::new(TokenKind::Constant, r"\b[A-Z][A-Z0-9_]+\b"),
        Rule::new(TokenKind::Variable, r"\b[a-zA-Z_]\w*\b"),
    ],
    refinements: &[
        Rule::new(TokenKind::Variable, r"var\s+(\w+)\s*="),
        Rule::new(TokenKind::Number, r"'[0-9]*\.?[0-9]+"),
    ],
    embeds: &[],
    indent: IndentRules {
        block_keywords: BLOCK_KEYWORDS,
        block_style: BlockStyle::BareOrBrace,
        colon_blocks: false,
        markup_tags: false,
    },
};
