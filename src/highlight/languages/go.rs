//! Go grammar.

use super::{C_FAMILY_BLOCK_KEYWORDS, C_NUMBER, SLASH_COMMENTS};
use crate::highlight::grammar::{BlockStyle, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var", "bool", "byte", "complex64",
    "complex128", "error", "float32", "float64", "int", "int8", "int16", "int32", "int64",
    "rune", "string", "uint", "uint8", "uint16", "uint32", "uint64", "uintptr", "true",
    "false", "iota", "nil", "append", "cap", "close", "complex", "copy", "delete", "imag",
    "len", "make", "new", "panic", "print", "println", "real", "recover",
];

pub static GO: GrammarTable = GrammarTable {
    language: Language::Go,
    keywords: KEYWORDS,
    fold_keyword_case: false,
    word: None,
    literals: &[
        Rule::new(
            TokenKind::String,
            r#""(?:[^"\\]|\\.)*"|`[^`]*`|'(?:[^'\\]|\\.)*'"#,
        ),
        Rule::new(TokenKind::Comment, SLASH_COMMENTS),
    ],
    patterns: &[
        Rule::new(TokenKind::Number, C_NUMBER),
        Rule::new(TokenKind::Operator, r":=|<-|\.\.\.|[+\-*/=<>!&|^%]+"),
        Rule::new(TokenKind::Namespace, r"\bpackage\s+([a-zA-Z_]\w*)"),
        Rule::new(TokenKind::Method, r"\.([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Function, r"\b([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Constant, r"\b[A-Z][A-Z0-9_]*\b"),
        Rule::new(TokenKind::Type, r"\b[A-Z]\w*\b"),
        Rule::new(TokenKind::Property, r"\.([a-zA-Z_]\w*)"),
        Rule::new(TokenKind::Variable, r"\b[a-z_]\w*\b"),
    ],
    refinements: &[
        // struct fields: `Name Type`
        Rule::new(TokenKind::Type, r"\b([A-Z]\w*)\s+\w+"),
        // method receivers: `func (r *T) Name`
        Rule::new(TokenKind::Function, r"func\s+\(.*?\)\s+(\w+)"),
    ],
    embeds: &[],
    indent: IndentRules {
        block_keywords: C_FAMILY_BLOCK_KEYWORDS,
        block_style: BlockStyle::Bare,
        colon_blocks: false,
        markup_tags: false,
    },
};
