//! Java grammar.

use super::{C_FAMILY_BLOCK_KEYWORDS, C_NUMBER, SLASH_COMMENTS};
use crate::highlight::grammar::{BlockStyle, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "package", "private", "protected", "public",
    "record", "return", "short", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "try", "var", "void", "volatile", "while",
    "yield", "true", "false", "null",
];

pub static JAVA: GrammarTable = GrammarTable {
    language: Language::Java,
    keywords: KEYWORDS,
    fold_keyword_case: false,
    word: None,
    literals: &[
        Rule::new(
            TokenKind::String,
            r#""""|"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#,
        ),
        Rule::new(TokenKind::Comment, SLASH_COMMENTS),
    ],
    patterns: &[
        Rule::new(TokenKind::Annotation, r"@[a-zA-Z_][\w.]*"),
        Rule::new(TokenKind::Number, C_NUMBER),
        Rule::new(TokenKind::Namespace, r"\b(?:package|import)\s+(?:static\s+)?([\w.]+\*?)"),
        Rule::new(TokenKind::Operator, r">>>=?|->|::|[+\-*/=<>!&|^%~?]+"),
        Rule::new(
            TokenKind::Class,
            r"\b(?:class|interface|enum|record|new)\s+([a-zA-Z_]\w*)",
        ),
        Rule::new(TokenKind::Method, r"\.([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Function, r"\b([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Constant, r"\b[A-Z][A-Z0-9_]+\b"),
        Rule::new(TokenKind::Class, r"\b[A-Z][a-zA-Z0-9_]*\b"),
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
