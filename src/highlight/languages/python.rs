//! Python grammar.

use crate::highlight::grammar::{BlockStyle, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else",
    "except", "exec", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "not", "or", "pass", "print", "raise", "return", "try", "while", "with",
    "yield", "True", "False", "None", "async", "await", "nonlocal", "match", "case",
];

const BLOCK_KEYWORDS: &[&str] = &[
    "if", "elif", "else", "while", "for", "def", "class", "try", "except", "finally", "with",
    "async def", "async with", "match", "case",
];

pub static PYTHON: GrammarTable = GrammarTable {
    language: Language::Python,
    keywords: KEYWORDS,
    fold_keyword_case: false,
    word: None,
    literals: &[
        Rule::new(
            TokenKind::String,
            r#"(?:\b[rRbBfFuU]{1,2})?(?:"""(?:.*?)(?:"""|$)|'''(?:.*?)(?:'''|$)|"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')"#,
        ),
        Rule::new(TokenKind::Comment, r"#.*$"),
    ],
    patterns: &[
        Rule::new(
            TokenKind::Number,
            r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?j?)\b",
        ),
        Rule::new(TokenKind::Annotation, r"^\s*(@[a-zA-Z_][\w.]*)"),
        Rule::new(TokenKind::Operator, r"[+\-*/=<>!&|^%@~]+|:="),
        Rule::new(TokenKind::Class, r"\bclass\s+([a-zA-Z_]\w*)"),
        Rule::new(TokenKind::Function, r"\bdef\s+([a-zA-Z_]\w*)"),
        Rule::new(TokenKind::Method, r"\.([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Function, r"\b([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Property, r"\.([a-zA-Z_]\w*)"),
        Rule::new(TokenKind::Constant, r"\b[A-Z][A-Z0-9_]+\b"),
        Rule::new(TokenKind::Class, r"\b[A-Z][a-z]\w*\b"),
    ],
    refinements: &[
        Rule::new(TokenKind::Keyword, r"\b(?:self|cls)\b"),
        // decorators not at the start of a line
        Rule::new(TokenKind::Annotation, r"@(\w+)"),
    ],
    embeds: &[],
    indent: IndentRules {
        block_keywords: BLOCK_KEYWORDS,
        block_style: BlockStyle::Colon,
        colon_blocks: true,
        markup_tags: false,
    },
};
