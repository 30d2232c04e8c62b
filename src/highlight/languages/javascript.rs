//! JavaScript grammar.

use super::{C_FAMILY_BLOCK_KEYWORDS, SLASH_COMMENTS};
use crate::highlight::grammar::{BlockStyle, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "export", "extends", "finally", "for", "function", "if", "import", "in",
    "instanceof", "let", "new", "return", "super", "switch", "this", "throw", "try", "typeof",
    "var", "void", "while", "with", "yield", "true", "false", "null", "undefined", "async",
    "await", "of", "static", "get", "set",
];

pub static JAVASCRIPT: GrammarTable = GrammarTable {
    language: Language::JavaScript,
    keywords: KEYWORDS,
    fold_keyword_case: false,
    word: None,
    literals: &[
        Rule::new(
            TokenKind::String,
            r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`"#,
        ),
        Rule::new(TokenKind::Comment, SLASH_COMMENTS),
    ],
    patterns: &[
        Rule::new(
            TokenKind::Number,
            r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?)n?\b",
        ),
        // a slash only opens a regex where an operand cannot precede it
        Rule::new(
            TokenKind::Regex,
            r"(?:^|[=(,:;!&|?{}\[]\s*)(/(?:[^/\\*\s]|\\.)(?:[^/\\]|\\.)*/[dgimsuy]*)",
        ),
        Rule::new(TokenKind::Operator, r"\.\.\.|[+\-*/=<>!&|^%?~]+"),
        Rule::new(
            TokenKind::Class,
            r"\bclass\s+([a-zA-Z_$][\w$]*)|\bnew\s+([a-zA-Z_$][\w$]*)",
        ),
        Rule::new(TokenKind::Method, r"\.([a-zA-Z_$][\w$]*)\s*\("),
        Rule::new(
            TokenKind::Function,
            r"\bfunction\s*\*?\s*([a-zA-Z_$][\w$]*)|([a-zA-Z_$][\w$]*)\s*\(",
        ),
        Rule::new(
            TokenKind::Variable,
            r"\b(?:let|const|var)\s+([a-zA-Z_$][\w$]*)",
        ),
        Rule::new(TokenKind::Constant, r"\b[A-Z][A-Z0-9_]+\b"),
        Rule::new(TokenKind::Class, r"\b[A-Z][a-zA-Z0-9_$]*\b"),
    ],
    refinements: &[
        // arrow parameters
        Rule::new(TokenKind::Variable, r"(\w+)\s*=>"),
        Rule::new(TokenKind::Property, r"\.(\w+)"),
    ],
    embeds: &[],
    indent: IndentRules {
        block_keywords: C_FAMILY_BLOCK_KEYWORDS,
        block_style: BlockStyle::Bare,
        colon_blocks: false,
        markup_tags: false,
    },
};
