//! C and C++ grammars.

use super::{C_FAMILY_BLOCK_KEYWORDS, C_NUMBER, SLASH_COMMENTS};
use crate::highlight::grammar::{BlockStyle, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
    "typedef", "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof",
    "_Atomic", "_Bool", "_Static_assert", "_Noreturn", "_Thread_local", "_Generic", "NULL",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq", "override", "final",
];

const INDENT: IndentRules = IndentRules {
    block_keywords: C_FAMILY_BLOCK_KEYWORDS,
    block_style: BlockStyle::Bare,
    colon_blocks: false,
    markup_tags: false,
};

/// `#include <path>` highlights the path as a string.
const C_STRING: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|^\s*#\s*include\s*(<[^>]*>)"#;

pub static C: GrammarTable = GrammarTable {
    language: Language::C,
    keywords: C_KEYWORDS,
    fold_keyword_case: false,
    word: None,
    literals: &[
        Rule::new(TokenKind::String, C_STRING),
        Rule::new(TokenKind::Comment, SLASH_COMMENTS),
    ],
    patterns: &[
        Rule::new(TokenKind::Preprocessor, r"^\s*#\s*[a-zA-Z_]\w*"),
        Rule::new(TokenKind::Number, C_NUMBER),
        Rule::new(TokenKind::Operator, r"[+\-*/=<>!&|^%~?]+"),
        Rule::new(TokenKind::Function, r"\b([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Type, r"\b[a-zA-Z_]\w*_t\b"),
        Rule::new(TokenKind::Constant, r"\b[A-Z][A-Z0-9_]+\b"),
    ],
    refinements: &[],
    embeds: &[],
    indent: INDENT,
};

pub static CPP: GrammarTable = GrammarTable {
    language: Language::Cpp,
    keywords: CPP_KEYWORDS,
    fold_keyword_case: false,
    word: None,
    literals: &[
        Rule::new(TokenKind::String, r#"\b(?:u8|[uUL])?R"\(.*?(?:\)"|$)"#),
        Rule::new(TokenKind::String, C_STRING),
        Rule::new(TokenKind::Comment, SLASH_COMMENTS),
    ],
    patterns: &[
        Rule::new(TokenKind::Preprocessor, r"^\s*#\s*[a-zA-Z_]\w*"),
        Rule::new(
            TokenKind::Namespace,
            r"\bnamespace\s+([a-zA-Z_]\w*)|\b([a-zA-Z_]\w*)::",
        ),
        Rule::new(TokenKind::Number, C_NUMBER),
        Rule::new(TokenKind::Operator, r"::|->|[+\-*/=<>!&|^%~?]+"),
        Rule::new(
            TokenKind::Class,
            r"\b(?:class|struct|enum\s+class)\s+([a-zA-Z_]\w*)",
        ),
        Rule::new(TokenKind::Method, r"(?:\.|->)([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Function, r"\b([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Type, r"\b[a-zA-Z_]\w*_t\b"),
        Rule::new(TokenKind::Constant, r"\b[A-Z][A-Z0-9_]+\b"),
        Rule::new(TokenKind::Class, r"\b[A-Z][a-z]\w*\b"),
    ],
    refinements: &[],
    embeds: &[],
    indent: INDENT,
};
