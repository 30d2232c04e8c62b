//! POSIX shell / bash grammar. Inline `node` and `python` programs are
//! embedded regions.

use crate::highlight::grammar::{BlockStyle, EmbedRule, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

const KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done", "case", "esac",
    "in", "function", "select", "return", "break", "continue", "local", "export",
    "readonly", "declare", "unset", "shift", "source", "exit", "echo", "printf", "read",
    "eval", "exec", "trap", "set", "true", "false",
];

const BLOCK_KEYWORDS: &[&str] = &["then", "do", "else", "in"];

pub static SHELL: GrammarTable = GrammarTable {
    language: Language::Shell,
    keywords: KEYWORDS,
    fold_keyword_case: false,
    word: Some(r"\b[a-zA-Z_][\w-]*"),
    literals: &[
        Rule::new(TokenKind::String, r#""(?:[^"\\]|\\.)*"|'[^']*'"#),
        // `#` starts a comment only at a word boundary (`a#b`, `${#x}` are not)
        Rule::new(TokenKind::Comment, r"(?:^|\s)(#.*)$"),
    ],
    patterns: &[
        Rule::new(
            TokenKind::Variable,
            r"\$\{[^}]*\}|\$[a-zA-Z_]\w*|\$[0-9#?@$!*-]",
        ),
        Rule::new(
            TokenKind::Variable,
            r"^\s*(?:export\s+|local\s+|readonly\s+|declare\s+(?:-\w+\s+)?)?([a-zA-Z_]\w*)\+?=",
        ),
        Rule::new(TokenKind::Function, r"\b([a-zA-Z_][\w-]*)\s*\(\)"),
        Rule::new(TokenKind::Delimiter, r#"<<-?\s*['"]?([a-zA-Z_]\w*)"#),
        Rule::new(TokenKind::Number, r"\b\d+\b"),
        Rule::new(TokenKind::Operator, r"&&|\|\||;;|<<<|[|&;<>!=]+"),
        Rule::new(TokenKind::Property, r"\s(--?[a-zA-Z][\w-]*)"),
    ],
    refinements: &[],
    embeds: &[
        EmbedRule::new(Language::JavaScript, r#"\bnode\s+(?:-e|--eval)\s+['"]([^'"]+)['"]"#),
        EmbedRule::new(Language::Python, r#"\bpython3?\s+-c\s+['"]([^'"]+)['"]"#),
        EmbedRule::new(Language::JavaScript, r#"\bnode\s+<<<\s*['"]([^'"]+)['"]"#),
        EmbedRule::new(Language::Python, r#"\bpython3?\s+<<<\s*['"]([^'"]+)['"]"#),
    ],
    indent: IndentRules {
        block_keywords: BLOCK_KEYWORDS,
        block_style: BlockStyle::Bare,
        colon_blocks: false,
        markup_tags: false,
    },
};
