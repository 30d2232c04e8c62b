//! PHP grammar. Script and style blocks in templates are embedded regions.

use super::html::{SCRIPT_BLOCK, STYLE_BLOCK};
use super::{C_FAMILY_BLOCK_KEYWORDS, C_NUMBER};
use crate::highlight::grammar::{BlockStyle, EmbedRule, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

const KEYWORDS: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "die", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "final", "finally", "fn", "for", "foreach", "function", "global",
    "goto", "if", "implements", "include", "include_once", "instanceof", "insteadof",
    "interface", "isset", "list", "match", "namespace", "new", "or", "print", "private",
    "protected", "public", "readonly", "require", "require_once", "return", "static",
    "switch", "throw", "trait", "try", "unset", "use", "var", "while", "xor", "yield", "true",
    "false", "null", "__CLASS__", "__DIR__", "__FILE__", "__FUNCTION__", "__LINE__",
    "__METHOD__", "__NAMESPACE__", "__TRAIT__",
];

pub static PHP: GrammarTable = GrammarTable {
    language: Language::Php,
    keywords: KEYWORDS,
    fold_keyword_case: true,
    word: None,
    literals: &[
        Rule::new(
            TokenKind::String,
            r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#,
        ),
        Rule::new(TokenKind::Comment, r"//.*?(?:\?>|$)|#(?:[^\[].*)?$|/\*.*?(?:\*/|$)"),
    ],
    patterns: &[
        Rule::new(TokenKind::Preprocessor, r"<\?(?:php\b|=)?|\?>"),
        Rule::new(TokenKind::Variable, r"\$[a-zA-Z_]\w*"),
        Rule::new(TokenKind::Annotation, r"#\[[a-zA-Z_][\w\\]*"),
        Rule::new(TokenKind::Method, r"(?:->|::)([a-zA-Z_]\w*)\s*\("),
        Rule::new(TokenKind::Property, r"->([a-zA-Z_]\w*)"),
        Rule::new(TokenKind::Number, C_NUMBER),
        Rule::new(
            TokenKind::Class,
            r"\b(?:class|interface|trait|enum|new|extends|implements)\s+([a-zA-Z_\\][\w\\]*)",
        ),
        Rule::new(TokenKind::Namespace, r"\b(?:namespace|use)\s+([a-zA-Z_\\][\w\\]*)"),
        Rule::new(
            TokenKind::Function,
            r"\bfunction\s+&?([a-zA-Z_]\w*)|\b([a-zA-Z_]\w*)\s*\(",
        ),
        Rule::new(TokenKind::Constant, r"\b[A-Z][A-Z0-9_]+\b"),
        Rule::new(
            TokenKind::Operator,
            r"===|!==|==|!=|<=>|<=|>=|\*\*|\?\?=?|->|=>|::|\.=?|[+\-*/=<>!&|^%?:~]",
        ),
    ],
    refinements: &[],
    embeds: &[
        EmbedRule::new(Language::JavaScript, SCRIPT_BLOCK),
        EmbedRule::new(Language::Css, STYLE_BLOCK),
    ],
    indent: IndentRules {
        block_keywords: C_FAMILY_BLOCK_KEYWORDS,
        block_style: BlockStyle::Bare,
        colon_blocks: false,
        markup_tags: true,
    },
};
