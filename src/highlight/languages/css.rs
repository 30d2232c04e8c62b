//! CSS grammar.

use crate::highlight::grammar::{BlockStyle, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

/// Common property names.
const PROPERTIES: &[&str] = &[
    "color", "background", "background-color", "background-image", "font", "margin",
    "margin-top", "margin-right", "margin-bottom", "margin-left", "padding", "padding-top",
    "padding-right", "padding-bottom", "padding-left", "border", "border-radius", "width",
    "height", "min-width", "max-width", "min-height", "max-height", "display", "position",
    "top", "left", "right", "bottom", "float", "clear", "text-align", "text-decoration",
    "font-size", "font-weight", "font-family", "line-height", "letter-spacing",
    "word-spacing", "white-space", "vertical-align", "list-style", "overflow", "visibility",
    "z-index", "cursor", "opacity", "transform", "transition", "animation", "flex", "grid",
    "gap", "justify-content", "align-items", "align-content", "flex-direction", "flex-wrap",
    "order", "flex-grow", "flex-shrink", "flex-basis", "grid-template", "grid-area",
    "box-shadow", "box-sizing", "content",
];

pub static CSS: GrammarTable = GrammarTable {
    language: Language::Css,
    keywords: PROPERTIES,
    fold_keyword_case: true,
    // property names contain hyphens
    word: Some(r"(?:^|[^\w-])([a-zA-Z-][\w-]*)"),
    literals: &[
        Rule::new(TokenKind::Comment, r"/\*.*?(?:\*/|$)"),
        Rule::new(
            TokenKind::String,
            r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#,
        ),
    ],
    patterns: &[
        Rule::new(TokenKind::Preprocessor, r"@[a-zA-Z-]+"),
        Rule::new(TokenKind::Important, r"!\s*important\b"),
        Rule::new(TokenKind::Number, r"#[0-9a-fA-F]{3,8}\b"),
        Rule::new(TokenKind::Number, r"(?:^|[^\w#-])(-?\d*\.?\d+)"),
        Rule::new(
            TokenKind::Unit,
            r"\d((?:px|em|rem|vh|vw|vmin|vmax|pt|pc|in|cm|mm|ex|ch|fr|deg|rad|turn|ms|s)\b|%)",
        ),
        // `name: value` up to `;`, `}` or the end, never followed by `{`
        Rule::new(
            TokenKind::Property,
            r"(-?\b[a-zA-Z][\w-]*)\s*:[^{;}]*(?:[;}]|$)",
        ),
        Rule::new(TokenKind::Pseudo, r"::?[a-zA-Z-]+(?:\([^)]*\))?"),
        Rule::new(TokenKind::Selector, r"([.#]?[a-zA-Z_*][\w-]*)\s*[{,]"),
        Rule::new(TokenKind::Function, r"\b([a-zA-Z-]+)\("),
        Rule::new(TokenKind::Delimiter, r"[{}();:,>+~]"),
        Rule::new(TokenKind::Value, r":\s*([a-zA-Z][\w-]*)"),
    ],
    refinements: &[Rule::new(TokenKind::Selector, r"^([.#]?[a-zA-Z_][\w-]*)")],
    embeds: &[],
    indent: IndentRules {
        block_keywords: &[],
        block_style: BlockStyle::Bare,
        colon_blocks: true,
        markup_tags: false,
    },
};
