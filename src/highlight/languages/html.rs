//! HTML grammar. Script, style and PHP blocks are embedded regions.

use crate::highlight::grammar::{BlockStyle, EmbedRule, GrammarTable, IndentRules, Rule};
use crate::highlight::{Language, TokenKind};

/// Element names recognized as keywords inside tags.
pub(crate) const ELEMENTS: &[&str] = &[
    "html", "head", "body", "title", "meta", "script", "style", "link", "div", "span", "p",
    "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "a", "img", "table", "thead",
    "tbody", "tfoot", "tr", "td", "th", "caption", "form", "input", "textarea", "button",
    "select", "option", "label", "br", "hr", "blockquote", "cite", "code", "pre", "kbd",
    "samp", "var", "small", "strong", "em", "b", "i", "u", "s", "del", "ins", "sup", "sub",
    "mark", "ruby", "rt", "rp", "bdi", "bdo", "iframe", "picture", "source", "video",
    "audio", "track", "canvas", "map", "area", "base", "nav", "section", "article", "aside",
    "header", "footer", "main", "figure", "figcaption", "details", "summary", "dialog",
    "menu", "template", "slot", "svg",
];

/// Script and style blocks, shared with PHP.
pub(crate) const SCRIPT_BLOCK: &str = r"(?i)<script\b[^>]*>(.*?)</script\s*>";
pub(crate) const STYLE_BLOCK: &str = r"(?i)<style\b[^>]*>(.*?)</style\s*>";

pub static HTML: GrammarTable = GrammarTable {
    language: Language::Html,
    keywords: ELEMENTS,
    fold_keyword_case: true,
    // element names right after `<` or `</`
    word: Some(r"</?([a-zA-Z][a-zA-Z0-9]*)"),
    literals: &[
        Rule::new(TokenKind::Comment, r"<!--.*?(?:-->|$)"),
        Rule::new(TokenKind::Doctype, r"(?i)<!DOCTYPE[^>]*>?"),
    ],
    patterns: &[
        Rule::new(TokenKind::Tag, r"</?([a-zA-Z][\w:-]*)"),
        Rule::new(
            TokenKind::Entity,
            r"&(?:[a-zA-Z][a-zA-Z0-9]*|#\d+|#[xX][0-9a-fA-F]+);",
        ),
        Rule::new(TokenKind::Attribute, r"\b([a-zA-Z_:][\w:.-]*)\s*="),
        Rule::new(
            TokenKind::Value,
            r#"=\s*("(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')"#,
        ),
        Rule::new(TokenKind::Delimiter, r"/?>|</?|="),
    ],
    refinements: &[Rule::new(TokenKind::Attribute, r"(\w+)=")],
    // PHP first: a script tag inside a PHP string belongs to PHP
    embeds: &[
        EmbedRule::new(Language::Php, r"<\?(?:php\b|=)(.*?)(?:\?>|$)"),
        EmbedRule::new(Language::JavaScript, SCRIPT_BLOCK),
        EmbedRule::new(Language::Css, STYLE_BLOCK),
    ],
    indent: IndentRules {
        block_keywords: &[],
        block_style: BlockStyle::Bare,
        colon_blocks: false,
        markup_tags: true,
    },
};
