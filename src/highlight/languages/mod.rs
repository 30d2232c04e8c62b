//! Built-in grammar tables, one module per language family.

pub mod c;
pub mod css;
pub mod go;
pub mod html;
pub mod java;
pub mod javascript;
pub mod json;
pub mod markdown;
pub mod php;
pub mod python;
pub mod rust;
pub mod shell;
pub mod squid;

#[cfg(test)]
mod tests;

use super::grammar::GrammarTable;
use super::language::Language;

static PLAIN_TEXT: GrammarTable = GrammarTable::empty(Language::PlainText);

/// Static table for `language`.
#[must_use]
pub fn table(language: Language) -> &'static GrammarTable {
    match language {
        Language::PlainText => &PLAIN_TEXT,
        Language::Go => &go::GO,
        Language::JavaScript => &javascript::JAVASCRIPT,
        Language::Python => &python::PYTHON,
        Language::Html => &html::HTML,
        Language::Css => &css::CSS,
        Language::Json => &json::JSON,
        Language::Markdown => &markdown::MARKDOWN,
        Language::Shell => &shell::SHELL,
        Language::C => &c::C,
        Language::Cpp => &c::CPP,
        Language::Rust => &rust::RUST,
        Language::Java => &java::JAVA,
        Language::Php => &php::PHP,
        Language::Squid => &squid::SQUID,
    }
}

/// Block keywords shared by the brace languages.
pub(crate) const C_FAMILY_BLOCK_KEYWORDS: &[&str] = &[
    "if", "else", "elif", "while", "for", "switch", "case", "default", "try", "catch",
    "finally", "function", "class", "struct", "interface", "do", "foreach", "match", "impl",
    "trait", "mod", "fn", "el",
];

/// Comment patterns shared by the `//` and `/* */` languages. A block
/// comment left open runs to the end of the line.
pub(crate) const SLASH_COMMENTS: &str = r"//.*$|/\*.*?(?:\*/|$)";

/// Numbers as most C-like languages write them, type suffix included.
pub(crate) const C_NUMBER: &str =
    r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?)\w*";
