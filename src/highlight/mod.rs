//! Syntax highlighting: languages, grammar tables, the line tokenizer and
//! embedded sub-language detection.

pub mod grammar;
mod highlighter;
pub mod language;
pub mod languages;
pub mod token;
pub mod tokenizer;


pub use grammar::{BlockStyle, EmbedRule, Grammar, GrammarTable, IndentRules, Rule};
pub use highlighter::{Highlighter, LineHighlight};
pub use language::Language;
pub use token::{EmbeddedContext, Token, TokenKind, TokenSpan};
pub use tokenizer::{GrammarRegistry, Tokenizer, builtin_grammar, builtin_grammars};
