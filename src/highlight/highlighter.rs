//! Per-line highlighting with embedded sub-languages.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::grammar::Grammar;
use super::language::Language;
use super::token::{EmbeddedContext, Token};
use super::tokenizer::{Tokenizer, builtin_grammar};

/// Tokens and embedded regions of one line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineHighlight {
    pub tokens: Vec<Token>,
    pub contexts: Vec<EmbeddedContext>,
}

/// A grammar plus the sub-highlighters for the languages it embeds.
///
/// Sub-highlighters are built with [`Highlighter::basic`] and never get an
/// embedded table of their own, so nesting stops after one level no matter
/// how the languages reference each other (HTML embeds PHP, PHP embeds
/// script blocks, ...).
#[derive(Clone)]
pub struct Highlighter {
    grammar: Arc<Grammar>,
    embedded: HashMap<Language, Highlighter>,
}

impl Highlighter {
    /// Highlighter for a built-in language, with its embedded table.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self::with_grammar(builtin_grammar(language))
    }

    /// Highlighter for `grammar`. Embedded languages use built-in grammars.
    #[must_use]
    pub fn with_grammar(grammar: Arc<Grammar>) -> Self {
        let embedded = grammar
            .embedded_languages()
            .into_iter()
            .map(|language| (language, Self::basic(language)))
            .collect();
        Self { grammar, embedded }
    }

    /// Highlighter without an embedded table.
    #[must_use]
    pub fn basic(language: Language) -> Self {
        Self {
            grammar: builtin_grammar(language),
            embedded: HashMap::new(),
        }
    }

    #[must_use]
    pub fn plain() -> Self {
        Self::basic(Language::PlainText)
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.grammar.language()
    }

    #[must_use]
    pub fn grammar(&self) -> &Arc<Grammar> {
        &self.grammar
    }

    /// Sub-highlighter registered for `language`, if any.
    #[must_use]
    pub fn embedded(&self, language: Language) -> Option<&Self> {
        self.embedded.get(&language)
    }

    /// Embedded languages with a registered sub-highlighter, sorted.
    #[must_use]
    pub fn embedded_languages(&self) -> Vec<Language> {
        let mut languages: Vec<_> = self.embedded.keys().copied().collect();
        languages.sort_unstable();
        languages
    }

    /// Tokenize `line`, replacing primary tokens inside each embedded region
    /// with the region's own tokens shifted into line coordinates.
    #[must_use]
    pub fn highlight_line(&self, line: &str) -> LineHighlight {
        if line.is_empty() {
            return LineHighlight::default();
        }
        let mut tokens = self.grammar.tokenize(line);
        let contexts = self.grammar.detect_contexts(line);

        for context in &contexts {
            let Some(sub) = self.embedded.get(&context.language) else {
                continue;
            };
            let Some(text) = line.get(context.range()) else {
                continue;
            };
            tokens.retain(|t| !t.intersects(context.start, context.end));
            tokens.extend(
                sub.grammar
                    .tokenize(text)
                    .into_iter()
                    .map(|t| t.translated(context.start, context.language)),
            );
        }

        tokens.sort_by_key(|t| t.start);
        LineHighlight { tokens, contexts }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::plain()
    }
}

impl fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Highlighter")
            .field("language", &self.language())
            .field("embedded", &self.embedded_languages())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Highlighter;
    use crate::highlight::{Language, TokenKind};

    #[test]
    fn test_sub_highlighters_have_no_embedded_table() {
        let html = Highlighter::new(Language::Html);
        assert_eq!(
            html.embedded_languages(),
            vec![Language::JavaScript, Language::Css, Language::Php]
        );
        for language in html.embedded_languages() {
            let sub = html.embedded(language).unwrap();
            assert!(sub.embedded_languages().is_empty());
        }
        // PHP embeds script blocks itself, but not when nested in HTML.
        let php = html.embedded(Language::Php).unwrap();
        assert!(php.embedded(Language::JavaScript).is_none());
        assert!(!Highlighter::new(Language::Php).embedded_languages().is_empty());
    }

    #[test]
    fn test_script_block_tokens_are_shifted_and_tagged() {
        let html = Highlighter::new(Language::Html);
        let line = "<script>var x=1;</script>";
        let result = html.highlight_line(line);

        assert_eq!(result.contexts.len(), 1);
        let ctx = result.contexts[0];
        assert_eq!(ctx.language, Language::JavaScript);
        assert_eq!(&line[ctx.range()], "var x=1;");

        let var = result
            .tokens
            .iter()
            .find(|t| t.kind == TokenKind::Keyword && t.language == Language::JavaScript)
            .unwrap();
        assert_eq!(var.range(), 8..11);
        assert_eq!(var.text(line), "var");
        assert!(
            result
                .tokens
                .iter()
                .filter(|t| t.start >= ctx.start && t.end <= ctx.end)
                .all(|t| t.language == Language::JavaScript)
        );
        for pair in result.tokens.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_nested_php_script_is_not_expanded() {
        let html = Highlighter::new(Language::Html);
        let line = "<?php echo '<script>x</script>'; ?>";
        let result = html.highlight_line(line);
        assert_eq!(result.contexts.len(), 1);
        assert_eq!(result.contexts[0].language, Language::Php);
        assert!(result.tokens.iter().all(|t| t.language != Language::JavaScript));
    }

    #[test]
    fn test_plain_text_produces_nothing() {
        let plain = Highlighter::default();
        assert!(plain.highlight_line("fn main() {}").tokens.is_empty());
    }
}
