//! Tokenizer trait, the phase-ordered line scanner and the grammar registry.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use super::grammar::{Grammar, LiteralMatch};
use super::language::Language;
use super::token::{EmbeddedContext, Token, TokenKind};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};

/// Core tokenizer abstraction: one implementation per grammar, selected by
/// lookup instead of matching on the language everywhere.
pub trait Tokenizer: Send + Sync {
    /// Language whose tokens this tokenizer produces.
    fn language(&self) -> Language;

    /// Tokenize a single line. Tokens are sorted by `start` and disjoint.
    fn tokenize(&self, line: &str) -> Vec<Token>;

    /// Find regions of `line` written in another language.
    fn detect_contexts(&self, _line: &str) -> Vec<EmbeddedContext> {
        Vec::new()
    }

    /// Tokenize every line of `text`. Accepts both LF and CRLF endings.
    fn tokenize_text(&self, text: &str) -> Vec<Vec<Token>> {
        text.lines().map(|line| self.tokenize(line)).collect()
    }
}

/// Tokens claimed so far on one line, keyed by start.
struct Claims {
    language: Language,
    tokens: BTreeMap<usize, Token>,
}

impl Claims {
    fn new(language: Language) -> Self {
        Self {
            language,
            tokens: BTreeMap::new(),
        }
    }

    /// Candidates contained in or intersecting a claimed token are dropped,
    /// so claimed tokens stay pairwise disjoint. Disjoint tokens sorted by
    /// start also have sorted ends, so only the last token starting before
    /// `end` can overlap.
    fn admits(&self, start: usize, end: usize) -> bool {
        start < end
            && self
                .tokens
                .range(..end)
                .next_back()
                .is_none_or(|(_, t)| t.end <= start)
    }

    fn claim(&mut self, kind: TokenKind, start: usize, end: usize) -> bool {
        if !self.admits(start, end) {
            return false;
        }
        self.tokens
            .insert(start, Token::new(kind, start, end, self.language));
        true
    }

    fn finish(self) -> Vec<Token> {
        self.tokens.into_values().collect()
    }
}

impl Grammar {
    /// Literal phase: strings, comments and friends, scanned left to right.
    /// The leftmost candidate wins (ties go to the earlier table entry) and
    /// scanning resumes after it, so a comment opener inside a string is
    /// never a comment and a quote inside a comment never opens a string.
    ///
    /// Each rule keeps its next match; a rule is searched again only once
    /// the scan position passes the start of that match.
    fn scan_literals(&self, line: &str, claims: &mut Claims) {
        let mut upcoming: Vec<Option<LiteralMatch>> = self
            .literals
            .iter()
            .map(|rule| rule.first_at(line, 0))
            .collect();
        let mut pos = 0;
        while pos < line.len() {
            let mut best: Option<(LiteralMatch, TokenKind)> = None;
            for (rule, cached) in self.literals.iter().zip(upcoming.iter_mut()) {
                if cached.is_some_and(|m| m.match_start < pos) {
                    *cached = rule.first_at(line, pos);
                }
                let Some(found) = *cached else {
                    continue;
                };
                if best.is_none_or(|(current, _)| found.start < current.start) {
                    best = Some((found, rule.kind));
                }
            }
            let Some((found, kind)) = best else {
                break;
            };
            claims.claim(kind, found.start, found.end);
            pos = if found.match_end > pos {
                found.match_end
            } else {
                pos + line[pos..].chars().next().map_or(1, char::len_utf8)
            };
        }
    }

    fn scan_keywords(&self, line: &str, claims: &mut Claims) {
        self.word.for_each_span(line, |start, end| {
            if self.is_keyword(&line[start..end]) {
                claims.claim(TokenKind::Keyword, start, end);
            }
        });
    }
}

impl Tokenizer for Grammar {
    fn language(&self) -> Language {
        Grammar::language(self)
    }

    fn tokenize(&self, line: &str) -> Vec<Token> {
        if line.is_empty() || self.is_plain() {
            return Vec::new();
        }
        let mut claims = Claims::new(Grammar::language(self));
        self.scan_literals(line, &mut claims);
        self.scan_keywords(line, &mut claims);
        for rule in self.patterns.iter().chain(&self.refinements) {
            rule.for_each_span(line, |start, end| {
                claims.claim(rule.kind, start, end);
            });
        }
        claims.finish()
    }

    fn detect_contexts(&self, line: &str) -> Vec<EmbeddedContext> {
        let mut contexts: Vec<EmbeddedContext> = Vec::new();
        for embed in &self.embeds {
            for caps in embed.regex.captures_iter(line) {
                let Some(inner) = caps.get(1) else {
                    continue;
                };
                if inner.start() == inner.end() {
                    continue;
                }
                let overlaps = contexts
                    .iter()
                    .any(|c| inner.start() < c.end && c.start < inner.end());
                if !overlaps {
                    contexts.push(EmbeddedContext::new(
                        embed.language,
                        inner.start(),
                        inner.end(),
                    ));
                }
            }
        }
        contexts.sort_by_key(|c| c.start);
        contexts
    }
}

/// Registry for grammar lookup by language, id or extension.
#[derive(Default)]
pub struct GrammarRegistry {
    grammars: Vec<Arc<Grammar>>,
    by_language: HashMap<Language, usize>,
}

impl GrammarRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a grammar. Later registrations override earlier ones.
    pub fn register(&mut self, grammar: Grammar) {
        let index = self.grammars.len();
        self.by_language.insert(grammar.language(), index);
        self.grammars.push(Arc::new(grammar));
    }

    #[must_use]
    pub fn get(&self, language: Language) -> Option<Arc<Grammar>> {
        let index = self.by_language.get(&language)?;
        self.grammars.get(*index).cloned()
    }

    /// Get a grammar by language id (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLanguage`] if the id names no registered grammar.
    pub fn by_id(&self, id: &str) -> Result<Arc<Grammar>> {
        Language::from_id(id)
            .and_then(|language| self.get(language))
            .ok_or_else(|| Error::UnknownLanguage(id.to_string()))
    }

    /// Get a grammar by file extension (case-insensitive, with or without dot).
    #[must_use]
    pub fn for_extension(&self, ext: &str) -> Option<Arc<Grammar>> {
        self.get(Language::from_extension(ext))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_language.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_language.is_empty()
    }

    /// Compile every built-in grammar.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Pattern`] encountered.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for language in Language::ALL {
            registry.register(Grammar::compile(language)?);
        }
        Ok(registry)
    }
}

/// Process-wide registry of built-in grammars, compiled on first use.
///
/// # Panics
///
/// Panics if a built-in table fails to compile. That is a defect in the
/// table itself, so it surfaces at the first grammar lookup instead of in
/// the middle of an edit.
pub fn builtin_grammars() -> &'static GrammarRegistry {
    static BUILTINS: OnceLock<GrammarRegistry> = OnceLock::new();
    BUILTINS.get_or_init(|| match GrammarRegistry::with_builtins() {
        Ok(registry) => {
            emit_log(
                LogLevel::Debug,
                "highlight",
                &format!("compiled {} built-in grammars", registry.len()),
            );
            registry
        }
        Err(err) => panic!("built-in grammar table is invalid: {err}"),
    })
}

/// Shared built-in grammar for `language`.
///
/// # Panics
///
/// See [`builtin_grammars`].
#[must_use]
pub fn builtin_grammar(language: Language) -> Arc<Grammar> {
    builtin_grammars()
        .get(language)
        .unwrap_or_else(|| panic!("no built-in grammar for {language}"))
}
