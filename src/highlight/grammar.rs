//! Grammar tables and their compiled form.
//!
//! A [`GrammarTable`] is plain static data: a keyword list plus ordered
//! pattern lists for each tokenizer phase. [`Grammar::compile`] turns one
//! into regexes once; the compiled grammar is immutable and shared behind
//! an `Arc`.
//!
//! Pattern conventions: when a pattern contains capturing groups, the first
//! group that participates in a match is the highlighted span, otherwise the
//! whole match is. Alternations therefore use `(?:...)` everywhere except the
//! part that should be colored.

use std::collections::HashSet;

use regex::{Captures, Regex};

use super::language::Language;
use super::languages;
use super::token::TokenKind;
use crate::error::{Error, Result};

/// Word pattern used by the keyword phase unless a table overrides it.
const DEFAULT_WORD_PATTERN: &str = r"\b\w+\b";

/// One `kind → pattern` entry of a grammar table.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub kind: TokenKind,
    pub pattern: &'static str,
}

impl Rule {
    #[must_use]
    pub const fn new(kind: TokenKind, pattern: &'static str) -> Self {
        Self { kind, pattern }
    }
}

/// Detects a region of a line written in another language. The first
/// capturing group is the embedded span.
#[derive(Clone, Copy, Debug)]
pub struct EmbedRule {
    pub language: Language,
    pub pattern: &'static str,
}

impl EmbedRule {
    #[must_use]
    pub const fn new(language: Language, pattern: &'static str) -> Self {
        Self { language, pattern }
    }
}

/// How a block keyword has to appear at the end of a line to open a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockStyle {
    /// `else`, `do`, ... as the last word.
    #[default]
    Bare,
    /// Keyword followed by `:` (`else:`), or a header like `def f():`.
    Colon,
    /// Either the bare keyword or the keyword followed by ` {`.
    BareOrBrace,
}

/// Smart-indent rules for a language.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndentRules {
    /// Keywords that open a block when they end the line.
    pub block_keywords: &'static [&'static str],
    pub block_style: BlockStyle,
    /// A trailing `:` always opens a block.
    pub colon_blocks: bool,
    /// A trailing unclosed open tag (`<div>`) opens a block.
    pub markup_tags: bool,
}

impl IndentRules {
    pub const BRACKETS_ONLY: Self = Self {
        block_keywords: &[],
        block_style: BlockStyle::Bare,
        colon_blocks: false,
        markup_tags: false,
    };
}

/// Static grammar description for one language.
#[derive(Clone, Copy, Debug)]
pub struct GrammarTable {
    pub language: Language,
    pub keywords: &'static [&'static str],
    /// Match keywords ignoring ASCII case.
    pub fold_keyword_case: bool,
    /// Pattern for candidate words in the keyword phase.
    pub word: Option<&'static str>,
    /// Strings, comments and other spans that must never be re-lexed.
    pub literals: &'static [Rule],
    /// Everything else, in priority order.
    pub patterns: &'static [Rule],
    /// Extra passes that only fill spans nothing else claimed.
    pub refinements: &'static [Rule],
    pub embeds: &'static [EmbedRule],
    pub indent: IndentRules,
}

impl GrammarTable {
    /// A table that produces no tokens.
    #[must_use]
    pub const fn empty(language: Language) -> Self {
        Self {
            language,
            keywords: &[],
            fold_keyword_case: false,
            word: None,
            literals: &[],
            patterns: &[],
            refinements: &[],
            embeds: &[],
            indent: IndentRules::BRACKETS_ONLY,
        }
    }
}

#[derive(Debug)]
pub(crate) struct CompiledRule {
    pub(crate) kind: TokenKind,
    regex: Regex,
    grouped: bool,
}

impl CompiledRule {
    fn new(kind: TokenKind, regex: Regex) -> Self {
        let grouped = regex.captures_len() > 1;
        Self {
            kind,
            regex,
            grouped,
        }
    }

    /// Emitted spans of every non-overlapping match, empty ones skipped.
    pub(crate) fn for_each_span(&self, line: &str, mut f: impl FnMut(usize, usize)) {
        if self.grouped {
            for caps in self.regex.captures_iter(line) {
                if let Some((start, end)) = emitted_span(&caps) {
                    f(start, end);
                }
            }
        } else {
            for m in self.regex.find_iter(line) {
                if m.start() < m.end() {
                    f(m.start(), m.end());
                }
            }
        }
    }

    /// First match at or after `pos`.
    pub(crate) fn first_at(&self, line: &str, pos: usize) -> Option<LiteralMatch> {
        if self.grouped {
            let caps = self.regex.captures_at(line, pos)?;
            let whole = caps.get(0)?;
            let (start, end) = emitted_span(&caps).unwrap_or((whole.start(), whole.start()));
            Some(LiteralMatch {
                start,
                end,
                match_start: whole.start(),
                match_end: whole.end(),
            })
        } else {
            let m = self.regex.find_at(line, pos)?;
            Some(LiteralMatch {
                start: m.start(),
                end: m.end(),
                match_start: m.start(),
                match_end: m.end(),
            })
        }
    }
}

/// Emitted span of one match plus the bounds of the whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LiteralMatch {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) match_start: usize,
    pub(crate) match_end: usize,
}

/// First participating capture group, else the whole match.
fn emitted_span(caps: &Captures<'_>) -> Option<(usize, usize)> {
    let m = caps.iter().skip(1).flatten().next().or_else(|| caps.get(0))?;
    (m.start() < m.end()).then(|| (m.start(), m.end()))
}

#[derive(Debug)]
pub(crate) struct CompiledEmbed {
    pub(crate) language: Language,
    pub(crate) regex: Regex,
}

/// A compiled, immutable grammar.
#[derive(Debug)]
pub struct Grammar {
    language: Language,
    keywords: HashSet<&'static str>,
    fold_keyword_case: bool,
    pub(crate) word: CompiledRule,
    pub(crate) literals: Vec<CompiledRule>,
    pub(crate) patterns: Vec<CompiledRule>,
    pub(crate) refinements: Vec<CompiledRule>,
    pub(crate) embeds: Vec<CompiledEmbed>,
    indent: IndentRules,
}

impl Grammar {
    /// Compile the built-in table for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if a pattern in the table is invalid.
    pub fn compile(language: Language) -> Result<Self> {
        Self::from_table(languages::table(language))
    }

    /// Compile an arbitrary table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] naming the table's language if any pattern
    /// fails to compile.
    pub fn from_table(table: &GrammarTable) -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|source| Error::Pattern {
                language: table.language,
                source,
            })
        };
        let compile_rules = |rules: &[Rule]| -> Result<Vec<CompiledRule>> {
            rules
                .iter()
                .map(|rule| Ok(CompiledRule::new(rule.kind, compile(rule.pattern)?)))
                .collect()
        };

        let word = compile(table.word.unwrap_or(DEFAULT_WORD_PATTERN))?;
        let embeds = table
            .embeds
            .iter()
            .map(|rule| {
                Ok(CompiledEmbed {
                    language: rule.language,
                    regex: compile(rule.pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            language: table.language,
            keywords: table.keywords.iter().copied().collect(),
            fold_keyword_case: table.fold_keyword_case,
            word: CompiledRule::new(TokenKind::Keyword, word),
            literals: compile_rules(table.literals)?,
            patterns: compile_rules(table.patterns)?,
            refinements: compile_rules(table.refinements)?,
            embeds,
            indent: table.indent,
        })
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn indent_rules(&self) -> &IndentRules {
        &self.indent
    }

    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        if self.keywords.contains(word) {
            return true;
        }
        self.fold_keyword_case
            && word.bytes().any(|b| b.is_ascii_uppercase())
            && self.keywords.contains(word.to_ascii_lowercase().as_str())
    }

    #[must_use]
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Languages this grammar can embed, deduplicated, in table order.
    #[must_use]
    pub fn embedded_languages(&self) -> Vec<Language> {
        let mut out: Vec<Language> = Vec::new();
        for embed in &self.embeds {
            if !out.contains(&embed.language) {
                out.push(embed.language);
            }
        }
        out
    }

    /// True if tokenizing can never produce a token.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.keywords.is_empty()
            && self.literals.is_empty()
            && self.patterns.is_empty()
            && self.refinements.is_empty()
    }
}
