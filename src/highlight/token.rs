//! Token types for syntax highlighting.

use std::ops::Range;

use super::language::Language;

/// Semantic token categories produced by the grammars.
///
/// The set is closed: renderers map every kind to a display style and
/// grammars never invent new ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Default
    Normal,

    // Keywords and literals
    Keyword,
    String,
    Comment,
    Number,
    Regex,
    Escape,

    // Identifiers
    Function,
    Method,
    Type,
    Variable,
    Constant,
    Class,
    Property,
    Namespace,
    Macro,
    Annotation,

    // Operators and punctuation
    Operator,
    Delimiter,
    Preprocessor,

    // Markup
    Tag,
    Attribute,
    Value,
    Doctype,
    Entity,

    // Stylesheets
    Selector,
    Pseudo,
    Important,
    Unit,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 29] = [
        Self::Normal,
        Self::Keyword,
        Self::String,
        Self::Comment,
        Self::Number,
        Self::Regex,
        Self::Escape,
        Self::Function,
        Self::Method,
        Self::Type,
        Self::Variable,
        Self::Constant,
        Self::Class,
        Self::Property,
        Self::Namespace,
        Self::Macro,
        Self::Annotation,
        Self::Operator,
        Self::Delimiter,
        Self::Preprocessor,
        Self::Tag,
        Self::Attribute,
        Self::Value,
        Self::Doctype,
        Self::Entity,
        Self::Selector,
        Self::Pseudo,
        Self::Important,
        Self::Unit,
    ];

    /// Lowercase name, stable for theme files and debugging output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Number => "number",
            Self::Regex => "regex",
            Self::Escape => "escape",
            Self::Function => "function",
            Self::Method => "method",
            Self::Type => "type",
            Self::Variable => "variable",
            Self::Constant => "constant",
            Self::Class => "class",
            Self::Property => "property",
            Self::Namespace => "namespace",
            Self::Macro => "macro",
            Self::Annotation => "annotation",
            Self::Operator => "operator",
            Self::Delimiter => "delimiter",
            Self::Preprocessor => "preprocessor",
            Self::Tag => "tag",
            Self::Attribute => "attribute",
            Self::Value => "value",
            Self::Doctype => "doctype",
            Self::Entity => "entity",
            Self::Selector => "selector",
            Self::Pseudo => "pseudo",
            Self::Important => "important",
            Self::Unit => "unit",
        }
    }
}

/// A classified byte span of one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    /// Grammar that produced the token. Differs from the line's primary
    /// language for tokens that came from an embedded region.
    pub language: Language,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, start: usize, end: usize, language: Language) -> Self {
        debug_assert!(start <= end, "token range must be start <= end");
        Self {
            kind,
            start,
            end,
            language,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// True if `start..end` lies entirely inside this token.
    #[must_use]
    pub fn contains(&self, start: usize, end: usize) -> bool {
        start >= self.start && end <= self.end
    }

    /// True if `start..end` shares at least one byte with this token.
    #[must_use]
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        start < self.end && self.start < end
    }

    /// Move the token right by `offset` bytes and retag it.
    #[must_use]
    pub fn translated(self, offset: usize, language: Language) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
            language,
            ..self
        }
    }

    /// Source text of this token, or `""` if the span is stale for `line`.
    #[must_use]
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.range()).unwrap_or("")
    }
}

/// A span of a line written in a different grammar than the line's own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmbeddedContext {
    pub language: Language,
    pub start: usize,
    pub end: usize,
}

impl EmbeddedContext {
    #[must_use]
    pub fn new(language: Language, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "context range must be start <= end");
        Self {
            language,
            start,
            end,
        }
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A token paired with its source text slice for rendering.
#[derive(Clone, Debug)]
pub struct TokenSpan<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}
