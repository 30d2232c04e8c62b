//! Supported languages and the file-extension mapping.

use std::fmt;
use std::path::Path;

/// A language with a built-in grammar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    #[default]
    PlainText,
    Go,
    JavaScript,
    Python,
    Html,
    Css,
    Json,
    Markdown,
    Shell,
    C,
    Cpp,
    Rust,
    Java,
    Php,
    /// The Squid++ scripting language (`.sqd`).
    Squid,
}

const EXTENSIONS: &[(&str, Language)] = &[
    ("go", Language::Go),
    ("js", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("mjs", Language::JavaScript),
    ("cjs", Language::JavaScript),
    ("py", Language::Python),
    ("pyw", Language::Python),
    ("html", Language::Html),
    ("htm", Language::Html),
    ("css", Language::Css),
    ("json", Language::Json),
    ("md", Language::Markdown),
    ("markdown", Language::Markdown),
    ("sh", Language::Shell),
    ("bash", Language::Shell),
    ("c", Language::C),
    ("h", Language::C),
    ("cpp", Language::Cpp),
    ("cc", Language::Cpp),
    ("cxx", Language::Cpp),
    ("hpp", Language::Cpp),
    ("hh", Language::Cpp),
    ("rs", Language::Rust),
    ("java", Language::Java),
    ("php", Language::Php),
    ("sqd", Language::Squid),
];

impl Language {
    pub const ALL: [Self; 15] = [
        Self::PlainText,
        Self::Go,
        Self::JavaScript,
        Self::Python,
        Self::Html,
        Self::Css,
        Self::Json,
        Self::Markdown,
        Self::Shell,
        Self::C,
        Self::Cpp,
        Self::Rust,
        Self::Java,
        Self::Php,
        Self::Squid,
    ];

    /// Stable lowercase identifier used by `select_grammar_by_id`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::PlainText => "plaintext",
            Self::Go => "go",
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Shell => "shell",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Rust => "rust",
            Self::Java => "java",
            Self::Php => "php",
            Self::Squid => "squid",
        }
    }

    /// Name shown on the editor's header line.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PlainText => "Plain Text",
            Self::Go => "Go",
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Json => "JSON",
            Self::Markdown => "Markdown",
            Self::Shell => "Shell",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::Rust => "Rust",
            Self::Java => "Java",
            Self::Php => "PHP",
            Self::Squid => "Squid++",
        }
    }

    /// Look up a language by id or common alias (case-insensitive).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let key = id.trim().to_ascii_lowercase();
        let language = match key.as_str() {
            "plaintext" | "plain" | "text" | "txt" => Self::PlainText,
            "go" | "golang" => Self::Go,
            "javascript" | "js" => Self::JavaScript,
            "python" | "py" => Self::Python,
            "html" => Self::Html,
            "css" => Self::Css,
            "json" => Self::Json,
            "markdown" | "md" => Self::Markdown,
            "shell" | "sh" | "bash" => Self::Shell,
            "c" => Self::C,
            "cpp" | "c++" => Self::Cpp,
            "rust" | "rs" => Self::Rust,
            "java" => Self::Java,
            "php" => Self::Php,
            "squid" | "squid++" | "sqd" => Self::Squid,
            _ => return None,
        };
        Some(language)
    }

    /// Map a file extension (case-insensitive, with or without dot).
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        let key = ext.trim_start_matches('.').to_ascii_lowercase();
        EXTENSIONS
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map_or(Self::PlainText, |(_, language)| *language)
    }

    /// Map a file path by its extension; paths without one are plain text.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::PlainText, Self::from_extension)
    }

    /// Extensions that map to this language.
    pub fn extensions(self) -> impl Iterator<Item = &'static str> {
        EXTENSIONS
            .iter()
            .filter(move |(_, language)| *language == self)
            .map(|(ext, _)| *ext)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
