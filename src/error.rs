//! Error types for the editor core.
//!
//! Structural problems (out-of-range cursors, stale line indices) are never
//! reported here: every mutation site clamps instead. These errors only cover
//! the boundaries to external collaborators and grammar construction.

use std::fmt;
use std::io;

use crate::highlight::Language;

/// Result type alias for editor core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for editor core operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading lines from a source.
    Io(io::Error),
    /// A grammar pattern failed to compile.
    Pattern {
        language: Language,
        source: regex::Error,
    },
    /// No grammar is registered under this id.
    UnknownLanguage(String),
    /// Command line input that names no known command.
    UnknownCommand(String),
    /// The format collaborator rejected the text.
    Format(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Pattern { language, source } => {
                write!(f, "invalid {} grammar pattern: {source}", language.display_name())
            }
            Self::UnknownLanguage(id) => write!(f, "unknown language: {id}"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            Self::Format(msg) => write!(f, "format failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Pattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
