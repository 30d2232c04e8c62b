//! Diagnostics reported by an external checker.

use std::path::Path;

/// One problem located in a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// File as reported by the checker; matched by file name only.
    pub file: String,
    /// 0-based line index.
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Check whether this diagnostic refers to `path`, comparing file names.
    #[must_use]
    pub fn is_for(&self, path: &Path) -> bool {
        match (Path::new(&self.file).file_name(), path.file_name()) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => false,
        }
    }
}

/// Diagnostics that refer to `path`, in report order.
pub fn for_file<'a>(
    diagnostics: &'a [Diagnostic],
    path: &'a Path,
) -> impl Iterator<Item = &'a Diagnostic> {
    diagnostics.iter().filter(move |d| d.is_for(path))
}

/// Status text for the cursor line: an error on that line wins over a
/// warning about the first diagnostic elsewhere in the file.
#[must_use]
pub fn status_for(diagnostics: &[Diagnostic], path: &Path, cursor_line: usize) -> Option<String> {
    let mut first = None;
    for diagnostic in for_file(diagnostics, path) {
        if diagnostic.line == cursor_line {
            return Some(format!("Error: {}", diagnostic.message));
        }
        first.get_or_insert(diagnostic);
    }
    first.map(|d| format!("Warning: {}", d.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_by_file_name() {
        let diagnostic = Diagnostic::new("./pkg/main.go", 3, "undefined: x");
        assert!(diagnostic.is_for(Path::new("/home/me/pkg/main.go")));
        assert!(diagnostic.is_for(Path::new("main.go")));
        assert!(!diagnostic.is_for(Path::new("main_test.go")));
    }

    #[test]
    fn test_status_prefers_cursor_line() {
        let diagnostics = vec![
            Diagnostic::new("a.go", 1, "first"),
            Diagnostic::new("b.go", 4, "other file"),
            Diagnostic::new("a.go", 4, "second"),
        ];
        let path = Path::new("a.go");
        assert_eq!(status_for(&diagnostics, path, 4).as_deref(), Some("Error: second"));
        assert_eq!(status_for(&diagnostics, path, 9).as_deref(), Some("Warning: first"));
        assert_eq!(status_for(&diagnostics, Path::new("c.go"), 4), None);
    }
}
