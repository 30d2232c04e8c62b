//! Editor configuration.

use super::pairs::DEFAULT_PAIRS;
use crate::text::DEFAULT_TAB_WIDTH;

/// Editor behaviour switches.
///
/// Build with [`Default`] and adjust with the `with_*` methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Tab stop width for visual columns.
    pub tab_width: usize,
    /// One level of smart indentation.
    pub indent_unit: String,
    /// Insert the closer when an opener is typed.
    pub auto_close_pairs: bool,
    pub pairs: Vec<(char, char)>,
    /// Enter between `{}`, `[]` or `()` puts the closer on its own line.
    pub bracket_split: bool,
    /// Typing a closing bracket after only whitespace removes one indent level.
    pub auto_dedent: bool,
    /// Lines pulled from a stream per chunk.
    pub stream_chunk_lines: usize,
    /// Load the next chunk when the cursor comes this close to the loaded end.
    pub stream_prefetch_margin: usize,
    pub viewport_width: usize,
    pub viewport_height: usize,
    /// Rows of the screen height used by header and status bars.
    pub chrome_rows: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            indent_unit: "\t".to_string(),
            auto_close_pairs: true,
            pairs: DEFAULT_PAIRS.to_vec(),
            bracket_split: true,
            auto_dedent: true,
            stream_chunk_lines: 1000,
            stream_prefetch_margin: 100,
            viewport_width: 80,
            viewport_height: 24,
            chrome_rows: 5,
        }
    }
}

impl EditorOptions {
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    #[must_use]
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_auto_close_pairs(mut self, enabled: bool) -> Self {
        self.auto_close_pairs = enabled;
        self
    }

    #[must_use]
    pub fn with_pairs(mut self, pairs: Vec<(char, char)>) -> Self {
        self.pairs = pairs;
        self
    }

    #[must_use]
    pub fn with_bracket_split(mut self, enabled: bool) -> Self {
        self.bracket_split = enabled;
        self
    }

    #[must_use]
    pub fn with_auto_dedent(mut self, enabled: bool) -> Self {
        self.auto_dedent = enabled;
        self
    }

    #[must_use]
    pub fn with_stream_chunk(mut self, lines: usize, prefetch_margin: usize) -> Self {
        self.stream_chunk_lines = lines.max(1);
        self.stream_prefetch_margin = prefetch_margin;
        self
    }

    /// Screen size; the text area is the height minus [`chrome_rows`](Self::chrome_rows).
    #[must_use]
    pub fn with_screen_size(mut self, width: usize, height: usize) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    #[must_use]
    pub fn with_chrome_rows(mut self, rows: usize) -> Self {
        self.chrome_rows = rows;
        self
    }

    /// Number of text rows available after the chrome.
    #[must_use]
    pub fn text_rows(&self) -> usize {
        self.viewport_height.saturating_sub(self.chrome_rows).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EditorOptions::default();
        assert_eq!(options.tab_width, 4);
        assert_eq!(options.indent_unit, "\t");
        assert!(options.auto_close_pairs && options.bracket_split && options.auto_dedent);
        assert_eq!(options.pairs.len(), 6);
        assert_eq!(options.text_rows(), 19);
    }

    #[test]
    fn test_builders() {
        let options = EditorOptions::default()
            .with_tab_width(0)
            .with_indent_unit("  ")
            .with_auto_close_pairs(false)
            .with_stream_chunk(0, 5)
            .with_screen_size(40, 3);
        assert_eq!(options.tab_width, 1);
        assert_eq!(options.indent_unit, "  ");
        assert!(!options.auto_close_pairs);
        assert_eq!(options.stream_chunk_lines, 1);
        assert_eq!(options.text_rows(), 1);
    }
}
