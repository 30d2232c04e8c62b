//! Editing state machine.
//!
//! [`Editor`] turns key events into structural edits on a [`LineBuffer`],
//! moves the cursor, keeps the [`Viewport`] on it and runs the command,
//! find and prompt modes. Anything that touches the outside world (writing
//! files, running tests, quitting) comes back to the host as a [`Request`];
//! the host reports results with [`Editor::mark_saved`],
//! [`Editor::set_status`] and [`Editor::set_diagnostics`].
//!
//! # Example
//!
//! ```
//! use site_rust::editor::Editor;
//! use site_rust::highlight::Language;
//! use site_rust::input::{KeyCode, KeyEvent};
//!
//! let mut editor = Editor::new();
//! editor.select_grammar(Language::Go);
//! for c in "if x {".chars() {
//!     editor.handle_key(KeyEvent::char(c));
//! }
//! editor.handle_key(KeyEvent::key(KeyCode::Enter));
//! assert_eq!(editor.buffer().serialize(), "if x {\n\t\n}");
//! ```

mod command;
mod cursor;
mod diagnostics;
mod find;
mod format;
mod indent;
mod options;
mod pairs;

pub use command::{Command, Encoding};
pub use cursor::{Cursor, next_word_end, prev_word_start};
pub use diagnostics::Diagnostic;
pub use find::FindState;
pub use format::Formatter;
pub use indent::{dedent, leading_whitespace, next_line_indent, opens_block};
pub use options::EditorOptions;
pub use pairs::{DEFAULT_PAIRS, PairAction, pair_action};

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::highlight::{Highlighter, Language};
use crate::input::{KeyCode, KeyEvent};
use crate::text::{
    LineBuffer, LineSource, LineView, RenderSegment, StreamingLoader, Viewport,
    byte_for_visual_column,
};
use crate::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Which input handler receives keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Editing,
    /// Typing a command line (Ctrl+E).
    Command,
    /// Incremental search (Ctrl+F).
    Find,
    /// Asking for a file name to save under.
    SavePrompt,
    /// Asking whether to save unsaved changes before quitting.
    QuitPrompt,
}

/// Everything a save collaborator needs to write the buffer out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveRequest {
    pub path: PathBuf,
    /// Buffer text joined with `"\n"`.
    pub contents: String,
    pub encoding: Encoding,
}

/// Work the host has to carry out on the editor's behalf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Save(SaveRequest),
    /// Save, then exit if the save succeeded.
    SaveAndQuit(SaveRequest),
    Quit,
    /// Run the project's tests and report back with [`Editor::set_diagnostics`].
    RunTests,
}

/// Terminal text editor core.
pub struct Editor {
    buffer: LineBuffer,
    cursor: Cursor,
    // Visual column kept across vertical moves through shorter lines.
    sticky_column: Option<usize>,
    viewport: Viewport,
    mode: Mode,
    options: EditorOptions,
    file_name: Option<PathBuf>,
    dirty: bool,
    encoding: Encoding,
    diagnostics: Vec<Diagnostic>,
    status: Option<String>,
    input: String,
    find: FindState,
    quit_after_save: bool,
    loader: Option<StreamingLoader>,
    formatter: Option<Box<dyn Formatter>>,
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("language", &self.language())
            .field("lines", &self.buffer.len())
            .field("cursor", &self.cursor)
            .field("mode", &self.mode)
            .field("dirty", &self.dirty)
            .field("file_name", &self.file_name)
            .field("streaming", &self.loader.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor with default options and an empty plain-text buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    #[must_use]
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            buffer: LineBuffer::new(),
            cursor: Cursor::default(),
            sticky_column: None,
            viewport: Viewport::new(options.viewport_width, options.text_rows()),
            mode: Mode::Editing,
            options,
            file_name: None,
            dirty: false,
            encoding: Encoding::default(),
            diagnostics: Vec::new(),
            status: None,
            input: String::new(),
            find: FindState::default(),
            quit_after_save: false,
            loader: None,
            formatter: None,
        }
    }

    // ---- accessors ----

    #[must_use]
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.buffer.language()
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn find_state(&self) -> &FindState {
        &self.find
    }

    /// Text typed so far in command or save-prompt mode.
    #[must_use]
    pub fn prompt_input(&self) -> &str {
        &self.input
    }

    /// `true` while more lines remain to be streamed in.
    #[must_use]
    pub fn is_streaming(&self) -> bool {
        self.loader.is_some()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ---- content and grammar ----

    /// Highlight with the built-in grammar for `language`.
    pub fn select_grammar(&mut self, language: Language) {
        if language == self.language() {
            return;
        }
        self.buffer.set_highlighter(Highlighter::new(language));
        emit_log(
            LogLevel::Info,
            "editor",
            &format!("grammar: {}", language.display_name()),
        );
    }

    /// Select a grammar by language id (`"go"`, `"python"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLanguage`] for an unknown id.
    pub fn select_grammar_by_id(&mut self, id: &str) -> Result<()> {
        let language = Language::from_id(id).ok_or_else(|| Error::UnknownLanguage(id.to_string()))?;
        self.select_grammar(language);
        Ok(())
    }

    /// Set the file name and pick the grammar from its extension.
    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.select_grammar(Language::from_path(&path));
        self.file_name = Some(path);
    }

    /// Replace the whole buffer with `text` and move to the top.
    pub fn load_text(&mut self, text: &str) {
        self.loader = None;
        self.buffer.replace_all(text);
        self.dirty = false;
        self.sticky_column = None;
        self.move_cursor(0, 0);
    }

    /// Start streaming lines from `source`, loading the first chunk now.
    ///
    /// Later chunks arrive as the cursor approaches the loaded end.
    ///
    /// # Errors
    ///
    /// Returns an error if the first read fails; the buffer is unchanged.
    pub fn open_stream(&mut self, source: impl LineSource + 'static) -> Result<usize> {
        let mut loader = StreamingLoader::new(source);
        let loaded = loader.load_initial(&mut self.buffer, self.options.stream_chunk_lines)?;
        self.loader = (!loader.is_finished()).then_some(loader);
        self.dirty = false;
        self.sticky_column = None;
        self.move_cursor(0, 0);
        Ok(loaded)
    }

    /// Install the formatter used by the `format` command.
    pub fn set_formatter(&mut self, formatter: impl Formatter + 'static) {
        self.formatter = Some(Box::new(formatter));
    }

    /// Resize to a screen of `width` x `height` cells.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.options.viewport_width = width;
        self.options.viewport_height = height;
        self.viewport.resize(width, self.options.text_rows());
        self.scroll_to_cursor();
    }

    // ---- cursor plumbing ----

    fn tab_width(&self) -> usize {
        self.options.tab_width
    }

    fn current_line(&self) -> &str {
        self.buffer.line(self.cursor.line()).unwrap_or_default()
    }

    fn scroll_to_cursor(&mut self) {
        self.viewport
            .scroll_to(self.cursor.line(), self.cursor.visual_column());
    }

    fn move_cursor(&mut self, line: usize, column: usize) {
        self.ensure_loaded(line);
        let tab_width = self.tab_width();
        self.cursor.place(&self.buffer, line, column, tab_width);
        self.scroll_to_cursor();
    }

    // Place after an edit: horizontal position changed, so forget the sticky column.
    fn move_after_edit(&mut self, line: usize, column: usize) {
        self.dirty = true;
        self.sticky_column = None;
        self.move_cursor(line, column);
    }

    // Pull chunks until `line` plus the prefetch margin is loaded.
    fn ensure_loaded(&mut self, line: usize) {
        let margin = self.options.stream_prefetch_margin;
        let chunk = self.options.stream_chunk_lines;
        while line.saturating_add(margin) >= self.buffer.len() {
            let Some(loader) = self.loader.as_mut() else {
                return;
            };
            let added = match loader.append_more(&mut self.buffer, chunk) {
                Ok(added) => added,
                Err(err) => {
                    self.status = Some(err.to_string());
                    0
                }
            };
            if loader.is_finished() {
                self.loader = None;
            }
            if added == 0 {
                return;
            }
        }
    }

    /// Read whatever the stream has left into the buffer.
    ///
    /// Saving and formatting call this first so they always see the whole
    /// file. A source that hands back an empty batch without reaching its
    /// end is treated as exhausted.
    ///
    /// # Errors
    ///
    /// Returns the source's read error. The stream is dropped and the error
    /// shown on the status line.
    pub fn finish_loading(&mut self) -> Result<()> {
        let chunk = self.options.stream_chunk_lines.max(1);
        while let Some(loader) = self.loader.as_mut() {
            match loader.append_more(&mut self.buffer, chunk) {
                Ok(added) if added > 0 && !loader.is_finished() => {}
                Ok(_) => self.loader = None,
                Err(err) => {
                    self.loader = None;
                    self.status = Some(err.to_string());
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    // ---- key dispatch ----

    /// Feed one key event to the handler of the current mode.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Request> {
        match self.mode {
            Mode::Editing => {
                self.handle_editing_key(key);
                None
            }
            Mode::Command => self.handle_command_key(key),
            Mode::Find => {
                self.handle_find_key(key);
                None
            }
            Mode::SavePrompt => self.handle_save_prompt_key(key),
            Mode::QuitPrompt => self.handle_quit_prompt_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        if key.is_ctrl_char('f') {
            self.mode = Mode::Find;
            self.find.clear();
            return;
        }
        if key.is_ctrl_char('e') {
            self.mode = Mode::Command;
            self.input.clear();
            return;
        }
        let word_jump = key.jumps_words();
        match key.code {
            KeyCode::Left if word_jump => self.move_word_left(),
            KeyCode::Right if word_jump => self.move_word_right(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Enter => self.split_line(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Tab => self.insert_tab(),
            KeyCode::Esc | KeyCode::Char(_) => {
                if let Some(c) = key.text_char() {
                    self.insert_char(c);
                }
            }
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Editing;
                self.input.clear();
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input);
                self.mode = Mode::Editing;
                return self.execute_command(&input);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            _ => {
                if let Some(c) = key.text_char() {
                    self.input.push(c);
                }
            }
        }
        None
    }

    fn handle_find_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Editing,
            KeyCode::Backspace => {
                self.find.pop(&self.buffer);
                self.goto_find_result();
            }
            KeyCode::Down | KeyCode::Right => {
                if self.find.next().is_some() {
                    self.goto_find_result();
                }
            }
            KeyCode::Up | KeyCode::Left => {
                if self.find.prev().is_some() {
                    self.goto_find_result();
                }
            }
            _ => {
                if let Some(c) = key.text_char() {
                    self.find.push(c, &self.buffer);
                    self.goto_find_result();
                }
            }
        }
    }

    fn goto_find_result(&mut self) {
        let Some(line) = self.find.current_line() else {
            return;
        };
        let column = self
            .buffer
            .line(line)
            .and_then(|text| text.find(self.find.query()))
            .unwrap_or(0);
        self.sticky_column = None;
        self.move_cursor(line, column);
    }

    fn handle_save_prompt_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Editing;
                self.input.clear();
                self.quit_after_save = false;
            }
            KeyCode::Enter => {
                let name = std::mem::take(&mut self.input);
                let name = name.trim();
                self.mode = Mode::Editing;
                let quit = std::mem::take(&mut self.quit_after_save);
                if name.is_empty() {
                    return None;
                }
                self.set_file_name(name);
                return self.save_request(quit);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            _ => {
                if let Some(c) = key.text_char() {
                    self.input.push(c);
                }
            }
        }
        None
    }

    fn handle_quit_prompt_key(&mut self, key: KeyEvent) -> Option<Request> {
        self.mode = Mode::Editing;
        if matches!(key.code, KeyCode::Char('n' | 'N')) {
            return Some(Request::Quit);
        }
        if self.file_name.is_some() {
            return self.save_request(true);
        }
        self.prompt_save(true);
        None
    }

    fn prompt_save(&mut self, quit_after: bool) {
        self.mode = Mode::SavePrompt;
        self.input.clear();
        self.quit_after_save = quit_after;
    }

    fn save_request(&mut self, quit: bool) -> Option<Request> {
        self.file_name.as_ref()?;
        self.finish_loading().ok()?;
        let request = SaveRequest {
            path: self.file_name.clone()?,
            contents: self.buffer.serialize(),
            encoding: self.encoding,
        };
        Some(if quit {
            Request::SaveAndQuit(request)
        } else {
            Request::Save(request)
        })
    }

    // ---- commands ----

    /// Run one command line as if typed after Ctrl+E.
    pub fn execute_command(&mut self, input: &str) -> Option<Request> {
        let command = match Command::parse(input) {
            Ok(Some(command)) => command,
            Ok(None) => return None,
            Err(err) => {
                emit_log(LogLevel::Debug, "editor", &err.to_string());
                self.status = Some(err.to_string());
                return None;
            }
        };
        emit_log(LogLevel::Debug, "editor", &format!("command: {command:?}"));
        match command {
            Command::Quit => {
                if self.dirty {
                    self.mode = Mode::QuitPrompt;
                    None
                } else {
                    Some(Request::Quit)
                }
            }
            Command::Save(Some(path)) => {
                self.set_file_name(path);
                self.save_request(false)
            }
            Command::Save(None) => {
                if self.file_name.is_none() {
                    self.prompt_save(false);
                }
                self.save_request(false)
            }
            Command::Goto { line, col } => {
                self.goto(line, col);
                None
            }
            Command::SetEncoding(encoding) => {
                self.encoding = encoding;
                self.status = Some(format!("Encoding: {encoding}"));
                None
            }
            Command::Format => {
                match self.formatter.take() {
                    Some(formatter) if formatter.supports(self.language()) => {
                        self.format_with(formatter.as_ref());
                        self.formatter = Some(formatter);
                    }
                    other => {
                        self.formatter = other;
                        self.status =
                            Some(format!("No formatter for {}", self.language().display_name()));
                    }
                }
                None
            }
            Command::Test => Some(Request::RunTests),
        }
    }

    /// Jump to a 1-based line and optional byte column.
    ///
    /// Out-of-range lines leave the cursor where it is; an out-of-range
    /// column keeps the current one. Without a column the cursor goes to
    /// the start of the line.
    pub fn goto(&mut self, line: usize, col: Option<usize>) {
        if line >= 1 {
            self.ensure_loaded(line - 1);
        }
        let target = if (1..=self.buffer.len()).contains(&line) {
            line - 1
        } else {
            self.cursor.line()
        };
        let column = match col {
            Some(col) if col <= self.buffer.line_len(target) => col,
            Some(_) => self.cursor.column(),
            None => 0,
        };
        self.sticky_column = None;
        self.move_cursor(target, column);
    }

    /// Reformat the whole buffer through `formatter`.
    ///
    /// On success the text is replaced (line endings normalized), the dirty
    /// flag cleared and `true` returned. On failure the buffer is untouched
    /// and the error goes to the status line. A pending stream is read to
    /// the end first.
    pub fn format_with(&mut self, formatter: &dyn Formatter) -> bool {
        if self.finish_loading().is_err() {
            return false;
        }
        let language = self.language();
        match formatter.reformat(language, &self.buffer.serialize()) {
            Ok(text) => {
                self.buffer.replace_all(&text);
                self.dirty = false;
                self.status = None;
                let (line, column) = (self.cursor.line(), self.cursor.column());
                self.move_cursor(line, column);
                true
            }
            Err(err) => {
                emit_log(LogLevel::Warn, "editor", &err.to_string());
                self.status = Some(err.to_string());
                false
            }
        }
    }

    // ---- collaborator callbacks ----

    /// The host finished writing the file.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
        if let Some(path) = &self.file_name {
            self.status = Some(format!("Saved {}", path.display()));
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Replace the diagnostics and jump to the first one in the current file.
    pub fn set_diagnostics(&mut self, reported: Vec<Diagnostic>) {
        self.diagnostics = reported;
        let Some(path) = self.file_name.clone() else {
            return;
        };
        let first = diagnostics::for_file(&self.diagnostics, &path)
            .map(|d| d.line)
            .find(|&line| line < self.buffer.len());
        if let Some(line) = first {
            let column = self.cursor.column();
            self.sticky_column = None;
            self.move_cursor(line, column);
        }
    }

    /// Text for the status bar.
    ///
    /// A diagnostic on the cursor line shows as `Error: ...`, otherwise the
    /// first diagnostic for the file shows as `Warning: ...`, otherwise the
    /// last status message.
    #[must_use]
    pub fn status_line_message(&self) -> Option<String> {
        self.file_name
            .as_deref()
            .and_then(|path| diagnostics::status_for(&self.diagnostics, path, self.cursor.line()))
            .or_else(|| self.status.clone())
    }

    // ---- edit intents ----

    /// Type `c` at the cursor with auto-dedent and auto-pair handling.
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            self.split_line();
            return;
        }
        let line = self.cursor.line();
        let mut col = self.cursor.column();

        if self.options.auto_dedent && indent::is_closing_bracket(c) {
            let before = &self.current_line()[..col];
            if !before.is_empty() && leading_whitespace(before).len() == before.len() {
                let keep = dedent(before, self.tab_width()).len();
                self.buffer.remove_range(line, keep, col);
                self.dirty = true;
                col = keep;
            }
        }

        let action = if self.options.auto_close_pairs {
            pair_action(&self.options.pairs, self.current_line(), col, c)
        } else {
            PairAction::Insert
        };
        let mut text = String::from(c);
        match action {
            PairAction::Insert => {}
            PairAction::AutoClose(close) => text.push(close),
            PairAction::SkipOver => {
                self.sticky_column = None;
                self.move_cursor(line, col + c.len_utf8());
                return;
            }
        }
        self.buffer.insert_str(line, col, &text);
        self.move_after_edit(line, col + c.len_utf8());
    }

    /// Insert text at the cursor; line breaks split lines.
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let (line, column) = self
            .buffer
            .insert_str(self.cursor.line(), self.cursor.column(), text);
        self.move_after_edit(line, column);
    }

    /// Insert a literal tab.
    pub fn insert_tab(&mut self) {
        self.insert_text("\t");
    }

    /// Delete the grapheme before the cursor, or join with the previous line at column 0.
    pub fn backspace(&mut self) {
        let line = self.cursor.line();
        let col = self.cursor.column();
        if col == 0 {
            if line == 0 {
                return;
            }
            if let Some(join) = self.buffer.join_with_next(line - 1) {
                self.move_after_edit(line - 1, join);
            }
            return;
        }
        let text = self.current_line();
        if let (Some(open), Some(close)) = pairs::chars_around(text, col) {
            if pairs::is_bracket_pair(&self.options.pairs, open, close) {
                let start = col - open.len_utf8();
                self.buffer.remove_range(line, start, col + close.len_utf8());
                self.move_after_edit(line, start);
                return;
            }
        }
        let start = prev_grapheme_boundary(text, col);
        self.buffer.remove_range(line, start, col);
        self.move_after_edit(line, start);
    }

    /// Delete the grapheme after the cursor, or join the next line at the end.
    pub fn delete_forward(&mut self) {
        let line = self.cursor.line();
        let col = self.cursor.column();
        let text = self.current_line();
        if col < text.len() {
            let end = next_grapheme_boundary(text, col);
            self.buffer.remove_range(line, col, end);
            self.move_after_edit(line, col);
        } else if self.buffer.join_with_next(line).is_some() {
            self.move_after_edit(line, col);
        }
    }

    /// Enter: split the line at the cursor with smart indentation.
    ///
    /// Between a bracket pair (`{|}`) the closer moves two lines down and the
    /// cursor lands on an indented empty line in between.
    pub fn split_line(&mut self) {
        let line = self.cursor.line();
        let col = self.cursor.column();
        let text = self.current_line().to_string();
        let unit = self.options.indent_unit.clone();

        if self.options.bracket_split {
            if let (Some(open), Some(close)) = pairs::chars_around(&text, col) {
                if pairs::is_bracket_pair(&self.options.pairs, open, close) {
                    let indent = leading_whitespace(&text);
                    let inner = format!("{indent}{unit}");
                    let closing = format!("{indent}{}", &text[col..]);
                    self.buffer.remove_range(line, col, text.len());
                    let inner_len = inner.len();
                    self.buffer.insert_lines_after(line, vec![inner, closing]);
                    self.move_after_edit(line + 1, inner_len);
                    return;
                }
            }
        }

        let rules = *self.buffer.highlighter().grammar().indent_rules();
        let mut indent = next_line_indent(&rules, &text[..col], &unit);
        let rest = &text[col..];
        if self.options.auto_dedent
            && rest
                .trim_start()
                .chars()
                .next()
                .is_some_and(indent::is_closing_bracket)
        {
            indent = dedent(&indent, self.tab_width()).to_string();
        }
        let new_line = self.buffer.split_line(line, col, &indent);
        self.move_after_edit(new_line, indent.len());
    }

    // ---- movement ----

    pub fn move_left(&mut self) {
        let (line, col) = (self.cursor.line(), self.cursor.column());
        self.sticky_column = None;
        if col > 0 {
            let target = prev_grapheme_boundary(self.current_line(), col);
            self.move_cursor(line, target);
        } else if line > 0 {
            self.move_cursor(line - 1, self.buffer.line_len(line - 1));
        }
    }

    pub fn move_right(&mut self) {
        let (line, col) = (self.cursor.line(), self.cursor.column());
        self.sticky_column = None;
        let text = self.current_line();
        if col < text.len() {
            let target = next_grapheme_boundary(text, col);
            self.move_cursor(line, target);
        } else if line + 1 < self.buffer.len() {
            self.move_cursor(line + 1, 0);
        }
    }

    fn move_vertically(&mut self, line: usize) {
        let visual = *self
            .sticky_column
            .get_or_insert(self.cursor.visual_column());
        self.ensure_loaded(line);
        let line = line.min(self.buffer.len() - 1);
        let text = self.buffer.line(line).unwrap_or_default();
        let column = byte_for_visual_column(text, visual, self.tab_width());
        self.move_cursor(line, column);
    }

    pub fn move_up(&mut self) {
        let line = self.cursor.line();
        if line > 0 {
            self.move_vertically(line - 1);
        }
    }

    pub fn move_down(&mut self) {
        let line = self.cursor.line();
        self.ensure_loaded(line + 1);
        if line + 1 < self.buffer.len() {
            self.move_vertically(line + 1);
        }
    }

    fn page_rows(&self) -> usize {
        self.viewport.height.saturating_sub(1).max(1)
    }

    pub fn page_up(&mut self) {
        let target = self.cursor.line().saturating_sub(self.page_rows());
        self.move_vertically(target);
    }

    pub fn page_down(&mut self) {
        let target = self.cursor.line() + self.page_rows();
        self.move_vertically(target);
    }

    pub fn move_home(&mut self) {
        self.sticky_column = None;
        self.move_cursor(self.cursor.line(), 0);
    }

    pub fn move_end(&mut self) {
        self.sticky_column = None;
        let line = self.cursor.line();
        self.move_cursor(line, self.buffer.line_len(line));
    }

    pub fn move_word_left(&mut self) {
        self.sticky_column = None;
        let target = prev_word_start(self.current_line(), self.cursor.column());
        self.move_cursor(self.cursor.line(), target);
    }

    pub fn move_word_right(&mut self) {
        self.sticky_column = None;
        let target = next_word_end(self.current_line(), self.cursor.column());
        self.move_cursor(self.cursor.line(), target);
    }

    // ---- renderer interface ----

    /// Lines inside the viewport.
    pub fn visible_lines(&self) -> impl Iterator<Item = LineView<'_>> {
        self.buffer.views(self.viewport.rows(self.buffer.len()))
    }

    /// Cursor position relative to the viewport origin as (column, row).
    #[must_use]
    pub fn cursor_screen_position(&self) -> Option<(usize, usize)> {
        self.viewport
            .to_screen(self.cursor.line(), self.cursor.visual_column())
    }

    /// Clipped, tab-expanded segments of `line` for the current viewport.
    #[must_use]
    pub fn render_segments(&self, line: usize) -> Vec<RenderSegment> {
        self.buffer
            .line_view(line)
            .map(|view| view.segments(self.viewport.left, self.viewport.width, self.tab_width()))
            .unwrap_or_default()
    }
}
