//! Streaming loads from files on disk.

use std::fs::File;
use std::io::{self, BufReader, Write};

use site_rust::editor::{Editor, EditorOptions, Request};
use site_rust::error::Result;
use site_rust::highlight::{Highlighter, Language, TokenKind};
use site_rust::input::{KeyCode, KeyEvent};
use site_rust::text::{LineBatch, LineBuffer, LineSource, ReaderSource, StreamingLoader};
use tempfile::NamedTempFile;
use tracing::info;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn go_file(lines: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    for i in 0..lines {
        writeln!(file, "var v{i} = \"{i}\" // line {i}").expect("write line");
    }
    file.flush().expect("flush");
    file
}

fn source_for(file: &NamedTempFile) -> ReaderSource<BufReader<File>> {
    ReaderSource::new(BufReader::new(file.reopen().expect("reopen temp file")))
}

#[test]
fn loads_file_in_chunks() {
    init_logging();
    let file = go_file(250);
    let mut buffer = LineBuffer::with_highlighter(Highlighter::new(Language::Go));
    let mut loader = StreamingLoader::new(source_for(&file));

    let first = loader.load_initial(&mut buffer, 100).expect("initial chunk");
    assert_eq!(first, 100);
    assert_eq!(buffer.len(), 100);
    assert!(!loader.is_finished());

    let mut chunks = 0;
    while !loader.is_finished() {
        let added = loader.append_more(&mut buffer, 100).expect("next chunk");
        info!(added, total = buffer.len(), "chunk loaded");
        chunks += 1;
    }
    assert_eq!(chunks, 2);
    assert_eq!(buffer.len(), 250);
    assert_eq!(loader.lines_loaded(), 250);
    assert_eq!(loader.append_more(&mut buffer, 100).expect("after end"), 0);

    let last = buffer.line(249).expect("last line");
    assert_eq!(last, "var v249 = \"249\" // line 249");
    let kinds: Vec<_> = buffer.tokens(249).iter().map(|t| t.kind).collect();
    assert_eq!(kinds.first(), Some(&TokenKind::Keyword));
    assert_eq!(kinds.last(), Some(&TokenKind::Comment));
    assert!(buffer.check_invariants().is_ok());
}

#[test]
fn crlf_file_loads_without_terminators() {
    init_logging();
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(b"one\r\ntwo\r\n\r\nfour").expect("write");
    file.flush().expect("flush");

    let mut buffer = LineBuffer::new();
    let mut loader = StreamingLoader::new(source_for(&file));
    loader.load_initial(&mut buffer, 10).expect("load");
    assert!(loader.is_finished());
    let lines: Vec<_> = buffer.lines().collect();
    assert_eq!(lines, vec!["one", "two", "", "four"]);
}

#[test]
fn empty_file_leaves_single_empty_line() {
    let file = NamedTempFile::new().expect("create temp file");
    let mut buffer = LineBuffer::new();
    let mut loader = StreamingLoader::new(source_for(&file));
    assert_eq!(loader.load_initial(&mut buffer, 10).expect("load"), 0);
    assert!(loader.is_finished());
    assert_eq!(buffer.len(), 1);
    assert_eq!(buffer.line(0), Some(""));
}

#[test]
fn editor_pulls_chunks_while_scrolling() {
    init_logging();
    let file = go_file(500);
    let options = EditorOptions::default()
        .with_stream_chunk(50, 10)
        .with_screen_size(80, 25);
    let mut editor = Editor::with_options(options);
    editor.set_file_name(file.path());
    assert_eq!(editor.language(), Language::PlainText);
    editor.select_grammar(Language::Go);

    assert_eq!(editor.open_stream(source_for(&file)).expect("open"), 50);
    assert!(editor.is_streaming());

    for _ in 0..10 {
        editor.handle_key(KeyEvent::key(KeyCode::PageDown));
    }
    let cursor_line = editor.cursor().line();
    info!(cursor_line, loaded = editor.buffer().len(), "after paging");
    assert_eq!(cursor_line, 190);
    assert!(editor.buffer().len() > cursor_line + 10);
    assert!(editor.is_streaming());

    editor.execute_command("goto 500");
    assert_eq!(editor.cursor().line(), 499);
    assert!(!editor.is_streaming());
    assert_eq!(editor.buffer().len(), 500);
    assert!(!editor.is_dirty());
    assert!(editor.buffer().check_invariants().is_ok());
}

/// Hands out `good` lines, then fails every read.
struct BrokenAfter {
    good: usize,
    sent: usize,
}

impl LineSource for BrokenAfter {
    fn read_lines(&mut self, max: usize) -> Result<LineBatch> {
        if self.sent >= self.good {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "disk went away").into());
        }
        let count = max.min(self.good - self.sent);
        let lines = (self.sent..self.sent + count).map(|i| format!("l{i}")).collect();
        self.sent += count;
        Ok(LineBatch {
            lines,
            end_of_source: false,
        })
    }
}

fn streaming_editor(file: &NamedTempFile) -> Editor {
    let options = EditorOptions::default().with_stream_chunk(10, 2);
    let mut editor = Editor::with_options(options);
    editor.select_grammar(Language::Go);
    assert_eq!(editor.open_stream(source_for(file)).expect("open"), 10);
    assert!(editor.is_streaming());
    editor
}

#[test]
fn save_reads_rest_of_stream() {
    init_logging();
    let file = go_file(50);
    let mut editor = streaming_editor(&file);
    editor.set_file_name("out.txt");

    let Some(Request::Save(save)) = editor.execute_command("save") else {
        panic!("expected a save request");
    };
    info!(lines = save.contents.lines().count(), "save requested");
    assert_eq!(save.contents.lines().count(), 50);
    assert_eq!(
        save.contents.lines().last(),
        Some("var v49 = \"49\" // line 49")
    );
    assert!(!editor.is_streaming());
    assert_eq!(editor.buffer().len(), 50);
    assert!(editor.buffer().check_invariants().is_ok());
}

#[test]
fn format_sees_whole_stream() {
    init_logging();
    let file = go_file(50);
    let mut editor = streaming_editor(&file);
    let formatted = editor.format_with(&|_: Language, text: &str| -> Result<String> {
        Ok(text.replace("var ", "const "))
    });
    assert!(formatted);
    assert!(!editor.is_streaming());
    assert_eq!(editor.buffer().len(), 50);
    assert!(editor.buffer().lines().all(|line| line.starts_with("const ")));
}

#[test]
fn failed_read_blocks_save() {
    init_logging();
    let mut editor = Editor::with_options(EditorOptions::default().with_stream_chunk(10, 2));
    let source = BrokenAfter { good: 25, sent: 0 };
    assert_eq!(editor.open_stream(source).expect("open"), 10);
    editor.set_file_name("out.txt");

    assert!(editor.execute_command("save").is_none());
    assert!(!editor.is_streaming());
    let status = editor.status_line_message().expect("status shows the error");
    assert!(status.contains("disk went away"), "{status}");

    // Formatting is refused the same way once the stream has failed.
    let mut editor = Editor::with_options(EditorOptions::default().with_stream_chunk(10, 2));
    editor.open_stream(BrokenAfter { good: 15, sent: 0 }).expect("open");
    assert!(!editor.format_with(&|_: Language, text: &str| -> Result<String> {
        Ok(text.to_string())
    }));
    assert_eq!(editor.buffer().len(), 15);
}
