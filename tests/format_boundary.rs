//! Reformatting through an external formatter.
//!
//! `serde_json` stands in for a real JSON formatter: valid input comes back
//! pretty-printed, invalid input is rejected.

use site_rust::editor::{Editor, Formatter, Request};
use site_rust::error::{Error, Result};
use site_rust::highlight::{Language, TokenKind};
use site_rust::input::{KeyCode, KeyEvent};

struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn supports(&self, language: Language) -> bool {
        language == Language::Json
    }

    fn reformat(&self, _language: Language, text: &str) -> Result<String> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| Error::Format(e.to_string()))?;
        serde_json::to_string_pretty(&value).map_err(|e| Error::Format(e.to_string()))
    }
}

fn json_editor(text: &str) -> Editor {
    let mut editor = Editor::new();
    editor.set_file_name("data.json");
    editor.load_text(text);
    editor.set_formatter(JsonFormatter);
    editor
}

fn run_command(editor: &mut Editor, command: &str) -> Option<Request> {
    editor.handle_key(KeyEvent::with_ctrl(KeyCode::Char('e')));
    for c in command.chars() {
        editor.handle_key(KeyEvent::char(c));
    }
    editor.handle_key(KeyEvent::key(KeyCode::Enter))
}

#[test]
fn format_command_pretty_prints_valid_json() {
    let mut editor = json_editor(r#"{"name":"site","tags":[1,2]}"#);
    editor.handle_key(KeyEvent::char(' '));
    assert!(editor.is_dirty());

    assert_eq!(run_command(&mut editor, "format"), None);
    let lines: Vec<_> = editor.buffer().lines().collect();
    assert_eq!(
        lines,
        vec![
            "{",
            r#"  "name": "site","#,
            r#"  "tags": ["#,
            "    1,",
            "    2",
            "  ]",
            "}",
        ]
    );
    assert!(!editor.is_dirty());
    assert_eq!(editor.status_line_message(), None);

    let key = editor
        .buffer()
        .tokens(1)
        .iter()
        .find(|t| t.text(lines[1]) == r#""name""#)
        .map(|t| t.kind);
    assert!(key.is_some_and(|kind| kind != TokenKind::Normal));
    assert!(editor.buffer().check_invariants().is_ok());
}

#[test]
fn rejected_format_leaves_buffer_untouched() {
    let text = "{\"open\": [1, 2";
    let mut editor = json_editor(text);
    editor.handle_key(KeyEvent::key(KeyCode::End));
    editor.handle_key(KeyEvent::char(','));

    run_command(&mut editor, "format");
    assert_eq!(editor.buffer().serialize(), "{\"open\": [1, 2,");
    assert!(editor.is_dirty());
    let status = editor.status_line_message().expect("status message");
    assert!(status.starts_with("format failed: "), "{status}");
}

#[test]
fn formatter_without_support_reports_language() {
    let mut editor = json_editor("x = 1");
    editor.set_file_name("main.py");
    run_command(&mut editor, "format");
    assert_eq!(editor.buffer().serialize(), "x = 1");
    assert_eq!(
        editor.status_line_message().as_deref(),
        Some("No formatter for Python")
    );
}

#[test]
fn closure_formatter_normalizes_line_endings() {
    let mut editor = Editor::new();
    editor.select_grammar(Language::Go);
    editor.load_text("a\nb");
    let crlf = |_: Language, text: &str| -> Result<String> { Ok(text.replace('\n', "\r\n")) };
    assert!(editor.format_with(&crlf));
    let lines: Vec<_> = editor.buffer().lines().collect();
    assert_eq!(lines, vec!["a", "b"]);
}
