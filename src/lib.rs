//! `site_rust` - terminal text editor core
//!
//! Line storage with per-line syntax tokens, grammar-driven highlighting
//! with one level of embedded languages, visual column mapping for tabs and
//! wide characters, streaming loads for large files, and the editing state
//! machine that turns key events into edits and host requests.
//!
//! The crate does no terminal I/O itself: a host reads keys, feeds them to
//! [`Editor::handle_key`], draws [`Editor::visible_lines`] and carries out the
//! returned [`Request`]s.
//!
//! # Example
//!
//! ```
//! use site_rust::{Editor, KeyCode, KeyEvent, Language, Request};
//!
//! let mut editor = Editor::new();
//! editor.set_file_name("main.py");
//! assert_eq!(editor.language(), Language::Python);
//!
//! for c in "def f():".chars() {
//!     editor.handle_key(KeyEvent::char(c));
//! }
//! editor.handle_key(KeyEvent::key(KeyCode::Enter));
//! assert_eq!(editor.buffer().line(1), Some("\t"));
//!
//! let request = editor.execute_command("save");
//! assert!(matches!(request, Some(Request::Save(_))));
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow highlight::HighlightRule etc
#![allow(clippy::struct_excessive_bools)] // Option structs carry several switches
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Not every accessor needs the attribute
#![allow(clippy::return_self_not_must_use)] // Builder methods are obvious
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod editor;
pub mod error;
pub mod event;
pub mod highlight;
pub mod input;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use editor::{Diagnostic, Editor, EditorOptions, Encoding, Formatter, Mode, Request, SaveRequest};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};

// Re-export input types
pub use input::{KeyCode, KeyEvent, KeyModifiers};

// Re-export commonly used types
pub use highlight::{Highlighter, Language, Token, TokenKind};
pub use text::{LineBuffer, LineSource, ReaderSource, StreamingLoader, Viewport};
