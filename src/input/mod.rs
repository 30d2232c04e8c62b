//! Discrete key input consumed by the editing state machine.
//!
//! Decoding terminal escape sequences is the host's job; the core only sees
//! already-decoded [`KeyEvent`]s.

mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
