//! Key events as seen by the editor.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 1 << 0;
        const ALT = 1 << 1;
        const CTRL = 1 << 2;
    }
}

/// Keys the editor reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    Delete,
    Esc,
    /// Printable input, space included.
    Char(char),
}

impl KeyCode {
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        if let Self::Char(c) = self { Some(c) } else { None }
    }
}

/// One key press with its modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Unmodified printable char.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    #[must_use]
    pub fn with_alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    /// Decode a single raw byte from a terminal in raw mode.
    ///
    /// Handles the bytes the editor binds: `Ctrl+A`..`Ctrl+Z` (minus the
    /// ones that double as Tab and Enter), Tab, Enter, Esc, Backspace and
    /// printable ASCII. Escape sequences are left to the host.
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        let event = match byte {
            b'\t' => Self::key(KeyCode::Tab),
            b'\r' | b'\n' => Self::key(KeyCode::Enter),
            0x1b => Self::key(KeyCode::Esc),
            0x08 | 0x7f => Self::key(KeyCode::Backspace),
            0x01..=0x1a => Self::with_ctrl(KeyCode::Char(char::from(b'a' + byte - 1))),
            0x20..=0x7e => Self::char(char::from(byte)),
            _ => return None,
        };
        Some(event)
    }

    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    /// Ctrl or Alt held: horizontal arrows move by word.
    #[must_use]
    pub fn jumps_words(&self) -> bool {
        self.modifiers.intersects(KeyModifiers::CTRL | KeyModifiers::ALT)
    }

    /// Ctrl plus `c`, ignoring ASCII case.
    #[must_use]
    pub fn is_ctrl_char(&self, c: char) -> bool {
        self.ctrl() && self.code.as_char().is_some_and(|k| k.eq_ignore_ascii_case(&c))
    }

    /// The char to insert, if this key types text.
    ///
    /// Shift still types; Ctrl and Alt chords never do.
    #[must_use]
    pub fn text_char(&self) -> Option<char> {
        if self.jumps_words() {
            None
        } else {
            self.code.as_char()
        }
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Self::char(c)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::key(code)
    }
}
