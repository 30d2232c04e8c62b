//! Command line parsing.

use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Output encoding label. Transcoding itself happens in the save collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    #[default]
    Utf8,
    Ascii,
    /// UTF-16, big-endian with BOM.
    Utf16,
    Latin1,
    Windows1252,
}

impl Encoding {
    /// Parse an encoding name; unknown names fall back to UTF-8.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "ascii" => Self::Ascii,
            "unicode" | "utf-16" | "utf16" => Self::Utf16,
            "iso-8859-1" | "latin1" => Self::Latin1,
            "windows-1252" | "cp1252" => Self::Windows1252,
            _ => Self::Utf8,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Ascii => "ascii",
            Self::Utf16 => "utf-16",
            Self::Latin1 => "iso-8859-1",
            Self::Windows1252 => "windows-1252",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `quit` or `exit`.
    Quit,
    /// `save [path]`.
    Save(Option<PathBuf>),
    /// `goto <line> [col]`, line 1-based, column a byte offset.
    Goto { line: usize, col: Option<usize> },
    /// `setenc <name>` or `encode <name>`.
    SetEncoding(Encoding),
    /// `format`.
    Format,
    /// `test`.
    Test,
}

impl Command {
    /// Parse a command line. Blank input yields `Ok(None)`.
    ///
    /// Arguments that fail to parse make the command a no-op
    /// (`goto x` is `Ok(None)`), matching how the editor ignores them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] when the first word names no command.
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let mut args = input.split_whitespace();
        let Some(name) = args.next() else {
            return Ok(None);
        };
        let command = match name.to_ascii_lowercase().as_str() {
            "quit" | "exit" => Some(Self::Quit),
            "save" => Some(Self::Save(args.next().map(PathBuf::from))),
            "goto" => {
                let line = args.next().and_then(|s| s.parse().ok());
                let col = args.next().map(str::parse);
                match (line, col) {
                    (Some(line), None) => Some(Self::Goto { line, col: None }),
                    (Some(line), Some(Ok(col))) => Some(Self::Goto {
                        line,
                        col: Some(col),
                    }),
                    _ => None,
                }
            }
            "setenc" | "encode" => args.next().map(|name| Self::SetEncoding(Encoding::from_name(name))),
            "format" => Some(Self::Format),
            "test" => Some(Self::Test),
            _ => return Err(Error::UnknownCommand(name.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("  EXIT ").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("format").unwrap(), Some(Command::Format));
        assert_eq!(Command::parse("test").unwrap(), Some(Command::Test));
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_save() {
        assert_eq!(Command::parse("save").unwrap(), Some(Command::Save(None)));
        assert_eq!(
            Command::parse("save out.go").unwrap(),
            Some(Command::Save(Some(PathBuf::from("out.go"))))
        );
    }

    #[test]
    fn test_parse_goto() {
        assert_eq!(
            Command::parse("goto 12").unwrap(),
            Some(Command::Goto { line: 12, col: None })
        );
        assert_eq!(
            Command::parse("goto 3 7").unwrap(),
            Some(Command::Goto { line: 3, col: Some(7) })
        );
        assert_eq!(Command::parse("goto").unwrap(), None);
        assert_eq!(Command::parse("goto x").unwrap(), None);
        assert_eq!(Command::parse("goto 3 x").unwrap(), None);
    }

    #[test]
    fn test_parse_encoding() {
        assert_eq!(
            Command::parse("setenc latin1").unwrap(),
            Some(Command::SetEncoding(Encoding::Latin1))
        );
        assert_eq!(
            Command::parse("encode CP1252").unwrap(),
            Some(Command::SetEncoding(Encoding::Windows1252))
        );
        assert_eq!(
            Command::parse("setenc klingon").unwrap(),
            Some(Command::SetEncoding(Encoding::Utf8))
        );
        assert_eq!(Command::parse("setenc").unwrap(), None);
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse("frobnicate now").unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(ref name) if name == "frobnicate"));
    }

    #[test]
    fn test_encoding_names() {
        assert_eq!(Encoding::default().to_string(), "utf-8");
        assert_eq!(Encoding::from_name("UTF-16"), Encoding::Utf16);
        assert_eq!(Encoding::Ascii.name(), "ascii");
    }
}
