//! Whole-buffer reformatting through an external formatter.

use crate::error::Result;
use crate::highlight::Language;

/// A source formatter for one or more languages.
///
/// Implementations return the reformatted text or an
/// [`Error::Format`](crate::Error::Format) describing why the input was
/// rejected. The editor leaves the buffer untouched on error.
pub trait Formatter {
    /// Check whether this formatter handles `language`.
    fn supports(&self, language: Language) -> bool;

    /// Reformat a whole document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed as `language`.
    fn reformat(&self, language: Language, text: &str) -> Result<String>;
}

impl<F> Formatter for F
where
    F: Fn(Language, &str) -> Result<String>,
{
    fn supports(&self, _language: Language) -> bool {
        true
    }

    fn reformat(&self, language: Language, text: &str) -> Result<String> {
        self(language, text)
    }
}
