//! Incremental loading of large inputs.
//!
//! A [`StreamingLoader`] pulls lines from a [`LineSource`] in chunks and
//! appends them to a [`LineBuffer`], tokenizing only the new lines. Once the
//! source reports end-of-source it is dropped and further calls do nothing.

use std::io::BufRead;

use super::buffer::LineBuffer;
use crate::error::Result;
use crate::event::{LogLevel, emit_log};

/// One chunk of lines read from a source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBatch {
    /// Lines without their terminators.
    pub lines: Vec<String>,
    /// No lines remain after this batch.
    pub end_of_source: bool,
}

/// Anything that can hand out lines in order.
pub trait LineSource {
    /// Read at most `max` lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn read_lines(&mut self, max: usize) -> Result<LineBatch>;
}

/// [`LineSource`] over any buffered reader.
///
/// `\n` and `\r\n` terminators are stripped. Invalid UTF-8 is replaced
/// rather than rejected; transcoding is the caller's concern.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    scratch: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            scratch: Vec::new(),
        }
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_lines(&mut self, max: usize) -> Result<LineBatch> {
        let mut lines = Vec::with_capacity(max.min(4096));
        while lines.len() < max {
            self.scratch.clear();
            if self.reader.read_until(b'\n', &mut self.scratch)? == 0 {
                return Ok(LineBatch {
                    lines,
                    end_of_source: true,
                });
            }
            if self.scratch.last() == Some(&b'\n') {
                self.scratch.pop();
                if self.scratch.last() == Some(&b'\r') {
                    self.scratch.pop();
                }
            }
            lines.push(String::from_utf8_lossy(&self.scratch).into_owned());
        }
        let end_of_source = self.reader.fill_buf()?.is_empty();
        Ok(LineBatch {
            lines,
            end_of_source,
        })
    }
}

/// Chunked loader feeding a [`LineBuffer`].
pub struct StreamingLoader {
    source: Option<Box<dyn LineSource>>,
    lines_loaded: usize,
}

impl std::fmt::Debug for StreamingLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingLoader")
            .field("finished", &self.is_finished())
            .field("lines_loaded", &self.lines_loaded)
            .finish()
    }
}

impl StreamingLoader {
    pub fn new(source: impl LineSource + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            lines_loaded: 0,
        }
    }

    /// `true` once the source has been exhausted (or failed).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.source.is_none()
    }

    /// Total lines handed to buffers so far.
    #[must_use]
    pub fn lines_loaded(&self) -> usize {
        self.lines_loaded
    }

    fn read(&mut self, n: usize) -> Result<Option<LineBatch>> {
        let Some(source) = self.source.as_mut() else {
            return Ok(None);
        };
        match source.read_lines(n) {
            Ok(batch) => {
                self.lines_loaded += batch.lines.len();
                if batch.end_of_source {
                    self.source = None;
                    emit_log(
                        LogLevel::Debug,
                        "loader",
                        &format!("end of source after {} lines", self.lines_loaded),
                    );
                }
                Ok(Some(batch))
            }
            Err(err) => {
                self.source = None;
                emit_log(LogLevel::Warn, "loader", &format!("read failed: {err}"));
                Err(err)
            }
        }
    }

    /// Replace the buffer content with the first `n` lines of the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails; the loader is then finished.
    pub fn load_initial(&mut self, buffer: &mut LineBuffer, n: usize) -> Result<usize> {
        let Some(batch) = self.read(n)? else {
            return Ok(0);
        };
        let count = batch.lines.len();
        buffer.replace_lines(batch.lines);
        Ok(count)
    }

    /// Append up to `n` more lines to the buffer and return how many were added.
    ///
    /// Does nothing once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails; the loader is then finished.
    pub fn append_more(&mut self, buffer: &mut LineBuffer, n: usize) -> Result<usize> {
        let Some(batch) = self.read(n)? else {
            return Ok(0);
        };
        let added = buffer.append_lines(batch.lines);
        emit_log(
            LogLevel::Trace,
            "loader",
            &format!("appended {added} lines, {} total", buffer.len()),
        );
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::highlight::{Highlighter, Language};
    use std::io::{self, Cursor};

    struct FailingSource;

    impl LineSource for FailingSource {
        fn read_lines(&mut self, _max: usize) -> Result<LineBatch> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone").into())
        }
    }

    #[test]
    fn test_reader_source_strips_terminators() {
        let mut source = ReaderSource::new(Cursor::new("a\r\nb\nc"));
        let batch = source.read_lines(10).unwrap();
        assert_eq!(batch.lines, vec!["a", "b", "c"]);
        assert!(batch.end_of_source);
    }

    #[test]
    fn test_reader_source_peeks_for_end() {
        let mut source = ReaderSource::new(Cursor::new("a\nb\n"));
        let batch = source.read_lines(2).unwrap();
        assert_eq!(batch.lines, vec!["a", "b"]);
        assert!(batch.end_of_source);

        let mut source = ReaderSource::new(Cursor::new("a\nb\nc\n"));
        let batch = source.read_lines(2).unwrap();
        assert!(!batch.end_of_source);
    }

    #[test]
    fn test_reader_source_replaces_invalid_utf8() {
        let mut source = ReaderSource::new(Cursor::new(vec![b'o', 0xff, b'k']));
        let batch = source.read_lines(1).unwrap();
        assert_eq!(batch.lines, vec!["o\u{fffd}k"]);
    }

    #[test]
    fn test_loader_appends_in_chunks() {
        let text: String = (0..10).map(|i| format!("line {i}\n")).collect();
        let mut loader = StreamingLoader::new(ReaderSource::new(Cursor::new(text)));
        let mut buffer = LineBuffer::with_highlighter(Highlighter::new(Language::Go));

        assert_eq!(loader.load_initial(&mut buffer, 4).unwrap(), 4);
        assert_eq!(buffer.len(), 4);
        assert!(!loader.is_finished());

        assert_eq!(loader.append_more(&mut buffer, 4).unwrap(), 4);
        assert_eq!(loader.append_more(&mut buffer, 4).unwrap(), 2);
        assert!(loader.is_finished());
        assert_eq!(loader.lines_loaded(), 10);
        assert_eq!(buffer.len(), 10);
        assert_eq!(buffer.line(9), Some("line 9"));

        assert_eq!(loader.append_more(&mut buffer, 4).unwrap(), 0);
        assert_eq!(buffer.len(), 10);
        assert!(buffer.check_invariants().is_ok());
    }

    #[test]
    fn test_empty_source_leaves_single_line() {
        let mut loader = StreamingLoader::new(ReaderSource::new(Cursor::new("")));
        let mut buffer = LineBuffer::new();
        assert_eq!(loader.load_initial(&mut buffer, 100).unwrap(), 0);
        assert_eq!(buffer.len(), 1);
        assert!(loader.is_finished());
    }

    #[test]
    fn test_failed_read_finishes_loader() {
        let mut loader = StreamingLoader::new(FailingSource);
        let mut buffer = LineBuffer::new();
        let err = loader.append_more(&mut buffer, 10).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(loader.is_finished());
        assert_eq!(loader.append_more(&mut buffer, 10).unwrap(), 0);
    }
}
