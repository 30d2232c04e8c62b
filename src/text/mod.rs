//! Line storage, column mapping and incremental loading.
//!
//! Key types:
//!
//! - [`LineBuffer`]: lines kept in lock-step with their tokens and embedded contexts
//! - [`Viewport`]: the visible window, scrolled to keep the cursor in view
//! - [`StreamingLoader`]: chunked loading from any [`LineSource`]
//!
//! Column helpers ([`visual_column`], [`byte_for_visual_column`]) convert
//! between byte offsets and terminal cells, expanding tabs to the next stop.
//!
//! # Examples
//!
//! ```
//! use site_rust::highlight::{Highlighter, Language, TokenKind};
//! use site_rust::text::LineBuffer;
//!
//! let mut buffer = LineBuffer::with_highlighter(Highlighter::new(Language::Go));
//! buffer.insert_str(0, 0, "return nil");
//! assert_eq!(buffer.tokens(0)[0].kind, TokenKind::Keyword);
//!
//! let new_line = buffer.split_line(0, 6, "\t");
//! assert_eq!(buffer.line(new_line), Some("\t nil"));
//! ```

mod buffer;
mod column;
mod loader;
mod view;

pub use buffer::{LineBuffer, LineView, split_lines};
pub use column::{
    DEFAULT_TAB_WIDTH, byte_for_visual_column, expand_tabs, line_width, visual_column,
};
pub use loader::{LineBatch, LineSource, ReaderSource, StreamingLoader};
pub use view::{RenderSegment, Viewport, visible_segments};
