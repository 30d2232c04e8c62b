//! Unicode utilities for display width and cursor boundaries.

mod grapheme;
mod width;

pub use grapheme::{
    floor_char_boundary, grapheme_count, next_grapheme_boundary, prev_grapheme_boundary,
};
pub use width::{display_width, display_width_char, is_wide};
