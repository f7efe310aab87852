//! Text measurement for the character grid.
//!
//! One character occupies one cell, so widths are character counts. The
//! helpers here split text into lines, pad lines to a fixed width under an
//! [`Alignment`](crate::Alignment), cut overlong text with an ellipsis, and
//! greedily wrap lines at word boundaries.
//!
//! # Capabilities
//!
//! - **Line splitting**: `\n` and `\r\n` are both hard breaks
//! - **Justification**: left, right, center and full (space distributed between words)
//! - **Truncation**: keeps the head of the text and appends `...`
//! - **Word wrapping**: greedy, single-space joined, overlong words truncated

mod justify;
mod truncate;
mod wrap;

pub use justify::{justify, justify_spaces};
pub use truncate::{ELLIPSIS, truncate_with_ellipsis};
pub use wrap::wrap_words;

/// Split text on hard line breaks (`\n` or `\r\n`).
///
/// Always yields at least one line; the empty string is one empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Width of a line in cells.
#[inline]
pub fn line_width(line: &str) -> usize {
    line.chars().count()
}

/// Width of the widest line in cells.
pub fn max_line_width(text: &str) -> usize {
    split_lines(text).map(line_width).max().unwrap_or(0)
}
