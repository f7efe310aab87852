//! Text layout.
//!
//! Everything that decides where characters go inside a single block of text:
//! measurement, justification, truncation and wrapping, wrapped up behind the
//! [`TextFormatter`] trait that grids and components draw text through.
//!
//! # Architecture
//!
//! ```text
//! text ──► split_lines ──► truncate / wrap_words ──► justify ──► Vec<char>
//!                              (per formatter)        (width cells per line)
//! ```
//!
//! [`justify_spaces`] is shared with [`Flow`](crate::Flow), which distributes
//! free space between the items of a row with the same rule used for words.

mod formatter;
pub mod text_measure;

pub use formatter::{TextFormatter, TruncationFormatter, WordSplitFormatter};
pub use text_measure::{justify, justify_spaces};
