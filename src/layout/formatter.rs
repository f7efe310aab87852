//! Text formatters.
//!
//! A formatter turns free text into a block of exactly `width` cells per line,
//! at most `height` lines, flattened row-major. [`Grid::draw_string`] consumes
//! that block; the [`Text`](crate::Text) and [`Box`](crate::BoxComponent)
//! components use [`TextFormatter::measure_height`] to size themselves before
//! drawing.
//!
//! [`Grid::draw_string`]: crate::Grid::draw_string

use super::text_measure::{justify, split_lines, truncate_with_ellipsis, wrap_words};
use crate::types::Alignment;

/// Lays text out into fixed-width lines.
pub trait TextFormatter {
    /// Format `text` into at most `height` lines of `width` cells each.
    ///
    /// The result is row-major, so its length is always a multiple of `width`.
    fn format(&self, text: &str, width: usize, height: usize) -> Vec<char> {
        self.lines(text, width)
            .into_iter()
            .take(height)
            .flat_map(|line| line.chars().collect::<Vec<_>>())
            .collect()
    }

    /// Number of lines `text` occupies at `width`, before any height limit.
    fn measure_height(&self, text: &str, width: usize) -> usize {
        self.lines(text, width).len()
    }

    /// Every formatted line, each exactly `width` cells.
    fn lines(&self, text: &str, width: usize) -> Vec<String>;
}

// =============================================================================
// TruncationFormatter
// =============================================================================

/// One output line per input line; overlong lines end in `...`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruncationFormatter {
    alignment: Alignment,
}

impl TruncationFormatter {
    pub const fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }

    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }
}

impl TextFormatter for TruncationFormatter {
    fn lines(&self, text: &str, width: usize) -> Vec<String> {
        split_lines(text)
            .map(|line| {
                let truncated = truncate_with_ellipsis(line, width);
                justify(&truncated, width, self.alignment)
            })
            .collect()
    }
}

// =============================================================================
// WordSplitFormatter
// =============================================================================

/// Wraps at word boundaries; words that cannot fit on any line end in `...`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordSplitFormatter {
    alignment: Alignment,
}

impl WordSplitFormatter {
    pub const fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }

    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }
}

impl TextFormatter for WordSplitFormatter {
    fn lines(&self, text: &str, width: usize) -> Vec<String> {
        split_lines(text)
            .flat_map(|line| wrap_words(line, width, self.alignment))
            .collect()
    }
}
