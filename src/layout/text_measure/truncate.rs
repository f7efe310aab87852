//! Text truncation with an ellipsis suffix.
//!
//! Overlong text keeps its head and ends in [`ELLIPSIS`]. When the target is
//! narrower than the ellipsis itself, the ellipsis is cut instead.

use super::line_width;

/// Suffix appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Truncate text to fit within `width` cells.
///
/// Text that fits is returned unchanged. Otherwise the result is exactly
/// `width` cells: the first `width - 3` characters followed by `...`, or the
/// first `width` characters of `...` when `width < 3`.
///
/// # Arguments
///
/// * `text` - A single line of text
/// * `width` - Maximum width in cells
pub fn truncate_with_ellipsis(text: &str, width: usize) -> String {
    if line_width(text) <= width {
        return text.to_string();
    }

    let suffix_width = line_width(ELLIPSIS);
    if width < suffix_width {
        return ELLIPSIS.chars().take(width).collect();
    }

    text.chars()
        .take(width - suffix_width)
        .chain(ELLIPSIS.chars())
        .collect()
}
