//! Greedy word wrapping.
//!
//! Words are separated by single spaces. A line accumulates words until the
//! next one would overflow, then it is justified and a new line starts. Words
//! wider than the line are truncated with an ellipsis on a line of their own.

use super::{justify, line_width, truncate_with_ellipsis};
use crate::types::Alignment;

/// Wrap one line of text into lines of exactly `width` cells.
///
/// Empty input still produces a single blank line, so blank lines survive
/// wrapping.
///
/// # Arguments
///
/// * `line` - A single line of text (no hard breaks)
/// * `width` - Line width in cells
/// * `alignment` - Justification applied to every produced line
pub fn wrap_words(line: &str, width: usize, alignment: Alignment) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split(' ') {
        let word_width = line_width(word);

        if word_width > width {
            if !current.is_empty() {
                lines.push(justify(&current, width, alignment));
                current.clear();
                current_width = 0;
            }
            lines.push(truncate_with_ellipsis(word, width));
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width > width {
            lines.push(justify(&current, width, alignment));
            current.clear();
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(justify(&current, width, alignment));
    }

    lines
}
